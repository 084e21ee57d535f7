//! Domain model for the pizzeria.
//!
//! ## Modules
//!
//! - [`ingredients`]: Base sizes, sauces, cheeses and the `Topping` value
//! - [`registry`]: Per-menu table of valid topping names
//! - [`pizza`]: Menu and custom pizzas with pricing
//! - [`menu`]: The catalog of pizzas on offer
//! - [`order`]: Customer orders with multi-item discounts

pub mod error;
pub mod ingredients;
pub mod menu;
pub mod order;
pub mod pizza;
pub mod registry;

pub use error::{PizzaError, RegistryError};
pub use ingredients::{BaseSize, Cheese, PizzaStyle, Sauce, Topping};
pub use menu::{Menu, MenuItem, PizzaSink};
pub use order::{CustomerOrder, Order};
pub use pizza::{Pizza, PizzaKind, MAX_TOPPINGS};
pub use registry::ToppingRegistry;

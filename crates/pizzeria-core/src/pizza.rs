//! Pizzas: a base, a sauce, a cheese, and up to [`MAX_TOPPINGS`] toppings.
//!
//! Menu pizzas are fixed once built from a menu file. Custom pizzas start
//! empty and have toppings added or removed while an order is taken.

use std::fmt;

use crate::error::{PizzaError, Result};
use crate::ingredients::{BaseSize, Cheese, PizzaStyle, Sauce, Topping};
use crate::menu::MenuItem;

/// Maximum number of toppings on a single pizza.
pub const MAX_TOPPINGS: usize = 5;

/// Name given to pizzas that were never explicitly named.
pub const DEFAULT_PIZZA_NAME: &str = "Dr Java's Pizza";

/// Name given to freshly created custom pizzas.
pub const CUSTOM_PIZZA_NAME: &str = "Custom Pizza";

/// Where a pizza came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaKind {
    /// Loaded from a menu file; toppings are fixed.
    Menu,
    /// Assembled by a customer; toppings may change.
    Custom,
}

/// A pizza with its ingredients and display name.
#[derive(Debug, Clone)]
pub struct Pizza {
    kind: PizzaKind,
    size: BaseSize,
    sauce: Sauce,
    cheese: Cheese,
    name: String,
    toppings: Vec<Topping>,
}

impl Pizza {
    /// Build a menu pizza with a fixed topping list.
    pub fn menu(size: BaseSize, sauce: Sauce, cheese: Cheese, toppings: Vec<Topping>) -> Result<Self> {
        if toppings.len() > MAX_TOPPINGS {
            return Err(PizzaError::TooManyToppings {
                count: toppings.len(),
                max: MAX_TOPPINGS,
            });
        }
        Ok(Pizza {
            kind: PizzaKind::Menu,
            size,
            sauce,
            cheese,
            name: DEFAULT_PIZZA_NAME.to_string(),
            toppings,
        })
    }

    /// Build a named menu pizza in the given style.
    pub fn from_style(name: &str, style: PizzaStyle, toppings: Vec<Topping>) -> Result<Self> {
        let mut pizza = Pizza::menu(style.size, style.sauce, style.cheese, toppings)?;
        pizza.set_name(name)?;
        Ok(pizza)
    }

    /// A medium tomato and mozzarella custom pizza with no toppings.
    pub fn custom() -> Self {
        Pizza::custom_with(BaseSize::Medium, Sauce::Tomato, Cheese::Mozzarella)
    }

    /// A custom pizza with chosen base, sauce and cheese and no toppings.
    pub fn custom_with(size: BaseSize, sauce: Sauce, cheese: Cheese) -> Self {
        Pizza {
            kind: PizzaKind::Custom,
            size,
            sauce,
            cheese,
            name: CUSTOM_PIZZA_NAME.to_string(),
            toppings: Vec::new(),
        }
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn size(&self) -> BaseSize {
        self.size
    }

    pub fn sauce(&self) -> Sauce {
        self.sauce
    }

    pub fn cheese(&self) -> Cheese {
        self.cheese
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    pub fn set_size(&mut self, size: BaseSize) {
        self.size = size;
    }

    pub fn set_sauce(&mut self, sauce: Sauce) {
        self.sauce = sauce;
    }

    pub fn set_cheese(&mut self, cheese: Cheese) {
        self.cheese = cheese;
    }

    /// Rename the pizza. Blank names are rejected.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(PizzaError::BlankName);
        }
        self.name = name.to_string();
        Ok(())
    }

    /// Add one topping to a custom pizza.
    pub fn add_topping(&mut self, topping: Topping) -> Result<()> {
        self.add_toppings(vec![topping])
    }

    /// Add several toppings to a custom pizza.
    ///
    /// Nothing is added if the result would exceed [`MAX_TOPPINGS`].
    pub fn add_toppings(&mut self, toppings: Vec<Topping>) -> Result<()> {
        self.ensure_custom()?;
        let count = self.toppings.len() + toppings.len();
        if count > MAX_TOPPINGS {
            return Err(PizzaError::TooManyToppings {
                count,
                max: MAX_TOPPINGS,
            });
        }
        self.toppings.extend(toppings);
        Ok(())
    }

    /// Remove the first occurrence of a topping from a custom pizza.
    ///
    /// Returns whether a topping was removed.
    pub fn remove_topping(&mut self, topping: &Topping) -> Result<bool> {
        self.ensure_custom()?;
        match self.toppings.iter().position(|t| t == topping) {
            Some(idx) => {
                self.toppings.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn ensure_custom(&self) -> Result<()> {
        match self.kind {
            PizzaKind::Custom => Ok(()),
            PizzaKind::Menu => Err(PizzaError::NotCustomisable {
                name: self.name.clone(),
            }),
        }
    }

    fn sorted_toppings(&self) -> Vec<&Topping> {
        let mut toppings: Vec<_> = self.toppings.iter().collect();
        toppings.sort();
        toppings
    }
}

impl MenuItem for Pizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn total_price(&self) -> f64 {
        self.size.price() + self.toppings.len() as f64 * Topping::PRICE
    }
}

/// Two pizzas are equal when they share base, sauce, cheese and the same
/// toppings in any order. Name and kind are ignored.
impl PartialEq for Pizza {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.sauce == other.sauce
            && self.cheese == other.cheese
            && self.sorted_toppings() == other.sorted_toppings()
    }
}

impl Eq for Pizza {}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == PizzaKind::Menu {
            write!(f, "[MenuPizza] ")?;
        }
        write!(
            f,
            "{}: is a '{}' sized base with '{}' sauce and '{}' cheese",
            self.name, self.size, self.sauce, self.cheese
        )?;
        if !self.toppings.is_empty() {
            write!(f, " - Toppings: [")?;
            for (i, topping) in self.toppings.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{topping}")?;
            }
            write!(f, "]")?;
        }
        write!(f, " ${:.2}", self.total_price())
    }
}

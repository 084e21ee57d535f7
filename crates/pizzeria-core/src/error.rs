//! Error types for the pizza domain model.

/// Errors raised by the topping registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Topping name was empty or whitespace-only at registration.
    #[error("invalid topping name: '{name}'")]
    InvalidTopping { name: String },

    /// A topping with the same canonical name is already registered.
    #[error("duplicate topping: '{name}'")]
    DuplicateTopping { name: String },

    /// Lookup was attempted without a name.
    #[error("topping name is missing")]
    NullName,

    /// No registered topping matches the name.
    #[error("unknown topping: '{name}'")]
    UnknownTopping { name: String },
}

/// Errors raised while building or editing a pizza.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PizzaError {
    /// The topping count would exceed the per-pizza ceiling.
    #[error("too many toppings: {count} exceeds the maximum of {max}")]
    TooManyToppings { count: usize, max: usize },

    /// Pizza name was empty or whitespace-only.
    #[error("pizza name is blank")]
    BlankName,

    /// Toppings can only be edited on custom pizzas.
    #[error("menu pizza '{name}' cannot be customised")]
    NotCustomisable { name: String },
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Result type for pizza operations.
pub type Result<T> = std::result::Result<T, PizzaError>;

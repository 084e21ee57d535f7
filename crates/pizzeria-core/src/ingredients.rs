//! Fixed ingredients: base sizes, sauces, cheeses, and the topping value type.
//!
//! Bases, sauces and cheeses are closed sets known at build time. Toppings are
//! declared per menu file, so `Topping` is a plain value handed out by the
//! [`ToppingRegistry`](crate::registry::ToppingRegistry).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Size of the pizza base, which sets the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BaseSize {
    /// Price of the base alone.
    pub fn price(&self) -> f64 {
        match self {
            Self::Small => 3.0,
            Self::Medium => 5.0,
            Self::Large => 7.0,
        }
    }
}

impl fmt::Display for BaseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "SMALL"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Large => write!(f, "LARGE"),
        }
    }
}

/// Sauce spread on the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sauce {
    #[default]
    Tomato,
    Bbq,
    Garlic,
    None,
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tomato => write!(f, "TOMATO"),
            Self::Bbq => write!(f, "BBQ"),
            Self::Garlic => write!(f, "GARLIC"),
            Self::None => write!(f, "NONE"),
        }
    }
}

/// Cheese layered over the sauce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cheese {
    #[default]
    Mozzarella,
    None,
    Vegan,
}

impl fmt::Display for Cheese {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mozzarella => write!(f, "MOZZARELLA"),
            Self::None => write!(f, "NONE"),
            Self::Vegan => write!(f, "VEGAN"),
        }
    }
}

/// Base, sauce and cheese combination applied to pizzas loaded from a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PizzaStyle {
    pub size: BaseSize,
    pub sauce: Sauce,
    pub cheese: Cheese,
}

/// A registered topping.
///
/// The name is stored in canonical (upper-case) form. Cloning is cheap; all
/// clones obtained from the same registry entry compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Topping {
    name: Arc<str>,
    vegan: bool,
}

impl Topping {
    /// Price added per topping.
    pub const PRICE: f64 = 2.0;

    /// Only the registry creates toppings, so names are already canonical.
    pub(crate) fn new(canonical_name: String, vegan: bool) -> Self {
        Topping {
            name: canonical_name.into(),
            vegan,
        }
    }

    /// Canonical (upper-case) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the topping is vegan.
    pub fn is_vegan(&self) -> bool {
        self.vegan
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Menu catalog of pizzas offered by the shop.

use tracing::debug;

use crate::pizza::Pizza;

/// Anything that can be sold and priced.
pub trait MenuItem {
    /// Display name of the item.
    fn name(&self) -> &str;

    /// Price including every extra.
    fn total_price(&self) -> f64;
}

/// Receiver for pizzas produced by a menu load.
pub trait PizzaSink {
    /// Take ownership of a loaded pizza.
    fn register_pizza(&mut self, pizza: Pizza);
}

/// Ordered catalog of pizzas.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Vec<Pizza>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pizza unless an equal pizza with the same name is already listed.
    ///
    /// Returns whether the pizza was added.
    pub fn register(&mut self, pizza: Pizza) -> bool {
        let duplicate = self
            .items
            .iter()
            .any(|item| item.name() == pizza.name() && *item == pizza);
        if duplicate {
            debug!(pizza = pizza.name(), "skipping duplicate menu item");
            return false;
        }
        self.items.push(pizza);
        true
    }

    /// All listed pizzas in registration order.
    pub fn items(&self) -> &[Pizza] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Pizza> {
        self.items.get(index)
    }

    /// Find a pizza by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Pizza> {
        self.items
            .iter()
            .find(|item| item.name().eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl PizzaSink for Menu {
    fn register_pizza(&mut self, pizza: Pizza) {
        self.register(pizza);
    }
}

impl PizzaSink for Vec<Pizza> {
    fn register_pizza(&mut self, pizza: Pizza) {
        self.push(pizza);
    }
}

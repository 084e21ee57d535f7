//! Customer orders and multi-item discounts.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::menu::MenuItem;
use crate::pizza::Pizza;

/// A price transformation applied to an order total.
pub type Discount = fn(f64) -> f64;

/// 10% off, applied to orders of 3 to 5 pizzas.
pub const DISCOUNT_10: Discount = |price| price * 0.9;

/// 25% off, applied to orders of 6 or more pizzas.
pub const DISCOUNT_25: Discount = |price| price * 0.75;

/// Name recorded when the customer did not give one.
pub const ANONYMOUS_CUSTOMER: &str = "Not Given";

/// A set of pizzas ordered together.
#[derive(Debug, Clone)]
pub struct Order {
    name: String,
    uuid: Uuid,
    date: NaiveDate,
    time: NaiveTime,
    pizzas: Vec<Pizza>,
}

impl Order {
    /// Create an empty order stamped with the current local date and time.
    pub fn new() -> Self {
        let now = Local::now().naive_local();
        Order {
            name: ANONYMOUS_CUSTOMER.to_string(),
            uuid: Uuid::new_v4(),
            date: now.date(),
            time: now.time(),
            pizzas: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_uuid(&mut self, uuid: Uuid) {
        self.uuid = uuid;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    pub fn add(&mut self, pizza: Pizza) {
        self.pizzas.push(pizza);
    }

    /// Sum of all pizza prices before any discount.
    pub fn total(&self) -> f64 {
        self.pizzas.iter().map(MenuItem::total_price).sum()
    }

    /// The discount earned by the number of pizzas, if any.
    pub fn discount(&self) -> Option<Discount> {
        match self.pizzas.len() {
            n if n >= 6 => Some(DISCOUNT_25),
            n if n >= 3 => Some(DISCOUNT_10),
            _ => None,
        }
    }

    /// Total after the multi-item discount.
    pub fn discounted_total(&self) -> f64 {
        let total = self.total();
        self.discount().map_or(total, |discount| discount(total))
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Time: {}", self.time.format("%H:%M"))?;
        writeln!(f, "Customer: {}", self.name)?;
        writeln!(f, "Order number: {}", self.uuid)?;
        write!(f, "Order:")?;
        for (i, pizza) in self.pizzas.iter().enumerate() {
            write!(f, "\n{} - {}", i + 1, pizza)?;
        }
        writeln!(f)?;

        let total = self.total();
        match self.discount() {
            Some(discount) => writeln!(
                f,
                "\nMulti item discount applied of ${:.2} applied, new Total: ${:.2}",
                total,
                discount(total)
            ),
            None => writeln!(f, "\nTotal: ${total:.2}"),
        }
    }
}

/// An order placed on behalf of a named customer.
#[derive(Debug, Clone)]
pub struct CustomerOrder {
    customer: String,
    order: Order,
}

impl CustomerOrder {
    pub fn new(customer: impl Into<String>) -> Self {
        let customer = customer.into();
        let mut order = Order::new();
        order.set_name(customer.clone());
        CustomerOrder { customer, order }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut Order {
        &mut self.order
    }
}

impl fmt::Display for CustomerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer Order {{{}}}", self.order)
    }
}

//! `pizzeria order`: take a customer order from the menu.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use pizzeria_core::order::ANONYMOUS_CUSTOMER;
use pizzeria_core::{CustomerOrder, Menu, Pizza};
use tracing::info;

use super::Shop;

/// Build an order from pizza names and print the receipt.
///
/// Asks for the customer name on stdin when `customer` is `None`.
pub fn run(shop: &Shop, file: Option<&str>, customer: Option<&str>, pizzas: &[String]) -> Result<()> {
    let order = take(shop, file, customer, pizzas, &mut io::stdin().lock(), &mut io::stdout())?;
    println!("{order}");
    Ok(())
}

/// Pick the named pizzas from the menu into a new customer order.
#[cfg(test)]
pub fn build(shop: &Shop, file: Option<&str>, customer: &str, pizzas: &[String]) -> Result<CustomerOrder> {
    take(shop, file, Some(customer), pizzas, &mut io::empty(), &mut io::sink())
}

/// The menu is loaded and every pizza found before the customer is asked
/// for a name.
fn take<R: BufRead, W: Write>(
    shop: &Shop,
    file: Option<&str>,
    customer: Option<&str>,
    pizzas: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<CustomerOrder> {
    let picked = pick(&shop.catalog(file)?, pizzas)?;
    let customer = match customer {
        Some(name) => name.to_string(),
        None => prompt_name(input, output)?,
    };

    let mut order = CustomerOrder::new(&customer);
    for pizza in picked {
        order.order_mut().add(pizza);
    }
    info!(
        customer,
        pizzas = order.order().pizzas().len(),
        total = order.order().discounted_total(),
        "order placed"
    );
    Ok(order)
}

fn pick(menu: &Menu, names: &[String]) -> Result<Vec<Pizza>> {
    if names.is_empty() {
        bail!("an order needs at least one pizza");
    }
    names
        .iter()
        .map(|name| {
            menu.find(name)
                .cloned()
                .ok_or_else(|| anyhow!("'{name}' is not on the menu"))
        })
        .collect()
}

/// Ask for a name until a non-blank one is given.
///
/// End of input yields the anonymous customer name.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        write!(output, "What is your name? ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(ANONYMOUS_CUSTOMER.to_string());
        }
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

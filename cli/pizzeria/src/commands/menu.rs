//! `pizzeria menu`: print the pizzas on a menu.

use anyhow::Result;
use pizzeria_core::MenuItem;

use super::Shop;

/// Print every pizza on the menu with its price.
pub fn run(shop: &Shop, file: Option<&str>) -> Result<()> {
    let menu = shop.catalog(file)?;
    println!("=== {} ===", shop.config.shop.name);
    if menu.is_empty() {
        println!("(no pizzas)");
    }
    for (i, pizza) in menu.items().iter().enumerate() {
        println!("{:>2}. {pizza}", i + 1);
    }
    let cheapest = menu
        .items()
        .iter()
        .map(MenuItem::total_price)
        .reduce(f64::min);
    if let Some(price) = cheapest {
        println!();
        println!("From ${price:.2}");
    }
    Ok(())
}

//! `pizzeria check`: validate a menu file.

use anyhow::Result;

use super::Shop;

/// Validate the menu file and report how many pizzas it lists.
pub fn run(shop: &Shop, file: Option<&str>) -> Result<usize> {
    let (menu, _) = shop.load(file)?;
    println!("ok: {} pizzas", menu.len());
    Ok(menu.len())
}

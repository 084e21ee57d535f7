//! `pizzeria toppings`: list the toppings a menu declares.

use anyhow::Result;

use super::Shop;

/// Print every declared topping in declaration order.
pub fn run(shop: &Shop, file: Option<&str>) -> Result<()> {
    let (_, registry) = shop.load(file)?;
    println!("Toppings ({}):", registry.len());
    for topping in registry.iter() {
        if topping.is_vegan() {
            println!("  {topping} (vegan)");
        } else {
            println!("  {topping}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{shop_with_menu, SAMPLE_MENU};

    #[test]
    fn list_toppings() {
        let (_dir, shop) = shop_with_menu(SAMPLE_MENU);
        assert!(run(&shop, None).is_ok());
    }

    #[test]
    fn list_fails_on_bad_declaration() {
        let (_dir, shop) = shop_with_menu("PizzaMenu 0\n\nHam, ham\nMushroom\n\n");
        assert!(run(&shop, None).is_err());
    }
}

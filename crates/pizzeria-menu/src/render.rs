//! Writing menus back out in the menu file format.

use pizzeria_core::{Topping, ToppingRegistry};

use crate::parse::{ParsedPizzaSpec, HEADER_KEYWORD, LIST_SEPARATOR, PIZZA_SEPARATOR};

/// Render a registry and pizza list as menu file text.
///
/// Returns `None` when the text would not parse back to the same registry
/// and pizzas: a declaration line would be empty, a name would break a
/// line apart, or a pizza uses a topping `registry` does not hold.
pub fn render_menu(registry: &ToppingRegistry, pizzas: &[ParsedPizzaSpec]) -> Option<String> {
    let (vegan, non_vegan): (Vec<_>, Vec<_>) = registry.iter().partition(|t| t.is_vegan());
    if vegan.is_empty() || non_vegan.is_empty() {
        return None;
    }
    if !registry.iter().all(|t| fits_in_list(t.name())) {
        return None;
    }
    for spec in pizzas {
        if !fits_on_line(spec.name()) || spec.name().contains(PIZZA_SEPARATOR) {
            return None;
        }
        let declared = |t: &Topping| matches!(registry.lookup(t.name()), Ok(found) if found == *t);
        if !spec.toppings().iter().all(declared) {
            return None;
        }
    }

    let join = |names: Vec<&str>| names.join(LIST_SEPARATOR);

    let mut out = format!("{HEADER_KEYWORD} {}\n\n", pizzas.len());
    out.push_str(&join(non_vegan.iter().map(|t| t.name()).collect()));
    out.push('\n');
    out.push_str(&join(vegan.iter().map(|t| t.name()).collect()));
    out.push_str("\n\n");
    for spec in pizzas {
        out.push_str(spec.name());
        out.push_str(PIZZA_SEPARATOR);
        out.push_str(&join(spec.toppings().iter().map(|t| t.name()).collect()));
        out.push_str("]\n");
    }
    Some(out)
}

fn fits_on_line(name: &str) -> bool {
    !name.contains(['\n', '\r'])
}

fn fits_in_list(name: &str) -> bool {
    fits_on_line(name) && !name.contains(LIST_SEPARATOR)
}

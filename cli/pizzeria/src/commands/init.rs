//! `pizzeria init`: project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pizzeria_core::ToppingRegistry;
use pizzeria_menu::{render_menu, ParsedPizzaSpec};

use crate::config::{PizzeriaConfig, CONFIG_FILE};

/// Create a new pizzeria project in a directory named `name` under `cwd`.
pub fn run(cwd: &Path, name: &str) -> Result<()> {
    create_project(&cwd.join(name), name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir.join("assets")).context("creating assets/ directory")?;

    fs::write(project_dir.join(CONFIG_FILE), PizzeriaConfig::template(name))
        .with_context(|| format!("writing {CONFIG_FILE}"))?;

    fs::write(project_dir.join("assets").join("menu.txt"), sample_menu()?)
        .context("writing assets/menu.txt")?;

    println!("Created project '{name}'");
    println!("  {name}/{CONFIG_FILE}");
    println!("  {name}/assets/menu.txt");

    Ok(())
}

/// A small valid menu to start from.
fn sample_menu() -> Result<String> {
    let mut registry = ToppingRegistry::new();
    let ham = registry.register("Ham", false)?;
    let pepperoni = registry.register("Pepperoni", false)?;
    let mushroom = registry.register("Mushroom", true)?;
    let pineapple = registry.register("Pineapple", true)?;

    let pizzas = vec![
        ParsedPizzaSpec::new("Margherita", vec![])?,
        ParsedPizzaSpec::new("Hawaiian", vec![ham.clone(), pineapple])?,
        ParsedPizzaSpec::new("Meat Lovers", vec![ham, pepperoni])?,
        ParsedPizzaSpec::new("Funghi", vec![mushroom])?,
    ];
    render_menu(&registry, &pizzas).context("rendering sample menu")
}

//! Loading menu files from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pizzeria_core::ToppingRegistry;
use tracing::info;

use crate::error::LoadError;
use crate::parse::{parse_menu, MenuFile};

/// Reset `registry`, then parse the menu file at `path` into it.
///
/// Treats the reset and parse as one unit: a registry shared between loads
/// must not be touched by anything else in between.
pub fn load_menu(path: &Path, registry: &mut ToppingRegistry) -> Result<MenuFile, LoadError> {
    registry.reset();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let menu = parse_menu(BufReader::new(file), registry)?;
    info!(
        path = %path.display(),
        pizzas = menu.len(),
        toppings = registry.len(),
        "loaded menu"
    );
    Ok(menu)
}

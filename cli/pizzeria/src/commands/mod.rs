//! CLI command implementations.

pub mod check;
pub mod init;
pub mod menu;
pub mod order;
pub mod toppings;

use std::path::PathBuf;

use anyhow::Result;
use pizzeria_core::{Menu, ToppingRegistry};
use pizzeria_menu::{load_menu, MenuFile};

use crate::config::PizzeriaConfig;

/// Configuration plus the directory paths are resolved against.
pub struct Shop {
    pub config: PizzeriaConfig,
    pub root: PathBuf,
}

impl Shop {
    /// Load a menu file into a fresh registry.
    pub fn load(&self, file: Option<&str>) -> Result<(MenuFile, ToppingRegistry)> {
        let path = self.config.menu_path(&self.root, file);
        let mut registry = ToppingRegistry::new();
        let menu = load_menu(&path, &mut registry)?;
        Ok((menu, registry))
    }

    /// Load a menu file and build its pizzas into a catalog.
    pub fn catalog(&self, file: Option<&str>) -> Result<Menu> {
        let (file, _) = self.load(file)?;
        let mut menu = Menu::new();
        file.register_into(self.config.menu.style, &mut menu)?;
        Ok(menu)
    }
}

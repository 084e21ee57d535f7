//! `pizzeria.toml` configuration parsing and menu path resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pizzeria_core::PizzaStyle;
use serde::{Deserialize, Serialize};

/// File name searched for when discovering configuration.
pub const CONFIG_FILE: &str = "pizzeria.toml";

/// Shop name printed when `[shop] name` is not set.
pub const DEFAULT_SHOP_NAME: &str = "Pizzeria";

/// The top-level configuration for a pizzeria project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PizzeriaConfig {
    /// Shop metadata.
    #[serde(default)]
    pub shop: ShopConfig,
    /// Menu file location and pizza style.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shop metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Display name printed above menus.
    #[serde(default = "default_shop_name")]
    pub name: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        ShopConfig {
            name: default_shop_name(),
        }
    }
}

fn default_shop_name() -> String {
    DEFAULT_SHOP_NAME.to_string()
}

/// Menu section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Directory holding menu files, relative to the project root.
    #[serde(default = "default_menu_dir")]
    pub dir: PathBuf,
    /// Menu file used when none is named on the command line.
    #[serde(default = "default_menu_file")]
    pub default: String,
    /// Base, sauce and cheese for pizzas loaded from the menu.
    #[serde(default)]
    pub style: PizzaStyle,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            dir: default_menu_dir(),
            default: default_menu_file(),
            style: PizzaStyle::default(),
        }
    }
}

fn default_menu_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_menu_file() -> String {
    "menu.txt".to_string()
}

/// Logging section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level (error, warn, info, debug, trace).
    #[serde(default)]
    pub level: Option<String>,
}

impl PizzeriaConfig {
    /// Search upward from `start_dir` for a `pizzeria.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing pizzeria.toml")
    }

    /// Resolve the menu file to load.
    ///
    /// Absolute paths and paths that exist relative to the working directory
    /// are used as given; anything else is looked up in the menu directory.
    pub fn menu_path(&self, root: &Path, file: Option<&str>) -> PathBuf {
        match file {
            Some(file) => {
                let given = Path::new(file);
                if given.is_absolute() || given.is_file() {
                    given.to_path_buf()
                } else {
                    root.join(&self.menu.dir).join(given)
                }
            }
            None => root.join(&self.menu.dir).join(&self.menu.default),
        }
    }

    /// Generate the default configuration for `pizzeria init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[shop]
name = "{name}"

[menu]
dir = "assets"
default = "menu.txt"

[menu.style]
size = "medium"
sauce = "tomato"
cheese = "mozzarella"

[logging]
level = "warn"
"#
        )
    }
}

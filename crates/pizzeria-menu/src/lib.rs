//! Menu file parsing and loading for the pizzeria.
//!
//! ## Modules
//!
//! - [`source`]: Line sources the parser reads from
//! - [`parse`]: Validating single-pass parser for menu files
//! - [`render`]: Writing menus back out in the same format
//! - [`load`]: Opening and loading menu files from disk
//! - [`error`]: Line-numbered error taxonomy

pub mod error;
pub mod load;
pub mod parse;
pub mod render;
pub mod source;

pub use error::{CountMismatch, LoadError, MenuError, MenuErrorKind};
pub use load::load_menu;
pub use parse::{parse_menu, MenuFile, MenuParser, ParsedPizzaSpec};
pub use render::render_menu;
pub use source::LineSource;

//! Process exit codes for menu loading failures.

use pizzeria_menu::{LoadError, MenuErrorKind};

/// The menu file could not be opened. Also used for any other failure.
pub const COULD_NOT_OPEN_FILE: i32 = 1;

/// The menu file is formatted incorrectly.
pub const FILE_FORMAT_ERROR: i32 = 2;

/// A pizza line lists too many toppings.
pub const TOO_MANY_TOPPINGS: i32 = 4;

/// The pizza lines don't match the header count.
pub const MISSING_NUMBER_OF_PIZZAS: i32 = 5;

/// A line could not be read.
pub const CANNOT_READ_LINE: i32 = 6;

/// Exit code for a menu error kind.
pub fn for_kind(kind: MenuErrorKind) -> i32 {
    match kind {
        MenuErrorKind::TooManyToppings => TOO_MANY_TOPPINGS,
        MenuErrorKind::PizzaCountMismatch => MISSING_NUMBER_OF_PIZZAS,
        MenuErrorKind::IoFailure => CANNOT_READ_LINE,
        MenuErrorKind::EmptySource
        | MenuErrorKind::BadKeyword
        | MenuErrorKind::MissingSpace
        | MenuErrorKind::MissingCount
        | MenuErrorKind::ExpectedBlank
        | MenuErrorKind::InvalidToppingDeclaration
        | MenuErrorKind::BadPizzaLineSpacing
        | MenuErrorKind::UnterminatedToppingList
        | MenuErrorKind::UnknownToppingReference
        | MenuErrorKind::NullToppingReference => FILE_FORMAT_ERROR,
    }
}

/// Exit code for any error returned by a command.
pub fn for_error(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<LoadError>())
        .map_or(COULD_NOT_OPEN_FILE, |load| match load {
            LoadError::Open { .. } => COULD_NOT_OPEN_FILE,
            LoadError::Menu(err) => for_kind(err.kind()),
        })
}

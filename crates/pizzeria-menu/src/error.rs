//! Menu file error types.
//!
//! Every parse failure is a [`MenuError`] carrying the 1-based line number at
//! which it was detected. [`MenuErrorKind`] is the closed, copyable
//! classification that callers branch on (for example to choose an exit code).

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Direction of a pizza count mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMismatch {
    /// Input ended after `found` pizza lines.
    TooFew { found: usize },
    /// More lines follow the last declared pizza.
    TooMany,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFew { found } => write!(f, "only {found} found"),
            Self::TooMany => write!(f, "more found"),
        }
    }
}

/// Errors raised while parsing a menu file.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The source held no lines at all.
    #[error("no lines in menu at line {line}")]
    EmptySource { line: usize },

    /// The header does not begin with the `PizzaMenu` keyword.
    #[error("initial keyword is incorrect at line {line}")]
    BadKeyword { line: usize },

    /// The header has no space between keyword and count.
    #[error("missing space at line {line}")]
    MissingSpace { line: usize },

    /// The header count is not a non-negative integer.
    #[error("missing number of pizzas at line {line}")]
    MissingCount { line: usize },

    /// A mandatory blank line is missing or not empty.
    #[error("line should be empty at line {line}")]
    ExpectedBlank { line: usize },

    /// A topping declaration is blank, duplicated, or missing.
    #[error("invalid topping declaration at line {line}: {detail}")]
    InvalidToppingDeclaration { line: usize, detail: String },

    /// A pizza line lacks the `<name> [` separator or the name.
    #[error("incorrect spacing at line {line}")]
    BadPizzaLineSpacing { line: usize },

    /// A pizza line does not end with `]`.
    #[error("toppings list doesn't end with a square bracket at line {line}")]
    UnterminatedToppingList { line: usize },

    /// A pizza line names a topping that was never declared.
    #[error("invalid topping name '{name}' at line {line}")]
    UnknownToppingReference { line: usize, name: String },

    /// A pizza line contains an empty topping name.
    #[error("null topping name at line {line}")]
    NullToppingReference { line: usize },

    /// A pizza line lists more toppings than a pizza can hold.
    #[error("too many toppings ({count}, maximum {max}) at line {line}")]
    TooManyToppings { line: usize, count: usize, max: usize },

    /// The number of pizza lines differs from the header count.
    #[error("listed number of pizzas ({declared}) doesn't match pizza list at line {line}: {mismatch}")]
    PizzaCountMismatch {
        line: usize,
        declared: usize,
        mismatch: CountMismatch,
    },

    /// The underlying reader failed.
    #[error("couldn't read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Classification of [`MenuError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuErrorKind {
    EmptySource,
    BadKeyword,
    MissingSpace,
    MissingCount,
    ExpectedBlank,
    InvalidToppingDeclaration,
    BadPizzaLineSpacing,
    UnterminatedToppingList,
    UnknownToppingReference,
    NullToppingReference,
    TooManyToppings,
    PizzaCountMismatch,
    IoFailure,
}

impl MenuErrorKind {
    /// Whether the kind describes malformed text, as opposed to topping
    /// cardinality, pizza count, or I/O.
    pub fn is_format_error(&self) -> bool {
        !matches!(
            self,
            Self::TooManyToppings | Self::PizzaCountMismatch | Self::IoFailure
        )
    }
}

impl MenuError {
    pub fn kind(&self) -> MenuErrorKind {
        match self {
            Self::EmptySource { .. } => MenuErrorKind::EmptySource,
            Self::BadKeyword { .. } => MenuErrorKind::BadKeyword,
            Self::MissingSpace { .. } => MenuErrorKind::MissingSpace,
            Self::MissingCount { .. } => MenuErrorKind::MissingCount,
            Self::ExpectedBlank { .. } => MenuErrorKind::ExpectedBlank,
            Self::InvalidToppingDeclaration { .. } => MenuErrorKind::InvalidToppingDeclaration,
            Self::BadPizzaLineSpacing { .. } => MenuErrorKind::BadPizzaLineSpacing,
            Self::UnterminatedToppingList { .. } => MenuErrorKind::UnterminatedToppingList,
            Self::UnknownToppingReference { .. } => MenuErrorKind::UnknownToppingReference,
            Self::NullToppingReference { .. } => MenuErrorKind::NullToppingReference,
            Self::TooManyToppings { .. } => MenuErrorKind::TooManyToppings,
            Self::PizzaCountMismatch { .. } => MenuErrorKind::PizzaCountMismatch,
            Self::Io { .. } => MenuErrorKind::IoFailure,
        }
    }

    /// 1-based line at which the failure was detected.
    ///
    /// When input ended early this is the line where content was expected.
    pub fn line(&self) -> usize {
        match self {
            Self::EmptySource { line }
            | Self::BadKeyword { line }
            | Self::MissingSpace { line }
            | Self::MissingCount { line }
            | Self::ExpectedBlank { line }
            | Self::InvalidToppingDeclaration { line, .. }
            | Self::BadPizzaLineSpacing { line }
            | Self::UnterminatedToppingList { line }
            | Self::UnknownToppingReference { line, .. }
            | Self::NullToppingReference { line }
            | Self::TooManyToppings { line, .. }
            | Self::PizzaCountMismatch { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

/// Errors raised while loading a menu file from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("could not open menu file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but its contents are invalid.
    #[error(transparent)]
    Menu(#[from] MenuError),
}

/// Result type for menu parsing.
pub type Result<T> = std::result::Result<T, MenuError>;

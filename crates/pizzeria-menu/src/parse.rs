//! Hand-written parser for the menu file format.
//!
//! A menu file is line-oriented:
//!
//! ```text
//! PizzaMenu 2
//!
//! Ham, Pepperoni
//! Mushroom, Olive
//!
//! Margherita []
//! Hawaiian [Ham, Mushroom]
//! ```
//!
//! The header declares the pizza count, followed by a blank line, the
//! non-vegan and vegan topping declarations (separated by `", "`), another
//! blank line, then exactly that many pizza lines. Nothing may follow the
//! last pizza.
//!
//! Topping declarations are registered as soon as they are read, so a parse
//! that fails on a later line leaves those toppings in the registry.

use pizzeria_core::pizza::MAX_TOPPINGS;
use pizzeria_core::{Pizza, PizzaError, PizzaSink, PizzaStyle, RegistryError, Topping, ToppingRegistry};
use tracing::{debug, warn};

use crate::error::{CountMismatch, MenuError, Result};
use crate::source::LineSource;

/// Keyword that opens every menu file.
pub const HEADER_KEYWORD: &str = "PizzaMenu";

/// Separator between topping names.
pub const LIST_SEPARATOR: &str = ", ";

/// Separator between a pizza name and its topping list.
pub const PIZZA_SEPARATOR: &str = " [";

/// Cap on up-front allocation driven by the header count.
const MAX_PREALLOCATED: usize = 256;

/// One validated pizza line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPizzaSpec {
    name: String,
    toppings: Vec<Topping>,
}

impl ParsedPizzaSpec {
    /// Build a spec outside the parser, applying the same rules.
    pub fn new(name: impl Into<String>, toppings: Vec<Topping>) -> std::result::Result<Self, PizzaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PizzaError::BlankName);
        }
        if toppings.len() > MAX_TOPPINGS {
            return Err(PizzaError::TooManyToppings {
                count: toppings.len(),
                max: MAX_TOPPINGS,
            });
        }
        Ok(ParsedPizzaSpec { name, toppings })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    /// Build a menu pizza of the given style from this line.
    pub fn to_pizza(&self, style: PizzaStyle) -> std::result::Result<Pizza, PizzaError> {
        Pizza::from_style(&self.name, style, self.toppings.clone())
    }
}

/// A fully parsed menu file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFile {
    declared: usize,
    pizzas: Vec<ParsedPizzaSpec>,
}

impl MenuFile {
    /// Pizza count from the header; always equal to `pizzas().len()`.
    pub fn declared_count(&self) -> usize {
        self.declared
    }

    pub fn pizzas(&self) -> &[ParsedPizzaSpec] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn into_pizzas(self) -> Vec<ParsedPizzaSpec> {
        self.pizzas
    }

    /// Build a menu pizza for every spec, in file order.
    pub fn build_pizzas(&self, style: PizzaStyle) -> std::result::Result<Vec<Pizza>, PizzaError> {
        self.pizzas.iter().map(|spec| spec.to_pizza(style)).collect()
    }

    /// Build every pizza and hand it to `sink`. Returns the number handed over.
    ///
    /// Nothing reaches the sink unless every pizza builds.
    pub fn register_into<K: PizzaSink>(
        &self,
        style: PizzaStyle,
        sink: &mut K,
    ) -> std::result::Result<usize, PizzaError> {
        let pizzas = self.build_pizzas(style)?;
        let count = pizzas.len();
        for pizza in pizzas {
            sink.register_pizza(pizza);
        }
        Ok(count)
    }
}

/// Parse a whole menu from `source`, registering its toppings in `registry`.
///
/// The registry is not reset first; callers loading a fresh file should call
/// [`ToppingRegistry::reset`] beforehand.
pub fn parse_menu<S: LineSource>(source: S, registry: &mut ToppingRegistry) -> Result<MenuFile> {
    match MenuParser::new(source, registry).parse() {
        Ok(menu) => Ok(menu),
        Err(err) => {
            warn!(kind = ?err.kind(), line = err.line(), "menu rejected: {err}");
            Err(err)
        }
    }
}

/// Single-pass menu parser over a line source.
pub struct MenuParser<'r, S> {
    source: S,
    registry: &'r mut ToppingRegistry,
    /// Lines successfully read so far.
    line: usize,
}

impl<'r, S: LineSource> MenuParser<'r, S> {
    pub fn new(source: S, registry: &'r mut ToppingRegistry) -> Self {
        MenuParser {
            source,
            registry,
            line: 0,
        }
    }

    /// Consume the source and parse it.
    pub fn parse(mut self) -> Result<MenuFile> {
        let declared = self.parse_header()?;
        self.expect_blank()?;
        self.declare_toppings(false)?;
        self.declare_toppings(true)?;
        self.expect_blank()?;

        let mut pizzas = Vec::with_capacity(declared.min(MAX_PREALLOCATED));
        for _ in 0..declared {
            let Some(text) = self.next_line()? else {
                return Err(MenuError::PizzaCountMismatch {
                    line: self.expected_line(),
                    declared,
                    mismatch: CountMismatch::TooFew {
                        found: pizzas.len(),
                    },
                });
            };
            let spec = self.parse_pizza_line(&text)?;
            debug!(line = self.line, pizza = spec.name(), toppings = spec.toppings().len(), "parsed pizza");
            pizzas.push(spec);
        }

        if self.next_line()?.is_some() {
            return Err(MenuError::PizzaCountMismatch {
                line: self.line,
                declared,
                mismatch: CountMismatch::TooMany,
            });
        }

        Ok(MenuFile { declared, pizzas })
    }

    /// Read the next line, counting it on success.
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.source.read_line() {
            Ok(Some(text)) => {
                self.line += 1;
                Ok(Some(text))
            }
            Ok(None) => Ok(None),
            Err(source) => Err(MenuError::Io {
                line: self.expected_line(),
                source,
            }),
        }
    }

    /// Line number of the next line to be read.
    fn expected_line(&self) -> usize {
        self.line + 1
    }

    fn parse_header(&mut self) -> Result<usize> {
        let Some(header) = self.next_line()? else {
            return Err(MenuError::EmptySource {
                line: self.expected_line(),
            });
        };
        let line = self.line;

        let (keyword, count) = header
            .split_once(' ')
            .ok_or(MenuError::MissingSpace { line })?;
        if keyword != HEADER_KEYWORD {
            return Err(MenuError::BadKeyword { line });
        }
        count
            .parse::<usize>()
            .map_err(|_| MenuError::MissingCount { line })
    }

    fn expect_blank(&mut self) -> Result<()> {
        match self.next_line()? {
            Some(text) if text.is_empty() => Ok(()),
            Some(_) => Err(MenuError::ExpectedBlank { line: self.line }),
            None => Err(MenuError::ExpectedBlank {
                line: self.expected_line(),
            }),
        }
    }

    fn declare_toppings(&mut self, vegan: bool) -> Result<()> {
        let Some(text) = self.next_line()? else {
            return Err(MenuError::InvalidToppingDeclaration {
                line: self.expected_line(),
                detail: format!("missing {} topping line", if vegan { "vegan" } else { "non-vegan" }),
            });
        };
        for name in text.split(LIST_SEPARATOR) {
            self.registry
                .register(name, vegan)
                .map_err(|err| MenuError::InvalidToppingDeclaration {
                    line: self.line,
                    detail: err.to_string(),
                })?;
        }
        Ok(())
    }

    fn parse_pizza_line(&self, text: &str) -> Result<ParsedPizzaSpec> {
        let line = self.line;

        let (name, rest) = text
            .split_once(PIZZA_SEPARATOR)
            .ok_or(MenuError::BadPizzaLineSpacing { line })?;
        if name.trim().is_empty() {
            return Err(MenuError::BadPizzaLineSpacing { line });
        }
        let list = rest
            .strip_suffix(']')
            .ok_or(MenuError::UnterminatedToppingList { line })?;

        // `[]` is a pizza with no toppings.
        let toppings = if list.is_empty() {
            Vec::new()
        } else {
            list.split(LIST_SEPARATOR)
                .map(|topping| self.resolve(topping))
                .collect::<Result<Vec<_>>>()?
        };

        if toppings.len() > MAX_TOPPINGS {
            return Err(MenuError::TooManyToppings {
                line,
                count: toppings.len(),
                max: MAX_TOPPINGS,
            });
        }

        Ok(ParsedPizzaSpec {
            name: name.to_string(),
            toppings,
        })
    }

    fn resolve(&self, name: &str) -> Result<Topping> {
        let line = self.line;
        self.registry.lookup(name).map_err(|err| match err {
            RegistryError::NullName => MenuError::NullToppingReference { line },
            _ => MenuError::UnknownToppingReference {
                line,
                name: name.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuErrorKind;
    use std::io::Cursor;

    fn parse(input: &str) -> (Result<MenuFile>, ToppingRegistry) {
        let mut registry = ToppingRegistry::new();
        let result = parse_menu(Cursor::new(input.as_bytes()), &mut registry);
        (result, registry)
    }

    fn parse_err(input: &str) -> MenuError {
        parse(input).0.unwrap_err()
    }

    const PREAMBLE: &str = "\n\nHam, Pepperoni\nMushroom\n\n";

    fn menu(count: &str, pizza_lines: &[&str]) -> String {
        let mut text = format!("PizzaMenu {count}{PREAMBLE}");
        for line in pizza_lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn parse_single_pizza() {
        let (result, registry) = parse("PizzaMenu 1\n\nHam, Pepperoni\nMushroom\n\nMargherita [Ham]\n");
        let menu = result.unwrap();
        assert_eq!(menu.declared_count(), 1);
        assert_eq!(menu.len(), 1);
        let spec = &menu.pizzas()[0];
        assert_eq!(spec.name(), "Margherita");
        assert_eq!(spec.toppings().len(), 1);
        assert_eq!(spec.toppings()[0].name(), "HAM");
        assert!(!spec.toppings()[0].is_vegan());
        assert!(registry.lookup("mushroom").unwrap().is_vegan());
    }

    #[test]
    fn parse_without_trailing_newline() {
        let (result, _) = parse("PizzaMenu 1\n\nHam\nMushroom\n\nPlain [Ham]");
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn parse_zero_pizzas() {
        let (result, registry) = parse(&menu("0", &[]));
        assert!(result.unwrap().is_empty());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn empty_topping_list_is_plain_pizza() {
        let (result, _) = parse(&menu("1", &["Plain []"]));
        assert!(result.unwrap().pizzas()[0].toppings().is_empty());
    }

    #[test]
    fn duplicate_references_are_allowed() {
        let (result, _) = parse(&menu("1", &["Double Ham [Ham, ham]"]));
        let menu = result.unwrap();
        let toppings = menu.pizzas()[0].toppings();
        assert_eq!(toppings.len(), 2);
        assert_eq!(toppings[0], toppings[1]);
    }

    #[test]
    fn empty_source() {
        let err = parse_err("");
        assert_eq!(err.kind(), MenuErrorKind::EmptySource);
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn header_errors() {
        assert_eq!(parse_err("PizzaMenu2\n").kind(), MenuErrorKind::MissingSpace);
        assert_eq!(parse_err("PizzaMenus 2\n").kind(), MenuErrorKind::BadKeyword);
        assert_eq!(parse_err("Menu 2\n").kind(), MenuErrorKind::BadKeyword);
        assert_eq!(parse_err("PizzaMenu two\n").kind(), MenuErrorKind::MissingCount);
        assert_eq!(parse_err("PizzaMenu \n").kind(), MenuErrorKind::MissingCount);
        assert_eq!(parse_err("PizzaMenu -1\n").kind(), MenuErrorKind::MissingCount);
        // Only the first space splits, so a second one lands in the count.
        assert_eq!(parse_err("PizzaMenu 1 2\n").kind(), MenuErrorKind::MissingCount);
        assert_eq!(parse_err("PizzaMenu two\n").line(), 1);
    }

    #[test]
    fn header_without_space_is_missing_space_before_keyword_check() {
        // The split runs first, so a wrong keyword with no space never
        // reaches the keyword comparison.
        assert_eq!(parse_err("Burger\n").kind(), MenuErrorKind::MissingSpace);
        assert_eq!(parse_err("\n").kind(), MenuErrorKind::MissingSpace);
        assert_eq!(parse_err("PizzaMenu\n").kind(), MenuErrorKind::MissingSpace);
        assert_eq!(parse_err("Burger 2\n").kind(), MenuErrorKind::BadKeyword);
        assert_eq!(parse_err("\n").line(), 1);
    }

    #[test]
    fn blank_line_required_after_header() {
        let err = parse_err("PizzaMenu 1\nHam\n");
        assert_eq!(err.kind(), MenuErrorKind::ExpectedBlank);
        assert_eq!(err.line(), 2);

        let err = parse_err("PizzaMenu 1\n");
        assert_eq!(err.kind(), MenuErrorKind::ExpectedBlank);
        assert_eq!(err.line(), 2);

        // Whitespace is not empty.
        assert_eq!(parse_err("PizzaMenu 1\n \n").kind(), MenuErrorKind::ExpectedBlank);
    }

    #[test]
    fn blank_line_required_after_vegan_toppings() {
        let err = parse_err("PizzaMenu 1\n\nHam\nMushroom\nPlain []\n");
        assert_eq!(err.kind(), MenuErrorKind::ExpectedBlank);
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn duplicate_declaration_reports_its_line() {
        let err = parse_err("PizzaMenu 0\n\nHam, Ham\nMushroom\n\n");
        assert_eq!(err.kind(), MenuErrorKind::InvalidToppingDeclaration);
        assert_eq!(err.line(), 3);

        let err = parse_err("PizzaMenu 0\n\nHam\nhAm\n\n");
        assert_eq!(err.kind(), MenuErrorKind::InvalidToppingDeclaration);
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn blank_declarations_are_invalid() {
        assert_eq!(
            parse_err("PizzaMenu 0\n\n\nMushroom\n\n").kind(),
            MenuErrorKind::InvalidToppingDeclaration
        );
        assert_eq!(
            parse_err("PizzaMenu 0\n\nHam, \nMushroom\n\n").kind(),
            MenuErrorKind::InvalidToppingDeclaration
        );
    }

    #[test]
    fn missing_declaration_line() {
        let err = parse_err("PizzaMenu 0\n\nHam\n");
        assert_eq!(err.kind(), MenuErrorKind::InvalidToppingDeclaration);
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn toppings_stay_registered_after_failure() {
        let (result, registry) = parse("PizzaMenu 1\n\nHam, Pepperoni\nMushroom\n\nBad [Anchovy]\n");
        assert!(result.is_err());
        let names: Vec<_> = registry.iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["HAM", "PEPPERONI", "MUSHROOM"]);
    }

    #[test]
    fn pizza_line_spacing() {
        let err = parse_err(&menu("1", &["Margherita[Ham]"]));
        assert_eq!(err.kind(), MenuErrorKind::BadPizzaLineSpacing);
        assert_eq!(err.line(), 6);

        let err = parse_err(&menu("1", &[" [Ham]"]));
        assert_eq!(err.kind(), MenuErrorKind::BadPizzaLineSpacing);
    }

    #[test]
    fn unterminated_topping_list() {
        assert_eq!(
            parse_err(&menu("1", &["Margherita [Ham"])).kind(),
            MenuErrorKind::UnterminatedToppingList
        );
        assert_eq!(
            parse_err(&menu("1", &["Margherita ["])).kind(),
            MenuErrorKind::UnterminatedToppingList
        );
        assert_eq!(
            parse_err(&menu("1", &["Margherita [Ham] "])).kind(),
            MenuErrorKind::UnterminatedToppingList
        );
    }

    #[test]
    fn unknown_topping_reference() {
        let err = parse_err(&menu("2", &["Plain []", "Fishy [Ham, Anchovy]"]));
        assert_eq!(err.kind(), MenuErrorKind::UnknownToppingReference);
        assert_eq!(err.line(), 7);
        assert!(matches!(err, MenuError::UnknownToppingReference { ref name, .. } if name == "Anchovy"));
    }

    #[test]
    fn null_topping_reference() {
        assert_eq!(
            parse_err(&menu("1", &["Gap [Ham, , Mushroom]"])).kind(),
            MenuErrorKind::NullToppingReference
        );
        assert_eq!(
            parse_err(&menu("1", &["Trailing [Ham, ]"])).kind(),
            MenuErrorKind::NullToppingReference
        );
    }

    #[test]
    fn five_toppings_is_the_limit() {
        let (result, _) = parse(&menu("1", &["Full [Ham, Ham, Ham, Ham, Ham]"]));
        assert_eq!(result.unwrap().pizzas()[0].toppings().len(), 5);

        let err = parse_err(&menu("1", &["Veggie [Ham, Ham, Ham, Ham, Ham, Ham]"]));
        assert_eq!(err.kind(), MenuErrorKind::TooManyToppings);
        assert!(matches!(err, MenuError::TooManyToppings { count: 6, max: 5, line: 6 }));
    }

    #[test]
    fn unknown_reference_wins_over_cardinality() {
        let err = parse_err(&menu("1", &["Odd [Ham, Ham, Ham, Ham, Ham, Anchovy]"]));
        assert_eq!(err.kind(), MenuErrorKind::UnknownToppingReference);
    }

    #[test]
    fn too_few_pizza_lines() {
        let err = parse_err(&menu("2", &["Plain []"]));
        assert_eq!(err.kind(), MenuErrorKind::PizzaCountMismatch);
        assert_eq!(err.line(), 7);
        assert!(matches!(
            err,
            MenuError::PizzaCountMismatch {
                declared: 2,
                mismatch: CountMismatch::TooFew { found: 1 },
                ..
            }
        ));
    }

    #[test]
    fn too_many_pizza_lines() {
        let err = parse_err(&menu("1", &["Plain []", "Extra []"]));
        assert!(matches!(
            err,
            MenuError::PizzaCountMismatch {
                line: 7,
                mismatch: CountMismatch::TooMany,
                ..
            }
        ));

        // Even a trailing blank line counts as an extra line.
        let err = parse_err(&format!("{}\n", menu("1", &["Plain []"])));
        assert_eq!(err.kind(), MenuErrorKind::PizzaCountMismatch);
    }

    #[test]
    fn huge_declared_count_does_not_preallocate() {
        let err = parse_err(&menu("18446744073709551615", &["Plain []"]));
        assert_eq!(err.kind(), MenuErrorKind::PizzaCountMismatch);
    }

    #[test]
    fn spec_rejects_blank_name_and_excess_toppings() {
        let mut registry = ToppingRegistry::new();
        let ham = registry.register("Ham", false).unwrap();
        assert!(ParsedPizzaSpec::new(" ", vec![]).is_err());
        assert!(ParsedPizzaSpec::new("Hammy", vec![ham.clone(); 6]).is_err());
        assert!(ParsedPizzaSpec::new("Hammy", vec![ham; 5]).is_ok());
    }

    #[test]
    fn register_into_sink() {
        let (result, _) = parse(&menu("2", &["Margherita []", "Hawaiian [Ham, Mushroom]"]));
        let menu = result.unwrap();

        let mut sink: Vec<Pizza> = Vec::new();
        let count = menu.register_into(PizzaStyle::default(), &mut sink).unwrap();
        assert_eq!(count, 2);
        assert_eq!(sink[1].to_string(),
            "[MenuPizza] Hawaiian: is a 'MEDIUM' sized base with 'TOMATO' sauce and \
             'MOZZARELLA' cheese - Toppings: [HAM, MUSHROOM] $9.00");
    }
}

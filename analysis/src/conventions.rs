//! Convention detection.
//!
//! Naming guesses are all-or-nothing: a style is reported only when every
//! collected name of that kind satisfies it, and the candidate styles are
//! tried in a fixed order with the first full match winning. Code-style
//! guesses compare counters accumulated in each fact's `StyleSample`,
//! again as an ordered rule list.

use std::sync::Arc;

use crate::types::fact::{FileFact, StyleSample};
use crate::types::snapshot::{CodeStyleGuess, Indentation, NamingStyle, QuoteStyle};

type NamingRule = (NamingStyle, fn(&str) -> bool);

static NAMING_RULES: &[NamingRule] = &[
    (NamingStyle::PascalCase, is_pascal_case),
    (NamingStyle::CamelCase, is_camel_case),
    (NamingStyle::SnakeCase, is_snake_case),
    (NamingStyle::ScreamingSnakeCase, is_screaming_snake_case),
];

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && !name.contains('_')
        && name.chars().any(|c| c.is_ascii_lowercase())
}

fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) && !name.contains('_')
}

fn is_snake_case(name: &str) -> bool {
    name.contains('_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn is_screaming_snake_case(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && name.chars().any(|c| c.is_ascii_uppercase())
}

/// First style every name satisfies, or `None` — a single counter-example
/// suppresses the convention entirely.
pub fn detect_naming_style<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<NamingStyle> {
    let names: Vec<&str> = names.into_iter().collect();
    if names.is_empty() {
        return None;
    }
    NAMING_RULES
        .iter()
        .find(|(_, predicate)| names.iter().all(|n| predicate(n)))
        .map(|(style, _)| *style)
}

/// Fold every fact's style counters into one project-level guess.
pub fn detect_code_style(facts: &[Arc<FileFact>]) -> CodeStyleGuess {
    let mut total = StyleSample::default();
    for fact in facts {
        let s = &fact.style;
        total.tab_indent_lines += s.tab_indent_lines;
        total.two_space_indent_lines += s.two_space_indent_lines;
        total.four_space_indent_lines += s.four_space_indent_lines;
        total.single_quote_count += s.single_quote_count;
        total.double_quote_count += s.double_quote_count;
        total.semicolon_lines += s.semicolon_lines;
        total.trailing_comma_lines += s.trailing_comma_lines;
        total.source_lines += s.source_lines;
    }

    CodeStyleGuess {
        indentation: detect_indentation(&total),
        quotes: detect_quotes(&total),
        semicolons: if total.source_lines == 0 {
            None
        } else {
            Some(total.semicolon_lines * 2 > total.source_lines)
        },
        trailing_commas: if total.source_lines == 0 {
            None
        } else {
            Some(total.trailing_comma_lines > 0)
        },
    }
}

fn detect_indentation(total: &StyleSample) -> Option<Indentation> {
    let spaces = total.two_space_indent_lines + total.four_space_indent_lines;
    if total.tab_indent_lines == 0 && spaces == 0 {
        None
    } else if total.tab_indent_lines > spaces {
        Some(Indentation::Tabs)
    } else if total.four_space_indent_lines > total.two_space_indent_lines {
        Some(Indentation::FourSpaces)
    } else {
        Some(Indentation::TwoSpaces)
    }
}

fn detect_quotes(total: &StyleSample) -> Option<QuoteStyle> {
    if total.single_quote_count == 0 && total.double_quote_count == 0 {
        None
    } else if total.single_quote_count > total.double_quote_count {
        Some(QuoteStyle::Single)
    } else {
        Some(QuoteStyle::Double)
    }
}

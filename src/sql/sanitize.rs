//! SQL identifier quoting and validation
//!
//! Quoting only wraps the identifier; it does not escape its content. Callers that
//! build statements from untrusted keys should validate them first.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::QuoteStyle;
use crate::error::{FetschError, Result};

/// Longest identifier accepted by [`validate_identifier`] (MySQL's limit)
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_$]*$").expect("identifier pattern"));

/// Wrap an identifier in the quote character of `style`
///
/// # Example
/// ```
/// use fetsch::{QuoteStyle, quote_identifier};
///
/// assert_eq!(quote_identifier("my_table", QuoteStyle::Backtick), "`my_table`");
/// assert_eq!(quote_identifier("my_table", QuoteStyle::DoubleQuote), "\"my_table\"");
/// ```
pub fn quote_identifier(identifier: &str, style: QuoteStyle) -> String {
    let q = style.quote_char();
    format!("{q}{identifier}{q}")
}

/// Validate a table or column name
///
/// Rules:
/// - Must not be empty or longer than [`MAX_IDENTIFIER_LENGTH`]
/// - Must start with a letter or underscore
/// - Can only contain letters, digits, underscores and `$`
///
/// # Example
/// ```
/// use fetsch::validate_identifier;
///
/// assert!(validate_identifier("products").is_ok());
/// assert!(validate_identifier("drop`table").is_err());
/// ```
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FetschError::invalid_identifier("Identifier cannot be empty"));
    }

    if name.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Err(FetschError::invalid_identifier(format!(
            "Identifier '{}' is longer than {} characters",
            name, MAX_IDENTIFIER_LENGTH
        )));
    }

    if !IDENTIFIER_RE.is_match(name) {
        return Err(FetschError::invalid_identifier(format!(
            "Identifier '{}' is invalid. Must start with a letter or underscore and contain only letters, digits, underscores and '$'.",
            name
        )));
    }

    Ok(())
}

//! SQL utilities for fetsch
//!
//! Provides identifier quoting/validation and parameterized statement building.

pub mod sanitize;
pub mod statement;

pub use sanitize::{MAX_IDENTIFIER_LENGTH, quote_identifier, validate_identifier};
pub use statement::{StatementBuilder, prepare_statement};

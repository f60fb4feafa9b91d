//! Configuration for statement building
//!
//! Provides a builder pattern for configuring [`StatementBuilder`](crate::sql::StatementBuilder).

use serde::{Deserialize, Serialize};

use crate::types::{PrimaryKey, StatementKind};

/// Identifier quoting style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// MySQL style: `` `name` ``
    #[default]
    Backtick,
    /// ANSI style: `"name"`
    DoubleQuote,
}

impl QuoteStyle {
    pub fn quote_char(&self) -> char {
        match self {
            QuoteStyle::Backtick => '`',
            QuoteStyle::DoubleQuote => '"',
        }
    }
}

/// Configuration for a statement builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Statement kind (default: insert)
    pub kind: StatementKind,
    /// Primary key columns (default: `["id"]`)
    pub primary_key: PrimaryKey,
    /// Target table; when absent only the clause fragment is produced
    pub table: Option<String>,
    /// Identifier quoting (default: backticks)
    pub quote_style: QuoteStyle,
}

impl Default for StatementConfig {
    fn default() -> Self {
        StatementConfigBuilder::new().build()
    }
}

impl StatementConfig {
    /// Create a new configuration builder
    pub fn builder() -> StatementConfigBuilder {
        StatementConfigBuilder::new()
    }
}

/// Builder for StatementConfig
#[derive(Debug)]
pub struct StatementConfigBuilder {
    kind: StatementKind,
    primary_key: PrimaryKey,
    table: Option<String>,
    quote_style: QuoteStyle,
}

impl Default for StatementConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementConfigBuilder {
    pub fn new() -> Self {
        Self {
            kind: StatementKind::Insert,
            primary_key: PrimaryKey::default(),
            table: None,
            quote_style: QuoteStyle::Backtick,
        }
    }

    /// Set the statement kind (default: insert)
    pub fn kind(mut self, kind: StatementKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the primary key; accepts a single column name or a list
    pub fn primary_key(mut self, key: impl Into<PrimaryKey>) -> Self {
        self.primary_key = key.into();
        self
    }

    /// Set the target table, producing a complete statement
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    /// Produce only the clause fragment, without a table prefix
    pub fn without_table(mut self) -> Self {
        self.table = None;
        self
    }

    /// Set the identifier quoting style (default: backticks)
    pub fn quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Build the configuration
    pub fn build(self) -> StatementConfig {
        StatementConfig {
            kind: self.kind,
            primary_key: self.primary_key,
            table: self.table,
            quote_style: self.quote_style,
        }
    }
}

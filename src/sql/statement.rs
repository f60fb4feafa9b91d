//! Parameterized statement assembly
//!
//! Builds `INSERT`, `UPDATE` and `INSERT ... ON DUPLICATE KEY UPDATE` fragments
//! from an ordered mapping, together with the values for their `?` placeholders.
//!
//! ```
//! use fetsch::{prepare_statement, StatementKind};
//! use serde_json::json;
//!
//! let row = fetsch::mapping_from_value(json!({"id": 1, "name": "x"})).unwrap();
//! let stmt = prepare_statement(&row, StatementKind::Update, "id", Some("users"));
//! assert_eq!(stmt.statement, "UPDATE `users` SET `name`=? WHERE `id`=?");
//! assert_eq!(stmt.values, vec![json!("x"), json!(1)]);
//! ```

use serde_json::Value;

use crate::config::StatementConfig;
use crate::error::{FetschError, Result};
use crate::sql::sanitize::{quote_identifier, validate_identifier};
use crate::types::{Mapping, PreparedStatement, PrimaryKey, StatementKind};

/// Build a statement fragment for `source`
///
/// `primary_key` accepts a single column name or a list of names. When `table` is
/// `None` only the clause part is returned, ready to be appended to a caller's own
/// `INSERT INTO t` / `UPDATE t` prefix.
pub fn prepare_statement(
    source: &Mapping,
    kind: StatementKind,
    primary_key: impl Into<PrimaryKey>,
    table: Option<&str>,
) -> PreparedStatement {
    let mut builder = StatementConfig::builder()
        .kind(kind)
        .primary_key(primary_key);
    if let Some(table) = table {
        builder = builder.table(table);
    }
    let config = builder.build();
    StatementBuilder::new(&config).build(source)
}

/// Statement builder bound to a configuration
pub struct StatementBuilder<'a> {
    config: &'a StatementConfig,
}

impl<'a> StatementBuilder<'a> {
    /// Create a new statement builder with the given configuration
    pub fn new(config: &'a StatementConfig) -> Self {
        Self { config }
    }

    /// Build the statement without validating anything
    ///
    /// An empty `source` yields a degenerate statement such as `() VALUES ()`.
    pub fn build(&self, source: &Mapping) -> PreparedStatement {
        let prepared = match self.config.kind {
            StatementKind::Insert => self.insert(source),
            StatementKind::Update => self.update(source),
            StatementKind::OnDuplicateUpdate => self.on_duplicate_update(source),
        };

        tracing::debug!(
            target: "fetsch.sql",
            kind = %self.config.kind,
            table = self.config.table.as_deref().unwrap_or("-"),
            columns = source.len(),
            values = prepared.values.len(),
            "prepared statement"
        );

        prepared
    }

    /// Build the statement after checking its inputs
    ///
    /// Rejects an empty `source`, and any table, column or primary-key name that
    /// fails [`validate_identifier`].
    pub fn try_build(&self, source: &Mapping) -> Result<PreparedStatement> {
        if source.is_empty() {
            return Err(FetschError::validation("Source mapping has no columns"));
        }
        if let Some(table) = &self.config.table {
            validate_identifier(table)?;
        }
        for column in source.keys() {
            validate_identifier(column)?;
        }
        if self.config.kind == StatementKind::Update {
            if self.config.primary_key.is_empty() {
                return Err(FetschError::validation(
                    "Update statement requires at least one primary key column",
                ));
            }
            for column in self.config.primary_key.columns() {
                validate_identifier(column)?;
            }
        }

        Ok(self.build(source))
    }

    fn insert(&self, source: &Mapping) -> PreparedStatement {
        let columns: Vec<&str> = source.keys().map(String::as_str).collect();
        let values = source.values().cloned().collect();

        PreparedStatement::new(self.insert_clause(&columns), values)
    }

    fn update(&self, source: &Mapping) -> PreparedStatement {
        let primary_key = &self.config.primary_key;
        let updatable = self.updatable_columns(source);

        // Updatable values first, then the key values in key order
        let mut values: Vec<Value> = updatable.iter().map(|c| source[*c].clone()).collect();
        values.extend(
            primary_key
                .columns()
                .iter()
                .map(|c| source.get(c).cloned().unwrap_or(Value::Null)),
        );

        let key_columns: Vec<&str> = primary_key.columns().iter().map(String::as_str).collect();
        let prefix = match &self.config.table {
            Some(table) => format!("UPDATE {}", self.quote(table)),
            None => String::new(),
        };
        // The fragment keeps its leading space so callers can append it to `UPDATE t`
        let statement = format!(
            "{} SET {} WHERE {}",
            prefix,
            self.assignments(&updatable, ", "),
            self.assignments(&key_columns, " AND ")
        );

        PreparedStatement::new(statement, values)
    }

    fn on_duplicate_update(&self, source: &Mapping) -> PreparedStatement {
        let columns: Vec<&str> = source.keys().map(String::as_str).collect();
        let updatable = self.updatable_columns(source);

        // INSERT values for every column, then UPDATE values for the non-key ones
        let mut values: Vec<Value> = source.values().cloned().collect();
        values.extend(updatable.iter().map(|c| source[*c].clone()));

        let statement = format!(
            "{} ON DUPLICATE KEY UPDATE {}",
            self.insert_clause(&columns),
            self.assignments(&updatable, ", ")
        );

        PreparedStatement::new(statement, values)
    }

    fn insert_clause(&self, columns: &[&str]) -> String {
        let prefix = match &self.config.table {
            Some(table) => format!("INSERT INTO {} ", self.quote(table)),
            None => String::new(),
        };
        let fields: Vec<String> = columns.iter().map(|c| self.quote(c)).collect();
        let placeholders = vec!["?"; columns.len()];

        format!(
            "{}({}) VALUES ({})",
            prefix,
            fields.join(", "),
            placeholders.join(", ")
        )
    }

    /// Source columns that are not part of the primary key, in source order
    fn updatable_columns<'s>(&self, source: &'s Mapping) -> Vec<&'s str> {
        source
            .keys()
            .filter(|c| !self.config.primary_key.contains(c))
            .map(String::as_str)
            .collect()
    }

    fn assignments(&self, columns: &[&str], separator: &str) -> String {
        columns
            .iter()
            .map(|c| format!("{}=?", self.quote(c)))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn quote(&self, identifier: &str) -> String {
        quote_identifier(identifier, self.config.quote_style)
    }
}

//! Core type definitions for fetsch
//!
//! Includes the ordered mapping alias, primary keys, statement kinds and the
//! prepared statement result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FetschError, Result};

/// Ordered key/value mapping.
///
/// Backed by `serde_json::Map` with `preserve_order`, so iteration follows
/// insertion order. Statement building depends on that order to keep columns
/// and bound values aligned.
pub type Mapping = serde_json::Map<String, Value>;

/// Convert a JSON value into a [`Mapping`]
///
/// # Example
/// ```
/// use fetsch::mapping_from_value;
///
/// let row = mapping_from_value(serde_json::json!({"id": 1})).unwrap();
/// assert_eq!(row["id"], 1);
/// assert!(mapping_from_value(serde_json::json!([1, 2])).is_err());
/// ```
pub fn mapping_from_value(value: Value) -> Result<Mapping> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FetschError::not_an_object(json_type_name(&other))),
    }
}

/// Parse a JSON document into a [`Mapping`]
pub fn mapping_from_str(json: &str) -> Result<Mapping> {
    let value: Value = serde_json::from_str(json)?;
    mapping_from_value(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Primary keys
// ============================================================================

/// One or more columns identifying a row
///
/// A single name is treated as a one-element key list. Defaults to `["id"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PrimaryKeyRepr", into = "Vec<String>")]
pub struct PrimaryKey(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum PrimaryKeyRepr {
    Single(String),
    Compound(Vec<String>),
}

impl From<PrimaryKeyRepr> for PrimaryKey {
    fn from(repr: PrimaryKeyRepr) -> Self {
        match repr {
            PrimaryKeyRepr::Single(name) => Self(vec![name]),
            PrimaryKeyRepr::Compound(names) => Self(names),
        }
    }
}

impl From<PrimaryKey> for Vec<String> {
    fn from(key: PrimaryKey) -> Self {
        key.0
    }
}

impl PrimaryKey {
    /// Create a compound key from the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    /// Column names in key order
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    /// Whether `column` is part of the key
    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PrimaryKey {
    fn default() -> Self {
        Self(vec!["id".to_string()])
    }
}

impl From<&str> for PrimaryKey {
    fn from(column: &str) -> Self {
        Self(vec![column.to_string()])
    }
}

impl From<String> for PrimaryKey {
    fn from(column: String) -> Self {
        Self(vec![column])
    }
}

impl From<Vec<String>> for PrimaryKey {
    fn from(columns: Vec<String>) -> Self {
        Self(columns)
    }
}

impl From<Vec<&str>> for PrimaryKey {
    fn from(columns: Vec<&str>) -> Self {
        Self::new(columns)
    }
}

impl From<&[&str]> for PrimaryKey {
    fn from(columns: &[&str]) -> Self {
        Self::new(columns.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PrimaryKey {
    fn from(columns: [&str; N]) -> Self {
        Self::new(columns)
    }
}

// ============================================================================
// Statement kinds
// ============================================================================

/// Kind of statement produced by the statement builder
///
/// Deserializes through [`FromStr`], so wire names are case-insensitive and accept
/// the `update` / `upsert` aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StatementKind {
    /// Plain `INSERT`
    #[default]
    #[serde(rename = "insert")]
    Insert,
    /// `INSERT ... ON DUPLICATE KEY UPDATE`
    #[serde(rename = "odu")]
    OnDuplicateUpdate,
    /// `UPDATE ... SET ... WHERE <primary key>`
    #[serde(rename = "upd")]
    Update,
}

impl StatementKind {
    /// Short wire name (`insert`, `odu`, `upd`)
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Insert => "insert",
            StatementKind::OnDuplicateUpdate => "odu",
            StatementKind::Update => "upd",
        }
    }

    /// Lenient parse: unknown names fall back to [`StatementKind::Insert`]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for StatementKind {
    type Err = FetschError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "insert" => Ok(StatementKind::Insert),
            "odu" | "upsert" => Ok(StatementKind::OnDuplicateUpdate),
            "upd" | "update" => Ok(StatementKind::Update),
            _ => Err(FetschError::unknown_statement_kind(s)),
        }
    }
}

impl TryFrom<String> for StatementKind {
    type Error = FetschError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Prepared statements
// ============================================================================

/// A SQL fragment and the values bound to its `?` placeholders, in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedStatement {
    pub statement: String,
    pub values: Vec<Value>,
}

impl PreparedStatement {
    pub fn new(statement: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            statement: statement.into(),
            values,
        }
    }

    /// Number of `?` placeholders outside quoted identifiers
    pub fn placeholder_count(&self) -> usize {
        let mut quote: Option<char> = None;
        let mut count = 0;
        for c in self.statement.chars() {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '`' | '"') => quote = Some(c),
                (None, '?') => count += 1,
                (None, _) => {}
            }
        }
        count
    }

    /// Split into `(statement, values)`
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.statement, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // Mapping Tests
    // =========================================================================

    #[test]
    fn test_mapping_from_value_object() {
        let map = mapping_from_value(json!({"b": 2, "a": 1})).unwrap();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_mapping_from_value_rejects_non_objects() {
        let err = mapping_from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, FetschError::NotAnObject(ref t) if t == "array"));

        let err = mapping_from_value(json!(null)).unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_mapping_from_str() {
        let map = mapping_from_str(r#"{"id": 7, "name": "x"}"#).unwrap();
        assert_eq!(map["id"], json!(7));

        assert!(matches!(
            mapping_from_str("{not json").unwrap_err(),
            FetschError::Json(_)
        ));
        assert!(matches!(
            mapping_from_str("\"text\"").unwrap_err(),
            FetschError::NotAnObject(_)
        ));
    }

    // =========================================================================
    // PrimaryKey Tests
    // =========================================================================

    #[test]
    fn test_primary_key_default_is_id() {
        assert_eq!(PrimaryKey::default().columns(), ["id".to_string()]);
    }

    #[test]
    fn test_primary_key_from_single_name() {
        let key: PrimaryKey = "uuid".into();
        assert_eq!(key.len(), 1);
        assert!(key.contains("uuid"));
        assert!(!key.contains("id"));
    }

    #[test]
    fn test_primary_key_compound() {
        let key = PrimaryKey::from(["tenant", "id"]);
        assert_eq!(key.columns(), ["tenant".to_string(), "id".to_string()]);
    }

    #[test]
    fn test_primary_key_deserialize_string_or_list() {
        let single: PrimaryKey = serde_json::from_value(json!("id")).unwrap();
        assert_eq!(single, PrimaryKey::from("id"));

        let compound: PrimaryKey = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(compound, PrimaryKey::from(["a", "b"]));

        assert_eq!(serde_json::to_value(&compound).unwrap(), json!(["a", "b"]));
    }

    // =========================================================================
    // StatementKind Tests
    // =========================================================================

    #[test]
    fn test_statement_kind_from_str() {
        assert_eq!("insert".parse::<StatementKind>().unwrap(), StatementKind::Insert);
        assert_eq!(
            "odu".parse::<StatementKind>().unwrap(),
            StatementKind::OnDuplicateUpdate
        );
        assert_eq!("UPD".parse::<StatementKind>().unwrap(), StatementKind::Update);
        assert_eq!("update".parse::<StatementKind>().unwrap(), StatementKind::Update);
        assert!("merge".parse::<StatementKind>().is_err());
    }

    #[test]
    fn test_statement_kind_lenient_default() {
        assert_eq!(StatementKind::from_name_or_default("merge"), StatementKind::Insert);
        assert_eq!(StatementKind::from_name_or_default("upd"), StatementKind::Update);
    }

    #[test]
    fn test_statement_kind_display_and_serde() {
        assert_eq!(StatementKind::OnDuplicateUpdate.to_string(), "odu");
        assert_eq!(serde_json::to_value(StatementKind::Update).unwrap(), json!("upd"));
        let kind: StatementKind = serde_json::from_value(json!("upsert")).unwrap();
        assert_eq!(kind, StatementKind::OnDuplicateUpdate);
    }

    #[test]
    fn test_statement_kind_serde_matches_from_str() {
        for name in ["insert", "INSERT", "odu", "Odu", "UPD", "Update", "UPSERT", "merge"] {
            let parsed = name.parse::<StatementKind>().ok();
            let deserialized = serde_json::from_value::<StatementKind>(json!(name)).ok();
            assert_eq!(parsed, deserialized, "name {}", name);
        }
        assert!(serde_json::from_value::<StatementKind>(json!("merge")).is_err());
    }

    // =========================================================================
    // PreparedStatement Tests
    // =========================================================================

    #[test]
    fn test_placeholder_count_ignores_quoted_identifiers() {
        let stmt = PreparedStatement::new("(`a?`, `b`) VALUES (?, ?)", vec![json!(1), json!(2)]);
        assert_eq!(stmt.placeholder_count(), 2);
    }

    #[test]
    fn test_prepared_statement_serializes_as_object() {
        let stmt = PreparedStatement::new("SET `a`=?", vec![json!("x")]);
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"statement": "SET `a`=?", "values": ["x"]})
        );
        let (sql, values) = stmt.into_parts();
        assert_eq!(sql, "SET `a`=?");
        assert_eq!(values, vec![json!("x")]);
    }
}

//! # fetsch
//!
//! Stateless object and string helpers for data-access layers.
//!
//! Every helper is a pure function over plain data. Mappings are ordered
//! `serde_json` maps, so the column order of a row is the order its keys were
//! inserted in.
//!
//! ## Features
//!
//! - **Field selection**: [`only`] projects a subset of fields from a row
//! - **Statement fragments**: [`prepare_statement`] builds `INSERT`, `UPDATE` and
//!   `INSERT ... ON DUPLICATE KEY UPDATE` SQL with `?` placeholders and the
//!   matching bound values
//! - **Slugs**: [`slugify`] turns arbitrary text into a URL-safe token
//! - **JSON columns**: [`parse_json_fields`] decodes JSON-encoded fields with
//!   per-field defaults
//! - **Templates**: [`str_format`] fills `%token%` placeholders
//!
//! ## Quick Start
//!
//! ```rust
//! use fetsch::{mapping_from_value, prepare_statement, StatementKind};
//! use serde_json::json;
//!
//! let row = mapping_from_value(json!({"id": 7, "name": "Blue Widget"})).unwrap();
//!
//! let upsert = prepare_statement(&row, StatementKind::OnDuplicateUpdate, "id", Some("products"));
//! assert_eq!(
//!     upsert.statement,
//!     "INSERT INTO `products` (`id`, `name`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `name`=?"
//! );
//! assert_eq!(upsert.values, vec![json!(7), json!("Blue Widget"), json!("Blue Widget")]);
//! ```
//!
//! ## Configuration
//!
//! Repeated statements for the same table can share a [`StatementConfig`]:
//!
//! ```rust
//! use fetsch::{QuoteStyle, StatementBuilder, StatementConfig, StatementKind};
//!
//! let config = StatementConfig::builder()
//!     .kind(StatementKind::Update)
//!     .primary_key(["tenant_id", "id"])  // Compound key
//!     .table("orders")                   // Omit for a bare clause fragment
//!     .quote_style(QuoteStyle::Backtick) // Default
//!     .build();
//! let builder = StatementBuilder::new(&config);
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing` under the `fetsch.sql` and `fetsch.json`
//! targets. No subscriber is installed by this crate.

pub mod config;
pub mod error;
pub mod fields;
pub mod slug;
pub mod sql;
pub mod template;
pub mod types;

pub use config::{QuoteStyle, StatementConfig, StatementConfigBuilder};
pub use error::{FetschError, Result};
pub use fields::{only, parse_json_fields};
pub use slug::{is_slug, slugify};
pub use sql::sanitize::{quote_identifier, validate_identifier};
pub use sql::statement::{StatementBuilder, prepare_statement};
pub use template::{Fallback, str_format};
pub use types::{
    Mapping, PreparedStatement, PrimaryKey, StatementKind, mapping_from_str, mapping_from_value,
};

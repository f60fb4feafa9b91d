//! `%token%` template substitution

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Mapping;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[A-Za-z0-9_]+%").expect("token pattern"));

/// What to put in place of a token that has no usable value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Remove the token
    #[default]
    Empty,
    /// Leave the token, delimiters included, as it was
    Original,
    /// Use this text for every unmatched token
    Literal(String),
}

impl From<&str> for Fallback {
    fn from(text: &str) -> Self {
        Fallback::Literal(text.to_string())
    }
}

impl From<String> for Fallback {
    fn from(text: String) -> Self {
        Fallback::Literal(text)
    }
}

/// Replace `%token%` placeholders in `template` with values from `items`
///
/// Keys of `items` include the `%` delimiters. A value that is null, `false`,
/// zero or an empty string counts as missing and `fallback` is used instead.
/// Substituted text is not scanned again.
///
/// # Example
/// ```
/// use fetsch::{mapping_from_value, str_format, Fallback};
/// use serde_json::json;
///
/// let items = mapping_from_value(json!({"%name%": "Bo"})).unwrap();
/// assert_eq!(str_format("Hi %name%!", &items, Fallback::Empty), "Hi Bo!");
/// assert_eq!(str_format("Hi %who%!", &items, Fallback::Original), "Hi %who%!");
/// ```
pub fn str_format(template: &str, items: &Mapping, fallback: Fallback) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[0];
            match items.get(token).filter(|v| is_truthy(v)) {
                Some(value) => render(value),
                None => {
                    tracing::trace!(token, "template token has no value, using fallback");
                    match &fallback {
                        Fallback::Empty => Cow::Borrowed(""),
                        Fallback::Original => Cow::Owned(token.to_string()),
                        Fallback::Literal(text) => Cow::Owned(text.clone()),
                    }
                }
            }
        })
        .into_owned()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a substituted value; arrays join their elements with commas
fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Number(n) => Cow::Owned(render_number(n)),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|v| render(v).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Cow::Owned(other.to_string()),
    }
}

/// Largest integer a double holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole-valued floats print without a fraction (`10.0` becomes `10`)
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

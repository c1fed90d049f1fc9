//! Book records as they appear in the bundled catalog JSON.
//!
//! DESIGN
//! ======
//! Identifiers arrive both as route parameters (always strings) and as
//! `bookId` fields that may be JSON numbers. [`BookId`] canonicalizes both to
//! one string form at deserialization time so lookups compare plain strings.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical string identifier of a book.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(String);

impl BookId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for BookId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl Serialize for BookId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        canonical_id(&value).map(Self).map_err(D::Error::custom)
    }
}

/// Map a JSON identifier value to its canonical string.
///
/// Strings pass through untouched. Integer-valued numbers (including `7.0`)
/// are rendered without a fractional part so `7` and `"7"` compare equal.
fn canonical_id(value: &serde_json::Value) -> Result<String, &'static str> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(number) => {
            integer_text(number).ok_or("expected integer-compatible book id")
        }
        _ => Err("expected string or number book id"),
    }
}

/// Decimal text of an integer-valued number, `None` for fractions.
fn integer_text(number: &serde_json::Number) -> Option<String> {
    if let Some(int) = number.as_i64() {
        return Some(int.to_string());
    }
    if let Some(int) = number.as_u64() {
        return Some(int.to_string());
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some((float as i64).to_string());
    }
    None
}

/// Render any JSON scalar as display text; `null`, arrays and objects are
/// blank. Numbers print like the page would show them (`4.0` as `4`).
fn display_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(number) => integer_text(number).unwrap_or_else(|| number.to_string()),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => String::new(),
    }
}

fn deserialize_display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(display_text(&value))
}

/// Tags as display text; a non-array value yields no tags.
fn deserialize_display_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items.iter().map(display_text).collect()),
        _ => Ok(Vec::new()),
    }
}

/// One immutable catalog entry.
///
/// Only `id` is checked. Every other field is display text: missing values
/// are blank and numbers or strings are accepted interchangeably, so one
/// sloppy record never hides the rest of the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(rename = "bookId")]
    pub id: BookId,
    #[serde(rename = "bookName", default, deserialize_with = "deserialize_display")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub author: String,
    /// Cover image URL or asset path.
    #[serde(default, deserialize_with = "deserialize_display")]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub review: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub total_pages: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub rating: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub category: String,
    /// Display order is preserved.
    #[serde(default, deserialize_with = "deserialize_display_list")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub publisher: String,
    #[serde(default, deserialize_with = "deserialize_display")]
    pub year_of_publishing: String,
}

use serde::{Deserialize, Serialize};

/// A single result row produced by a backend.
///
/// A record is an ordered, fixed-arity sequence of field values. Field 0 is
/// always the *key*: the text that queries are matched against. Records are
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Create a record from an ordered list of field values.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Create a single-field record holding only a key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            fields: vec![key.into()],
        }
    }

    /// The key field, compared against queries.
    pub fn key(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// All field values in schema order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// A single field value by position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields.iter().map(|f| f.to_string()).collect())
    }
}

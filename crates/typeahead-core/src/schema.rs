use crate::error::{Result, TypeaheadError};

/// Declares how a raw backend payload maps to records.
///
/// A schema is an ordered selector list. The first selector names the
/// repeating collection: a dot-separated path of object keys for
/// tagged-record payloads, a tag name for hierarchical markup, or the
/// record-separator token for delimited text. The remaining selectors name
/// the fields of each record, in record order; for delimited text the
/// single field selector is the field-separator token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    container: String,
    fields: Vec<String>,
}

impl Schema {
    pub fn new(container: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            container: container.into(),
            fields,
        }
    }

    /// Build a schema from a flat selector list, `selectors[0]` being the
    /// container selector.
    pub fn from_selectors(selectors: &[&str]) -> Result<Self> {
        let (container, fields) = selectors.split_first().ok_or_else(|| {
            TypeaheadError::ParseError("schema requires a container selector".to_string())
        })?;
        Ok(Self::new(
            *container,
            fields.iter().map(|f| f.to_string()).collect(),
        ))
    }

    /// The container selector.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// The field selectors, in record order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The container selector interpreted as a dot-separated path of
    /// object keys, for tagged-record payloads.
    pub fn container_path(&self) -> impl Iterator<Item = &str> {
        self.container.split('.')
    }

    /// The container selector interpreted as the record-separator token,
    /// for delimited text.
    pub fn record_separator(&self) -> &str {
        &self.container
    }

    /// The first field selector interpreted as the field-separator token,
    /// for delimited text.
    pub fn field_separator(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selectors() {
        let schema = Schema::from_selectors(&["ResultSet.Result", "Title", "Phone"]).unwrap();
        assert_eq!(schema.container(), "ResultSet.Result");
        assert_eq!(schema.fields(), &["Title".to_string(), "Phone".to_string()]);
    }

    #[test]
    fn test_from_selectors_requires_container() {
        assert!(Schema::from_selectors(&[]).is_err());
    }

    #[test]
    fn test_container_path_splits_on_dots() {
        let schema = Schema::new("response.data.items", vec![]);
        let segments: Vec<&str> = schema.container_path().collect();
        assert_eq!(segments, vec!["response", "data", "items"]);
    }

    #[test]
    fn test_delimited_accessors() {
        let schema = Schema::from_selectors(&[";", "|"]).unwrap();
        assert_eq!(schema.record_separator(), ";");
        assert_eq!(schema.field_separator(), Some("|"));
    }
}

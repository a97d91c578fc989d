//! Delimited-text payload parsing.

use typeahead_core::{Record, Result, Schema, TypeaheadError};

/// Parse a delimited-text payload into records.
///
/// The schema's container selector is the record separator and its first
/// field selector is the field separator. A single trailing record
/// separator is stripped before splitting; an empty payload yields zero
/// records.
pub(crate) fn parse(raw: &str, schema: &Schema) -> Result<Vec<Record>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let record_separator = schema.record_separator();
    if record_separator.is_empty() {
        return Err(TypeaheadError::ParseError(
            "delimited schema requires a record separator".to_string(),
        ));
    }
    let field_separator = schema.field_separator().filter(|s| !s.is_empty()).ok_or_else(|| {
        TypeaheadError::ParseError("delimited schema requires a field separator".to_string())
    })?;

    let body = raw.strip_suffix(record_separator).unwrap_or(raw);
    Ok(body
        .split(record_separator)
        .map(|chunk| {
            Record::new(
                chunk
                    .split(field_separator)
                    .map(str::to_string)
                    .collect(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::from_selectors(&[";", "|"]).unwrap()
    }

    #[test]
    fn test_round_trip_with_trailing_separator() {
        let records = parse("a|1;b|2;", &schema()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields(), &["a".to_string(), "1".to_string()]);
        assert_eq!(records[1].fields(), &["b".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_no_trailing_separator() {
        let records = parse("a|1;b|2", &schema()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_only_one_trailing_separator_is_stripped() {
        let records = parse("a|1;;", &schema()).unwrap();
        // The remaining empty chunk is a record with one empty field.
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].key(), "");
    }

    #[test]
    fn test_empty_payload_yields_zero_records() {
        let records = parse("", &schema()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_field_separator_is_parse_error() {
        let bad = Schema::from_selectors(&[";"]).unwrap();
        assert!(parse("a;b", &bad).is_err());
    }

    #[test]
    fn test_multichar_separators() {
        let schema = Schema::from_selectors(&["\r\n", "\t"]).unwrap();
        let records = parse("a\t1\r\nb\t2\r\n", &schema).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get(1), Some("2"));
    }
}

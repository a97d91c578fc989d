//! Hierarchical-markup (XML) payload parsing.

use typeahead_core::{Record, Result, Schema, TypeaheadError};

/// Parse an XML payload into records.
///
/// The repeating collection is every element whose tag name equals the
/// schema's container selector, at any depth. Each field selector is read
/// first from an attribute of that name, falling back to the text of a
/// child element of that name, defaulting to an empty string.
pub(crate) fn parse(raw: &str, schema: &Schema) -> Result<Vec<Record>> {
    let document = roxmltree::Document::parse(raw)
        .map_err(|e| TypeaheadError::ParseError(format!("invalid XML payload: {e}")))?;

    let records = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == schema.container())
        .map(|node| {
            Record::new(
                schema
                    .fields()
                    .iter()
                    .map(|name| field_text(node, name))
                    .collect(),
            )
        })
        .collect();
    Ok(records)
}

fn field_text(node: roxmltree::Node<'_, '_>, name: &str) -> String {
    if let Some(value) = node.attribute(name) {
        return value.to_string();
    }
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .and_then(|child| child.text())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::from_selectors(&["Result", "Title", "Phone"]).unwrap()
    }

    #[test]
    fn test_fields_from_attributes() {
        let payload = r#"<ResultSet>
            <Result Title="Pizza Place" Phone="555-1234"/>
            <Result Title="Pasta Spot" Phone="555-9876"/>
        </ResultSet>"#;
        let records = parse(payload, &schema()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key(), "Pizza Place");
        assert_eq!(records[1].get(1), Some("555-9876"));
    }

    #[test]
    fn test_fields_fall_back_to_child_elements() {
        let payload = r#"<ResultSet>
            <Result><Title>Pizza Place</Title><Phone>555-1234</Phone></Result>
        </ResultSet>"#;
        let records = parse(payload, &schema()).unwrap();
        assert_eq!(records[0].key(), "Pizza Place");
        assert_eq!(records[0].get(1), Some("555-1234"));
    }

    #[test]
    fn test_attribute_wins_over_child_element() {
        let payload = r#"<r><Result Title="attr"><Title>child</Title></Result></r>"#;
        let records = parse(payload, &schema()).unwrap();
        assert_eq!(records[0].key(), "attr");
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let payload = r#"<r><Result Title="only title"/></r>"#;
        let records = parse(payload, &schema()).unwrap();
        assert_eq!(records[0].get(1), Some(""));
    }

    #[test]
    fn test_no_matching_elements_yields_zero_records() {
        let records = parse("<r><Other/></r>", &schema()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let err = parse("<r><Result", &schema()).unwrap_err();
        assert!(matches!(err, TypeaheadError::ParseError(_)));
    }
}

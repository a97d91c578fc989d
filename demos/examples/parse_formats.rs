//! Response Parsing Example
//!
//! Parses the same result set out of three wire formats: tagged records
//! (JSON), hierarchical markup (XML), and separator-delimited text.

use anyhow::Result;
use typeahead_core::{Record, Schema};
use typeahead_parser::{ResponseFormat, ResponseParser};

fn main() -> Result<()> {
    println!("=== Response Parsing Example ===\n");

    json_payload()?;
    xml_payload()?;
    delimited_payload()?;

    println!("\n=== All parsing examples completed! ===");
    Ok(())
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("  {}", record.fields().join(" | "));
    }
    println!();
}

/// Records addressed by a dot-separated container path.
fn json_payload() -> Result<()> {
    println!("--- JSON ---\n");

    let payload = r#"{
        "ResultSet": {
            "Result": [
                {"Title": "Pizza Place", "Phone": "555-1234"},
                {"Title": "Pasta Spot", "Phone": "555-9876"}
            ]
        }
    }"#;
    let schema = Schema::from_selectors(&["ResultSet.Result", "Title", "Phone"])?;
    let parser = ResponseParser::new(ResponseFormat::Json, schema);

    print_records(&parser.parse(payload)?);
    Ok(())
}

/// Fields read from attributes, falling back to child elements.
fn xml_payload() -> Result<()> {
    println!("--- XML ---\n");

    let payload = r#"<ResultSet>
        <Result Title="Pizza Place"><Phone>555-1234</Phone></Result>
        <Result Title="Pasta Spot"><Phone>555-9876</Phone></Result>
    </ResultSet>"#;
    let schema = Schema::from_selectors(&["Result", "Title", "Phone"])?;
    let parser = ResponseParser::new(ResponseFormat::Xml, schema);

    print_records(&parser.parse(payload)?);
    Ok(())
}

/// Newline-separated records with tab-separated fields, with a trailing
/// server comment stripped before parsing.
fn delimited_payload() -> Result<()> {
    println!("--- Delimited text ---\n");

    let payload = "Pizza Place\t555-1234\nPasta Spot\t555-9876\n<!- served from node 7 -->";
    let schema = Schema::from_selectors(&["\n", "\t"])?;
    let parser = ResponseParser::new(ResponseFormat::DelimitedText, schema).with_strip_after("\n<!-");

    print_records(&parser.parse(payload)?);
    Ok(())
}

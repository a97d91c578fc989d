use tracing::{debug, warn};
use typeahead_core::{Record, Result, Schema};

use crate::{delimited, json, xml};

/// Wire format of a backend payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Tagged-record payloads (JSON).
    Json,
    /// Hierarchical markup payloads (XML).
    Xml,
    /// Flat text with record and field separators.
    DelimitedText,
}

/// Parses raw payloads into records according to a [`Schema`].
#[derive(Debug, Clone)]
pub struct ResponseParser {
    format: ResponseFormat,
    schema: Schema,
    strip_after: Option<String>,
}

impl ResponseParser {
    pub fn new(format: ResponseFormat, schema: Schema) -> Self {
        Self {
            format,
            schema,
            strip_after: None,
        }
    }

    /// Truncate the payload at the first occurrence of `marker` before
    /// parsing. Used to discard trailing out-of-band comment blocks some
    /// backends append.
    pub fn with_strip_after(mut self, marker: impl Into<String>) -> Self {
        self.strip_after = Some(marker.into());
        self
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parse a raw payload into records.
    ///
    /// Any structural failure (malformed payload, selector not found) is a
    /// [`TypeaheadError::ParseError`](typeahead_core::TypeaheadError); the
    /// caller surfaces it as a data error and must not cache it.
    pub fn parse(&self, raw: &str) -> Result<Vec<Record>> {
        let raw = match &self.strip_after {
            Some(marker) => raw.find(marker.as_str()).map_or(raw, |end| &raw[..end]),
            None => raw,
        };

        let parsed = match self.format {
            ResponseFormat::Json => json::parse(raw, &self.schema),
            ResponseFormat::Xml => xml::parse(raw, &self.schema),
            ResponseFormat::DelimitedText => delimited::parse(raw, &self.schema),
        };

        match &parsed {
            Ok(records) => debug!(records = records.len(), "parsed response payload"),
            Err(error) => warn!(%error, "failed to parse response payload"),
        }
        parsed
    }
}

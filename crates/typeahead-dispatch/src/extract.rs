//! Delimiter-aware active-query extraction.

/// Raw input split into a retained prefix and the active query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Extraction {
    /// Everything up to and including the resolved delimiter plus any
    /// immediately following spaces. Empty when no delimiter was found.
    pub prefix: String,
    /// The substring that is actually searched.
    pub query: String,
}

/// Split `raw` at the right-most configured delimiter.
///
/// When the right-most delimiter is a space, the character immediately
/// before it is re-checked against every delimiter: a space following a
/// real delimiter is part of the separator, not a new one, and would
/// otherwise misclassify an intentional space inside a phrase.
pub(crate) fn extract_query(raw: &str, delimiters: &[char]) -> Extraction {
    let mut delimiter_start: Option<usize> = None;
    for &delimiter in delimiters {
        if let Some(index) = raw.rfind(delimiter) {
            if delimiter_start.map_or(true, |current| index > current) {
                delimiter_start = Some(index);
            }
        }
    }

    let Some(mut index) = delimiter_start else {
        return Extraction {
            prefix: String::new(),
            query: raw.to_string(),
        };
    };

    if raw[index..].starts_with(' ') {
        if let Some(previous) = raw[..index].chars().next_back() {
            if delimiters.contains(&previous) {
                index -= previous.len_utf8();
            }
        }
    }

    let delimiter_len = raw[index..].chars().next().map_or(0, char::len_utf8);
    let mut query_start = index + delimiter_len;
    while raw[query_start..].starts_with(' ') {
        query_start += 1;
    }

    Extraction {
        prefix: raw[..query_start].to_string(),
        query: raw[query_start..].to_string(),
    }
}

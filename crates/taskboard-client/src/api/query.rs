//! Query String Builder
//!
//! Appends only present parameters, in call order. Values are
//! percent-encoded; a space becomes `%20`.

use std::fmt::Display;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in query values (form-urlencoded unreserved set)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'*');

#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when a value is present
    pub fn push<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            self.pairs.push(format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_VALUE),
                utf8_percent_encode(&value, QUERY_VALUE)
            ));
        }
        self
    }

    /// `status=pending&page=2` (no leading `?`)
    pub fn finish(self) -> String {
        self.pairs.join("&")
    }

    /// `path?query`, or just `path` when nothing was appended
    pub fn apply(self, path: &str) -> String {
        let query = self.finish();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

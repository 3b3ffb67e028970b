//! Request form data abstraction
//!
//! The HTTP server and router live outside this crate; what the extractors
//! need from a request is exactly three things: the parsed GET query
//! parameters, the parsed POST/PUT body parameters, and the raw URL path.
//! `RequestInput` carries those and nothing else.

use std::collections::HashMap;

use url::form_urlencoded;

/// Parsed form and path data for a single HTTP request.
///
/// Only the first value seen for a key is kept. Combined lookups give
/// POST/PUT body values precedence over query string values. Values stored
/// here are form-decoded once (as a body parser would produce them); the
/// extractors still run their own percent-unescape step on top, matching the
/// historical double-decode behavior callers rely on.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    path: String,
    query: HashMap<String, String>,
    body: HashMap<String, String>,
}

impl RequestInput {
    /// An input with the given URL path and no form data
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            path: path.into(),
            query: HashMap::new(),
            body: HashMap::new(),
        }
    }

    /// Build from the raw URL path, query string, and POST/PUT body string
    pub fn parse(path: &str, query: &str, body: &str) -> Self {
        Self {
            path: path.to_string(),
            query: parse_pairs(query),
            body: parse_pairs(body),
        }
    }

    /// Add a query string parameter
    pub fn with_query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Add a POST/PUT body parameter
    pub fn with_body<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.body.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// The raw URL path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Combined form lookup: body values take precedence over query values.
    /// Returns the empty string when the key is absent.
    pub fn form_value(&self, key: &str) -> &str {
        self.body
            .get(key)
            .or_else(|| self.query.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Body-only lookup, for fields that must not be accepted via GET
    pub fn post_form_value(&self, key: &str) -> &str {
        self.body.get(key).map(String::as_str).unwrap_or("")
    }

    /// Lookup honoring a caller's `allow_get` flag
    pub fn value(&self, key: &str, allow_get: bool) -> &str {
        if allow_get {
            self.form_value(key)
        } else {
            self.post_form_value(key)
        }
    }
}

fn parse_pairs(raw: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        pairs
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    pairs
}

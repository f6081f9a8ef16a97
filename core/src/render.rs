//! Render a `RequestDescriptor` as a `curl` command line.
//!
//! # Design
//! `CurlCommand` borrows the descriptor and renders each segment on demand.
//! Segments that do not apply render as empty strings; `render` joins them
//! with spaces and then collapses whitespace runs, so empty segments never
//! leave double spaces behind.
//!
//! Values are interpolated verbatim: there is no URL encoding and no shell
//! quoting. The output is meant to be read, and pasted into a shell for the
//! common cases.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::descriptor::{RequestDescriptor, ABSENT_FIELD};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Render `request` as a single-line `curl` command.
pub fn render(request: &RequestDescriptor) -> String {
    CurlCommand::new(request).render()
}

/// Borrowed renderer for one request.
#[derive(Debug, Clone, Copy)]
pub struct CurlCommand<'a> {
    request: &'a RequestDescriptor,
}

impl<'a> CurlCommand<'a> {
    pub fn new(request: &'a RequestDescriptor) -> Self {
        Self { request }
    }

    /// `-X <METHOD>`, upper-cased. Not validated.
    pub fn method(&self) -> String {
        match self.request.method.as_deref() {
            Some(method) => format!("-X {}", method.to_uppercase()),
            None => format!("-X {ABSENT_FIELD}"),
        }
    }

    /// `-H "name:value"` for each resolved header, space separated.
    pub fn headers(&self) -> String {
        self.request
            .resolved_headers()
            .iter()
            .map(|(name, value)| format!("-H \"{name}:{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `--data '<payload>'`, or empty when the body does not apply.
    ///
    /// GET bodies are always dropped, as are bodies with no entries: empty
    /// strings, empty objects and arrays, and scalars such as numbers and
    /// booleans.
    pub fn body(&self) -> String {
        if self.request.is_get() {
            return String::new();
        }
        match self.request.body.as_ref().and_then(payload_text) {
            Some(payload) => format!("--data '{payload}'"),
            None => String::new(),
        }
    }

    /// `?a=1&b=2` built from the query parameters, or empty.
    pub fn query_string(&self) -> String {
        let mut out = String::new();
        for (i, (name, value)) in self.request.query_pairs().iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    pub fn url(&self) -> String {
        self.request.url.as_deref().unwrap_or(ABSENT_FIELD).to_string()
    }

    /// URL with the query string appended. One trailing `/` is dropped
    /// before a non-empty query string.
    pub fn full_url(&self) -> String {
        let mut url = self.url();
        let query = self.query_string();
        if !query.is_empty() {
            if url.ends_with('/') {
                url.pop();
            }
            url.push_str(&query);
        }
        url.trim().to_string()
    }

    /// The complete command line.
    pub fn render(&self) -> String {
        let raw = format!(
            "curl {} {} {} \"{}\"",
            self.method(),
            self.headers(),
            self.body(),
            self.full_url()
        );
        WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
    }
}

impl fmt::Display for CurlCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl RequestDescriptor {
    /// Shorthand for [`render`].
    pub fn to_curl(&self) -> String {
        render(self)
    }
}

/// Payload text for a body that has at least one entry.
fn payload_text(body: &Value) -> Option<String> {
    match body {
        Value::Object(map) if !map.is_empty() => Some(body.to_string()),
        Value::Array(items) if !items.is_empty() => Some(body.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

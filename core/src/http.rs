//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! The core never touches the network. The host executes a request however it
//! likes and reports the outcome as an `Exchange` (request descriptor plus
//! `HttpResponse`) or an `ExchangeError`. Both are plain owned data so they can
//! be logged, asserted on, and moved across threads freely.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::descriptor::RequestDescriptor;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Compact JSON text of the body for logging.
    ///
    /// A body that parses as JSON is re-serialized compactly; anything else
    /// (including an empty body) is written as a JSON string literal.
    pub fn json_text(&self) -> String {
        match serde_json::from_str::<Value>(&self.body) {
            Ok(value) => value.to_string(),
            Err(_) => Value::String(self.body.clone()).to_string(),
        }
    }

    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// First header value with a case-insensitive name match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request together with the response it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub request: RequestDescriptor,
    pub response: HttpResponse,
}

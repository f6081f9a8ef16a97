//! Request descriptors: plain-data views of one HTTP call.
//!
//! # Design
//! A `RequestDescriptor` is what the host's HTTP client knew about a request
//! when it was (or is about to be) sent. It is independent of any concrete
//! client type. Headers and query parameters are `serde_json::Map`s built with
//! `preserve_order`, so iteration follows insertion order and a descriptor
//! deserialized from JSON keeps the document's key order.
//!
//! Some clients nest per-method headers next to a shared `"common"` bucket.
//! `resolved_headers` is the single place where that layout is flattened.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved header key marking the per-method header layout.
pub const COMMON_HEADERS_KEY: &str = "common";

/// Text used for a missing method or URL.
pub const ABSENT_FIELD: &str = "undefined";

/// Read-only description of one HTTP request.
///
/// Every field is optional so partially known requests (for example the
/// request attached to a transport error) can still be described. Missing
/// fields are not validated anywhere; they render as [`ABSENT_FIELD`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "params")]
    pub query_params: Map<String, Value>,
    #[serde(default)]
    pub headers: Map<String, Value>,
    #[serde(default, alias = "data")]
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            method: Some(method.to_string()),
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    /// Append a query parameter. Parameters render in the order added.
    pub fn with_query(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.query_params.insert(name.to_string(), value.into());
        self
    }

    /// Append a top-level header.
    pub fn with_header(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.headers.insert(name.to_string(), value.into());
        self
    }

    /// Insert a nested header bucket, e.g. `"common"` or `"post"`.
    pub fn with_header_bucket<K, V, I>(mut self, bucket: &str, headers: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map: Map<String, Value> = headers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.headers.insert(bucket.to_string(), Value::Object(map));
        self
    }

    pub fn with_body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `payload` into the body.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Whether this is the read-only retrieval verb, in any casing.
    pub fn is_get(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("GET"))
    }

    /// The headers that actually apply to this request, in order.
    ///
    /// When the mapping carries the `"common"` bucket, headers come from the
    /// sub-mapping keyed by the method name exactly as given. A missing or
    /// non-mapping entry there means no headers.
    pub fn resolved_headers(&self) -> Vec<(String, String)> {
        let source = if self.headers.contains_key(COMMON_HEADERS_KEY) {
            match self.method.as_deref().and_then(|m| self.headers.get(m)) {
                Some(Value::Object(per_method)) => per_method,
                _ => return Vec::new(),
            }
        } else {
            &self.headers
        };

        source
            .iter()
            .map(|(name, value)| (name.clone(), value_text(value)))
            .collect()
    }

    /// Query parameters as text pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query_params
            .iter()
            .map(|(name, value)| (name.clone(), value_text(value)))
            .collect()
    }
}

/// Plain text of a value as interpolated into a header or query string.
///
/// Strings are used raw; everything else uses its compact JSON form, which
/// for numbers, booleans and `null` is the literal as written.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_client_shaped_json() {
        let desc: RequestDescriptor = serde_json::from_value(json!({
            "method": "post",
            "url": "http://localhost/users",
            "params": {"b": 2, "a": 1},
            "headers": {"Content-Type": "application/json"},
            "data": {"name": "x"}
        }))
        .unwrap();

        assert_eq!(desc.method.as_deref(), Some("post"));
        assert_eq!(
            desc.query_pairs(),
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string())
            ]
        );
        assert_eq!(desc.body, Some(json!({"name": "x"})));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let desc: RequestDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(desc, RequestDescriptor::default());
        assert!(desc.method.is_none());
        assert!(desc.resolved_headers().is_empty());
    }

    #[test]
    fn null_body_is_absent() {
        let desc: RequestDescriptor = serde_json::from_str(r#"{"body":null}"#).unwrap();
        assert!(desc.body.is_none());
    }

    #[test]
    fn common_bucket_resolves_by_method_name() {
        let desc = RequestDescriptor::new("get", "http://h/")
            .with_header_bucket("common", [("Accept", "application/json")])
            .with_header_bucket("get", [("X-Test", "1")])
            .with_header_bucket("post", [("Content-Type", "application/json")]);

        assert_eq!(
            desc.resolved_headers(),
            vec![("X-Test".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn common_bucket_lookup_is_case_sensitive() {
        let desc = RequestDescriptor::new("GET", "http://h/")
            .with_header_bucket("common", [("Accept", "*/*")])
            .with_header_bucket("get", [("X-Test", "1")]);

        assert!(desc.resolved_headers().is_empty());
    }

    #[test]
    fn flat_headers_keep_insertion_order() {
        let desc = RequestDescriptor::new("get", "http://h/")
            .with_header("Z-Last", "z")
            .with_header("A-First", 1);

        assert_eq!(
            desc.resolved_headers(),
            vec![
                ("Z-Last".to_string(), "z".to_string()),
                ("A-First".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn value_text_of_scalars_and_composites() {
        assert_eq!(value_text(&json!("raw")), "raw");
        assert_eq!(value_text(&json!(5)), "5");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "null");
        assert_eq!(value_text(&json!(1.0)), "1.0");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
        assert_eq!(value_text(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn is_get_ignores_case() {
        assert!(RequestDescriptor::new("gEt", "/").is_get());
        assert!(!RequestDescriptor::new("post", "/").is_get());
        assert!(!RequestDescriptor::default().is_get());
    }
}

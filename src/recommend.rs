//! Static recommendation lookup.
//!
//! A `RecommendationTable` maps a module name (e.g. "library") to an ordered
//! list of item names. The table is built once at startup and shared read-only
//! between handlers, so lookups need no locking.
//!
//! Request bodies are parsed leniently: a body not sent as JSON, or anything
//! that is not a JSON object, is treated as an empty object, and missing
//! fields fall back to defaults. Numbers keep their exact source text so
//! `userId` echoes back unchanged.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::DEFAULT_MODULE;

/// Built-in module entries, in the order they are served.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "library",
        &["Clean Code", "You Don't Know JS", "Design Patterns"],
    ),
    ("food", &["Veg Sandwich", "Chicken Wrap", "Fresh Juice"]),
    ("store", &["Notebook", "Pen Set", "USB Drive"]),
];

/// Immutable mapping from module name to recommended items.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    entries: Vec<(String, Vec<String>)>,
}

impl RecommendationTable {
    /// The table served by the running service.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(module, items)| {
                (
                    (*module).to_string(),
                    items.iter().map(|item| (*item).to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Items for `module`, or an empty slice if the module is unknown.
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, module: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == module)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Module names in insertion order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// A parsed `/recommend` request.
///
/// Both fields are kept as raw JSON values so they can be echoed back exactly
/// as received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub user_id: Value,
    pub module: Value,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            user_id: Value::Null,
            module: Value::String(DEFAULT_MODULE.to_string()),
        }
    }
}

impl RecommendRequest {
    /// Parse a request from its `Content-Type` and body. Never fails.
    ///
    /// Bodies not declared as JSON are ignored, the same as an empty object.
    pub fn from_http(content_type: Option<&str>, body: &[u8]) -> Self {
        if !is_json_content_type(content_type) {
            if !body.is_empty() {
                tracing::debug!(
                    content_type = content_type.unwrap_or("<none>"),
                    "Body is not JSON, using defaults"
                );
            }
            return Self::default();
        }
        Self::from_body(body)
    }

    /// Parse a request body. Never fails.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Self::from_fields(fields),
            Ok(other) => {
                tracing::debug!(kind = json_kind(&other), "Non-object body, using defaults");
                Self::default()
            }
            Err(e) => {
                if !body.is_empty() {
                    tracing::debug!(error = %e, "Unparseable body, using defaults");
                }
                Self::default()
            }
        }
    }

    fn from_fields(mut fields: Map<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            user_id: fields.remove("userId").unwrap_or(defaults.user_id),
            module: fields.remove("module").unwrap_or(defaults.module),
        }
    }

    /// Module name to look up; `None` when the caller sent a non-string value.
    pub fn module_name(&self) -> Option<&str> {
        self.module.as_str()
    }
}

/// Response body for `/recommend`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub user_id: Value,
    pub module: Value,
    pub recommendations: Vec<String>,
}

/// Resolve a request against the table.
pub fn recommend(table: &RecommendationTable, request: RecommendRequest) -> RecommendResponse {
    let recommendations = request
        .module_name()
        .map(|module| table.lookup(module).to_vec())
        .unwrap_or_default();

    RecommendResponse {
        user_id: request.user_id,
        module: request.module,
        recommendations,
    }
}

/// Whether a `Content-Type` value names JSON: `application/json` or an
/// `application/*+json` type, ignoring parameters and case.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_known_modules_in_order() {
        let table = RecommendationTable::builtin();
        assert_eq!(
            table.lookup("library"),
            ["Clean Code", "You Don't Know JS", "Design Patterns"]
        );
        assert_eq!(
            table.lookup("food"),
            ["Veg Sandwich", "Chicken Wrap", "Fresh Juice"]
        );
        assert_eq!(table.lookup("store"), ["Notebook", "Pen Set", "USB Drive"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RecommendationTable::builtin();
        assert!(table.lookup("Library").is_empty());
        assert!(table.lookup(" food").is_empty());
        assert!(table.lookup("").is_empty());
    }

    #[test]
    fn test_modules_in_insertion_order() {
        let table = RecommendationTable::builtin();
        assert_eq!(
            table.modules().collect::<Vec<_>>(),
            ["library", "food", "store"]
        );
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        assert_eq!(RecommendRequest::from_body(b""), RecommendRequest::default());
    }

    #[test]
    fn test_malformed_body_uses_defaults() {
        let request = RecommendRequest::from_body(b"{not json");
        assert_eq!(request.user_id, Value::Null);
        assert_eq!(request.module_name(), Some("library"));
    }

    #[test]
    fn test_non_object_body_uses_defaults() {
        let bodies: [&[u8]; 4] = [b"[1,2]", b"\"food\"", b"42", b"null"];
        for body in bodies {
            assert_eq!(RecommendRequest::from_body(body), RecommendRequest::default());
        }
    }

    #[test]
    fn test_user_id_passed_through_unvalidated() {
        let request = RecommendRequest::from_body(br#"{"userId":{"id":7},"module":"store"}"#);
        assert_eq!(request.user_id, json!({"id": 7}));
        assert_eq!(request.module_name(), Some("store"));
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("Application/JSON")));
        assert!(is_json_content_type(Some("application/merge-patch+json")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(Some("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(Some("text/x+json")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_non_json_content_type_ignores_body() {
        let body = br#"{"userId":"u1","module":"food"}"#;
        assert_eq!(
            RecommendRequest::from_http(Some("text/plain"), body),
            RecommendRequest::default()
        );
        assert_eq!(RecommendRequest::from_http(None, body), RecommendRequest::default());

        let request = RecommendRequest::from_http(Some("application/json"), body);
        assert_eq!(request.user_id, json!("u1"));
        assert_eq!(request.module_name(), Some("food"));
    }

    #[test]
    fn test_large_integer_user_id_kept_exactly() {
        let table = RecommendationTable::builtin();
        let request =
            RecommendRequest::from_body(br#"{"userId":123456789012345678901234567890,"module":"food"}"#);
        let response = recommend(&table, request);
        assert_eq!(response.user_id.to_string(), "123456789012345678901234567890");
        assert_eq!(response.recommendations.len(), 3);

        let body = serde_json::to_string(&response).unwrap();
        assert!(body.starts_with(r#"{"userId":123456789012345678901234567890,"#));
    }

    #[test]
    fn test_out_of_range_exponent_keeps_module() {
        let request = RecommendRequest::from_body(br#"{"userId":1e400,"module":"food"}"#);
        assert_eq!(request.user_id.to_string(), "1e400");
        assert_eq!(request.module_name(), Some("food"));
    }

    #[test]
    fn test_non_string_module_matches_nothing() {
        let table = RecommendationTable::builtin();
        let request = RecommendRequest::from_body(br#"{"module":5}"#);
        let response = recommend(&table, request);
        assert_eq!(response.module, json!(5));
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_explicit_null_module_is_echoed() {
        let table = RecommendationTable::builtin();
        let response = recommend(&table, RecommendRequest::from_body(br#"{"module":null}"#));
        assert_eq!(response.module, Value::Null);
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let table = RecommendationTable::builtin();
        let request = RecommendRequest::from_body(br#"{"userId":"u1","module":"unknown"}"#);
        let body = serde_json::to_value(recommend(&table, request)).unwrap();
        assert_eq!(
            body,
            json!({"userId": "u1", "module": "unknown", "recommendations": []})
        );
    }
}

//! Response envelope unwrapping.
//!
//! The API is inconsistent about wrapping: list endpoints may return the payload bare
//! or nested under `data` (with paging under `meta`), and mutation endpoints may
//! return `{ message, <resource>: ... }`. Callers must accept every shape, so the
//! defensive `payload.data ?? payload` rule lives here, in one place.

use crate::state::Pagination;
use serde_json::Value;

/// Unwraps `{ data: ... }` envelopes; any other shape passes through unchanged.
pub fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut obj) if obj.contains_key("data") => {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Reads pagination metadata from a `meta` block, when the response carries one.
pub fn pagination(payload: &Value) -> Option<Pagination> {
    let meta = payload.get("meta")?;
    Some(Pagination {
        total: meta.get("total").and_then(Value::as_u64).unwrap_or(0),
        current_page: meta
            .get("current_page")
            .and_then(Value::as_u64)
            .unwrap_or(1) as u32,
        per_page: meta.get("per_page").and_then(Value::as_u64).unwrap_or(10) as u32,
        last_page: meta.get("last_page").and_then(Value::as_u64).unwrap_or(1) as u32,
    })
}

/// Extracts the entity from a mutation response: nested under the resource name
/// (`{ message, course: {...} }`), under `data`, or the bare payload itself.
pub fn extract_entity(payload: Value, resource_name: &str) -> Value {
    match payload {
        Value::Object(mut obj) if obj.contains_key(resource_name) => {
            obj.remove(resource_name).unwrap_or(Value::Null)
        }
        other => unwrap_data(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_data_handles_both_shapes() {
        assert_eq!(unwrap_data(json!({ "data": [1, 2] })), json!([1, 2]));
        assert_eq!(unwrap_data(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn pagination_reads_meta_block() {
        let payload = json!({
            "data": [],
            "meta": { "total": 42, "current_page": 2, "per_page": 15, "last_page": 3 }
        });
        let page = pagination(&payload).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 15);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn pagination_absent_without_meta() {
        assert!(pagination(&json!({ "data": [] })).is_none());
    }

    #[test]
    fn extract_entity_prefers_resource_key() {
        let payload = json!({ "message": "created", "course": { "id": 1 } });
        assert_eq!(extract_entity(payload, "course"), json!({ "id": 1 }));
        assert_eq!(
            extract_entity(json!({ "data": { "id": 2 } }), "course"),
            json!({ "id": 2 })
        );
        assert_eq!(
            extract_entity(json!({ "id": 3 }), "course"),
            json!({ "id": 3 })
        );
    }
}

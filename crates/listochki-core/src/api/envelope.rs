//! Pagination envelope handling.

use serde_json::Value;

/// Return the `results` of a paginated body, or the body itself when the
/// endpoint is not paginated. A `null` results field counts as missing.
pub fn unwrap_results(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Null) | None => Value::Object(map),
            Some(results) => results,
        },
        other => other,
    }
}

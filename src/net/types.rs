//! Wire types for the IntruGuard backend endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `POST /login`. A missing `success` counts as failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One element of `GET /api/logs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
}

/// Projection of `GET /api/dashboard-data` onto the two counters the
/// dashboard shows. Values stay raw so numbers and strings both render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_network: serde_json::Value,
    #[serde(default)]
    pub total_web: serde_json::Value,
}

impl DashboardStats {
    /// `Some` only when the response is a JSON object; absent fields become `null`.
    /// Arrays and non-null scalars are not rendered, though a page script's
    /// truthiness check would blank both counters for them.
    #[must_use]
    pub fn from_response(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).cloned().unwrap_or_default();
        Some(Self { total_network: field("totalNetwork"), total_web: field("totalWeb") })
    }
}

/// Latest packet summary from `GET /api/live_traffic`.
///
/// Fields are kept as raw JSON scalars; the backend mixes strings and numbers
/// (`length` is a number, `timestamp` a float epoch).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LivePacket {
    #[serde(default)]
    pub timestamp: serde_json::Value,
    #[serde(default)]
    pub src_ip: serde_json::Value,
    #[serde(default)]
    pub dst_ip: serde_json::Value,
    #[serde(default)]
    pub protocol: serde_json::Value,
    #[serde(default)]
    pub length: serde_json::Value,
    #[serde(default)]
    pub prediction: serde_json::Value,
}

/// Largest integer an `f64` holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render a JSON scalar the way a text node shows it.
///
/// Strings are unquoted; `null` (and an absent field) renders empty; whole
/// floats drop their fraction (`1532.0` shows as `1532`); objects and arrays
/// fall back to compact JSON.
#[must_use]
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => to_js_json(other),
    }
}

/// Compact JSON with whole floats written as integers, matching `JSON.stringify`.
#[must_use]
pub fn to_js_json(value: &serde_json::Value) -> String {
    normalize_numbers(value).to_string()
}

fn normalize_numbers(value: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        Value::Number(n) => whole_float(n).map_or_else(|| value.clone(), Value::from),
        Value::Array(items) => Value::Array(items.iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_float(n: &serde_json::Number) -> Option<i64> {
    if !n.is_f64() {
        return None;
    }
    let v = n.as_f64()?;
    (v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER).then_some(v as i64)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

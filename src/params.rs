use indexmap::IndexMap;
use serde_json::Value;

/// Ordered request parameters.
///
/// Every endpoint call assembles one of these from three sources, in
/// increasing precedence: endpoint-fixed fields, the shared base
/// parameters, and caller-supplied extras. Later inserts win on key
/// collision, so a caller extra can replace any field in the request.
///
/// A [`Value::Null`] marks an omitted optional field and is dropped when
/// the request is encoded.
pub type Params = IndexMap<String, Value>;

/// Merge `overlay` into `params`, overwriting existing keys in place
pub(crate) fn merge(params: &mut Params, overlay: Params) {
    for (key, value) in overlay {
        params.insert(key, value);
    }
}

/// Flatten params into wire pairs, dropping omitted (`Null`) fields
pub(crate) fn to_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| encode(value).map(|value| (key.clone(), value)))
        .collect()
}

fn encode(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn opt_str(value: Option<&str>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

pub(crate) fn opt_i64(value: Option<i64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

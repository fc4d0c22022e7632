use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Known envelope shapes of backend responses.
///
/// The backend nests payloads inconsistently; the variants are tried
/// top to bottom. `Bare` catches everything else, so parsing an
/// envelope never fails.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Common shape `{ value: [ { data: [ { dataRes } ] } ] }`,
    /// with an optional top-level `dataRes` fallback
    Nested {
        value: Vec<EnvelopeLevel>,
        #[serde(rename = "dataRes", default)]
        data_res: Option<Value>,
    },
    /// Shallow shape `{ dataRes }`
    Flat {
        #[serde(rename = "dataRes")]
        data_res: Value,
    },
    /// Anything else; counts as payload only when it is already a list
    Bare(Value),
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeLevel {
    #[serde(default)]
    pub data: Vec<EnvelopeData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeData {
    #[serde(rename = "dataRes", default)]
    pub data_res: Option<Value>,
}

impl Envelope {
    /// Extract the payload: the first present candidate among the
    /// nested `value[0].data[0].dataRes` path, a top-level `dataRes`
    /// and the bare list itself. JSON `null` counts as absent; when
    /// nothing matches the payload is the empty list.
    pub fn into_payload(self) -> Value {
        match self {
            Envelope::Nested { value, data_res } => {
                let nested = value
                    .into_iter()
                    .next()
                    .and_then(|level| level.data.into_iter().next())
                    .and_then(|data| data.data_res)
                    .filter(|v| !v.is_null());
                match nested {
                    Some(payload) => payload,
                    None => data_res.filter(|v| !v.is_null()).unwrap_or_else(empty_list),
                }
            }
            Envelope::Flat { data_res } => {
                if data_res.is_null() {
                    empty_list()
                } else {
                    data_res
                }
            }
            Envelope::Bare(value) => {
                if value.is_array() {
                    value
                } else {
                    empty_list()
                }
            }
        }
    }
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Unwrap a raw response body into its payload. Never fails.
pub fn unwrap_payload(raw: Value) -> Value {
    serde_json::from_value::<Envelope>(raw)
        .map(Envelope::into_payload)
        .unwrap_or_else(|_| empty_list())
}

/// Unwrap and decode a list payload. A non-list payload yields an
/// empty vector; elements that fail to decode are skipped. Both
/// cases are logged, not raised.
pub fn to_list<T: DeserializeOwned>(raw: Value) -> Vec<T> {
    match unwrap_payload(raw) {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<T>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping list element that failed to decode: {}", e);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                "Expected a list payload, got {}",
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

/// Unwrap and decode a single-record payload. A list payload decodes
/// to its first element; absence or a decode failure yields `None`.
pub fn to_record<T: DeserializeOwned>(raw: Value) -> Option<T> {
    let payload = match unwrap_payload(raw) {
        Value::Null => return None,
        Value::Array(items) => items.into_iter().next()?,
        other => other,
    };
    match serde_json::from_value::<T>(payload) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Record payload failed to decode: {}", e);
            None
        }
    }
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
    fn unwraps_full_nested_shape() {
        let raw = json!({ "value": [ { "data": [ { "dataRes": [1, 2, 3] } ] } ] });
        assert_eq!(unwrap_payload(raw), json!([1, 2, 3]));
    }

    #[test]
    fn unwraps_flat_shape() {
        assert_eq!(unwrap_payload(json!({ "dataRes": "x" })), json!("x"));
    }

    #[test]
    fn empty_object_yields_empty_list() {
        assert_eq!(unwrap_payload(json!({})), json!([]));
    }

    #[test]
    fn null_yields_empty_list() {
        assert_eq!(unwrap_payload(Value::Null), json!([]));
    }

    #[test]
    fn bare_list_is_the_payload() {
        assert_eq!(unwrap_payload(json!([4, 5])), json!([4, 5]));
    }

    #[test]
    fn bare_scalar_yields_empty_list() {
        assert_eq!(unwrap_payload(json!(42)), json!([]));
        assert_eq!(unwrap_payload(json!("plain")), json!([]));
    }

    #[test]
    fn nested_shape_falls_back_to_top_level_data_res() {
        let raw = json!({ "value": [], "dataRes": "x" });
        assert_eq!(unwrap_payload(raw), json!("x"));

        let raw = json!({ "value": [ { "data": [] } ] });
        assert_eq!(unwrap_payload(raw), json!([]));

        let raw = json!({ "value": [ { "data": [ { "dataRes": null } ] } ] });
        assert_eq!(unwrap_payload(raw), json!([]));
    }

    #[test]
    fn to_list_decodes_and_skips_bad_elements() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Row {
            n: i32,
        }

        let raw = json!({ "value": [ { "data": [ { "dataRes": [
            { "n": 1 },
            { "n": "not a number" },
            { "n": 3 }
        ] } ] } ] });
        let rows: Vec<Row> = to_list(raw);
        assert_eq!(rows, vec![Row { n: 1 }, Row { n: 3 }]);
    }

    #[test]
    fn to_list_on_record_payload_is_empty() {
        let rows: Vec<Value> = to_list(json!({ "dataRes": { "n": 1 } }));
        assert!(rows.is_empty());
    }

    #[test]
    fn to_record_takes_first_of_list() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Row {
            n: i32,
        }

        let raw = json!({ "dataRes": [ { "n": 7 }, { "n": 8 } ] });
        assert_eq!(to_record::<Row>(raw), Some(Row { n: 7 }));

        assert_eq!(to_record::<Row>(json!({})), None);
        assert_eq!(to_record::<Row>(json!({ "dataRes": [] })), None);
    }
}

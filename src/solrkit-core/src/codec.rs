use serde_json::{Map, Value};

use crate::{Error, Result};

/// Parse raw response bytes as a JSON value
pub fn decode(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Serialize a string-keyed JSON object to bytes
pub fn encode(object: &Map<String, Value>) -> Result<Vec<u8>> {
    serde_json::to_vec(object).map_err(Error::Encode)
}

/// Cast a decoded value to an object, failing on any other shape
pub fn expect_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::UnexpectedShape {
            found: json_type_name(&other),
        }),
    }
}

/// Decode bytes straight to an object (ping/update response shape)
pub fn decode_object(bytes: &[u8]) -> Result<Map<String, Value>> {
    expect_object(decode(bytes)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
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
    fn test_decode_valid_json() {
        let value = decode(br#"{"status":"OK"}"#).unwrap();
        assert_eq!(value, json!({"status": "OK"}));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode(b"{bad json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_expect_object_accepts_object() {
        let map = expect_object(json!({"responseHeader": {"status": 0}})).unwrap();
        assert!(map.contains_key("responseHeader"));
    }

    #[test]
    fn test_expect_object_rejects_array() {
        let err = expect_object(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape { found: "array" }));
    }

    #[test]
    fn test_expect_object_rejects_scalar() {
        let err = expect_object(json!(42)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape { found: "number" }));
    }

    #[test]
    fn test_encode_object() {
        let mut object = Map::new();
        object.insert("id".to_string(), json!("doc-1"));
        let bytes = encode(&object).unwrap();

        // Encoded bytes decode back to the same object
        assert_eq!(decode_object(&bytes).unwrap(), object);
    }

    #[test]
    fn test_decode_object_rejects_non_object_body() {
        let err = decode_object(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, Error::UnexpectedShape { found: "array" }));
    }
}

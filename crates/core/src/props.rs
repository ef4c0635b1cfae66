//! Props decoding: serialized placeholder configuration into a structured value.

use crate::component::Props;
use crate::error::PropsDecodeError;
use serde_json::Value;

/// Decodes a placeholder's raw props attribute.
///
/// Absent, blank, and JSON `null` input all yield an empty configuration
/// rather than an error. Any other input must be JSON object text; malformed
/// text or a non-object value is a decode failure the caller reports
/// per-widget without aborting the scan.
pub fn decode_props(raw: Option<&str>) -> Result<Props, PropsDecodeError> {
    let Some(raw) = raw else {
        return Ok(Props::new());
    };
    if raw.trim().is_empty() {
        return Ok(Props::new());
    }
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Props::new()),
        other => Err(PropsDecodeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_blank_yield_empty_props() {
        assert!(decode_props(None).expect("absent props").is_empty());
        assert!(decode_props(Some("")).expect("empty props").is_empty());
        assert!(decode_props(Some("   ")).expect("blank props").is_empty());
    }

    #[test]
    fn null_yields_empty_props() {
        assert!(decode_props(Some("null")).expect("null props").is_empty());
    }

    #[test]
    fn decodes_object_text() {
        let props = decode_props(Some(r#"{"x":1,"label":"buy"}"#)).expect("valid props");
        assert_eq!(props.get("x").and_then(Value::as_i64), Some(1));
        assert_eq!(props.get("label").and_then(Value::as_str), Some("buy"));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode_props(Some(r#"{"x":}"#)).expect_err("malformed props");
        assert!(matches!(err, PropsDecodeError::Json(_)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        let err = decode_props(Some("[1,2]")).expect_err("array props");
        match err {
            PropsDecodeError::NotAnObject { found } => assert_eq!(found, "an array"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Compact JSON writer.
//!
//! The printing rule of the value model: no insignificant whitespace, object
//! entries in insertion order, numbers in the shortest form that reads back
//! to the same `f64`. Parsing the output yields a value equal to the input.

use std::fmt::{self, Write};

use super::types::JsonValue;

/// Serialize a value to compact JSON text.
pub fn to_json_string(value: &JsonValue) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_value(value, &mut output);
    output
}

/// Write a value as compact JSON to any `fmt::Write` sink.
pub fn write_value<W: Write + ?Sized>(value: &JsonValue, output: &mut W) -> fmt::Result {
    match value {
        JsonValue::Null => output.write_str("null"),
        JsonValue::Bool(true) => output.write_str("true"),
        JsonValue::Bool(false) => output.write_str("false"),
        JsonValue::Number(n) => write_number(*n, output),
        JsonValue::String(s) => write_string(s, output),
        JsonValue::Array(arr) => {
            output.write_char('[')?;
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    output.write_char(',')?;
                }
                write_value(item, output)?;
            }
            output.write_char(']')
        }
        JsonValue::Object(map) => {
            output.write_char('{')?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    output.write_char(',')?;
                }
                write_string(key, output)?;
                output.write_char(':')?;
                write_value(item, output)?;
            }
            output.write_char('}')
        }
    }
}

/// Write an `f64` as a JSON number.
///
/// Integral values print without a fraction (`1`, not `1.0`). NaN and the
/// infinities have no JSON form and print as `null`; the parser never
/// produces them.
fn write_number<W: Write + ?Sized>(value: f64, output: &mut W) -> fmt::Result {
    if value.is_finite() {
        write!(output, "{value}")
    } else {
        output.write_str("null")
    }
}

/// Write a string with JSON escaping.
fn write_string<W: Write + ?Sized>(s: &str, output: &mut W) -> fmt::Result {
    output.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => output.write_str("\\\"")?,
            '\\' => output.write_str("\\\\")?,
            '\x08' => output.write_str("\\b")?,
            '\x0C' => output.write_str("\\f")?,
            '\n' => output.write_str("\\n")?,
            '\r' => output.write_str("\\r")?,
            '\t' => output.write_str("\\t")?,
            c if c < '\x20' => write!(output, "\\u{:04x}", c as u32)?,
            c => output.write_char(c)?,
        }
    }
    output.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::types::Map;

    #[test]
    fn test_primitives() {
        assert_eq!(to_json_string(&JsonValue::Null), "null");
        assert_eq!(to_json_string(&JsonValue::TRUE), "true");
        assert_eq!(to_json_string(&JsonValue::FALSE), "false");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_json_string(&JsonValue::Number(42.0)), "42");
        assert_eq!(to_json_string(&JsonValue::Number(-123.0)), "-123");
        assert_eq!(to_json_string(&JsonValue::Number(0.5)), "0.5");
        assert_eq!(to_json_string(&JsonValue::Number(-0.0)), "-0");
        assert_eq!(to_json_string(&JsonValue::Number(1e-7)), "0.0000001");
        assert_eq!(to_json_string(&JsonValue::Number(f64::NAN)), "null");
        assert_eq!(to_json_string(&JsonValue::Number(f64::INFINITY)), "null");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(to_json_string(&JsonValue::from("a\nb")), "\"a\\nb\"");
        assert_eq!(to_json_string(&JsonValue::from("a\tb")), "\"a\\tb\"");
        assert_eq!(to_json_string(&JsonValue::from("a\"b")), "\"a\\\"b\"");
        assert_eq!(to_json_string(&JsonValue::from("a\\b")), "\"a\\\\b\"");
        assert_eq!(to_json_string(&JsonValue::from("\u{1}")), "\"\\u0001\"");
        assert_eq!(to_json_string(&JsonValue::from("é😀")), "\"é😀\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_json_string(&JsonValue::Array(vec![])), "[]");
        assert_eq!(to_json_string(&JsonValue::Object(Map::new())), "{}");
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let map: Map = [
            ("b".to_string(), JsonValue::from(2)),
            ("a".to_string(), JsonValue::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(to_json_string(&JsonValue::Object(map)), r#"{"b":2,"a":1}"#);
    }

    #[test]
    fn test_nested() {
        let inner: Map = [("x".to_string(), JsonValue::from(1))].into_iter().collect();
        let outer: Map = [
            ("arr".to_string(), JsonValue::from(vec![JsonValue::from(1)])),
            ("obj".to_string(), JsonValue::Object(inner)),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            to_json_string(&JsonValue::Object(outer)),
            r#"{"arr":[1],"obj":{"x":1}}"#
        );
    }
}

//! Value construction strategy.
//!
//! The parser decides *what* was read; a [`ValueBuilder`] decides *how* it is
//! represented. Swapping the builder reuses the whole dispatch and recursion
//! logic for a different value model.

use super::types::{JsonValue, Map};

/// Turns parsed pieces into values of a concrete model.
///
/// Containers are handed over complete: `array` receives every element in
/// source order and `object` every entry in source order, duplicates
/// included. Resolving duplicate keys is the builder's decision.
pub trait ValueBuilder {
    /// The value type being built.
    type Value;

    /// Build `null`.
    fn null(&mut self) -> Self::Value;

    /// Build a boolean.
    fn boolean(&mut self, value: bool) -> Self::Value;

    /// Build a number. The parser guarantees the value is finite.
    fn number(&mut self, value: f64) -> Self::Value;

    /// Build a string from its unescaped text.
    fn string(&mut self, value: String) -> Self::Value;

    /// Build an array from its elements.
    fn array(&mut self, elements: Vec<Self::Value>) -> Self::Value;

    /// Build an object from its entries in source order.
    fn object(&mut self, entries: Vec<(String, Self::Value)>) -> Self::Value;
}

/// Builds the crate's own [`JsonValue`] tree.
///
/// Objects keep the last value of a duplicated key, at the position where the
/// key first appeared.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl ValueBuilder for TreeBuilder {
    type Value = JsonValue;

    fn null(&mut self) -> JsonValue {
        JsonValue::NULL
    }

    fn boolean(&mut self, value: bool) -> JsonValue {
        if value {
            JsonValue::TRUE
        } else {
            JsonValue::FALSE
        }
    }

    fn number(&mut self, value: f64) -> JsonValue {
        JsonValue::Number(value)
    }

    fn string(&mut self, value: String) -> JsonValue {
        JsonValue::String(value)
    }

    fn array(&mut self, elements: Vec<JsonValue>) -> JsonValue {
        JsonValue::Array(elements)
    }

    fn object(&mut self, entries: Vec<(String, JsonValue)>) -> JsonValue {
        JsonValue::Object(Map::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_builder_scalars() {
        let mut builder = TreeBuilder;
        assert_eq!(builder.null(), JsonValue::Null);
        assert_eq!(builder.boolean(true), JsonValue::TRUE);
        assert_eq!(builder.boolean(false), JsonValue::FALSE);
        assert_eq!(builder.number(2.5), JsonValue::Number(2.5));
        assert_eq!(builder.string("s".to_string()), JsonValue::from("s"));
    }

    #[test]
    fn test_tree_builder_object_resolves_duplicates() {
        let mut builder = TreeBuilder;
        let value = builder.object(vec![
            ("a".to_string(), JsonValue::from(1)),
            ("a".to_string(), JsonValue::from(2)),
        ]);
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&JsonValue::from(2)));
    }
}

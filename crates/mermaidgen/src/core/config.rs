//! Per-kind configuration properties emitted as front-matter
//!
//! Each diagram kind defines a closed key enumeration. Values are stored
//! in a `BTreeMap` keyed by that enumeration, so the emitted order follows
//! the enum declaration order rather than call order.

use std::collections::BTreeMap;
use std::fmt;

use tracing::trace;

/// A configuration key for one diagram kind
pub trait PropertyKey: Copy + Ord + fmt::Debug + fmt::Display {
    /// Name of the front-matter section the keys live under (`flowchart`, ...)
    const SECTION: &'static str;
}

/// A configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{}", value),
            PropertyValue::Int(value) => write!(f, "{}", value),
            PropertyValue::Float(value) => write!(f, "{}", value),
            PropertyValue::Text(value) => write!(f, "{}", crate::core::yaml_scalar(value)),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// Configuration properties for one diagram kind
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationProperties<K: PropertyKey> {
    values: BTreeMap<K, PropertyValue>,
}

impl<K: PropertyKey> Default for ConfigurationProperties<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: PropertyKey> ConfigurationProperties<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, key: K, value: impl Into<PropertyValue>) -> &mut Self {
        let value = value.into();
        trace!(section = K::SECTION, key = %key, value = %value, "Set property");
        self.values.insert(key, value);
        self
    }

    /// Remove a property
    pub fn unset(&mut self, key: K) -> &mut Self {
        self.values.remove(&key);
        self
    }

    /// Get a property value
    pub fn get(&self, key: K) -> Option<&PropertyValue> {
        self.values.get(&key)
    }

    /// Iterate over properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (K, &PropertyValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Render the section at the given indentation, or an empty string
    /// when no property is set
    pub fn render(&self, indent: &str) -> String {
        if self.values.is_empty() {
            return String::new();
        }
        let mut out = format!("{}{}:\n", indent, K::SECTION);
        for (key, value) in &self.values {
            out.push_str(&format!("{}  {}: {}\n", indent, key, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum TestKey {
        Padding,
        UseMaxWidth,
    }

    impl fmt::Display for TestKey {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TestKey::Padding => write!(f, "padding"),
                TestKey::UseMaxWidth => write!(f, "useMaxWidth"),
            }
        }
    }

    impl PropertyKey for TestKey {
        const SECTION: &'static str = "test";
    }

    #[test]
    fn test_empty_renders_nothing() {
        let props = ConfigurationProperties::<TestKey>::new();
        assert!(props.is_empty());
        assert_eq!(props.render("  "), "");
    }

    #[test]
    fn test_render_in_key_order() {
        let mut props = ConfigurationProperties::<TestKey>::new();
        props.set(TestKey::UseMaxWidth, false).set(TestKey::Padding, 8);
        assert_eq!(
            props.render("  "),
            "  test:\n    padding: 8\n    useMaxWidth: false\n"
        );
    }

    #[test]
    fn test_set_replaces_and_unset_removes() {
        let mut props = ConfigurationProperties::<TestKey>::new();
        props.set(TestKey::Padding, 8).set(TestKey::Padding, 16);
        assert_eq!(props.get(TestKey::Padding), Some(&PropertyValue::Int(16)));
        assert_eq!(props.len(), 1);

        props.unset(TestKey::Padding);
        assert!(props.get(TestKey::Padding).is_none());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(PropertyValue::from(true).to_string(), "true");
        assert_eq!(PropertyValue::from(1.5).to_string(), "1.5");
        assert_eq!(PropertyValue::from("basis").to_string(), "basis");
        assert_eq!(PropertyValue::from("a: b").to_string(), "\"a: b\"");
    }

    #[test]
    fn test_text_value_keeps_string_type() {
        assert_eq!(PropertyValue::from("true").to_string(), "\"true\"");
        assert_eq!(PropertyValue::from("123").to_string(), "\"123\"");
        assert_eq!(PropertyValue::from(123).to_string(), "123");
    }
}

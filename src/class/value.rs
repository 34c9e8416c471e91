//! Conditional class-name input values.

use std::collections::BTreeMap;

use serde_json::Value;

/// A recursive, conditional description of class tokens.
///
/// Flattening walks the tree left-to-right, depth-first, and splits every
/// token on whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing.
    #[default]
    Empty,
    /// One or more whitespace-separated tokens.
    Token(String),
    /// Tokens included only when their flag is set.
    Toggles(Vec<(String, bool)>),
    /// Nested values, evaluated in order.
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Flattens into individual tokens, in evaluation order.
    ///
    /// Duplicates are kept; deduplication belongs to the merger.
    pub fn tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.push_tokens(&mut out);
        out
    }

    fn push_tokens<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Empty => {}
            Self::Token(raw) => out.extend(raw.split_whitespace()),
            Self::Toggles(entries) => {
                for (raw, enabled) in entries {
                    if *enabled {
                        out.extend(raw.split_whitespace());
                    }
                }
            }
            Self::List(items) => {
                for item in items {
                    item.push_tokens(out);
                }
            }
        }
    }

    /// Returns `true` when flattening yields no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        Self::Token(value.clone())
    }
}

/// A bare boolean never names a class; it only exists so `cond && "x"`-style
/// call sites can pass `false` through.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((token, enabled): (&str, bool)) -> Self {
        Self::Toggles(vec![(token.to_string(), enabled)])
    }
}

impl From<(String, bool)> for ClassValue {
    fn from(entry: (String, bool)) -> Self {
        Self::Toggles(vec![entry])
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, bool>> for ClassValue {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self::Toggles(map.into_iter().collect())
    }
}

/// Loosely-typed input, e.g. class props forwarded from a JSON payload.
///
/// Anything that is not a string, array or object contributes nothing.
/// Object entries are kept, in document order, when their value is truthy.
impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(raw) => Self::Token(raw),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Toggles(
                map.into_iter()
                    .map(|(key, flag)| (key, is_truthy(&flag)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Empty,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_flatten_order() {
        let value = ClassValue::List(vec![
            "a b".into(),
            ClassValue::List(vec!["c".into(), ("d", true).into(), ("e", false).into()]),
            "f".into(),
        ]);
        assert_eq!(value.tokens(), vec!["a", "b", "c", "d", "f"]);
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let value = ClassValue::from("  px-2\n\tpy-1   ");
        assert_eq!(value.tokens(), vec!["px-2", "py-1"]);
    }

    #[test]
    fn test_empty_shapes() {
        assert!(ClassValue::Empty.is_empty());
        assert!(ClassValue::from("").is_empty());
        assert!(ClassValue::from(false).is_empty());
        assert!(ClassValue::from(None::<&str>).is_empty());
        assert!(ClassValue::from(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_btreemap_toggles() {
        let mut map = BTreeMap::new();
        map.insert("active".to_string(), true);
        map.insert("disabled".to_string(), false);
        assert_eq!(ClassValue::from(map).tokens(), vec!["active"]);
    }

    #[test]
    fn test_json_conversion() {
        let value = ClassValue::from(json!([
            "base",
            null,
            42,
            true,
            { "on": 1, "off": 0, "text": "yes", "blank": "" },
            ["nested", ["deep"]]
        ]));
        assert_eq!(value.tokens(), vec!["base", "on", "text", "nested", "deep"]);
    }
}

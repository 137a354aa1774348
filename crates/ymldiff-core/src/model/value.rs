//! Generic document value tree.
//!
//! [`Value`] is the closed sum type every other component works on. It is
//! produced from `serde_yaml::Value` by the document source and never
//! mutated afterwards; canonicalization and diffing build new values.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Mapping storage. Keys iterate in canonical order (see [`Value::cmp`]).
pub type Mapping = BTreeMap<Value, Value>;

/// Scalar leaf, each subtype kept distinct (`"123"` is not `123`).
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// A node of a parsed document.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

/// Structural kind of a value.
///
/// Two values of different kinds are never diffed field by field. The
/// declaration order is the tie-break rank used by the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Sequence,
    Mapping,
}

impl Value {
    /// Build a string scalar.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::String(s.into()))
    }

    /// Build an integer scalar.
    pub fn int(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }

    /// Build a float scalar.
    pub fn float(f: f64) -> Self {
        Value::Scalar(Scalar::Float(f))
    }

    /// Build a boolean scalar.
    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    /// Build a mapping from key/value pairs. Later duplicates win.
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from items, keeping their order.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Scalar(Scalar::Bool(_)) => ValueKind::Bool,
            Value::Scalar(Scalar::Int(_)) => ValueKind::Int,
            Value::Scalar(Scalar::Float(_)) => ValueKind::Float,
            Value::Scalar(Scalar::String(_)) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Mapping(_) => ValueKind::Mapping,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a mapping entry by string key. `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()
            .and_then(|map| map.get(&Value::string(key)))
    }

    /// The display form of this value, borrowed for string scalars.
    ///
    /// This is the "string representation" used for key ordering, sequence
    /// sorting, path segments and record identifiers.
    pub fn display_form(&self) -> Cow<'_, str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Total structural comparison used once display forms and kinds tie.
    fn structural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Scalar(a), Value::Scalar(b)) => match (a, b) {
                (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
                (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
                (Scalar::Float(a), Scalar::Float(b)) => a.total_cmp(b),
                (Scalar::String(a), Scalar::String(b)) => a.cmp(b),
                _ => self.kind().cmp(&other.kind()),
            },
            (Value::Sequence(a), Value::Sequence(b)) => a.iter().cmp(b.iter()),
            (Value::Mapping(a), Value::Mapping(b)) => a.iter().cmp(b.iter()),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

/// Canonical total order: display form, then kind rank, then structure.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Value::Scalar(Scalar::String(a)), Value::Scalar(Scalar::String(b))) =
            (self, other)
        {
            return a.cmp(b);
        }
        self.display_form()
            .cmp(&other.display_form())
            .then_with(|| self.kind().cmp(&other.kind()))
            .then_with(|| self.structural_cmp(other))
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deep equality including scalar subtype. Floats compare by total order,
/// so `NaN` equals itself.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.structural_cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) if x.is_nan() => f.write_str(".nan"),
            Scalar::Float(x) if x.is_infinite() && *x > 0.0 => f.write_str(".inf"),
            Scalar::Float(x) if x.is_infinite() => f.write_str("-.inf"),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Scalar(scalar) => write!(f, "{}", scalar),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Value::Scalar(Scalar::Int(i)) => serializer.serialize_i64(*i),
            Value::Scalar(Scalar::Float(x)) => serializer.serialize_f64(*x),
            Value::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(&MapKey(key), value)?;
                }
                state.end()
            }
        }
    }
}

/// Mapping key as written by serializers: string, integer and boolean keys
/// stay native, anything else is written as its display form.
struct MapKey<'a>(&'a Value);

impl Serialize for MapKey<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Value::Scalar(Scalar::Int(i)) => serializer.serialize_i64(*i),
            Value::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::bool(b),
            serde_yaml::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Value::int(i),
                (None, Some(f)) => Value::float(f),
                (None, None) => Value::string(n.to_string()),
            },
            serde_yaml::Value::String(s) => Value::string(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Value::from(k), Value::from(v)))
                    .collect(),
            ),
            // Tags carry no meaning for comparison.
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str::<serde_yaml::Value>(src).unwrap().into()
    }

    #[test]
    fn test_scalar_subtypes_are_distinct() {
        assert_ne!(Value::string("123"), Value::int(123));
        assert_ne!(Value::int(1), Value::float(1.0));
        assert_ne!(Value::string("true"), Value::bool(true));
        assert_ne!(Value::Null, Value::string("null"));
    }

    #[test]
    fn test_nan_equals_itself() {
        let nan = Value::float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(nan.to_string(), ".nan");
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::bool(true).to_string(), "true");
        assert_eq!(Value::int(42).to_string(), "42");
        assert_eq!(Value::float(1.5).to_string(), "1.5");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_string(), "-.inf");
        assert_eq!(Value::string("hello").to_string(), "hello");
        assert_eq!(
            Value::mapping([("b", 2), ("a", 1)]).to_string(),
            "{a: 1, b: 2}"
        );
        assert_eq!(Value::sequence(["x", "y"]).to_string(), "[x, y]");
    }

    #[test]
    fn test_mapping_keys_iterate_by_display_form() {
        let map = yaml("z_key: 1\na_key: 2\nm_key: 3\n");
        let keys: Vec<String> = map
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["a_key", "m_key", "z_key"]);
    }

    #[test]
    fn test_colliding_display_forms_order_by_kind() {
        let mut values = vec![Value::string("1"), Value::float(1.0), Value::int(1)];
        values.sort();
        assert_eq!(
            values,
            vec![Value::int(1), Value::float(1.0), Value::string("1")]
        );
    }

    #[test]
    fn test_get_by_string_key() {
        let v = yaml("name: web\nport: 80\n");
        assert_eq!(v.get("name"), Some(&Value::string("web")));
        assert_eq!(v.get("port"), Some(&Value::int(80)));
        assert_eq!(v.get("missing"), None);
        assert_eq!(Value::int(3).get("name"), None);
    }

    #[test]
    fn test_from_yaml_keeps_types_and_drops_tags() {
        let v = yaml("a: \"123\"\nb: 123\nc: 1.25\nd: ~\ne: !custom tagged\n");
        assert_eq!(v.get("a"), Some(&Value::string("123")));
        assert_eq!(v.get("b"), Some(&Value::int(123)));
        assert_eq!(v.get("c"), Some(&Value::float(1.25)));
        assert_eq!(v.get("d"), Some(&Value::Null));
        assert_eq!(v.get("e"), Some(&Value::string("tagged")));
    }

    #[test]
    fn test_serializes_as_yaml_block() {
        let v = yaml("name: web\nports:\n  - 80\n  - 443\n");
        let out = serde_yaml::to_string(&v).unwrap();
        assert!(out.starts_with("name: web\nports:\n"));
        assert!(out.contains("- 80"));
        assert!(out.contains("- 443"));
    }

    #[test]
    fn test_non_scalar_keys_serialize_as_display_form() {
        let mut map = Mapping::new();
        map.insert(Value::sequence([1i64, 2]), Value::string("pair"));
        let out = serde_json::to_string(&Value::Mapping(map)).unwrap();
        assert_eq!(out, r#"{"[1, 2]":"pair"}"#);
    }
}

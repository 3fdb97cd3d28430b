//! Value types crossing the collection API.

/// Result of a read over a collection.
///
/// A single-element collection yields its value directly; any other size
/// yields the list of values in collection order. An empty collection yields
/// an empty `Many`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapse a list: exactly one value becomes `One`, anything else `Many`.
    pub fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1
            && let Some(value) = values.pop()
        {
            return OneOrMany::One(value);
        }
        OneOrMany::Many(values)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, OneOrMany::One(_))
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single value, if this is `One`.
    pub fn one(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> OneOrMany<U> {
        match self {
            OneOrMany::One(value) => OneOrMany::One(f(value)),
            OneOrMany::Many(values) => OneOrMany::Many(values.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        value.into_vec()
    }
}

/// One class name or a list of them, as accepted by `add_class`.
pub trait ClassNames {
    /// Each name prefixed with a single space, concatenated.
    fn class_suffix(&self) -> String;
}

impl ClassNames for str {
    fn class_suffix(&self) -> String {
        format!(" {self}")
    }
}

impl ClassNames for String {
    fn class_suffix(&self) -> String {
        self.as_str().class_suffix()
    }
}

impl<S: AsRef<str>> ClassNames for [S] {
    fn class_suffix(&self) -> String {
        self.iter().map(|name| format!(" {}", name.as_ref())).collect()
    }
}

impl<S: AsRef<str>, const N: usize> ClassNames for [S; N] {
    fn class_suffix(&self) -> String {
        self.as_slice().class_suffix()
    }
}

impl<S: AsRef<str>> ClassNames for Vec<S> {
    fn class_suffix(&self) -> String {
        self.as_slice().class_suffix()
    }
}

impl<T: ClassNames + ?Sized> ClassNames for &T {
    fn class_suffix(&self) -> String {
        (**self).class_suffix()
    }
}

/// Ordered attribute map for element creation.
///
/// Deserializes from a JSON object, keeping the object's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(pub Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Attributes;

    impl Serialize for Attributes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for (k, v) in &self.0 {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    struct AttributesVisitor;

    impl<'de> Visitor<'de> for AttributesVisitor {
        type Value = Attributes;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of attribute names to string values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                entries.push((key, value));
            }
            Ok(Attributes(entries))
        }
    }

    impl<'de> Deserialize<'de> for Attributes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(AttributesVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_vec_collapses_single() {
        assert_eq!(OneOrMany::from_vec(vec![7]), OneOrMany::One(7));
        assert_eq!(OneOrMany::from_vec(vec![1, 2]), OneOrMany::Many(vec![1, 2]));
        assert_eq!(OneOrMany::<i32>::from_vec(vec![]), OneOrMany::Many(vec![]));
    }

    #[test]
    fn test_class_suffix_forms() {
        assert_eq!("a".class_suffix(), " a");
        assert_eq!(String::from("a b").class_suffix(), " a b");
        assert_eq!(["a", "b"].class_suffix(), " a b");
        assert_eq!(vec!["x".to_string()].class_suffix(), " x");
        assert_eq!(Vec::<String>::new().class_suffix(), "");
    }

    #[test]
    fn test_attributes_keep_order() {
        let attrs: Attributes = [("z", "1"), ("a", "2"), ("m", "3")].into_iter().collect();
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_attributes_from_json_keep_order() {
        let attrs: Attributes = serde_json::from_str(r#"{"z":"1","a":"2"}"#).unwrap();
        assert_eq!(attrs, Attributes::new().with("z", "1").with("a", "2"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_one_or_many_json_shape() {
        let one = serde_json::to_string(&OneOrMany::One("x")).unwrap();
        let many = serde_json::to_string(&OneOrMany::Many(vec![Some("x"), None])).unwrap();
        assert_eq!(one, r#""x""#);
        assert_eq!(many, r#"["x",null]"#);
    }

    proptest! {
        #[test]
        fn prop_from_vec_preserves_values(values in prop::collection::vec(any::<u16>(), 0..8)) {
            let collapsed = OneOrMany::from_vec(values.clone());
            prop_assert_eq!(collapsed.is_one(), values.len() == 1);
            prop_assert_eq!(collapsed.len(), values.len());
            prop_assert_eq!(collapsed.into_vec(), values);
        }
    }
}

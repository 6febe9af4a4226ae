//! Literal query-string constraints of a route pattern

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Ordered map of literal query keys to literal values
///
/// Iteration follows declaration order. Equality and hashing treat the
/// literals as an unordered map, so `?a=1&b=2` equals `?b=2&a=1`.
///
/// # Examples
///
/// ```
/// use uri_pattern::RoutePattern;
///
/// let uri = RoutePattern::parse("/things?type=book&limit").unwrap();
/// let literals = uri.query_literals();
///
/// assert_eq!(literals.get("type"), Some("book"));
/// assert_eq!(literals.get("limit"), Some(""));
/// assert_eq!(literals.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryLiterals {
    entries: Vec<(String, String)>,
}

impl QueryLiterals {
    /// Appends a literal; keys are checked for uniqueness by the parser
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Case-sensitive lookup of a literal value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates `(key, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn as_sorted(&self) -> BTreeMap<&str, &str> {
        self.iter().collect()
    }
}

impl PartialEq for QueryLiterals {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for QueryLiterals {}

impl Hash for QueryLiterals {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_sorted().hash(state);
    }
}

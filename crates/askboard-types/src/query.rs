//! Caller-supplied list parameters (filters, paging).
//!
//! The client never interprets these: they are forwarded verbatim, either as
//! a query string (answers) or as a JSON object inside the request body
//! (questions).

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered multiset of string key/value pairs, like a URL search-params set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, keeping any existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder-style [`append`](Self::append).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Parse a `key=value` argument. A missing `=` yields an empty value.
    pub fn parse_pair(raw: &str) -> (String, String) {
        match raw.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (raw.to_string(), String::new()),
        }
    }

    /// Distinct keys in first-appearance order with all their values.
    fn grouped(&self) -> Vec<(&str, Vec<&str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for (key, value) in &self.pairs {
            match groups.iter().position(|(k, _)| *k == key.as_str()) {
                Some(idx) => groups[idx].1.push(value.as_str()),
                None => groups.push((key.as_str(), vec![value.as_str()])),
            }
        }
        groups
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Serializes as a JSON object; repeated keys become arrays.
impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups = self.grouped();
        let mut map = serializer.serialize_map(Some(groups.len()))?;
        for (key, values) in groups {
            if let [single] = values.as_slice() {
                map.serialize_entry(key, single)?;
            } else {
                map.serialize_entry(key, &values)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_object() {
        let params = QueryParams::new().with("limit", "10").with("offset", "20");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"limit": "10", "offset": "20"})
        );
    }

    #[test]
    fn test_repeated_keys_become_array() {
        let params: QueryParams = [("tag", "rust"), ("tag", "async"), ("limit", "5")]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"tag": ["rust", "async"], "limit": "5"})
        );
        assert_eq!(params.get("tag"), Some("rust"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            QueryParams::parse_pair("isGoing=true"),
            ("isGoing".to_string(), "true".to_string())
        );
        assert_eq!(
            QueryParams::parse_pair("a=b=c"),
            ("a".to_string(), "b=c".to_string())
        );
        assert_eq!(
            QueryParams::parse_pair("flag"),
            ("flag".to_string(), String::new())
        );
    }
}

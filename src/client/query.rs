//! Deterministic query-string construction for list and filter endpoints.
//!
//! Postmark's list endpoints take free-form filter and pagination
//! parameters. Callers collect them in a [`Query`], which encodes to a
//! stable, lexicographically ordered query string regardless of insertion
//! order.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;

/// A value accepted in a [`Query`].
///
/// The set is closed on purpose: every variant has an unambiguous string
/// form, so the encoded output is fully determined by the key/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A string value, percent-encoded as-is.
    String(String),
    /// An integer, rendered in decimal.
    Int(i64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A float, rendered in decimal form.
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::String(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{i}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
            QueryValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::String(s)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::String(s.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        QueryValue::Int(i)
    }
}

impl From<i32> for QueryValue {
    fn from(i: i32) -> Self {
        QueryValue::Int(i64::from(i))
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

/// An options bag destined for a request's query string.
///
/// Keys are kept in a `BTreeMap`, so iteration (and therefore encoding) is
/// ordered by key and never depends on insertion order.
///
/// # Example
///
/// ```
/// use postmark_rs::Query;
///
/// let query = Query::new()
///     .with("offset", 0)
///     .with("count", 50)
///     .with("tag", "welcome");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query(BTreeMap<String, QueryValue>);

impl Query {
    /// Create an empty options bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns `true` if no parameters have been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &QueryValue)> {
        self.0.iter()
    }
}

/// Append the encoded form of `query` to `path`.
///
/// An empty bag yields the bare path with no `?`. Encoding follows standard
/// query rules (`application/x-www-form-urlencoded`: space as `+`, reserved
/// and non-ASCII characters escaped).
pub(crate) fn build_url(path: &str, query: &Query) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let mut encoded = form_urlencoded::Serializer::new(String::new());
    for (key, value) in query.iter() {
        encoded.append_pair(key, &value.to_string());
    }
    format!("{}?{}", path, encoded.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_leaves_path_untouched() {
        assert_eq!(build_url("bounces", &Query::new()), "bounces");
    }

    #[test]
    fn keys_are_ordered_lexicographically() {
        let query = Query::new().with("offset", "0").with("count", "50");
        assert_eq!(build_url("bounces", &query), "bounces?count=50&offset=0");
    }

    #[test]
    fn encoding_is_insertion_order_independent() {
        let forward = Query::new()
            .with("todate", "2015-03-01")
            .with("fromdate", "2015-02-01")
            .with("recipient", "john.doe@yahoo.com")
            .with("count", 100)
            .with("offset", 0);
        let reverse = Query::new()
            .with("offset", 0)
            .with("count", 100)
            .with("recipient", "john.doe@yahoo.com")
            .with("fromdate", "2015-02-01")
            .with("todate", "2015-03-01");
        assert_eq!(
            build_url("messages/inbound", &forward),
            build_url("messages/inbound", &reverse)
        );
    }

    #[test]
    fn scalar_values_use_default_string_forms() {
        let query = Query::new()
            .with("count", 50)
            .with("inactive", true)
            .with("rate", 0.25)
            .with("tag", "welcome");
        assert_eq!(
            build_url("bounces", &query),
            "bounces?count=50&inactive=true&rate=0.25&tag=welcome"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let query = Query::new().with("emailFilter", "a&b=c d@example.com");
        assert_eq!(
            build_url("bounces", &query),
            "bounces?emailFilter=a%26b%3Dc+d%40example.com"
        );
    }

    #[test]
    fn non_ascii_is_escaped() {
        let query = Query::new().with("subject", "Тест");
        assert_eq!(
            build_url("messages/outbound", &query),
            "messages/outbound?subject=%D0%A2%D0%B5%D1%81%D1%82"
        );
    }

    #[test]
    fn duplicate_insert_replaces() {
        let query = Query::new().with("count", 10).with("count", 50);
        assert_eq!(build_url("bounces", &query), "bounces?count=50");
    }
}

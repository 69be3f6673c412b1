//! Query string construction.
//!
//! [`QueryParams`] is an ordered list of key/value pairs in which a value may
//! be unset. Unset entries are skipped when the query string is rendered, and
//! an empty (or all-unset) list renders no `?` at all.

use serde::Serialize;
use serde_json::Value;

/// Ordered query parameters for a request.
///
/// Keys keep their insertion order. Parameter structs converted with
/// [`QueryParams::from_serialize`] keep their field declaration order.
///
/// # Example
///
/// ```rust
/// use printful_api::clients::{with_query_string, QueryParams};
///
/// let query = QueryParams::new()
///     .with("offset", 10)
///     .with_opt("status", None::<String>)
///     .with("limit", 20);
///
/// assert_eq!(with_query_string("/orders", &query), "/orders?offset=10&limit=20");
/// assert_eq!(with_query_string("/orders", &QueryParams::new()), "/orders");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a defined parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), Some(value.to_string())));
    }

    /// Appends a parameter that may be unset.
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.pairs.push((key.into(), value.map(|v| v.to_string())));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Builder-style [`push_opt`](Self::push_opt).
    #[must_use]
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Appends every pair of `other`, keeping its order.
    pub fn extend(&mut self, other: Self) {
        self.pairs.extend(other.pairs);
    }

    /// Converts a serializable parameter struct (or map) into query parameters.
    ///
    /// - `null` values (e.g. `None` fields) become unset entries
    /// - strings are used verbatim, numbers and booleans are formatted
    /// - arrays of scalars are joined with `,`
    /// - nested objects are rendered as JSON
    ///
    /// A value serializing to `null` (such as `()`) yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails to serialize or does not serialize
    /// to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(params: &T) -> Result<Self, serde_json::Error> {
        let map = match serde_json::to_value(params)? {
            Value::Null => return Ok(Self::new()),
            Value::Object(map) => map,
            other => {
                return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                    "query parameters must serialize to an object, got {other}"
                )))
            }
        };

        let pairs = map
            .into_iter()
            .map(|(key, value)| (key, render_value(value)))
            .collect();

        Ok(Self { pairs })
    }

    /// Returns `true` if no defined parameter is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defined().next().is_none()
    }

    /// Iterates over the defined parameters in order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Renders the percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.defined()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

fn render_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Appends the rendered query string of `params` to `path`.
///
/// No `?` is added when `params` has no defined entry.
#[must_use]
pub fn with_query_string(path: &str, params: &QueryParams) -> String {
    let qs = params.to_query_string();
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct ListParams {
        offset: Option<u32>,
        limit: Option<u32>,
        status: Option<String>,
    }

    #[test]
    fn test_query_string_keeps_insertion_order() {
        let query = QueryParams::new().with("offset", 10).with("limit", 20);
        assert_eq!(query.to_query_string(), "offset=10&limit=20");

        let query = QueryParams::new().with("limit", 20).with("offset", 10);
        assert_eq!(query.to_query_string(), "limit=20&offset=10");
    }

    #[test]
    fn test_unset_values_are_omitted() {
        let query = QueryParams::new()
            .with_opt("status", None::<&str>)
            .with("limit", 5)
            .with_opt("offset", None::<u32>);
        assert_eq!(query.to_query_string(), "limit=5");
    }

    #[test]
    fn test_empty_or_all_unset_params_produce_no_question_mark() {
        assert_eq!(with_query_string("/orders", &QueryParams::new()), "/orders");

        let all_unset = QueryParams::new()
            .with_opt("a", None::<u8>)
            .with_opt("b", None::<u8>);
        assert!(all_unset.is_empty());
        assert_eq!(with_query_string("/orders", &all_unset), "/orders");
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let query = QueryParams::new()
            .with("search term", "t-shirt & mug")
            .with("currency", "€");
        assert_eq!(
            query.to_query_string(),
            "search%20term=t-shirt%20%26%20mug&currency=%E2%82%AC"
        );
    }

    #[test]
    fn test_from_serialize_keeps_field_order_and_skips_none() {
        let params = ListParams {
            offset: Some(10),
            limit: Some(20),
            status: None,
        };
        let query = QueryParams::from_serialize(&params).unwrap();
        assert_eq!(with_query_string("/orders", &query), "/orders?offset=10&limit=20");
    }

    #[test]
    fn test_from_serialize_renders_scalars_and_arrays() {
        let query = QueryParams::from_serialize(&json!({
            "confirm": true,
            "ids": [1, 2, 3],
            "name": "mug",
        }))
        .unwrap();
        assert_eq!(query.to_query_string(), "confirm=true&ids=1%2C2%2C3&name=mug");
    }

    #[test]
    fn test_from_serialize_unit_is_empty() {
        let query = QueryParams::from_serialize(&()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_from_serialize_rejects_non_objects() {
        assert!(QueryParams::from_serialize(&42).is_err());
        assert!(QueryParams::from_serialize(&vec!["a", "b"]).is_err());
    }

    #[test]
    fn test_collect_from_pairs() {
        let query: QueryParams = vec![("limit", 1), ("offset", 2)].into_iter().collect();
        assert_eq!(query.to_query_string(), "limit=1&offset=2");
    }
}

//! # Query-String Parsing
//!
//! Parses raw query strings into an ordered name/value map.
//!
//! ## Functions
//!
//! - [`parse_query`] - Parse a full query string into a [`QueryParamMap`]
//! - [`get_query_param`] - Look up a single parameter by name

use indexmap::IndexMap;

/// Ordered mapping from query parameter name to value.
///
/// Keys are unique: a repeated key keeps its first-occurrence position and
/// takes the last value seen, matching standard query-string semantics.
/// The map is built fresh on each read and never cached.
pub type QueryParamMap = IndexMap<String, String>;

/// Parse a raw query string into a [`QueryParamMap`].
///
/// A leading `?` is tolerated. Each pair splits on its first `=`; a pair
/// without `=` maps the key to an empty value, and empty pairs (`a=1&&b=2`)
/// are skipped. Keys and values are percent-decoded, falling back to the
/// raw text when an escape sequence is malformed. An empty query string
/// yields an empty map.
///
/// # Examples
///
/// ```rust
/// use lib_params::query::parse_query;
///
/// let params = parse_query("?id=5&name=hello%20world");
/// assert_eq!(params.get("id").map(String::as_str), Some("5"));
/// assert_eq!(params.get("name").map(String::as_str), Some("hello world"));
/// ```
pub fn parse_query(query: &str) -> QueryParamMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = QueryParamMap::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((key, value)) => {
                params.insert(decode(key), decode(value));
            }
            None => {
                // Parameter with no value (just the key)
                params.insert(decode(pair), String::new());
            }
        }
    }

    params
}

/// Look up a single parameter in a raw query string.
///
/// Returns `None` when the key is absent; a key present without `=` yields
/// an empty string.
pub fn get_query_param(query: &str, key: &str) -> Option<String> {
    parse_query(query).get(key).cloned()
}

fn decode(text: &str) -> String {
    urlencoding::decode(text)
        .unwrap_or_else(|_| text.into())
        .into_owned()
}

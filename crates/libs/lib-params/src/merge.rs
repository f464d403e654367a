//! # Parameter Merge
//!
//! Merges a [`QueryParamMap`] into an absolute URL.

use url::Url;

use crate::error::Result;
use crate::query::QueryParamMap;

/// Merge `params` into `base_url` and return the serialized result.
///
/// Parameters already present in `base_url` keep their position and are
/// overwritten when `params` carries the same key; new parameters append
/// in `params` iteration order. Duplicate keys already present in
/// `base_url` collapse to a single occurrence (first position, last
/// value). The query re-serializes with standard form-urlencoding.
///
/// Fails with [`PropagateError::InvalidUrl`](crate::error::PropagateError::InvalidUrl)
/// when `base_url` is not a syntactically valid absolute URL.
///
/// # Examples
///
/// ```rust
/// use lib_params::merge::append_query_params;
/// use lib_params::query::parse_query;
///
/// let merged = append_query_params("https://example.com", &parse_query("a=1&b=2")).unwrap();
/// assert_eq!(merged, "https://example.com/?a=1&b=2");
/// ```
pub fn append_query_params(base_url: &str, params: &QueryParamMap) -> Result<String> {
    let mut url = Url::parse(base_url)?;

    let mut merged = QueryParamMap::new();
    for (key, value) in url.query_pairs() {
        merged.insert(key.into_owned(), value.into_owned());
    }
    for (key, value) in params {
        merged.insert(key.clone(), value.clone());
    }

    if merged.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(merged.iter());
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropagateError;
    use crate::query::parse_query;

    #[test]
    fn test_append_to_bare_url() {
        let merged = append_query_params("https://example.com", &parse_query("a=1&b=2")).unwrap();
        assert_eq!(merged, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn test_empty_params_leave_content_unchanged() {
        let merged =
            append_query_params("https://example.com/path?x=1", &QueryParamMap::new()).unwrap();
        assert_eq!(merged, "https://example.com/path?x=1");
    }

    #[test]
    fn test_empty_params_on_bare_url_add_no_query() {
        let merged = append_query_params("https://example.com", &QueryParamMap::new()).unwrap();
        assert_eq!(merged, "https://example.com/");
    }

    #[test]
    fn test_override_wins_and_preserves_others() {
        let merged =
            append_query_params("https://example.com?a=9&z=3", &parse_query("a=1")).unwrap();
        assert_eq!(merged, "https://example.com/?a=1&z=3");
    }

    #[test]
    fn test_new_params_append_after_existing() {
        let merged =
            append_query_params("https://example.com?x=1", &parse_query("a=1&b=2")).unwrap();
        assert_eq!(merged, "https://example.com/?x=1&a=1&b=2");
    }

    #[test]
    fn test_duplicate_keys_in_base_collapse() {
        let merged = append_query_params(
            "https://example.com?a=1&b=2&a=3",
            &QueryParamMap::new(),
        )
        .unwrap();
        assert_eq!(merged, "https://example.com/?a=3&b=2");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let params = parse_query("id=5&page=2");
        let once = append_query_params("https://example.com/search?q=rust", &params).unwrap();
        let twice = append_query_params(&once, &params).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_values_are_form_urlencoded() {
        let merged =
            append_query_params("https://example.com", &parse_query("q=hello%20world")).unwrap();
        assert_eq!(merged, "https://example.com/?q=hello+world");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let mut params = QueryParamMap::new();
        params.insert("special".to_string(), "a&b=c".to_string());
        let merged = append_query_params("https://example.com", &params).unwrap();
        assert_eq!(merged, "https://example.com/?special=a%26b%3Dc");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = append_query_params("not a url", &QueryParamMap::new()).unwrap_err();
        assert!(matches!(err, PropagateError::InvalidUrl(_)));
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let err = append_query_params("/embed?x=1", &QueryParamMap::new()).unwrap_err();
        assert!(matches!(err, PropagateError::InvalidUrl(_)));
    }

    #[test]
    fn test_fragment_is_preserved() {
        let merged =
            append_query_params("https://example.com/page#section", &parse_query("a=1")).unwrap();
        assert_eq!(merged, "https://example.com/page?a=1#section");
    }
}

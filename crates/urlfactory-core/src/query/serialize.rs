//! Query string serialization and parsing.

use url::form_urlencoded;

use super::{ParamError, QueryParams};

/// Serializes `params` as `?k=v&k2=v2`.
///
/// Entries with an empty key or value are skipped. Returns an empty string
/// when nothing remains.
///
/// # Examples
///
/// - `{branch: "main", embed: "true"}` → `"?branch=main&embed=true"`
/// - `{}` → `""`
pub fn to_query_string(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut written = 0usize;
    for (key, value) in params.iter() {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        serializer.append_pair(key, value);
        written += 1;
    }
    if written == 0 {
        return String::new();
    }
    format!("?{}", serializer.finish())
}

/// Reads the query parameters of a URL, path, or bare query string.
///
/// Everything after the first `?` up to a `#` is parsed; a string without `?`
/// is taken as a bare query unless it looks like a path or absolute URL.
/// A repeated key keeps its last value.
pub fn parse_query(input: &str) -> QueryParams {
    let without_fragment = input.split('#').next().unwrap_or_default();
    let query = match without_fragment.split_once('?') {
        Some((_, q)) => q,
        None if without_fragment.starts_with('/') || without_fragment.contains("://") => "",
        None => without_fragment,
    };
    form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Splits a `key=value` pair. The value may be empty or contain `=`.
pub fn parse_param_pair(input: &str) -> Result<(String, String), ParamError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParamError::MissingSeparator(input.to_string()))?;
    if key.is_empty() {
        return Err(ParamError::EmptyKey(input.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_serialize_to_nothing() {
        assert_eq!(to_query_string(&QueryParams::new()), "");
    }

    #[test]
    fn serializes_in_insertion_order() {
        let params: QueryParams = [("a", "b"), ("branch", "main")].into_iter().collect();
        assert_eq!(to_query_string(&params), "?a=b&branch=main");
    }

    #[test]
    fn skips_empty_values() {
        let params: QueryParams = [("branch", ""), ("embed", "true")].into_iter().collect();
        assert_eq!(to_query_string(&params), "?embed=true");

        let only_empty: QueryParams = [("branch", "")].into_iter().collect();
        assert_eq!(to_query_string(&only_empty), "");
    }

    #[test]
    fn percent_encodes_values() {
        let params: QueryParams = [("branch", "feat/new ui&x")].into_iter().collect();
        assert_eq!(to_query_string(&params), "?branch=feat%2Fnew+ui%26x");
    }

    #[test]
    fn parse_full_url() {
        let params = parse_query("https://app.example.com/app/page-1/edit?branch=dev&embed=true#top");
        assert_eq!(params.get("branch"), Some("dev"));
        assert_eq!(params.get("embed"), Some("true"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn parse_relative_and_bare() {
        assert_eq!(parse_query("/a/b?x=1").get("x"), Some("1"));
        assert_eq!(parse_query("?x=2").get("x"), Some("2"));
        assert_eq!(parse_query("x=3&y=4").get("y"), Some("4"));
    }

    #[test]
    fn parse_without_query_is_empty() {
        assert!(parse_query("/applications/a/pages/b").is_empty());
        assert!(parse_query("https://example.com/").is_empty());
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn parse_repeated_key_keeps_last() {
        assert_eq!(parse_query("?branch=a&branch=b").get("branch"), Some("b"));
    }

    #[test]
    fn parse_decodes() {
        assert_eq!(parse_query("?branch=feat%2Fx+y").get("branch"), Some("feat/x y"));
    }

    #[test]
    fn param_pairs() {
        assert_eq!(
            parse_param_pair("env=prod"),
            Ok(("env".to_string(), "prod".to_string()))
        );
        assert_eq!(
            parse_param_pair("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert_eq!(
            parse_param_pair("novalue"),
            Err(ParamError::MissingSeparator("novalue".to_string()))
        );
        assert_eq!(
            parse_param_pair("=x"),
            Err(ParamError::EmptyKey("=x".to_string()))
        );
    }
}

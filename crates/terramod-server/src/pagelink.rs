//! Next-page URL construction

use axum::http::Uri;

/// Rebuild the current request URL with `limit`/`offset` replaced.
///
/// Every other query parameter keeps its position and raw encoding; the
/// incoming URI is not modified.
pub fn next_page_url(uri: &Uri, limit: usize, offset: usize) -> String {
    let mut pairs: Vec<String> = uri
        .query()
        .map(|query| {
            query
                .split('&')
                .filter(|pair| !pair.is_empty() && !is_page_param(pair))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    pairs.push(format!("limit={limit}"));
    pairs.push(format!("offset={offset}"));

    format!("{}?{}", uri.path(), pairs.join("&"))
}

fn is_page_param(pair: &str) -> bool {
    let key = pair.split_once('=').map_or(pair, |(key, _)| key);
    matches!(
        urlencoding::decode(key).as_deref(),
        Ok("limit") | Ok("offset")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn replaces_limit_and_offset() {
        let url = next_page_url(&uri("/v1/modules?offset=0&limit=15"), 15, 15);
        assert_eq!(url, "/v1/modules?limit=15&offset=15");
    }

    #[test]
    fn preserves_other_parameters() {
        let url = next_page_url(
            &uri("/v1/modules/search?q=vpc&offset=0&verified=true&limit=15"),
            15,
            30,
        );
        assert_eq!(url, "/v1/modules/search?q=vpc&verified=true&limit=15&offset=30");
    }

    #[test]
    fn works_without_an_existing_query_string() {
        let url = next_page_url(&uri("/v1/modules"), 10, 10);
        assert_eq!(url, "/v1/modules?limit=10&offset=10");
    }

    #[test]
    fn keeps_raw_encoding_of_untouched_parameters() {
        let url = next_page_url(&uri("/v1/modules/search?q=a%2Fb&offset=15"), 15, 30);
        assert_eq!(url, "/v1/modules/search?q=a%2Fb&limit=15&offset=30");
    }

    #[test]
    fn drops_percent_encoded_page_params() {
        let url = next_page_url(&uri("/v1/modules?%6Fffset=5"), 15, 15);
        assert_eq!(url, "/v1/modules?limit=15&offset=15");
    }
}

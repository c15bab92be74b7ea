use url::Url;

/// Joins a configured API base URL and a path, tolerating a trailing slash on the base.
///
/// `endpoint("https://api.coingecko.com/api/v3/", "simple/price")` yields
/// `https://api.coingecko.com/api/v3/simple/price`.
pub fn endpoint(base: &str, path: &str) -> Result<Url, url::ParseError> {
    let base = format!("{}/", base.trim_end_matches('/'));
    Url::parse(&base)?.join(path.trim_start_matches('/'))
}

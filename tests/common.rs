#![allow(dead_code)]

use httpmock::MockServer;
use iex_rs::StockQuery;

pub const PREFIX: &str = "https://iex.test/1.0/";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A query under the test prefix.
pub fn query<const N: usize>(symbols: [&str; N]) -> StockQuery {
    StockQuery::new(symbols).unwrap().prefix(PREFIX)
}

pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The query-string pairs of `url`, in order, split without decoding.
pub fn pairs(url: &str) -> Vec<(String, String)> {
    let Some((_, qs)) = url.split_once('?') else {
        return Vec::new();
    };
    qs.split('&')
        .map(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            (k.to_string(), v.to_string())
        })
        .collect()
}

pub fn value_of(url: &str, key: &str) -> Option<String> {
    pairs(url)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

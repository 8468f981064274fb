use crate::common::{PREFIX, occurrences, pairs, query, value_of};
use iex_rs::{
    ActionRange, ChartOptions, ChartRange, Endpoint, IexError, ListKind, ResponseFormat, StockQuery,
};

#[test]
fn multi_symbol_single_endpoint_is_a_batch() {
    let url = query(["AAPL", "BDC"]).quote(false).to_url();
    assert_eq!(url, format!("{PREFIX}stock/market/batch?symbols=AAPL,BDC&types=quote"));
}

#[test]
fn multi_symbol_batch_carries_params() {
    let url = query(["AAPL", "BDC", "fb"]).quote(true).to_url();
    assert!(url.starts_with(&format!("{PREFIX}stock/market/batch?")));
    assert!(url.contains("symbols=AAPL,BDC,FB"));
    assert!(url.contains("types=quote"));
    assert!(url.contains("displayPercent=true"));
}

#[test]
fn single_symbol_multi_endpoint_is_a_batch() {
    let q = query(["AAPL"]).quote(false).company();
    assert!(q.is_batch());
    assert_eq!(
        q.to_url(),
        format!("{PREFIX}stock/market/batch?symbols=AAPL&types=quote,company")
    );
}

#[test]
fn batch_drops_path_suffixes() {
    let url = query(["AAPL", "BDC"])
        .chart("20180531")
        .unwrap()
        .news(5)
        .unwrap()
        .to_url();
    assert!(!url.contains("/date/"));
    assert!(!url.contains("/last/"));
    assert_eq!(value_of(&url, "range").as_deref(), Some("date"));
    assert_eq!(value_of(&url, "exactDate").as_deref(), Some("20180531"));
    assert_eq!(value_of(&url, "last").as_deref(), Some("5"));
}

#[test]
fn end_to_end_batch() {
    let url = query(["AAPL", "BDC"])
        .quote(false)
        .news(5)
        .unwrap()
        .chart("1m")
        .unwrap()
        .to_url();

    assert!(url.contains("stock/market/batch"));
    assert!(url.contains("symbols=AAPL,BDC"));
    assert!(url.contains("range=1m"));
    assert!(url.contains("last=5"));

    let types = value_of(&url, "types").unwrap();
    let kinds: Vec<&str> = types.split(',').collect();
    for kind in ["quote", "news", "chart"] {
        assert_eq!(kinds.iter().filter(|k| **k == kind).count(), 1, "{kind} in {types}");
    }
}

#[test]
fn types_follow_selection_order() {
    let url = query(["AAPL", "BDC"])
        .stats()
        .logo()
        .quote(false)
        .peers()
        .to_url();
    assert_eq!(value_of(&url, "types").as_deref(), Some("stats,logo,quote,peers"));
}

#[test]
fn reselecting_keeps_original_position() {
    let q = query(["AAPL", "BDC"])
        .quote(false)
        .logo()
        .quote(true);
    let kinds: Vec<Endpoint> = q.endpoints().collect();
    assert_eq!(kinds, vec![Endpoint::Quote, Endpoint::Logo]);
    let url = q.to_url();
    assert_eq!(value_of(&url, "types").as_deref(), Some("quote,logo"));
    assert_eq!(occurrences(&url, "displayPercent=true"), 1);
}

#[test]
fn first_shared_range_wins() {
    let url = query(["AAPL", "BDC"])
        .chart_with(ChartRange::Ytd, ChartOptions::default())
        .dividends(ActionRange::Y1)
        .to_url();

    assert_eq!(occurrences(&url, "range="), 1);
    assert_eq!(value_of(&url, "range").as_deref(), Some("ytd"));
    assert!(!url.contains("range=1y"));
}

#[test]
fn first_shared_range_wins_in_reverse_order() {
    let url = query(["AAPL", "BDC"])
        .splits(ActionRange::M6)
        .dividends(ActionRange::Y5)
        .chart("1d")
        .unwrap()
        .to_url();

    assert_eq!(occurrences(&url, "range="), 1);
    assert_eq!(value_of(&url, "range").as_deref(), Some("6m"));
}

#[test]
fn per_occurrence_params_are_not_deduplicated() {
    let url = query(["AAPL", "BDC"])
        .quote(true)
        .list(ListKind::MostActive, true)
        .to_url();
    assert_eq!(occurrences(&url, "displayPercent=true"), 2);
    assert_eq!(value_of(&url, "list").as_deref(), Some("mostactive"));
    // the list rewrote the first slot
    assert!(url.contains("symbols=market,BDC"));
}

#[test]
fn query_params_precede_shared_options() {
    let opts = ChartOptions {
        interval: 3,
        ..ChartOptions::default()
    };
    let url = query(["AAPL", "BDC"])
        .chart_with(ChartRange::M3, opts)
        .quote(true)
        .to_url();
    let keys: Vec<String> = pairs(&url).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["symbols", "types", "chartInterval", "displayPercent", "range"]);
}

#[test]
fn batch_is_well_formed() {
    let url = query(["AAPL", "BDC"])
        .quote(true)
        .chart("1y")
        .unwrap()
        .dividends(ActionRange::Y2)
        .to_url();
    assert_eq!(occurrences(&url, "?"), 1);
    assert!(!url.contains("&&"));
    assert!(!url.ends_with('&'));
    assert!(!url.ends_with('?'));
    let again = query(["AAPL", "BDC"])
        .quote(true)
        .chart("1y")
        .unwrap()
        .dividends(ActionRange::Y2)
        .to_url();
    assert_eq!(url, again);
}

#[test]
fn symbols_are_percent_encoded_individually() {
    let url = query(["BRK A", "BDC"]).quote(false).to_url();
    assert!(url.contains("symbols=BRK+A,BDC"));
}

#[test]
fn checked_url_enforces_batch_limit() {
    let ten = query(["AAPL"])
        .book()
        .company()
        .earnings()
        .logo()
        .ohlc()
        .peers()
        .previous()
        .price()
        .relevant()
        .stats();
    assert!(ten.url().is_ok());

    let eleven = ten.volume_by_venue();
    assert!(matches!(eleven.url(), Err(IexError::InvalidArgument(_))));
    // rendering stays infallible
    assert!(eleven.to_url().contains("types=book,company"));
}

#[test]
fn checked_url_keeps_commas_literal() {
    let url = StockQuery::new(["AAPL", "BDC"])
        .unwrap()
        .quote(false)
        .url()
        .unwrap();
    assert_eq!(url.query(), Some("symbols=AAPL,BDC&types=quote"));
}

#[test]
fn file_dates_are_dropped_in_a_batch() {
    let url = query(["AAPL", "BDC"])
        .short_interest(Some("20180531"), ResponseFormat::Csv)
        .unwrap()
        .quote(false)
        .to_url();
    assert!(!url.contains("20180531"));
    assert_eq!(value_of(&url, "types").as_deref(), Some("short-interest,quote"));
    assert_eq!(value_of(&url, "format").as_deref(), Some("csv"));

    let url = query(["AAPL"])
        .threshold_securities(Some("sample"), ResponseFormat::Json)
        .unwrap()
        .stats()
        .to_url();
    assert!(!url.contains("sample"));
    assert_eq!(
        url,
        format!("{PREFIX}stock/market/batch?symbols=market&types=threshold-securities,stats")
    );
}

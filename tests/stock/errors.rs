use crate::common::query;
use iex_rs::{ActionRange, ChartOptions, ChartRange, IexError, ListKind, ResponseFormat, StockQuery};

#[test]
fn no_symbols_is_invalid() {
    let empty: [&str; 0] = [];
    assert!(matches!(StockQuery::new(empty), Err(IexError::InvalidArgument(_))));
    assert!(matches!(
        StockQuery::new(Vec::<String>::new()),
        Err(IexError::InvalidArgument(_))
    ));
}

#[test]
fn bad_chart_range_names_the_value() {
    match query(["AAPL"]).chart("not-a-range") {
        Err(IexError::InvalidRange(msg)) => assert!(msg.contains("not-a-range"), "{msg}"),
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn chart_date_must_be_eight_digits() {
    for bad in ["2018053", "201805311", "2018-05-31", "2018053a", "", "6mo", "max"] {
        assert!(
            matches!(query(["AAPL"]).chart(bad), Err(IexError::InvalidRange(_))),
            "{bad:?} should be rejected"
        );
    }
    assert!(query(["AAPL"]).chart("20180531").is_ok());
    assert!(query(["AAPL"]).historical_prices("bogus").is_err());
    assert!(query(["AAPL"]).time_series("bogus").is_err());
}

#[test]
fn every_named_chart_range_parses() {
    for name in ["5y", "2y", "1y", "ytd", "6m", "3m", "1m", "1d", "dynamic"] {
        let range: ChartRange = name.parse().unwrap();
        assert_eq!(range.as_str(), name);
    }
}

#[test]
fn action_range_parse() {
    assert_eq!("ytd".parse::<ActionRange>().unwrap(), ActionRange::Ytd);
    assert!(matches!("1d".parse::<ActionRange>(), Err(IexError::InvalidRange(_))));
    assert!(matches!(
        "dynamic".parse::<ActionRange>(),
        Err(IexError::InvalidRange(_))
    ));
}

#[test]
fn news_bounds() {
    assert!(matches!(query(["AAPL"]).news(0), Err(IexError::InvalidArgument(_))));
    assert!(matches!(query(["AAPL"]).news(51), Err(IexError::InvalidArgument(_))));
    assert!(query(["AAPL"]).news(1).is_ok());
    assert!(query(["AAPL"]).news(50).is_ok());
}

#[test]
fn file_endpoint_dates() {
    assert!(matches!(
        query(["AAPL"]).threshold_securities(Some("yesterday"), ResponseFormat::Json),
        Err(IexError::InvalidArgument(_))
    ));
    assert!(matches!(
        query(["AAPL"]).short_interest(Some("2018-05-31"), ResponseFormat::Csv),
        Err(IexError::InvalidArgument(_))
    ));
    assert!(query(["AAPL"]).short_interest(Some("sample"), ResponseFormat::Csv).is_ok());
}

#[test]
fn unknown_names_are_invalid_arguments() {
    assert!(matches!("movers".parse::<ListKind>(), Err(IexError::InvalidArgument(_))));
    assert!(matches!("xml".parse::<ResponseFormat>(), Err(IexError::InvalidArgument(_))));
    assert!(matches!(
        "weekly".parse::<iex_rs::FinancialsPeriod>(),
        Err(IexError::InvalidArgument(_))
    ));
}

#[test]
fn chart_date_constructor_rejects_non_dates() {
    for bad in ["not-a-range", "2018-05-31", "1y", ""] {
        match ChartRange::date(bad) {
            Err(IexError::InvalidRange(msg)) => assert!(msg.contains(bad), "{msg}"),
            other => panic!("expected InvalidRange for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn typed_chart_dates_always_render_eight_digits() {
    let range = ChartRange::date("20180531").unwrap();
    let url = query(["AAPL"])
        .chart_with(range, ChartOptions::default())
        .to_url();
    assert!(url.contains("/chart/date/20180531"));
    assert!(url.contains("exactDate=20180531"));

    // a date that failed validation never reaches the builder
    assert!(query(["AAPL"]).chart("not-a-range").is_err());
}

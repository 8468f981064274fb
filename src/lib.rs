//! iex-rs: fluent query builder for the IEX stock API.
//!
//! Compose one or more symbols with one or more endpoint selections, then render
//! a single request URL. Several endpoints or several symbols collapse into one
//! `stock/market/batch` call; range-style options are shared across the batch and
//! the first endpoint to set one wins.
//!
//! ```
//! use iex_rs::{ActionRange, ChartOptions, ChartRange, StockQuery};
//!
//! # fn main() -> Result<(), iex_rs::IexError> {
//! let single = StockQuery::new(["aapl"])?.quote(true).to_url();
//! assert_eq!(single, "https://api.iextrading.com/1.0/stock/AAPL/quote?displayPercent=true");
//!
//! let batch = StockQuery::new(["AAPL", "BDC"])?
//!     .chart_with(ChartRange::Ytd, ChartOptions::default())
//!     .dividends(ActionRange::Y1)
//!     .to_url();
//! assert!(batch.ends_with("types=chart,dividends&range=ytd"));
//! # Ok(())
//! # }
//! ```
//!
//! [`IexClient`] is a thin transport that GETs the produced URL and hands back the body.

pub mod core;
pub mod stock;

pub use crate::core::{IexClient, IexClientBuilder, IexError};
pub use stock::{
    ActionRange, ChartDate, ChartOptions, ChartRange, Endpoint, FinancialsPeriod, ListKind,
    MARKET, MAX_BATCH_ENDPOINTS, Params, ResponseFormat, Selection, StockQuery,
};

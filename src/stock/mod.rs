//! Fluent builder for `stock/...` request URLs.
//!
//! A [`StockQuery`] is created with its symbols, then threaded through one
//! selection call per endpoint (see the methods in `select`). [`StockQuery::to_url`]
//! renders either a direct single-endpoint URL or a `stock/market/batch` URL.

mod assemble;
mod endpoint;
mod params;
mod select;

pub use endpoint::Endpoint;
pub use params::{
    ActionRange, ChartDate, ChartOptions, ChartRange, FinancialsPeriod, ListKind, Params,
    ResponseFormat,
};

use std::fmt;

use url::Url;

use crate::core::IexError;
use crate::core::client::constants::DEFAULT_BASE_URL;

/// Symbol placeholder for requests that address the whole market.
pub const MARKET: &str = "market";

/// Upper bound on endpoint kinds in one batch call, checked by [`StockQuery::url`].
pub const MAX_BATCH_ENDPOINTS: usize = 10;

/// Accumulated state for one selected endpoint kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub(crate) path_suffix: String,
    pub(crate) query_params: Params,
    pub(crate) shared_options: Params,
}

impl Selection {
    /// Path text appended after the kind name in single-endpoint URLs, e.g. `/date/20180531`.
    pub fn path_suffix(&self) -> &str {
        &self.path_suffix
    }

    /// Parameters rendered for every occurrence, including inside a batch.
    pub fn query_params(&self) -> &Params {
        &self.query_params
    }

    /// Parameters emitted once per batch; the first kind to set a key wins.
    pub fn shared_options(&self) -> &Params {
        &self.shared_options
    }
}

/// A composable request against the stock resource family.
///
/// # Example
///
/// ```
/// # use iex_rs::StockQuery;
/// # fn main() -> Result<(), iex_rs::IexError> {
/// let url = StockQuery::new(["AAPL", "BDC"])?
///     .quote(false)
///     .news(5)?
///     .chart("1m")?
///     .to_url();
///
/// assert!(url.starts_with("https://api.iextrading.com/1.0/stock/market/batch?symbols=AAPL,BDC"));
/// assert!(url.contains("types=quote,news,chart"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    #[doc(hidden)]
    pub(crate) symbols: Vec<String>,
    #[doc(hidden)]
    pub(crate) selections: Vec<(Endpoint, Selection)>,
    #[doc(hidden)]
    pub(crate) prefix: String,
}

impl StockQuery {
    /// Creates a query for one or more symbols.
    ///
    /// Symbols are trimmed and uppercased; any casing of `market` becomes the
    /// [`MARKET`] sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if `symbols` is empty.
    pub fn new<I, S>(symbols: I) -> Result<Self, IexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| normalize_symbol(s.as_ref()))
            .collect();
        if symbols.is_empty() {
            return Err(IexError::InvalidArgument(
                "a stock query needs at least one symbol".into(),
            ));
        }
        Ok(Self {
            symbols,
            selections: Vec::new(),
            prefix: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// A query addressed to the whole market.
    pub fn market() -> Self {
        Self {
            symbols: vec![MARKET.to_string()],
            selections: Vec::new(),
            prefix: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL the path is appended to. A trailing `/` is added if missing.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.prefix = prefix;
        self
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Selected kinds, in selection order.
    pub fn endpoints(&self) -> impl Iterator<Item = Endpoint> + '_ {
        self.selections.iter().map(|(e, _)| *e)
    }

    /// The accumulated state for `endpoint`, if it was selected.
    pub fn selection(&self, endpoint: Endpoint) -> Option<&Selection> {
        self.selections
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, s)| s)
    }

    /// True when the query renders as a `stock/market/batch` call.
    pub fn is_batch(&self) -> bool {
        assemble::is_batch(self.symbols.len(), self.selections.len())
    }

    /// Renders the request URL under this query's prefix.
    ///
    /// Pure and infallible: a query with no endpoints renders a degenerate
    /// `stock/<SYMBOL>` URL. Use [`StockQuery::url`] for a checked result.
    pub fn to_url(&self) -> String {
        assemble::assemble(&self.prefix, &self.symbols, &self.selections)
    }

    /// Renders the request URL under `prefix` instead of the query's own prefix.
    pub fn to_url_with(&self, prefix: &Url) -> String {
        let mut base = prefix.as_str().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        assemble::assemble(&base, &self.symbols, &self.selections)
    }

    /// Renders and parses the request URL.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if nothing was selected or a batch names more
    /// than [`MAX_BATCH_ENDPOINTS`] kinds, and [`IexError::Url`] if the prefix is not a URL.
    pub fn url(&self) -> Result<Url, IexError> {
        self.check_selections()?;
        Ok(Url::parse(&self.to_url())?)
    }

    /// Like [`StockQuery::url`], under a different prefix.
    ///
    /// # Errors
    ///
    /// Same as [`StockQuery::url`].
    pub fn url_with(&self, prefix: &Url) -> Result<Url, IexError> {
        self.check_selections()?;
        Ok(Url::parse(&self.to_url_with(prefix))?)
    }

    fn check_selections(&self) -> Result<(), IexError> {
        if self.selections.is_empty() {
            return Err(IexError::InvalidArgument("no endpoint selected".into()));
        }
        if self.is_batch() && self.selections.len() > MAX_BATCH_ENDPOINTS {
            return Err(IexError::InvalidArgument(format!(
                "a batch request takes at most {MAX_BATCH_ENDPOINTS} endpoints, got {}",
                self.selections.len()
            )));
        }
        Ok(())
    }

    /* -------- internal helpers used by `select` -------- */

    /// Records `selection` under `endpoint`, overwriting an earlier selection in place.
    pub(crate) fn select(mut self, endpoint: Endpoint, selection: Selection) -> Self {
        if endpoint.is_market_wide()
            && let Some(first) = self.symbols.first_mut()
        {
            *first = MARKET.to_string();
        }
        match self.selections.iter_mut().find(|(e, _)| *e == endpoint) {
            Some(slot) => slot.1 = selection,
            None => self.selections.push((endpoint, selection)),
        }
        self
    }
}

impl fmt::Display for StockQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

fn normalize_symbol(raw: &str) -> String {
    let s = raw.trim();
    if s.eq_ignore_ascii_case(MARKET) {
        MARKET.to_string()
    } else {
        s.to_ascii_uppercase()
    }
}

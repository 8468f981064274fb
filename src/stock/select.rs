//! One selection method per [`Endpoint`]. Each consumes the query and hands it back.

use super::params::check_file_date;
use super::{
    ActionRange, ChartOptions, ChartRange, Endpoint, FinancialsPeriod, ListKind, MARKET,
    ResponseFormat, Selection, StockQuery,
};
use crate::core::IexError;

/// Article count the `news` endpoint returns when none is given.
const NEWS_DEFAULT_LAST: u32 = 10;
const NEWS_MAX_LAST: u32 = 50;

impl StockQuery {
    /* ---------------- plain kinds ---------------- */

    #[must_use]
    pub fn book(self) -> Self {
        self.select(Endpoint::Book, Selection::default())
    }

    #[must_use]
    pub fn company(self) -> Self {
        self.select(Endpoint::Company, Selection::default())
    }

    /// 15-minute delayed market quote.
    #[must_use]
    pub fn delayed_quote(self) -> Self {
        self.select(Endpoint::DelayedQuote, Selection::default())
    }

    #[must_use]
    pub fn earnings(self) -> Self {
        self.select(Endpoint::Earnings, Selection::default())
    }

    #[must_use]
    pub fn effective_spread(self) -> Self {
        self.select(Endpoint::EffectiveSpread, Selection::default())
    }

    #[must_use]
    pub fn largest_trades(self) -> Self {
        self.select(Endpoint::LargestTrades, Selection::default())
    }

    #[must_use]
    pub fn logo(self) -> Self {
        self.select(Endpoint::Logo, Selection::default())
    }

    /// Official open and close.
    #[must_use]
    pub fn ohlc(self) -> Self {
        self.select(Endpoint::Ohlc, Selection::default())
    }

    /// Alias of [`StockQuery::ohlc`].
    #[must_use]
    pub fn open_close(self) -> Self {
        self.ohlc()
    }

    #[must_use]
    pub fn peers(self) -> Self {
        self.select(Endpoint::Peers, Selection::default())
    }

    /// Previous day adjusted price data.
    #[must_use]
    pub fn previous(self) -> Self {
        self.select(Endpoint::Previous, Selection::default())
    }

    #[must_use]
    pub fn price(self) -> Self {
        self.select(Endpoint::Price, Selection::default())
    }

    #[must_use]
    pub fn relevant(self) -> Self {
        self.select(Endpoint::Relevant, Selection::default())
    }

    #[must_use]
    pub fn stats(self) -> Self {
        self.select(Endpoint::Stats, Selection::default())
    }

    #[must_use]
    pub fn volume_by_venue(self) -> Self {
        self.select(Endpoint::VolumeByVenue, Selection::default())
    }

    /* ---------------- quote / financials ---------------- */

    /// Selects `quote`; `display_percent` sends `displayPercent=true`.
    #[must_use]
    pub fn quote(self, display_percent: bool) -> Self {
        let mut sel = Selection::default();
        sel.query_params.flag("displayPercent", display_percent);
        self.select(Endpoint::Quote, sel)
    }

    /// Selects `financials`. Quarterly is the upstream default and sends nothing.
    #[must_use]
    pub fn financials(self, period: FinancialsPeriod) -> Self {
        let mut sel = Selection::default();
        if period != FinancialsPeriod::default() {
            sel.query_params.set("period", period.as_str());
        }
        self.select(Endpoint::Financials, sel)
    }

    /* ---------------- chart ---------------- */

    /// Selects `chart` for a range given as text: a named range (`1y`, `ytd`,
    /// `dynamic`, ...) or a `YYYYMMDD` date.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidRange`] for any other value.
    pub fn chart(self, range: &str) -> Result<Self, IexError> {
        let range: ChartRange = range.parse()?;
        Ok(self.chart_with(range, ChartOptions::default()))
    }

    /// Selects `chart` with a typed range and extra options.
    ///
    /// The range lands in the shared `range` option, so in a batch the first
    /// range-bearing endpoint decides it for everyone.
    #[must_use]
    pub fn chart_with(self, range: ChartRange, options: ChartOptions) -> Self {
        let mut sel = Selection {
            path_suffix: range.path_suffix(),
            ..Selection::default()
        };
        options.write(&mut sel.query_params);
        range.write_shared(&mut sel.shared_options);
        self.select(Endpoint::Chart, sel)
    }

    /// Alias of [`StockQuery::chart`].
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidRange`] if `range` is not recognized.
    pub fn historical_prices(self, range: &str) -> Result<Self, IexError> {
        self.chart(range)
    }

    /// Alias of [`StockQuery::chart`].
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidRange`] if `range` is not recognized.
    pub fn time_series(self, range: &str) -> Result<Self, IexError> {
        self.chart(range)
    }

    /* ---------------- corporate actions ---------------- */

    #[must_use]
    pub fn dividends(self, range: ActionRange) -> Self {
        self.select(Endpoint::Dividends, action_selection(range))
    }

    #[must_use]
    pub fn splits(self, range: ActionRange) -> Self {
        self.select(Endpoint::Splits, action_selection(range))
    }

    /* ---------------- news ---------------- */

    /// Selects the `last` most recent articles (1 to 50).
    ///
    /// The upstream default of 10 is indistinguishable from "not specified" and
    /// renders as a bare `news`.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if `last` is outside `1..=50`.
    pub fn news(self, last: u32) -> Result<Self, IexError> {
        if !(1..=NEWS_MAX_LAST).contains(&last) {
            return Err(IexError::InvalidArgument(format!(
                "news accepts 1..={NEWS_MAX_LAST} articles, got {last}"
            )));
        }
        let mut sel = Selection::default();
        if last != NEWS_DEFAULT_LAST {
            sel.path_suffix = format!("/last/{last}");
            sel.query_params.positive("last", last);
        }
        Ok(self.select(Endpoint::News, sel))
    }

    /* ---------------- market-wide ---------------- */

    /// Selects a market list. Always addressed to the market; the first symbol is replaced.
    #[must_use]
    pub fn list(self, kind: ListKind, display_percent: bool) -> Self {
        let mut sel = Selection {
            path_suffix: format!("/{}", kind.as_str()),
            ..Selection::default()
        };
        sel.query_params.set("list", kind.as_str());
        sel.query_params.flag("displayPercent", display_percent);
        self.select(Endpoint::List, sel)
    }

    /// Selects the Reg SHO threshold securities file for `date` (`YYYYMMDD` or `sample`),
    /// or the latest one. Always addressed to the market.
    ///
    /// The date lives only in the path, so a batch drops it and asks for the latest file.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] for a malformed `date`.
    pub fn threshold_securities(
        self,
        date: Option<&str>,
        format: ResponseFormat,
    ) -> Result<Self, IexError> {
        let sel = file_selection(date, format)?;
        Ok(self.select(Endpoint::ThresholdSecurities, sel))
    }

    /// Selects consolidated short interest for `date` (`YYYYMMDD` or `sample`), or the latest.
    /// An empty first symbol is read as the market.
    ///
    /// The date lives only in the path, so a batch drops it and asks for the latest data.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] for a malformed `date`.
    pub fn short_interest(
        mut self,
        date: Option<&str>,
        format: ResponseFormat,
    ) -> Result<Self, IexError> {
        let sel = file_selection(date, format)?;
        if let Some(first) = self.symbols.first_mut()
            && first.is_empty()
        {
            *first = MARKET.to_string();
        }
        Ok(self.select(Endpoint::ShortInterest, sel))
    }
}

fn action_selection(range: ActionRange) -> Selection {
    let mut sel = Selection {
        path_suffix: format!("/{}", range.as_str()),
        ..Selection::default()
    };
    sel.shared_options.set("range", range.as_str());
    sel
}

fn file_selection(date: Option<&str>, format: ResponseFormat) -> Result<Selection, IexError> {
    let mut sel = Selection::default();
    if let Some(date) = date {
        sel.path_suffix = format!("/{}", check_file_date(date)?);
    }
    if format != ResponseFormat::default() {
        sel.query_params.set("format", format.as_str());
    }
    Ok(sel)
}

use std::fmt;
use std::str::FromStr;

use crate::core::IexError;

/// An insertion-ordered list of query-string `key=value` pairs.
///
/// Setting a key that is already present replaces its value in place, so the
/// rendered order is the order in which keys were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Sets `key=true` when `on`; leaves the list untouched otherwise.
    pub fn flag(&mut self, key: &str, on: bool) {
        if on {
            self.set(key, "true");
        }
    }

    /// Sets `key` to the decimal form of `n` when it is positive.
    pub fn positive(&mut self, key: &str, n: u32) {
        if n > 0 {
            self.set(key, n.to_string());
        }
    }

    /// Looks up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/* ---------------- chart ---------------- */

/// Time span accepted by the `chart` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartRange {
    Y5,
    Y2,
    Y1,
    Ytd,
    M6,
    M3,
    M1,
    D1,
    /// One day of minute bars if the market is open, otherwise one month of daily bars.
    Dynamic,
    /// A single trading day.
    Date(ChartDate),
}

/// A validated `YYYYMMDD` day for [`ChartRange::Date`].
///
/// Only built through [`ChartRange::date`], [`ChartRange::on`] or parsing, so the
/// 8-digit form always holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartDate(String);

impl ChartDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ChartRange {
    /// The single-day form for `date`.
    pub fn on(date: chrono::NaiveDate) -> Self {
        Self::Date(ChartDate(date.format("%Y%m%d").to_string()))
    }

    /// The single-day form for a `YYYYMMDD` string.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidRange`] unless `date` is exactly 8 ASCII digits.
    pub fn date(date: &str) -> Result<Self, IexError> {
        if is_yyyymmdd(date) {
            Ok(Self::Date(ChartDate(date.to_string())))
        } else {
            Err(IexError::InvalidRange(format!("{date:?} is not a YYYYMMDD date")))
        }
    }

    /// Wire text: the named range, or the raw `YYYYMMDD` string for [`ChartRange::Date`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Y5 => "5y",
            Self::Y2 => "2y",
            Self::Y1 => "1y",
            Self::Ytd => "ytd",
            Self::M6 => "6m",
            Self::M3 => "3m",
            Self::M1 => "1m",
            Self::D1 => "1d",
            Self::Dynamic => "dynamic",
            Self::Date(d) => d.as_str(),
        }
    }

    pub(crate) fn path_suffix(&self) -> String {
        match self {
            Self::Date(d) => format!("/date/{d}"),
            named => format!("/{}", named.as_str()),
        }
    }

    pub(crate) fn write_shared(&self, shared: &mut Params) {
        match self {
            Self::Date(d) => {
                shared.set("range", "date");
                shared.set("exactDate", d.as_str());
            }
            named => shared.set("range", named.as_str()),
        }
    }
}

impl FromStr for ChartRange {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "5y" => Self::Y5,
            "2y" => Self::Y2,
            "1y" => Self::Y1,
            "ytd" => Self::Ytd,
            "6m" => Self::M6,
            "3m" => Self::M3,
            "1m" => Self::M1,
            "1d" => Self::D1,
            "dynamic" => Self::Dynamic,
            d if is_yyyymmdd(d) => Self::Date(ChartDate(d.to_string())),
            other => {
                return Err(IexError::InvalidRange(format!(
                    "{other:?} is neither a named chart range nor a YYYYMMDD date"
                )));
            }
        })
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra knobs for the `chart` endpoint. Everything defaults to "not sent".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartOptions {
    /// `chartReset`: reset a `1d` chart at midnight instead of 9:30 ET.
    pub reset: bool,
    /// `chartSimplify`: run the Douglas-Peucker reduction server side.
    pub simplify: bool,
    /// `chartInterval`: return every n-th data point. `0` means unset.
    pub interval: u32,
    /// `changeFromClose`: for `1d`, report change relative to the previous close.
    pub change_from_close: bool,
    /// `chartLast`: only the trailing n data points. `0` means unset.
    pub last: u32,
}

impl ChartOptions {
    pub(crate) fn write(&self, params: &mut Params) {
        params.flag("chartReset", self.reset);
        params.flag("chartSimplify", self.simplify);
        params.positive("chartInterval", self.interval);
        params.flag("changeFromClose", self.change_from_close);
        params.positive("chartLast", self.last);
    }
}

/* ---------------- dividends / splits ---------------- */

/// Look-back window for the `dividends` and `splits` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRange {
    Y5,
    Y2,
    Y1,
    Ytd,
    M6,
    M3,
    M1,
}

impl ActionRange {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Y5 => "5y",
            Self::Y2 => "2y",
            Self::Y1 => "1y",
            Self::Ytd => "ytd",
            Self::M6 => "6m",
            Self::M3 => "3m",
            Self::M1 => "1m",
        }
    }
}

impl FromStr for ActionRange {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "5y" => Self::Y5,
            "2y" => Self::Y2,
            "1y" => Self::Y1,
            "ytd" => Self::Ytd,
            "6m" => Self::M6,
            "3m" => Self::M3,
            "1m" => Self::M1,
            other => {
                return Err(IexError::InvalidRange(format!(
                    "{other:?} is not a dividend/split range"
                )));
            }
        })
    }
}

impl fmt::Display for ActionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------- list ---------------- */

/// Market-wide lists served by the `list` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    MostActive,
    Gainers,
    Losers,
    IexVolume,
    IexPercent,
}

impl ListKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostActive => "mostactive",
            Self::Gainers => "gainers",
            Self::Losers => "losers",
            Self::IexVolume => "iexvolume",
            Self::IexPercent => "iexpercent",
        }
    }
}

impl FromStr for ListKind {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mostactive" => Ok(Self::MostActive),
            "gainers" => Ok(Self::Gainers),
            "losers" => Ok(Self::Losers),
            "iexvolume" => Ok(Self::IexVolume),
            "iexpercent" => Ok(Self::IexPercent),
            other => Err(IexError::InvalidArgument(format!("unknown list {other:?}"))),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------- format / period ---------------- */

/// Body encoding for the threshold-securities and short-interest endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    #[default]
    Json,
    Csv,
    Psv,
}

impl ResponseFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Psv => "psv",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "psv" => Ok(Self::Psv),
            other => Err(IexError::InvalidArgument(format!(
                "unknown response format {other:?}"
            ))),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reporting period for the `financials` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FinancialsPeriod {
    #[default]
    Quarter,
    Annual,
}

impl FinancialsPeriod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarter => "quarter",
            Self::Annual => "annual",
        }
    }
}

impl FromStr for FinancialsPeriod {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quarter" => Ok(Self::Quarter),
            "annual" => Ok(Self::Annual),
            other => Err(IexError::InvalidArgument(format!(
                "unknown financials period {other:?}"
            ))),
        }
    }
}

impl fmt::Display for FinancialsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --- helpers --- */

pub(crate) fn is_yyyymmdd(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Accepts `YYYYMMDD` or the literal `sample` used by the daily-file endpoints.
pub(crate) fn check_file_date(date: &str) -> Result<&str, IexError> {
    if date == "sample" || is_yyyymmdd(date) {
        Ok(date)
    } else {
        Err(IexError::InvalidArgument(format!(
            "date must be YYYYMMDD or \"sample\", got {date:?}"
        )))
    }
}

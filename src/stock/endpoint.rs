use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::IexError;

/// The stock resources a [`StockQuery`](super::StockQuery) can select.
///
/// Each variant is a canonical kind; aliases such as `time-series` resolve to
/// [`Endpoint::Chart`] when parsed and never get a slot of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    Book,
    #[serde(alias = "historical-prices", alias = "time-series")]
    Chart,
    Company,
    DelayedQuote,
    Dividends,
    Earnings,
    EffectiveSpread,
    Financials,
    LargestTrades,
    List,
    Logo,
    News,
    #[serde(alias = "open-close")]
    Ohlc,
    Peers,
    Previous,
    Price,
    Quote,
    Relevant,
    ShortInterest,
    Splits,
    Stats,
    ThresholdSecurities,
    VolumeByVenue,
}

impl Endpoint {
    /// Every canonical kind, in wire-name order.
    pub const ALL: [Self; 23] = [
        Self::Book,
        Self::Chart,
        Self::Company,
        Self::DelayedQuote,
        Self::Dividends,
        Self::Earnings,
        Self::EffectiveSpread,
        Self::Financials,
        Self::LargestTrades,
        Self::List,
        Self::Logo,
        Self::News,
        Self::Ohlc,
        Self::Peers,
        Self::Previous,
        Self::Price,
        Self::Quote,
        Self::Relevant,
        Self::ShortInterest,
        Self::Splits,
        Self::Stats,
        Self::ThresholdSecurities,
        Self::VolumeByVenue,
    ];

    /// The path segment and `types=` entry for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Chart => "chart",
            Self::Company => "company",
            Self::DelayedQuote => "delayed-quote",
            Self::Dividends => "dividends",
            Self::Earnings => "earnings",
            Self::EffectiveSpread => "effective-spread",
            Self::Financials => "financials",
            Self::LargestTrades => "largest-trades",
            Self::List => "list",
            Self::Logo => "logo",
            Self::News => "news",
            Self::Ohlc => "ohlc",
            Self::Peers => "peers",
            Self::Previous => "previous",
            Self::Price => "price",
            Self::Quote => "quote",
            Self::Relevant => "relevant",
            Self::ShortInterest => "short-interest",
            Self::Splits => "splits",
            Self::Stats => "stats",
            Self::ThresholdSecurities => "threshold-securities",
            Self::VolumeByVenue => "volume-by-venue",
        }
    }

    /// Kinds that always address the whole market rather than one security.
    pub const fn is_market_wide(self) -> bool {
        matches!(self, Self::List | Self::ThresholdSecurities)
    }
}

impl FromStr for Endpoint {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "historical-prices" | "time-series" => Ok(Self::Chart),
            "open-close" => Ok(Self::Ohlc),
            other => Self::ALL
                .into_iter()
                .find(|e| e.as_str() == other)
                .ok_or_else(|| IexError::InvalidArgument(format!("unknown endpoint {other:?}"))),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

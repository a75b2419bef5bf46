use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Value Object - key of a series in the dataset ("bitcoin", "ethereum", ...)
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct CoinId(String);

impl CoinId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoinId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CoinId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - the numeric field plotted on the y axis.
/// The string forms are the field names used in `coins.json`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Metric {
    #[default]
    #[strum(serialize = "price_usd")]
    #[serde(rename = "price_usd")]
    PriceUsd,

    #[strum(serialize = "market_cap")]
    #[serde(rename = "market_cap")]
    MarketCap,

    #[strum(serialize = "24h_vol")]
    #[serde(rename = "24h_vol")]
    Volume24h,
}

impl Metric {
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Y-axis title
    pub fn axis_label(self) -> &'static str {
        match self {
            Self::PriceUsd => "Price ($)",
            Self::MarketCap => "Market Capitalization ($)",
            Self::Volume24h => "24 Hour Trading Volume ($)",
        }
    }

    /// Text of the entry in the metric dropdown
    pub fn option_label(self) -> &'static str {
        match self {
            Self::PriceUsd => "Price in dollars",
            Self::MarketCap => "Market capitalization",
            Self::Volume24h => "24 hour trading volume",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn metric_keys_round_trip_through_strum() {
        for metric in Metric::iter() {
            assert_eq!(Metric::from_str(metric.key()).ok(), Some(metric));
        }
        assert!(Metric::from_str("close").is_err());
    }

    #[test]
    fn axis_labels_are_fixed_per_metric() {
        assert_eq!(Metric::PriceUsd.axis_label(), "Price ($)");
        assert_eq!(Metric::MarketCap.axis_label(), "Market Capitalization ($)");
        assert_eq!(Metric::Volume24h.axis_label(), "24 Hour Trading Volume ($)");
    }
}

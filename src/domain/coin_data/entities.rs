use super::value_objects::{CoinId, Metric};
use crate::domain::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A metric cell as it appears in the file: usually a numeric string,
/// occasionally a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Text(String),
    Number(f64),
}

impl RawNumber {
    /// NaN when the text is not a number
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

/// One row of `coins.json`, untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub date: String,
    #[serde(default)]
    pub price_usd: Option<RawNumber>,
    #[serde(default)]
    pub market_cap: Option<RawNumber>,
    #[serde(default, rename = "24h_vol")]
    pub volume_24h: Option<RawNumber>,
}

impl RawSample {
    pub fn new(date: &str, price_usd: &str, market_cap: &str, volume_24h: &str) -> Self {
        Self {
            date: date.to_string(),
            price_usd: Some(RawNumber::Text(price_usd.to_string())),
            market_cap: Some(RawNumber::Text(market_cap.to_string())),
            volume_24h: Some(RawNumber::Text(volume_24h.to_string())),
        }
    }

    pub fn field(&self, metric: Metric) -> Option<&RawNumber> {
        match metric {
            Metric::PriceUsd => self.price_usd.as_ref(),
            Metric::MarketCap => self.market_cap.as_ref(),
            Metric::Volume24h => self.volume_24h.as_ref(),
        }
    }

    /// Value of `metric`; NaN when missing or not numeric
    pub fn metric_value(&self, metric: Metric) -> f64 {
        self.field(metric).map(RawNumber::to_f64).unwrap_or(f64::NAN)
    }
}

/// A plottable sample of the selected series: parsed date plus the
/// value of the selected metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Position of the source row inside its series
    pub index: usize,
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch, UTC midnight of `date`
    pub time_ms: f64,
    pub value: f64,
}

/// Every coin's samples. Loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: BTreeMap<CoinId, Vec<RawSample>>,
}

impl Dataset {
    pub fn new(series: BTreeMap<CoinId, Vec<RawSample>>) -> Self {
        Self { series }
    }

    pub fn from_json(text: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, Vec<RawSample>> = serde_json::from_str(text)?;
        if raw.is_empty() {
            return Err(AppError::Parse("dataset contains no coins".to_string()));
        }
        let series = raw.into_iter().map(|(coin, samples)| (CoinId::from(coin), samples));
        Ok(Self::new(series.collect()))
    }

    pub fn insert(&mut self, coin: CoinId, samples: Vec<RawSample>) {
        self.series.insert(coin, samples);
    }

    pub fn series(&self, coin: &CoinId) -> Option<&[RawSample]> {
        self.series.get(coin).map(Vec::as_slice)
    }

    pub fn contains(&self, coin: &CoinId) -> bool {
        self.series.contains_key(coin)
    }

    /// Coin keys in sorted order
    pub fn coins(&self) -> Vec<CoinId> {
        self.series.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_numbers_and_nulls() {
        let json = r#"{
            "bitcoin": [
                {"date": "12/05/2013", "price_usd": "117.0", "market_cap": null, "24h_vol": 0},
                {
                    "date": "13/05/2013",
                    "price_usd": "118.5",
                    "market_cap": "1300000000",
                    "24h_vol": "12.5"
                }
            ]
        }"#;
        let dataset = Dataset::from_json(json).unwrap();
        let series = dataset.series(&CoinId::from("bitcoin")).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].metric_value(Metric::PriceUsd), 117.0);
        assert!(series[0].metric_value(Metric::MarketCap).is_nan());
        assert_eq!(series[0].metric_value(Metric::Volume24h), 0.0);
        assert_eq!(series[1].metric_value(Metric::MarketCap), 1.3e9);
    }

    #[test]
    fn missing_field_is_nan() {
        let json = r#"{"ripple": [{"date": "01/01/2017", "price_usd": "0.0065"}]}"#;
        let dataset = Dataset::from_json(json).unwrap();
        let sample = &dataset.series(&CoinId::from("ripple")).unwrap()[0];
        assert!(sample.metric_value(Metric::Volume24h).is_nan());
    }

    #[test]
    fn garbage_text_is_nan() {
        let sample = RawSample::new("01/01/2017", "n/a", "", "12");
        assert!(sample.metric_value(Metric::PriceUsd).is_nan());
        assert!(sample.metric_value(Metric::MarketCap).is_nan());
        assert_eq!(sample.metric_value(Metric::Volume24h), 12.0);
    }

    #[test]
    fn rejects_malformed_and_empty_files() {
        assert!(matches!(Dataset::from_json("[1, 2]"), Err(AppError::Parse(_))));
        assert!(matches!(Dataset::from_json("{}"), Err(AppError::Parse(_))));
    }

    #[test]
    fn coins_are_sorted() {
        let json = r#"{"tether": [], "bitcoin": [], "litecoin": []}"#;
        let coins: Vec<String> =
            Dataset::from_json(json).unwrap().coins().iter().map(|c| c.to_string()).collect();
        assert_eq!(coins, vec!["bitcoin", "litecoin", "tether"]);
    }
}

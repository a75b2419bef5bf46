use crate::domain::{
    chart::{ChartLayout, DEFAULT_TRANSITION, Selection},
    coin_data::{CoinId, Metric},
    errors::{AppError, AppResult},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Chart settings. Every field has a default, so the page may pass a
/// partial JSON object (or nothing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub data_url: String,
    pub layout: ChartLayout,
    pub transition_ms: u64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub default_coin: String,
    pub default_metric: Metric,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            data_url: "data/coins.json".to_string(),
            layout: ChartLayout::default(),
            transition_ms: DEFAULT_TRANSITION.as_millis() as u64,
            x_ticks: 10,
            y_ticks: 6,
            default_coin: "bitcoin".to_string(),
            default_metric: Metric::PriceUsd,
        }
    }
}

impl ChartConfig {
    pub fn from_json(text: Option<&str>) -> AppResult<Self> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => serde_json::from_str(text)
                .map_err(|e| AppError::Parse(format!("chart config: {}", e))),
        }
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn initial_selection(&self) -> Selection {
        Selection::new(CoinId::from(self.default_coin.as_str()), self.default_metric)
    }
}

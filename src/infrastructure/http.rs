use crate::domain::{
    coin_data::Dataset,
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, get_logger},
};
use gloo::net::http::Request;

/// Fetches the coin dataset, a static JSON file served next to the page
#[derive(Debug, Clone)]
pub struct CoinDataClient {
    url: String,
}

impl CoinDataClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Single GET, no retries. Any transport or HTTP failure becomes
    /// `AppError::DataLoad`, a bad body becomes `AppError::Parse`.
    pub async fn fetch_dataset(&self) -> AppResult<Dataset> {
        get_logger().info(
            LogComponent::Infrastructure("CoinDataClient"),
            &format!("GET {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::DataLoad(format!("request to {} failed: {}", self.url, e)))?;

        if !response.ok() {
            return Err(AppError::DataLoad(format!(
                "{} answered {} {}",
                self.url,
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::DataLoad(format!("reading {} failed: {}", self.url, e)))?;

        let dataset = Dataset::from_json(&body)?;
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Infrastructure("CoinDataClient"),
            &format!("Loaded {} coins", dataset.len()),
            &format!("url={} bytes={}", self.url, body.len()),
        );
        Ok(dataset)
    }
}

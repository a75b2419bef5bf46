use derive_more::Display;

/// One error type for the whole chart; every layer maps into it.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Failed to load dataset: {}", _0)]
    DataLoad(String),
    #[display(fmt = "Parse error: {}", _0)]
    Parse(String),
    #[display(fmt = "No data to plot for {}", coin)]
    EmptySeries { coin: String },
    #[display(fmt = "Unknown coin: {}", _0)]
    UnknownCoin(String),
    #[display(fmt = "Rendering error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Parse(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Text for the status line shown under the chart
    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptySeries { coin } => format!("No data available for {}", coin),
            AppError::UnknownCoin(coin) => format!("{} is not in the dataset", coin),
            other => other.to_string(),
        }
    }
}

//! Browser adapters: dataset download, console logging and the SVG surface.

pub mod http;
pub mod rendering;
pub mod services;

pub use http::CoinDataClient;
pub use rendering::{ChartSignals, StatusMessage, SvgSurface};
pub use services::{BrowserTimeProvider, ConsoleLogger};

//! Application layer: chart configuration and the controller that turns
//! events into render commands.

pub mod config;
pub mod controller;

pub use config::ChartConfig;
pub use controller::{ChartController, RenderCommand, RenderSurface};

pub mod chart;
pub mod coin_data;
pub mod errors;
pub mod events;
pub mod logging;

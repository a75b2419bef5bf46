pub mod svg_surface;

pub use svg_surface::{ChartSignals, StatusMessage, SvgSurface};

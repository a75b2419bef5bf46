use crate::domain::coin_data::{CoinId, Dataset, Metric};
use std::fmt::Debug;

/// Base trait for chart inputs
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Everything the chart reacts to, consumed in arrival order by
/// `ChartController::dispatch`.
#[derive(Debug, Clone)]
pub enum ChartEvent {
    DatasetLoaded(Dataset),
    DatasetFailed { reason: String },
    CoinChanged(CoinId),
    MetricChanged(Metric),
    /// Pointer x in plot pixels (0 = left edge of the plot)
    PointerMoved { x: f64 },
    PointerEntered,
    PointerLeft,
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::DatasetLoaded(_) => "DatasetLoaded",
            ChartEvent::DatasetFailed { .. } => "DatasetFailed",
            ChartEvent::CoinChanged(_) => "CoinChanged",
            ChartEvent::MetricChanged(_) => "MetricChanged",
            ChartEvent::PointerMoved { .. } => "PointerMoved",
            ChartEvent::PointerEntered => "PointerEntered",
            ChartEvent::PointerLeft => "PointerLeft",
        }
    }
}

impl ChartEvent {
    /// Pointer traffic is too chatty to log at debug level
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            ChartEvent::PointerMoved { .. } | ChartEvent::PointerEntered | ChartEvent::PointerLeft
        )
    }
}

use crate::application::config::ChartConfig;
use crate::domain::{
    chart::{ChartFrame, Geometry, Selection, Tooltip, plan_frame, tooltip_at},
    coin_data::{CoinId, Dataset, Metric},
    errors::{AppError, AppResult},
    events::{ChartEvent, DomainEvent},
    logging::LogComponent,
};
use crate::{log_debug, log_error, log_info, log_trace, log_warn};
use std::time::Duration;

const COMPONENT: LogComponent = LogComponent::Application("ChartController");

/// Instructions for whatever draws the chart
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Neutral status text ("Loading ...")
    ShowStatus(String),
    /// Visible error or empty-state text
    ShowError(String),
    ClearMessage,
    /// Entries of the coin dropdown
    SetCoinOptions(Vec<CoinId>),
    /// Dropdowns should display this selection
    SyncSelection(Selection),
    SetAxisLabel(&'static str),
    /// Animate axes and line from whatever is on screen to `geometry`
    AnimateTo { geometry: Geometry, duration: Duration },
    /// Remove axes and line (empty state)
    ClearChart,
    MoveTooltip(Tooltip),
    ShowTooltip,
    HideTooltip,
}

/// Drawing surface injected into the controller
pub trait RenderSurface {
    fn apply(&mut self, command: RenderCommand) -> AppResult<()>;
}

/// Owns the selection and the dataset, turns events into render commands.
pub struct ChartController<S: RenderSurface> {
    config: ChartConfig,
    surface: S,
    dataset: Option<Dataset>,
    selection: Selection,
    frame: Option<ChartFrame>,
    pointer_inside: bool,
    /// Last reported pointer x in plot pixels
    pointer_x: Option<f64>,
}

impl<S: RenderSurface> ChartController<S> {
    pub fn new(config: ChartConfig, surface: S) -> Self {
        let selection = config.initial_selection();
        Self {
            config,
            surface,
            dataset: None,
            selection,
            frame: None,
            pointer_inside: false,
            pointer_x: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn frame(&self) -> Option<&ChartFrame> {
        self.frame.as_ref()
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Puts the surface in its loading state. The caller starts the dataset
    /// fetch and reports back with `DatasetLoaded` / `DatasetFailed`.
    pub fn initialize(&mut self) -> AppResult<()> {
        log_info!(COMPONENT, "Initializing chart, data from {}", self.config.data_url);
        self.surface.apply(RenderCommand::SyncSelection(self.selection.clone()))?;
        self.surface.apply(RenderCommand::SetAxisLabel(self.selection.metric.axis_label()))?;
        self.surface.apply(RenderCommand::ShowStatus("Loading data...".to_string()))
    }

    /// Single entry point for every input
    pub fn dispatch(&mut self, event: ChartEvent) -> AppResult<()> {
        if event.is_pointer() {
            log_trace!(COMPONENT, "event {}", event.event_type());
        } else {
            log_debug!(COMPONENT, "event {}", event.event_type());
        }
        match event {
            ChartEvent::DatasetLoaded(dataset) => self.on_dataset_loaded(dataset),
            ChartEvent::DatasetFailed { reason } => self.on_dataset_failed(&reason),
            ChartEvent::CoinChanged(coin) => self.on_selection_changed(Some(coin), None),
            ChartEvent::MetricChanged(metric) => self.on_selection_changed(None, Some(metric)),
            ChartEvent::PointerMoved { x } => self.on_pointer_move(x),
            ChartEvent::PointerEntered => self.on_pointer_enter(),
            ChartEvent::PointerLeft => self.on_pointer_leave(),
        }
    }

    pub fn on_dataset_loaded(&mut self, dataset: Dataset) -> AppResult<()> {
        log_info!(COMPONENT, "Dataset loaded with {} coins", dataset.len());
        self.surface.apply(RenderCommand::SetCoinOptions(dataset.coins()))?;

        if !dataset.contains(&self.selection.coin) {
            if let Some(first) = dataset.coins().into_iter().next() {
                log_warn!(
                    COMPONENT,
                    "{} not in dataset, showing {} instead",
                    self.selection.coin,
                    first
                );
                self.selection.coin = first;
            }
        }
        self.surface.apply(RenderCommand::SyncSelection(self.selection.clone()))?;

        self.dataset = Some(dataset);
        self.update()
    }

    pub fn on_dataset_failed(&mut self, reason: &str) -> AppResult<()> {
        let error = AppError::DataLoad(reason.to_string());
        log_error!(COMPONENT, "{}", error);
        self.surface.apply(RenderCommand::ShowError(error.user_message()))
    }

    /// Applies whichever parts of the selection changed, then redraws.
    pub fn on_selection_changed(
        &mut self,
        coin: Option<CoinId>,
        metric: Option<Metric>,
    ) -> AppResult<()> {
        if let Some(coin) = coin {
            self.selection.coin = coin;
        }
        if let Some(metric) = metric {
            self.selection.metric = metric;
        }
        self.update()
    }

    /// Recomputes the frame for the current selection and animates to it.
    /// An unknown coin or an empty series shows a message instead. With the
    /// pointer inside the plot the tooltip is re-snapped to the new frame.
    pub fn update(&mut self) -> AppResult<()> {
        let Some(dataset) = &self.dataset else {
            log_debug!(COMPONENT, "update before dataset load ignored");
            return Ok(());
        };

        self.surface.apply(RenderCommand::SetAxisLabel(self.selection.metric.axis_label()))?;

        match plan_frame(dataset, &self.selection, &self.config.layout) {
            Ok(frame) => {
                if frame.skipped > 0 {
                    log_debug!(
                        COMPONENT,
                        "{}: skipped {} samples without a valid {}",
                        frame.selection.coin,
                        frame.skipped,
                        frame.selection.metric
                    );
                }
                self.surface.apply(RenderCommand::ClearMessage)?;
                self.surface.apply(RenderCommand::AnimateTo {
                    geometry: frame.geometry(),
                    duration: self.config.transition(),
                })?;
                self.frame = Some(frame);
                self.refresh_tooltip()
            }
            Err(error @ (AppError::EmptySeries { .. } | AppError::UnknownCoin(_))) => {
                log_warn!(COMPONENT, "{}", error);
                self.frame = None;
                self.surface.apply(RenderCommand::HideTooltip)?;
                self.surface.apply(RenderCommand::ClearChart)?;
                self.surface.apply(RenderCommand::ShowError(error.user_message()))
            }
            Err(error) => Err(error),
        }
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64) -> AppResult<()> {
        self.pointer_x = Some(pointer_x);
        self.move_tooltip()
    }

    pub fn on_pointer_enter(&mut self) -> AppResult<()> {
        self.pointer_inside = true;
        if self.frame.is_none() {
            return Ok(());
        }
        self.surface.apply(RenderCommand::ShowTooltip)
    }

    pub fn on_pointer_leave(&mut self) -> AppResult<()> {
        self.pointer_inside = false;
        self.surface.apply(RenderCommand::HideTooltip)
    }

    fn move_tooltip(&mut self) -> AppResult<()> {
        let (Some(frame), Some(pointer_x)) = (&self.frame, self.pointer_x) else {
            return Ok(());
        };
        match tooltip_at(frame, pointer_x, &self.config.layout) {
            Some(tooltip) => self.surface.apply(RenderCommand::MoveTooltip(tooltip)),
            None => Ok(()),
        }
    }

    /// Tooltip state after a new frame: only while the pointer is inside
    fn refresh_tooltip(&mut self) -> AppResult<()> {
        if !self.pointer_inside {
            return Ok(());
        }
        self.move_tooltip()?;
        self.surface.apply(RenderCommand::ShowTooltip)
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin_data::RawSample;

    #[derive(Default)]
    struct Recorder(Vec<RenderCommand>);

    impl RenderSurface for Recorder {
        fn apply(&mut self, command: RenderCommand) -> AppResult<()> {
            self.0.push(command);
            Ok(())
        }
    }

    fn controller() -> ChartController<Recorder> {
        ChartController::new(ChartConfig::default(), Recorder::default())
    }

    #[test]
    fn events_before_load_do_not_draw() {
        let mut chart = controller();
        chart.dispatch(ChartEvent::MetricChanged(Metric::MarketCap)).unwrap();
        chart.dispatch(ChartEvent::PointerMoved { x: 10.0 }).unwrap();
        chart.dispatch(ChartEvent::PointerEntered).unwrap();
        assert!(chart.surface().0.is_empty());
        assert_eq!(chart.selection().metric, Metric::MarketCap);
    }

    #[test]
    fn missing_default_coin_falls_back_to_first() {
        let mut dataset = Dataset::default();
        dataset.insert(
            CoinId::from("ethereum"),
            vec![RawSample::new("01/01/2017", "8", "1", "1")],
        );
        let mut chart = controller();
        chart.on_dataset_loaded(dataset).unwrap();
        assert_eq!(chart.selection().coin, CoinId::from("ethereum"));
        assert!(chart.frame().is_some());
    }

    #[test]
    fn load_failure_is_visible() {
        let mut chart = controller();
        chart
            .dispatch(ChartEvent::DatasetFailed { reason: "HTTP 404".to_string() })
            .unwrap();
        assert_eq!(
            chart.surface().0,
            vec![RenderCommand::ShowError("Failed to load dataset: HTTP 404".to_string())]
        );
    }
}

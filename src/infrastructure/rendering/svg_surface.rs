use crate::application::{RenderCommand, RenderSurface};
use crate::domain::{
    chart::{Geometry, Selection, Tooltip, Transition},
    coin_data::CoinId,
    errors::AppResult,
    logging::LogComponent,
};
use crate::log_trace;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Delay between animation frames
const FRAME_MS: u32 = 16;

/// Text under the chart
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Reactive state the SVG view reads. `geometry == None` means nothing is plotted.
#[derive(Clone, Copy)]
pub struct ChartSignals {
    pub coins: RwSignal<Vec<CoinId>>,
    pub selection: RwSignal<Option<Selection>>,
    pub axis_label: RwSignal<&'static str>,
    pub geometry: RwSignal<Option<Geometry>>,
    pub tooltip: RwSignal<Option<Tooltip>>,
    pub tooltip_visible: RwSignal<bool>,
    pub message: RwSignal<Option<StatusMessage>>,
}

impl ChartSignals {
    pub fn new() -> Self {
        Self {
            coins: create_rw_signal(Vec::new()),
            selection: create_rw_signal(None),
            axis_label: create_rw_signal(""),
            geometry: create_rw_signal(None),
            tooltip: create_rw_signal(None),
            tooltip_visible: create_rw_signal(false),
            message: create_rw_signal(None),
        }
    }
}

impl Default for ChartSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Render surface backed by leptos signals. Transitions run as a timer
/// loop; starting a new one (or clearing) stops the previous loop, and the
/// new one starts from whatever geometry is currently displayed.
pub struct SvgSurface {
    signals: ChartSignals,
    generation: Rc<Cell<u64>>,
}

impl SvgSurface {
    pub fn new(signals: ChartSignals) -> Self {
        Self { signals, generation: Rc::new(Cell::new(0)) }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn animate_to(&self, target: Geometry, duration: Duration) {
        let generation = self.next_generation();
        let from = match self.signals.geometry.get_untracked() {
            Some(from) if !duration.is_zero() => from,
            _ => {
                self.signals.geometry.set(Some(target));
                return;
            }
        };

        let transition = Transition::new(from, target, duration);
        let geometry = self.signals.geometry;
        let current = Rc::clone(&self.generation);
        spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                if current.get() != generation {
                    log_trace!(
                        LogComponent::Infrastructure("SvgSurface"),
                        "transition {} interrupted",
                        generation
                    );
                    return;
                }
                let elapsed_secs = (js_sys::Date::now() - started) / 1000.0;
                let elapsed = Duration::from_secs_f64(elapsed_secs.max(0.0));
                geometry.set(Some(transition.sample(elapsed)));
                if transition.is_finished(elapsed) {
                    return;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    }
}

impl RenderSurface for SvgSurface {
    fn apply(&mut self, command: RenderCommand) -> AppResult<()> {
        let signals = self.signals;
        match command {
            RenderCommand::ShowStatus(text) => {
                signals.message.set(Some(StatusMessage { text, is_error: false }))
            }
            RenderCommand::ShowError(text) => {
                signals.message.set(Some(StatusMessage { text, is_error: true }))
            }
            RenderCommand::ClearMessage => signals.message.set(None),
            RenderCommand::SetCoinOptions(coins) => signals.coins.set(coins),
            RenderCommand::SyncSelection(selection) => signals.selection.set(Some(selection)),
            RenderCommand::SetAxisLabel(label) => signals.axis_label.set(label),
            RenderCommand::AnimateTo { geometry, duration } => self.animate_to(geometry, duration),
            RenderCommand::ClearChart => {
                self.next_generation();
                signals.geometry.set(None);
            }
            RenderCommand::MoveTooltip(tooltip) => signals.tooltip.set(Some(tooltip)),
            RenderCommand::ShowTooltip => signals.tooltip_visible.set(true),
            RenderCommand::HideTooltip => signals.tooltip_visible.set(false),
        }
        Ok(())
    }
}

use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{ChartConfig, ChartController},
    domain::{
        chart::{LinearScale, TimeScale, time_axis_ticks, value_axis_ticks},
        coin_data::{CoinId, Metric},
        errors::AppError,
        events::ChartEvent,
        logging::LogComponent,
    },
    event_utils::pointer_x_in_target,
    infrastructure::{ChartSignals, CoinDataClient, SvgSurface},
    log_error, log_warn,
};

const COMPONENT: LogComponent = LogComponent::Presentation("App");

/// Dropdowns, status line and the chart
#[component]
pub fn App(config: ChartConfig) -> impl IntoView {
    let signals = ChartSignals::new();
    let data_url = config.data_url.clone();
    let controller = store_value(ChartController::new(config.clone(), SvgSurface::new(signals)));

    let dispatch = move |event: ChartEvent| {
        controller.update_value(|chart| {
            if let Err(error) = chart.dispatch(event) {
                log_error!(COMPONENT, "{}", error);
            }
        });
    };

    controller.update_value(|chart| {
        if let Err(error) = chart.initialize() {
            log_error!(COMPONENT, "{}", error);
        }
    });

    spawn_local(async move {
        let event = match CoinDataClient::new(data_url).fetch_dataset().await {
            Ok(dataset) => ChartEvent::DatasetLoaded(dataset),
            Err(AppError::DataLoad(reason)) => ChartEvent::DatasetFailed { reason },
            Err(other) => ChartEvent::DatasetFailed { reason: other.to_string() },
        };
        dispatch(event);
    });

    let on_coin_change = move |ev: web_sys::Event| {
        dispatch(ChartEvent::CoinChanged(CoinId::from(event_target_value(&ev))))
    };

    let on_metric_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Metric>() {
            Ok(metric) => dispatch(ChartEvent::MetricChanged(metric)),
            Err(_) => {
                log_warn!(COMPONENT, "unknown metric option {:?}", value);
            }
        }
    };

    let selected_coin = move || {
        signals
            .selection
            .with(|s| s.as_ref().map(|s| s.coin.value().to_string()).unwrap_or_default())
    };
    let selected_metric = move || {
        signals
            .selection
            .with(|s| s.as_ref().map(|s| s.metric.key()).unwrap_or_default())
    };
    let message_text = move || {
        signals
            .message
            .with(|m| m.as_ref().map(|m| m.text.clone()).unwrap_or_default())
    };
    let message_is_error = move || signals.message.with(|m| m.as_ref().is_some_and(|m| m.is_error));

    view! {
        <div class="coin-stats">
            <div class="controls">
                <select id="coin-select" on:change=on_coin_change prop:value=selected_coin>
                    <For
                        each=move || signals.coins.get()
                        key=|coin| coin.value().to_string()
                        children=move |coin| {
                            let key = coin.value().to_string();
                            view! { <option value=key.clone()>{key}</option> }
                        }
                    />
                </select>
                <select id="var-select" on:change=on_metric_change prop:value=selected_metric>
                    {Metric::iter()
                        .map(|metric| {
                            view! { <option value=metric.key()>{metric.option_label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            <ChartSvg signals=signals config=config dispatch=dispatch />
            <p class="chart-status" class:error=message_is_error>
                {message_text}
            </p>
        </div>
    }
}

/// Plot area, axes, line and the hover focus
#[component]
fn ChartSvg<F>(signals: ChartSignals, config: ChartConfig, dispatch: F) -> impl IntoView
where
    F: Fn(ChartEvent) + Copy + 'static,
{
    let layout = config.layout;
    let (width, height) = (layout.width(), layout.height());
    let (x_count, y_count) = (config.x_ticks, config.y_ticks);

    let x_ticks = move || {
        signals.geometry.with(|geometry| {
            geometry
                .as_ref()
                .map(|g| time_axis_ticks(&TimeScale::new(g.x_domain, (0.0, width)), x_count))
                .unwrap_or_default()
        })
    };
    let y_ticks = move || {
        signals.geometry.with(|geometry| {
            geometry
                .as_ref()
                .map(|g| value_axis_ticks(&LinearScale::new(g.y_domain, (height, 0.0)), y_count))
                .unwrap_or_default()
        })
    };
    let plotted = move || signals.geometry.with(Option::is_some);
    let focus_visible = move || {
        plotted() && signals.tooltip_visible.get() && signals.tooltip.with(Option::is_some)
    };
    let display = |visible: bool| if visible { "inline" } else { "none" };
    let tooltip = move || signals.tooltip.get();
    let path_data = move || {
        signals
            .geometry
            .with(|g| g.as_ref().map(|g| g.path_data()).unwrap_or_default())
    };

    view! {
        <svg width=layout.outer_width height=layout.outer_height>
            <g transform=format!("translate({}, {})", layout.margin.left, layout.margin.top)>
                <path
                    class="line"
                    fill="none"
                    stroke="grey"
                    stroke-width="3px"
                    d=path_data
                />
                <g class="x axis" transform=format!("translate(0, {})", height)>
                    <path
                        class="domain"
                        stroke="currentColor"
                        fill="none"
                        style:display=move || display(plotted())
                        d=format!("M0.5,6V0.5H{}V6", width + 0.5)
                    />
                    {move || {
                        x_ticks()
                            .into_iter()
                            .map(|tick| {
                                view! {
                                    <g
                                        class="tick"
                                        transform=format!("translate({:.2},0)", tick.position)
                                    >
                                        <line stroke="currentColor" y2="6" />
                                        <text
                                            fill="currentColor"
                                            y="9"
                                            dy="0.71em"
                                            text-anchor="middle"
                                        >
                                            {tick.label}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                    <text
                        class="x-axis-title"
                        transform=format!("translate({}, 0)", width / 2.0)
                        style:text-anchor="start"
                        dy="4em"
                        fill="#5D6971"
                    >
                        "Time"
                    </text>
                </g>
                <g class="y axis">
                    <path
                        class="domain"
                        stroke="currentColor"
                        fill="none"
                        style:display=move || display(plotted())
                        d=format!("M-6,{}H0.5V0.5H-6", height + 0.5)
                    />
                    {move || {
                        y_ticks()
                            .into_iter()
                            .map(|tick| {
                                view! {
                                    <g
                                        class="tick"
                                        transform=format!("translate(0,{:.2})", tick.position)
                                    >
                                        <line stroke="currentColor" x2="-6" />
                                        <text
                                            fill="currentColor"
                                            x="-9"
                                            dy="0.32em"
                                            text-anchor="end"
                                        >
                                            {tick.label}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                    <text
                        class="y-axis-title"
                        y="6"
                        dy="-4em"
                        dx="-4.5em"
                        transform="rotate(-90)"
                        style:text-anchor="end"
                        fill="#5D6971"
                    >
                        {move || signals.axis_label.get()}
                    </text>
                </g>
                <g
                    class="focus"
                    style:display=move || display(focus_visible())
                    transform=move || {
                        tooltip()
                            .map(|t| format!("translate({:.2}, {:.2})", t.x, t.y))
                            .unwrap_or_default()
                    }
                >
                    <line
                        class="x-hover-line hover-line"
                        y1="0"
                        y2=move || tooltip().map(|t| t.x_line_length).unwrap_or(height)
                    />
                    <line
                        class="y-hover-line hover-line"
                        x1="0"
                        x2=move || tooltip().map(|t| t.y_line_length).unwrap_or(width)
                    />
                    <circle r="7.5" />
                    <text x="15" dy=".31em">
                        {move || tooltip().map(|t| t.text).unwrap_or_default()}
                    </text>
                </g>
                <rect
                    class="overlay"
                    width=width
                    height=height
                    fill="none"
                    pointer-events="all"
                    on:mouseover=move |_| dispatch(ChartEvent::PointerEntered)
                    on:mouseout=move |_| dispatch(ChartEvent::PointerLeft)
                    on:mousemove=move |ev| {
                        dispatch(ChartEvent::PointerMoved { x: pointer_x_in_target(&ev) })
                    }
                />
            </g>
        </svg>
    }
}

use leptos::{mount_to, view};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::ChartConfig;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod time_utils;

/// Element the chart mounts into when the page does not name one
pub const DEFAULT_MOUNT_ID: &str = "chart-area";

/// Installs the panic hook, the console logger and the browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "CoinStats module loaded");
}

/// Mounts the chart into `element_id` (default `chart-area`).
/// `config_json` is an optional, possibly partial, `ChartConfig` object.
#[wasm_bindgen]
pub fn mount_coin_stats(
    element_id: Option<String>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    let config = ChartConfig::from_json(config_json.as_deref()).map_err(to_js_error)?;
    let element_id = element_id.unwrap_or_else(|| DEFAULT_MOUNT_ID.to_string());
    let element = find_mount_point(&element_id).map_err(to_js_error)?;

    get_logger().info(
        LogComponent::Presentation("Mount"),
        &format!("Mounting chart into #{}", element_id),
    );
    mount_to(element, move || view! { <App config=config /> });
    Ok(())
}

fn find_mount_point(element_id: &str) -> AppResult<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .ok_or_else(|| AppError::Rendering(format!("#{} not found", element_id)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::Rendering(format!("#{} is not an HTML element", element_id)))
}

fn to_js_error(error: AppError) -> JsValue {
    get_logger().error(LogComponent::Presentation("Mount"), &error.to_string());
    JsValue::from_str(&error.to_string())
}

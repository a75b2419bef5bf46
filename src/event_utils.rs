use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Pointer x relative to the left edge of the element the listener is
/// attached to. Falls back to the page-relative x when the target is not
/// an element.
pub fn pointer_x_in_target(event: &MouseEvent) -> f64 {
    let left = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(|element| element.get_bounding_client_rect().left())
        .unwrap_or(0.0);
    event.client_x() as f64 - left
}

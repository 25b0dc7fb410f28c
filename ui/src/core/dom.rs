//! Browser glue for the upload page: alerts, Plotly, file inputs, drop target.
//!
//! Native builds get inert fallbacks that only log, so the components still
//! compile (and render) outside the browser.

use api::ChartPayload;

use crate::core::platform::PlatformFile;
use crate::upload::{CandidateFile, Effect};

pub const DROP_AREA_ID: &str = "drop-area";
pub const FILE_INPUT_ID: &str = "file-input";
pub const CHART_CONTAINER_ID: &str = "chart";

/// Perform the side effects requested by the controller, in order.
///
/// A failed chart draw does not stop the remaining effects; its reason is
/// returned so the controller can leave the success state.
pub fn apply_effects(effects: Vec<Effect>) -> Result<(), String> {
    let mut outcome = Ok(());
    for effect in effects {
        match effect {
            Effect::Alert(message) => alert(&message),
            Effect::DrawChart(payload) => {
                if let Err(err) = draw_chart(CHART_CONTAINER_ID, &payload) {
                    outcome = Err(err);
                }
            }
        }
    }
    outcome
}

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!("alert failed: {err:?}; message was {message:?}");
            }
        }
        None => tracing::warn!("no window for alert: {message}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::warn!("[alert] {message}");
}

/// `Plotly.newPlot(container, data, layout)`; replaces whatever was drawn before.
#[cfg(target_arch = "wasm32")]
pub fn draw_chart(container_id: &str, payload: &ChartPayload) -> Result<(), String> {
    use serde::Serialize;
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document unavailable")?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| format!("missing #{container_id}"))?;

    let plotly = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Plotly"))
        .map_err(|_| "Plotly lookup failed".to_string())?;
    if plotly.is_undefined() {
        return Err("Plotly is not loaded".into());
    }
    let new_plot = js_sys::Reflect::get(&plotly, &JsValue::from_str("newPlot"))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        .ok_or("Plotly.newPlot unavailable")?;

    // Plain JS objects/arrays, not Maps.
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let data = payload
        .data
        .serialize(&serializer)
        .map_err(|err| format!("chart data: {err}"))?;
    let layout = payload
        .layout
        .serialize(&serializer)
        .map_err(|err| format!("chart layout: {err}"))?;

    new_plot
        .call3(&plotly, &JsValue::from(container), &data, &layout)
        .map_err(|err| format!("Plotly.newPlot threw: {err:?}"))?;
    tracing::debug!("chart drawn into #{container_id}");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn draw_chart(container_id: &str, payload: &ChartPayload) -> Result<(), String> {
    tracing::debug!(
        traces = payload.data.as_array().map(Vec::len).unwrap_or(0),
        "no charting backend outside the browser; skipped #{container_id}"
    );
    Ok(())
}

/// Delegate a click on the drop area to the hidden file input.
#[cfg(target_arch = "wasm32")]
pub fn open_file_picker(input_id: &str) {
    use wasm_bindgen::JsCast;

    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match input {
        Some(input) => input.click(),
        None => tracing::warn!("file input #{input_id} not found"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_file_picker(input_id: &str) {
    tracing::debug!("file picker #{input_id} requested outside the browser");
}

#[cfg(target_arch = "wasm32")]
fn candidate_from(file: web_sys::File) -> CandidateFile<PlatformFile> {
    CandidateFile::new(file.name(), file.type_(), file)
}

/// First file currently held by the `<input type=file>`.
#[cfg(target_arch = "wasm32")]
pub fn picked_file(input_id: &str) -> Option<CandidateFile<PlatformFile>> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(input_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.item(0))
        .map(candidate_from)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn picked_file(_input_id: &str) -> Option<CandidateFile<PlatformFile>> {
    None
}

/// Register drag/drop listeners on the drop target.
///
/// Every drag event has its default (open the file in the tab) suppressed.
/// `on_drag(true)` fires on enter/over, `on_drag(false)` on leave/drop, and
/// `on_drop` receives the first dropped file, if any.
#[cfg(target_arch = "wasm32")]
pub fn install_drop_target<D, F>(target_id: &str, on_drag: D, mut on_drop: F) -> Result<(), String>
where
    D: FnMut(bool) + 'static,
    F: FnMut(Option<CandidateFile<PlatformFile>>) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::{closure::Closure, JsCast};

    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id))
        .ok_or_else(|| format!("drop target #{target_id} not found"))?;

    let on_drag = Rc::new(RefCell::new(on_drag));

    for (event, active) in [("dragenter", true), ("dragover", true), ("dragleave", false)] {
        let on_drag = on_drag.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |evt: web_sys::Event| {
            evt.prevent_default();
            evt.stop_propagation();
            (&mut *on_drag.borrow_mut())(active);
        });
        target
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|err| format!("listen {event}: {err:?}"))?;
        // Lives as long as the page.
        listener.forget();
    }

    let listener = Closure::<dyn FnMut(web_sys::DragEvent)>::new(move |evt: web_sys::DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        (&mut *on_drag.borrow_mut())(false);
        let first = evt
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.item(0))
            .map(candidate_from);
        on_drop(first);
    });
    target
        .add_event_listener_with_callback("drop", listener.as_ref().unchecked_ref())
        .map_err(|err| format!("listen drop: {err:?}"))?;
    listener.forget();

    tracing::debug!("drop target #{target_id} armed");
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_drop_target<D, F>(target_id: &str, _on_drag: D, _on_drop: F) -> Result<(), String>
where
    D: FnMut(bool) + 'static,
    F: FnMut(Option<CandidateFile<PlatformFile>>) + 'static,
{
    tracing::debug!("drop target #{target_id} is inert outside the browser");
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_effects_are_inert() {
        let outcome = apply_effects(vec![
            Effect::Alert("Please upload a CSV file.".into()),
            Effect::DrawChart(ChartPayload::decode(r#"{"data":[],"layout":{}}"#).unwrap()),
        ]);
        assert!(outcome.is_ok());
        assert!(picked_file(FILE_INPUT_ID).is_none());
        assert!(install_drop_target(DROP_AREA_ID, |_| {}, |_| {}).is_ok());
    }
}

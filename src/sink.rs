use wasm_bindgen::prelude::*;

use crate::event::LinkEvent;

/// Where click events get reported.
///
/// The interceptor only ever talks to this trait, so a page (or a test)
/// can substitute its own sink instead of the analytics global.
pub trait AnalyticsSink {
    /// Report one event. Errors are the caller's to log; they must never
    /// stop the click from navigating.
    fn track(&self, event: &LinkEvent) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = umami, js_name = track)]
    fn umami_track_with_props(event: &str, props: &JsValue) -> Result<(), JsValue>;
}

/// Binding to the Umami analytics global loaded by the page's script tag.
///
/// The category is the Umami event name; action and label ride along as
/// event props, omitted when absent.
pub struct UmamiSink;

impl AnalyticsSink for UmamiSink {
    fn track(&self, event: &LinkEvent) -> Result<(), JsValue> {
        // Check if umami exists before calling (it may be blocked by an
        // adblocker, or the page may not load it at all)
        let loaded = js_sys::eval("typeof umami !== 'undefined'")?;
        if !loaded.as_bool().unwrap_or(false) {
            return Err(JsValue::from_str("umami is not loaded"));
        }

        let props = js_sys::Object::new();
        if let Some(action) = &event.action {
            js_sys::Reflect::set(&props, &"action".into(), &action.as_str().into())?;
        }
        if let Some(label) = &event.label {
            js_sys::Reflect::set(&props, &"label".into(), &label.as_str().into())?;
        }
        umami_track_with_props(&event.category, &props)
    }
}

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget};

use crate::config::TrackerConfig;
use crate::event::ClickedLink;
use crate::log_warning;
use crate::navigate::{assign_after_delay, Navigator};
use crate::sink::AnalyticsSink;

/// Anchors opt in to tracking by carrying `data-category`.
const ANCHOR_SELECTOR: &str = "a[data-category]";

/// Install the click interceptor on `root` (the document, in production).
///
/// A single delegated listener matches clicked elements against
/// `a[data-category]` via `closest`, so anchors added to the DOM after
/// installation are covered without re-scanning.
pub fn install(
    root: &EventTarget,
    sink: Rc<dyn AnalyticsSink>,
    navigator: Rc<dyn Navigator>,
    config: TrackerConfig,
) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        handle_click(&event, sink.as_ref(), &navigator, config);
    }) as Box<dyn Fn(web_sys::Event)>);

    if root
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log_warning("Linktrack: could not attach the click listener");
    }
    closure.forget(); // the listener lives for the rest of the page
}

/// Handle one click: report the event, then navigate.
///
/// The analytics call is best-effort: a failing sink is logged and the
/// navigation happens regardless. Clicks that don't land on a trackable
/// anchor are left entirely to the browser.
fn handle_click(
    event: &Event,
    sink: &dyn AnalyticsSink,
    navigator: &Rc<dyn Navigator>,
    config: TrackerConfig,
) {
    let anchor = match trackable_anchor(event) {
        Some(a) => a,
        None => return,
    };
    let link = match ClickedLink::read(&anchor) {
        Some(l) => l,
        None => return, // no href, nothing to navigate to
    };

    if let Err(e) = sink.track(&link.event) {
        log_warning(&format!("Linktrack: analytics call failed: {:?}", e));
    }

    match link.target.as_deref() {
        Some(name) => navigator.open_named(&link.href, name),
        None => assign_after_delay(Rc::clone(navigator), link.href, config.delay_ms),
    }

    event.prevent_default();
}

/// The nearest enclosing trackable anchor of the event's target, if any.
fn trackable_anchor(event: &Event) -> Option<Element> {
    let target = event.target()?;
    let element: &Element = target.dyn_ref()?;
    element.closest(ANCHOR_SELECTOR).ok()?
}

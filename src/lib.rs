//! Click tracking for annotated links.
//!
//! Anchors opt in with a `data-category` attribute (plus optional
//! `data-action` / `data-label`). On click, one event is reported to the
//! analytics sink and the browser is then navigated to the link's `href`:
//! immediately in a named context when `target` is set, otherwise in the
//! current context after a short delay so the analytics call can go out
//! before the page unloads.
//!
//! Pages load the wasm module and call [`start`]:
//!
//! ```text
//! <script type="module">
//!   import init, { start } from "./linktrack.js";
//!   await init();
//!   start();
//! </script>
//! ```
//!
//! The delay is configurable through an optional JSON element (see
//! [`config::CONFIG_ELEMENT_ID`]). Embedders with their own analytics
//! backend wire it up via [`interceptor::install`] instead of [`start`].

pub mod config;
pub mod event;
pub mod interceptor;
pub mod navigate;
pub mod sink;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use config::TrackerConfig;
use navigate::BrowserNavigator;
use sink::UmamiSink;

/// Log a warning message to the browser console.
///
/// Used for non-fatal failures (blocked popups, malformed config, a
/// missing analytics global) that a developer might want to know about.
pub(crate) fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Wire the tracker to the live page: Umami as the sink, the real window
/// as the navigator, config read from the document.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return, // not running in a browser page
    };

    let config = TrackerConfig::load(&document);
    interceptor::install(
        &document,
        Rc::new(UmamiSink),
        Rc::new(BrowserNavigator),
        config,
    );
}

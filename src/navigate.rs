use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::log_warning;

/// Where clicks end up: a named browsing context, or the current one.
///
/// Split out as a trait so tests can record navigations instead of
/// actually leaving the page.
pub trait Navigator {
    /// Open `url` in the browsing context named `target` (e.g. `_blank`).
    fn open_named(&self, url: &str, target: &str);

    /// Navigate the current browsing context to `url`. Callers schedule
    /// any delay themselves.
    fn assign(&self, url: &str);
}

/// Navigator backed by the real browser window.
///
/// Failures (popup blocked, detached window) are logged and ignored;
/// there is nothing useful to do about them at this point.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_named(&self, url: &str, target: &str) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        match window.open_with_url_and_target(url, target) {
            Ok(Some(_)) => {}
            Ok(None) => log_warning(&format!(
                "Linktrack: window.open was blocked for {} (popup blocker?)",
                url
            )),
            Err(_) => log_warning(&format!("Linktrack: could not open {} in {}", url, target)),
        }
    }

    fn assign(&self, url: &str) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        if window.location().assign(url).is_err() {
            log_warning(&format!("Linktrack: could not navigate to {}", url));
        }
    }
}

/// Navigate the current context to `url` after `delay_ms` milliseconds,
/// giving the analytics call time to go out before the page unloads.
///
/// One-shot timer, no cancellation: overlapping clicks each schedule
/// their own independent navigation.
pub fn assign_after_delay(navigator: Rc<dyn Navigator>, url: String, delay_ms: u32) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let closure = Closure::once(Box::new(move || {
        navigator.assign(&url);
    }) as Box<dyn FnOnce()>);

    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
    closure.forget();
}

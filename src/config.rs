use serde::Deserialize;
use web_sys::Document;

use crate::log_warning;

/// `id` of the optional JSON config element a page can embed:
/// `<script type="application/json" id="linktrack-config">{"delay_ms": 100}</script>`
pub const CONFIG_ELEMENT_ID: &str = "linktrack-config";

fn default_delay_ms() -> u32 {
    100
}

/// Tracker settings embedded in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TrackerConfig {
    /// How long same-context navigation waits before unloading the page,
    /// so the analytics call has time to be transmitted.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl TrackerConfig {
    /// Load settings from the page's config element.
    ///
    /// Returns defaults if the element is missing (the common case, most
    /// pages don't configure anything), is empty, or holds JSON we can't
    /// parse. A malformed config is worth a console warning; an absent one
    /// is not.
    pub fn load(document: &Document) -> Self {
        let element = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(e) => e,
            None => return Self::default(),
        };
        let json = match element.text_content() {
            Some(j) => j,
            None => return Self::default(),
        };
        serde_json::from_str(&json).unwrap_or_else(|e| {
            log_warning(&format!(
                "Linktrack: ignoring malformed config (using defaults): {}",
                e
            ));
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_100ms() {
        assert_eq!(TrackerConfig::default().delay_ms, 100);
    }

    #[test]
    fn test_parses_an_explicit_delay() {
        let config: TrackerConfig = serde_json::from_str(r#"{"delay_ms": 250}"#).unwrap();
        assert_eq!(config.delay_ms, 250);
    }

    #[test]
    fn test_empty_object_falls_back_to_default_delay() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.delay_ms, 100);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(serde_json::from_str::<TrackerConfig>("not json").is_err());
    }
}

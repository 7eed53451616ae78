use web_sys::Element;

/// Category value that marks a link as a file download.
pub const DOWNLOADS_CATEGORY: &str = "Downloads";

/// One click's worth of analytics data, read from a trackable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
    pub category: String,
    pub action: Option<String>,
    pub label: Option<String>,
}

/// Everything the click handler needs from a trackable anchor: the event
/// record to report plus where (and how) to navigate afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickedLink {
    pub event: LinkEvent,
    pub href: String,
    pub target: Option<String>,
}

impl ClickedLink {
    /// Assemble a clicked link from raw attribute values.
    ///
    /// For the `"Downloads"` category the link URL becomes the label,
    /// overriding any explicit `data-label`. The comparison is
    /// case-sensitive, like every other attribute value here.
    ///
    /// An empty `target` attribute counts as absent: it names no browsing
    /// context, so the link navigates in the current one.
    pub fn from_attributes(
        category: String,
        action: Option<String>,
        label: Option<String>,
        href: String,
        target: Option<String>,
    ) -> Self {
        let label = if category == DOWNLOADS_CATEGORY {
            Some(href.clone())
        } else {
            label
        };
        let target = target.filter(|t| !t.is_empty());
        Self {
            event: LinkEvent {
                category,
                action,
                label,
            },
            href,
            target,
        }
    }

    /// Read a trackable anchor element.
    ///
    /// Returns `None` when the anchor does not opt in with `data-category`,
    /// or has no `href` to navigate to. Missing optional attributes are
    /// absent values, not errors.
    pub fn read(anchor: &Element) -> Option<Self> {
        let category = anchor.get_attribute("data-category")?;
        let href = anchor.get_attribute("href")?;
        Some(Self::from_attributes(
            category,
            anchor.get_attribute("data-action"),
            anchor.get_attribute("data-label"),
            href,
            anchor.get_attribute("target"),
        ))
    }
}

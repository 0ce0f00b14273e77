//! Page identifiers and constants the script binds to.
//!
//! Defaults match the markup shipped with the landing page. Every field can be
//! overridden so the same behaviour can be mounted on a differently named page
//! (or on a test document).

use crate::activity::ACTIVITY_ENTRIES;

/// Accuracy shown on the bar at load.
pub const DEFAULT_ACCURACY_PERCENT: u8 = 85;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// `id` of the container receiving the activity lines
    pub activity_log_id: String,
    /// `id` of the element whose width shows accuracy
    pub accuracy_bar_id: String,
    /// Attribute holding a scroll-target selector
    pub scroll_attribute: String,
    pub nav_selector: String,
    pub toggle_selector: String,
    /// Class present on the nav while the menu is open
    pub nav_open_class: String,
    pub accuracy_percent: u8,
    pub entries: &'static [&'static str],
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            activity_log_id: "activity-log".to_string(),
            accuracy_bar_id: "accuracy-bar".to_string(),
            scroll_attribute: "data-scroll".to_string(),
            nav_selector: ".nav".to_string(),
            toggle_selector: ".hamburger".to_string(),
            nav_open_class: "open".to_string(),
            accuracy_percent: DEFAULT_ACCURACY_PERCENT,
            entries: &ACTIVITY_ENTRIES,
        }
    }
}

impl PageConfig {
    pub fn with_activity_log_id(mut self, id: impl Into<String>) -> Self {
        self.activity_log_id = id.into();
        self
    }

    pub fn with_accuracy_bar_id(mut self, id: impl Into<String>) -> Self {
        self.accuracy_bar_id = id.into();
        self
    }

    pub fn with_scroll_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.scroll_attribute = attribute.into();
        self
    }

    pub fn with_nav_selector(mut self, selector: impl Into<String>) -> Self {
        self.nav_selector = selector.into();
        self
    }

    pub fn with_toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    pub fn with_nav_open_class(mut self, class: impl Into<String>) -> Self {
        self.nav_open_class = class.into();
        self
    }

    pub fn with_accuracy_percent(mut self, percent: u8) -> Self {
        self.accuracy_percent = percent;
        self
    }

    pub fn with_entries(mut self, entries: &'static [&'static str]) -> Self {
        self.entries = entries;
        self
    }

    /// Attribute-presence selector matching every scroll trigger.
    pub fn scroll_selector(&self) -> String {
        attribute_selector(&self.scroll_attribute)
    }
}

/// `[attribute]`: matches every element carrying `attribute`.
pub fn attribute_selector(attribute: &str) -> String {
    format!("[{attribute}]")
}

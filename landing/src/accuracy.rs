//! Accuracy bar width.

use std::fmt;

use tracing::debug;

use crate::config::DEFAULT_ACCURACY_PERCENT;
use crate::dom::Page;
use crate::error::{LandingError, Result};

/// Percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy(u8);

impl Accuracy {
    pub fn new(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(LandingError::InvalidAccuracy(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Value for the `width` style, e.g. `85%`.
    pub fn css_width(self) -> String {
        self.to_string()
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self(DEFAULT_ACCURACY_PERCENT)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

pub fn apply_accuracy<P: Page>(page: &P, bar: &P::Element, accuracy: Accuracy) -> Result<()> {
    page.set_style(bar, "width", &accuracy.css_width())?;
    debug!(width = %accuracy, "accuracy bar set");
    Ok(())
}

//! Error type for the landing page script.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    /// No global `window` (not running in a browser)
    #[error("no global window available")]
    NoWindow,

    /// Window exists but has no document
    #[error("window has no document")]
    NoDocument,

    /// A required page element is absent from the markup
    #[error("missing {role} element `{selector}`")]
    MissingElement {
        role: &'static str,
        selector: String,
    },

    /// The host rejected a selector string
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("accuracy must be within 0..=100, got {0}")]
    InvalidAccuracy(u8),

    /// Anything else the host reported as an exception
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl LandingError {
    pub fn missing(role: &'static str, selector: impl Into<String>) -> Self {
        LandingError::MissingElement {
            role,
            selector: selector.into(),
        }
    }
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        LandingError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

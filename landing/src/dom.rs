//! Host document seam.
//!
//! Everything the script does to the page goes through [`Page`], so the same
//! behaviour runs against the browser ([`crate::web::WebPage`]) or against an
//! in-memory tree ([`crate::memory::MemoryPage`]).

use crate::error::{LandingError, Result};

/// Click callback attached to an element. Lives as long as the page.
pub type ClickHandler = Box<dyn FnMut() + 'static>;

pub trait Page: Clone + 'static {
    /// Cheap, clonable handle to an element of this page.
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// First element matching `selector` in document order.
    ///
    /// `Err` only when the host rejects the selector itself.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>>;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn clear_children(&self, element: &Self::Element) -> Result<()>;

    /// Append a `<div>` whose text content is `text` (assigned as text, never markup).
    fn append_text_block(&self, parent: &Self::Element, text: &str) -> Result<()>;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<()>;

    /// Add (`present == true`) or remove a class.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool) -> Result<()>;

    /// Smooth-scroll `element` into the viewport.
    fn scroll_into_view(&self, element: &Self::Element) -> Result<()>;

    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<()>;
}

/// Look up a required element by id; absence is fatal.
pub fn require_by_id<P: Page>(page: &P, role: &'static str, id: &str) -> Result<P::Element> {
    page.element_by_id(id)
        .ok_or_else(|| LandingError::missing(role, format!("#{id}")))
}

/// Look up a required element by selector; absence is fatal.
pub fn require_selector<P: Page>(
    page: &P,
    role: &'static str,
    selector: &str,
) -> Result<P::Element> {
    page.query_selector(selector)?
        .ok_or_else(|| LandingError::missing(role, selector))
}

//! Browser implementation of [`Page`] over `web_sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::dom::{ClickHandler, Page};
use crate::error::{LandingError, Result};

#[derive(Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    /// Bind to the document of the global window.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let document = window.document().ok_or(LandingError::NoDocument)?;
        Ok(Self { document })
    }

    /// Off the web there is no window to bind to.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_window() -> Result<Self> {
        Err(LandingError::NoWindow)
    }

    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|_| LandingError::InvalidSelector(selector.to_string()))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|_| LandingError::InvalidSelector(selector.to_string()))?;

        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn clear_children(&self, element: &Element) -> Result<()> {
        element.set_inner_html("");
        Ok(())
    }

    fn append_text_block(&self, parent: &Element, text: &str) -> Result<()> {
        let block = self.document.create_element("div")?;
        block.set_text_content(Some(text));
        parent.append_child(&block)?;
        Ok(())
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        let html = element.dyn_ref::<HtmlElement>().ok_or_else(|| {
            LandingError::Dom(format!("<{}> has no inline style", element.tag_name()))
        })?;
        html.style().set_property(property, value)?;
        Ok(())
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) -> Result<()> {
        element.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    fn scroll_into_view(&self, element: &Element) -> Result<()> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) -> Result<()> {
        let closure = Closure::wrap(handler);
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        // Handlers stay bound for the lifetime of the page
        closure.forget();
        Ok(())
    }
}

//! Mobile navigation toggle.
//!
//! The open/closed state lives in [`NavState`]; the nav element's class is
//! only ever written from it, never read back.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::dom::Page;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}

/// Handle to a bound nav toggle. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct NavToggle {
    state: Rc<RefCell<NavState>>,
}

impl NavToggle {
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    /// Start closed: clear `open_class` on `nav`, then flip it on every click of `control`.
    pub fn bind<P: Page>(
        page: &P,
        nav: &P::Element,
        control: &P::Element,
        open_class: &str,
    ) -> Result<Self> {
        let toggle = Self::default();
        page.set_class(nav, open_class, false)?;

        let handler_page = page.clone();
        let handler_nav = nav.clone();
        let class = open_class.to_string();
        let state = Rc::clone(&toggle.state);
        page.on_click(
            control,
            Box::new(move || {
                let open = state.borrow_mut().toggle();
                if let Err(e) = handler_page.set_class(&handler_nav, &class, open) {
                    debug!(error = %e, "nav class update failed");
                }
            }),
        )?;

        Ok(toggle)
    }
}

//! Smooth scrolling for `[data-scroll]` triggers.
//!
//! Bindings are collected once at load. The target selector is resolved on
//! every click. A missing target does nothing and logs nothing; a malformed
//! selector does nothing but leaves a debug line.

use tracing::debug;

use crate::config::attribute_selector;
use crate::dom::Page;
use crate::error::Result;

/// A trigger element and the selector of the element it scrolls to.
#[derive(Debug, Clone)]
pub struct ScrollBinding<E> {
    pub trigger: E,
    pub target_selector: String,
}

/// Every element carrying `attribute`, paired with the attribute's value.
pub fn collect_scroll_bindings<P: Page>(
    page: &P,
    attribute: &str,
) -> Result<Vec<ScrollBinding<P::Element>>> {
    let triggers = page.query_selector_all(&attribute_selector(attribute))?;
    Ok(triggers
        .into_iter()
        .map(|trigger| {
            let target_selector = page.attribute(&trigger, attribute).unwrap_or_default();
            ScrollBinding {
                trigger,
                target_selector,
            }
        })
        .collect())
}

/// Scroll to the first match of `selector`. Returns whether anything scrolled.
pub fn scroll_to<P: Page>(page: &P, selector: &str) -> bool {
    let target = match page.query_selector(selector) {
        Ok(Some(target)) => target,
        Ok(None) => return false,
        Err(e) => {
            debug!(selector, error = %e, "scroll target not resolvable");
            return false;
        }
    };

    match page.scroll_into_view(&target) {
        Ok(()) => true,
        Err(e) => {
            debug!(selector, error = %e, "scroll failed");
            false
        }
    }
}

/// Collect and bind every scroll trigger on the page.
pub fn bind_scroll_triggers<P: Page>(
    page: &P,
    attribute: &str,
) -> Result<Vec<ScrollBinding<P::Element>>> {
    let bindings = collect_scroll_bindings(page, attribute)?;

    for binding in &bindings {
        let handler_page = page.clone();
        let selector = binding.target_selector.clone();
        page.on_click(
            &binding.trigger,
            Box::new(move || {
                scroll_to(&handler_page, &selector);
            }),
        )?;
    }

    debug!(count = bindings.len(), "scroll triggers bound");
    Ok(bindings)
}

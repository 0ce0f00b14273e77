//! Page boot sequence.

use tracing::{error, info};

use crate::accuracy::{Accuracy, apply_accuracy};
use crate::activity::render_activity;
use crate::config::PageConfig;
use crate::dom::{Page, require_by_id, require_selector};
use crate::error::Result;
use crate::logging;
use crate::nav::NavToggle;
use crate::scroll::{ScrollBinding, bind_scroll_triggers};
use crate::web::WebPage;

/// Everything bound during [`boot`].
pub struct Landing<P: Page> {
    pub scroll_bindings: Vec<ScrollBinding<P::Element>>,
    pub nav: NavToggle,
}

/// Render the activity log, set the accuracy bar, bind scroll triggers and the
/// nav toggle, in that order.
///
/// A missing container, bar, nav or toggle aborts at that step; nothing after
/// it runs. Missing scroll targets are not checked here.
pub fn boot<P: Page>(page: &P, config: &PageConfig) -> Result<Landing<P>> {
    let accuracy = Accuracy::new(config.accuracy_percent)?;

    let log = require_by_id(page, "activity log", &config.activity_log_id)?;
    render_activity(page, &log, config.entries)?;

    let bar = require_by_id(page, "accuracy bar", &config.accuracy_bar_id)?;
    apply_accuracy(page, &bar, accuracy)?;

    let scroll_bindings = bind_scroll_triggers(page, &config.scroll_attribute)?;

    let nav = require_selector(page, "nav", &config.nav_selector)?;
    let control = require_selector(page, "nav toggle", &config.toggle_selector)?;
    let nav = NavToggle::bind(page, &nav, &control, &config.nav_open_class)?;

    Ok(Landing {
        scroll_bindings,
        nav,
    })
}

/// Browser entry point.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());

    info!("InvenScan landing v{}", env!("CARGO_PKG_VERSION"));

    match WebPage::from_window().and_then(|page| boot(&page, &PageConfig::default())) {
        Ok(landing) => info!(
            scroll_triggers = landing.scroll_bindings.len(),
            "landing page ready"
        ),
        Err(e) => error!("landing page failed to start: {e}"),
    }
}

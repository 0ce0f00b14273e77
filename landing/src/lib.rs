//! Client-side behaviour for the InvenScan landing page.
//!
//! Runs once at load against markup that is already in the document:
//! renders the activity log, sets the accuracy bar, binds `[data-scroll]`
//! triggers and the mobile nav toggle. See [`app::boot`].

pub mod accuracy;
pub mod activity;
pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod memory;
pub mod nav;
pub mod scroll;
pub mod web;

pub use app::{Landing, boot, start};
pub use config::PageConfig;
pub use dom::Page;
pub use error::{LandingError, Result};
pub use memory::MemoryPage;
pub use web::WebPage;

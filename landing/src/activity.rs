//! Activity log: the numbered walkthrough of the invoice pipeline.

use tracing::debug;

use crate::dom::Page;
use crate::error::Result;

/// Steps of the invoice workflow, in display order.
pub const ACTIVITY_ENTRIES: [&str; 4] = [
    "Invoice captured via camera upload",
    "AI extracts items, quantities, and prices",
    "Clover inventory updates automatically",
    "Operators review only exceptions",
];

/// `index` is zero-based; the rendered position is one-based.
pub fn format_entry(index: usize, entry: &str) -> String {
    format!("{}. {}", index + 1, entry)
}

/// All lines exactly as they appear in the container.
pub fn activity_lines(entries: &[&str]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format_entry(i, entry))
        .collect()
}

/// Replace whatever `container` holds with one block per entry.
pub fn render_activity<P: Page>(page: &P, container: &P::Element, entries: &[&str]) -> Result<()> {
    page.clear_children(container)?;
    for line in activity_lines(entries) {
        page.append_text_block(container, &line)?;
    }
    debug!(count = entries.len(), "activity log rendered");
    Ok(())
}

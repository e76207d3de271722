//! Bootstrap Widgets
//!
//! Instantiates tooltips and popovers for every flagged element.

use crate::bindings::{Popover, Tooltip};
use crate::config::PageConfig;
use crate::dom;

/// Returns how many widgets were created. Stops at the first element the
/// toolkit refuses.
pub fn init_widgets(config: &PageConfig) -> Result<usize, String> {
    let mut created = 0;

    for element in dom::query_all(config.tooltip_selector) {
        Tooltip::new(&element).map_err(|e| format!("tooltip init failed: {:?}", e))?;
        created += 1;
    }

    for element in dom::query_all(config.popover_selector) {
        Popover::new(&element).map_err(|e| format!("popover init failed: {:?}", e))?;
        created += 1;
    }

    Ok(created)
}

//! Chip toggles.
//!
//! Every chip flips its own active class when clicked. Chips are independent;
//! selecting one never clears another.

use tracing::{debug, warn};

use crate::dom::Dom;
use crate::error::Result;
use crate::report::StepOutcome;
use crate::selector::Selector;

/// Bind a toggle of `active_class` to every element matching `selector`.
///
/// A chip whose listener cannot be registered is counted as failed and the
/// rest are still bound.
///
/// # Errors
/// Returns an error only if the query itself fails.
pub fn bind_chips<D: Dom>(dom: &D, selector: &Selector, active_class: &str) -> Result<StepOutcome> {
    let chips = dom.query_all(selector)?;
    let mut failed = 0;

    for chip in &chips {
        let handle = dom.clone();
        let target = chip.clone();
        let class = active_class.to_string();
        let bound = dom.on_click(
            chip,
            Box::new(move || {
                if let Err(err) = handle.toggle_class(&target, &class) {
                    warn!(behavior.step = "chips", error = %err, "Chip toggle failed");
                }
            }),
        );
        if let Err(err) = bound {
            warn!(behavior.step = "chips", error = %err, "Chip not bound");
            failed += 1;
        }
    }

    debug!(behavior.step = "chips", chips = chips.len(), failed, "Chips bound");
    Ok(StepOutcome::tally(chips.len() - failed, failed))
}

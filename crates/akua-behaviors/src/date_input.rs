//! Date input enhancement.

use tracing::{debug, warn};

use crate::capability::{DatePicker, DatePickerOptions};
use crate::dom::Dom;
use crate::error::Result;
use crate::report::StepOutcome;
use crate::selector::Selector;

/// Hand every element matching `selector` to the date picker.
///
/// Without a picker the step is skipped before any query runs. An element the
/// picker rejects is counted as failed; the remaining elements are still
/// initialized.
///
/// # Errors
/// Returns an error only if the query itself fails.
pub fn enhance_date_inputs<D: Dom>(
    dom: &D,
    selector: &Selector,
    picker: Option<&dyn DatePicker<D::Element>>,
    options: &DatePickerOptions,
) -> Result<StepOutcome> {
    let Some(picker) = picker else {
        debug!(behavior.step = "date_inputs", "No date picker loaded, skipping");
        return Ok(StepOutcome::Skipped {
            reason: "date picker not loaded".into(),
        });
    };

    let inputs = dom.query_all(selector)?;
    let mut failed = 0;
    for input in &inputs {
        if let Err(err) = picker.initialize(input, options) {
            warn!(behavior.step = "date_inputs", error = %err, "Date picker init failed");
            failed += 1;
        }
    }

    debug!(
        behavior.step = "date_inputs",
        inputs = inputs.len(),
        failed,
        date_format = %options.date_format,
        "Date inputs enhanced"
    );
    Ok(StepOutcome::tally(inputs.len() - failed, failed))
}

//! Tooltip enhancement.

use tracing::{debug, warn};

use crate::capability::TooltipFactory;
use crate::dom::Dom;
use crate::error::Result;
use crate::report::StepOutcome;
use crate::selector::Selector;

/// Construct one tooltip per element matching `selector`.
///
/// Nothing records which elements already carry a tooltip, so running this
/// twice on the same page attaches a second widget to each trigger.
///
/// # Errors
/// Returns an error only if the query itself fails.
pub fn enhance_tooltips<D: Dom>(
    dom: &D,
    selector: &Selector,
    factory: Option<&dyn TooltipFactory<D::Element>>,
) -> Result<StepOutcome> {
    let Some(factory) = factory else {
        debug!(behavior.step = "tooltips", "No tooltip library loaded, skipping");
        return Ok(StepOutcome::Skipped {
            reason: "tooltip library not loaded".into(),
        });
    };

    let triggers = dom.query_all(selector)?;
    let failed = triggers
        .iter()
        .filter(|trigger| {
            factory
                .attach(trigger)
                .inspect_err(|err| {
                    warn!(behavior.step = "tooltips", error = %err, "Tooltip not attached");
                })
                .is_err()
        })
        .count();

    debug!(behavior.step = "tooltips", triggers = triggers.len(), failed, "Tooltips attached");
    Ok(StepOutcome::tally(triggers.len() - failed, failed))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::memory::{ElementId, ElementSpec, MemoryDocument};

    fn tooltip_selector() -> Selector {
        Selector::attribute_value("data-bs-toggle", "tooltip")
    }

    fn counting_factory(count: &Rc<Cell<usize>>) -> impl Fn(&ElementId) -> Result<()> + use<> {
        let count = Rc::clone(count);
        move |_: &ElementId| -> Result<()> {
            count.set(count.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn one_widget_per_trigger() {
        let doc = MemoryDocument::new();
        doc.append(ElementSpec::new("a").attr("data-bs-toggle", "tooltip"));
        doc.append(ElementSpec::new("a").attr("data-bs-toggle", "tooltip"));
        doc.append(ElementSpec::new("a").attr("data-bs-toggle", "dropdown"));

        let created = Rc::new(Cell::new(0));
        let factory = counting_factory(&created);
        let outcome = enhance_tooltips(&doc, &tooltip_selector(), Some(&factory)).unwrap();

        assert_eq!(outcome, StepOutcome::tally(2, 0));
        assert_eq!(created.get(), 2);
    }

    #[test]
    fn running_twice_attaches_twice() {
        let doc = MemoryDocument::new();
        doc.append(ElementSpec::new("a").attr("data-bs-toggle", "tooltip"));

        let created = Rc::new(Cell::new(0));
        let factory = counting_factory(&created);
        enhance_tooltips(&doc, &tooltip_selector(), Some(&factory)).unwrap();
        enhance_tooltips(&doc, &tooltip_selector(), Some(&factory)).unwrap();

        assert_eq!(created.get(), 2);
    }

    #[test]
    fn missing_library_skips() {
        let doc = MemoryDocument::new();
        doc.append(ElementSpec::new("a").attr("data-bs-toggle", "tooltip"));

        let outcome = enhance_tooltips(&doc, &tooltip_selector(), None).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Skipped {
                reason: "tooltip library not loaded".into()
            }
        );
    }
}

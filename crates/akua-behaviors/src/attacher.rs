//! The behavior attacher.
//!
//! [`BehaviorAttacher::attach`] runs the four steps against a document once
//! it is ready. The steps are independent: each one is guarded on its own,
//! and an error in one is logged and recorded in the [`AttachReport`] while
//! the others carry on.
//!
//! # Example
//!
//! ```rust
//! use akua_behaviors::{BehaviorAttacher, Capabilities, Dom, ElementSpec, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let chip = doc.append(ElementSpec::new("span").attr("data-chip", ""));
//!
//! let report = BehaviorAttacher::default().attach(&doc, &Capabilities::none());
//! assert_eq!(report.chips.applied(), 1);
//! assert!(report.date_inputs.is_skipped());
//!
//! doc.click(chip);
//! assert!(doc.has_class(&chip, "active"));
//! ```

use tracing::{info, info_span, warn};

use crate::capability::Capabilities;
use crate::chip::bind_chips;
use crate::config::BehaviorConfig;
use crate::counter::bind_counter;
use crate::date_input::enhance_date_inputs;
use crate::dom::Dom;
use crate::error::{BehaviorError, ConfigError};
use crate::report::{AttachReport, CounterOutcome, StepOutcome};
use crate::tooltip::enhance_tooltips;

/// Runs the chip, counter, date input and tooltip steps.
#[derive(Debug, Clone, Default)]
pub struct BehaviorAttacher {
    config: BehaviorConfig,
}

impl BehaviorAttacher {
    /// Create an attacher after validating `config`.
    ///
    /// # Errors
    /// Returns `ConfigError` if a selector or name is invalid.
    pub fn new(config: BehaviorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Attach every behavior to `dom`.
    ///
    /// This never fails as a whole. Calling it twice on the same document
    /// binds every handler and tooltip a second time.
    pub fn attach<D: Dom>(&self, dom: &D, capabilities: &Capabilities<D::Element>) -> AttachReport {
        let span = info_span!("attach_behaviors");
        let _guard = span.enter();
        let config = &self.config;

        let chips = step("chips", bind_chips(dom, &config.chip, &config.active_class));

        let counter = bind_counter(dom, &config.counter).unwrap_or_else(|err| {
            warn!(behavior.step = "counter", error = %err, "Step failed");
            CounterOutcome::Failed {
                error: err.to_string(),
            }
        });

        let date_inputs = step(
            "date_inputs",
            enhance_date_inputs(
                dom,
                &config.date_input,
                capabilities.date_picker(),
                &config.date_picker,
            ),
        );

        let tooltips = step(
            "tooltips",
            enhance_tooltips(dom, &config.tooltip, capabilities.tooltip()),
        );

        info!(
            chips = chips.applied(),
            counter = counter.is_bound(),
            date_inputs = date_inputs.applied(),
            tooltips = tooltips.applied(),
            "Behaviors attached"
        );

        AttachReport {
            chips,
            counter,
            date_inputs,
            tooltips,
        }
    }
}

fn step(name: &'static str, result: Result<StepOutcome, BehaviorError>) -> StepOutcome {
    result.unwrap_or_else(|err| {
        warn!(behavior.step = name, error = %err, "Step failed");
        StepOutcome::Failed {
            error: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::ClickHandler;
    use crate::error::Result;
    use crate::memory::{ElementId, ElementSpec, MemoryDocument};
    use crate::selector::Selector;

    /// Rejects queries for one selector, delegating everything else.
    #[derive(Clone)]
    struct FlakyDocument {
        inner: MemoryDocument,
        broken: Selector,
    }

    impl Dom for FlakyDocument {
        type Element = ElementId;

        fn query_all(&self, selector: &Selector) -> Result<Vec<ElementId>> {
            if *selector == self.broken {
                return Err(BehaviorError::Query {
                    selector: selector.to_css(),
                    message: "SyntaxError".into(),
                });
            }
            self.inner.query_all(selector)
        }

        fn text(&self, element: &ElementId) -> String {
            self.inner.text(element)
        }

        fn set_text(&self, element: &ElementId, text: &str) -> Result<()> {
            self.inner.set_text(element, text)
        }

        fn has_class(&self, element: &ElementId, class: &str) -> bool {
            self.inner.has_class(element, class)
        }

        fn toggle_class(&self, element: &ElementId, class: &str) -> Result<bool> {
            self.inner.toggle_class(element, class)
        }

        fn on_click(&self, element: &ElementId, handler: ClickHandler) -> Result<()> {
            self.inner.on_click(element, handler)
        }
    }

    #[test]
    fn empty_page_attaches_nothing() {
        let doc = MemoryDocument::new();
        let report = BehaviorAttacher::default().attach(&doc, &Capabilities::none());

        assert_eq!(report.chips, StepOutcome::tally(0, 0));
        assert_eq!(
            report.counter,
            CounterOutcome::Inactive {
                missing: vec!["[data-dec]".into(), "[data-inc]".into(), "[data-out]".into()]
            }
        );
        assert!(report.date_inputs.is_skipped());
        assert!(report.tooltips.is_skipped());
    }

    #[test]
    fn failing_step_does_not_stop_the_others() {
        let inner = MemoryDocument::new();
        let chip = inner.append(ElementSpec::new("span").attr("data-chip", ""));
        inner.append(ElementSpec::new("button").attr("data-dec", ""));
        let inc = inner.append(ElementSpec::new("button").attr("data-inc", ""));
        let out = inner.append(ElementSpec::new("span").attr("data-out", "").text("2"));
        let doc = FlakyDocument {
            inner: inner.clone(),
            broken: Selector::attribute("data-chip"),
        };

        let report = BehaviorAttacher::default().attach(&doc, &Capabilities::none());

        assert!(matches!(report.chips, StepOutcome::Failed { .. }));
        assert_eq!(report.counter, CounterOutcome::Bound { initial: 2 });
        assert_eq!(inner.click(chip), 0);
        inner.click(inc);
        assert_eq!(inner.text(&out), "3");
    }

    #[test]
    fn failing_counter_query_is_reported() {
        let inner = MemoryDocument::new();
        let chip = inner.append(ElementSpec::new("span").attr("data-chip", ""));
        let doc = FlakyDocument {
            inner: inner.clone(),
            broken: Selector::attribute("data-out"),
        };

        let report = BehaviorAttacher::default().attach(&doc, &Capabilities::none());

        assert!(matches!(report.counter, CounterOutcome::Failed { .. }));
        inner.click(chip);
        assert!(inner.has_class(&chip, "active"));
    }

    #[test]
    fn custom_config_is_used() {
        let config = BehaviorConfig {
            chip: Selector::class("chip"),
            active_class: "on".into(),
            ..BehaviorConfig::default()
        };
        let attacher = BehaviorAttacher::new(config).unwrap();

        let doc = MemoryDocument::new();
        let chip = doc.append(ElementSpec::new("span").class("chip"));
        attacher.attach(&doc, &Capabilities::none());

        doc.click(chip);
        assert!(doc.has_class(&chip, "on"));
        assert!(!doc.has_class(&chip, "active"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BehaviorConfig {
            active_class: String::new(),
            ..BehaviorConfig::default()
        };
        assert!(BehaviorAttacher::new(config).is_err());
    }
}

//! Outcome of an attach pass.

use serde::Serialize;

/// What happened to one of the element-group steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step ran. `applied` elements were enhanced, `failed` were not.
    Applied { applied: usize, failed: usize },
    /// The optional library the step needs is not loaded.
    Skipped { reason: String },
    /// The step could not run at all.
    Failed { error: String },
}

impl StepOutcome {
    pub(crate) fn tally(applied: usize, failed: usize) -> Self {
        Self::Applied { applied, failed }
    }

    pub fn applied(&self) -> usize {
        match self {
            Self::Applied { applied, .. } => *applied,
            _ => 0,
        }
    }

    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// What happened to the traveler counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CounterOutcome {
    /// Both controls are bound; the counter starts at `initial`.
    Bound { initial: i64 },
    /// One or more of the three elements is missing; nothing was bound.
    Inactive { missing: Vec<String> },
    /// The step could not run at all.
    Failed { error: String },
}

impl CounterOutcome {
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound { .. })
    }
}

/// Summary of one [`BehaviorAttacher::attach`](crate::BehaviorAttacher::attach).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachReport {
    pub chips: StepOutcome,
    pub counter: CounterOutcome,
    pub date_inputs: StepOutcome,
    pub tooltips: StepOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_json_shape() {
        let report = AttachReport {
            chips: StepOutcome::tally(2, 0),
            counter: CounterOutcome::Inactive {
                missing: vec!["[data-out]".into()],
            },
            date_inputs: StepOutcome::Skipped {
                reason: "flatpickr not loaded".into(),
            },
            tooltips: StepOutcome::Failed {
                error: "boom".into(),
            },
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["chips"]["status"], "applied");
        assert_eq!(value["chips"]["applied"], 2);
        assert_eq!(value["counter"]["missing"][0], "[data-out]");
        assert_eq!(value["date_inputs"]["status"], "skipped");
        assert_eq!(value["tooltips"]["error"], "boom");
    }

    #[test]
    fn applied_count() {
        assert_eq!(StepOutcome::tally(3, 1).applied(), 3);
        assert_eq!(StepOutcome::Failed { error: String::new() }.applied(), 0);
        assert!(StepOutcome::Skipped { reason: String::new() }.is_skipped());
    }
}

use serde::Serialize;
use std::fmt;

/// The single authoritative state of an order submission.
///
/// `Idle -> Submitting -> Completed` on success, `Idle -> Submitting -> Failed`
/// on a transport error. `Failed` behaves like `Idle` for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Submitting,
    Completed,
    Failed,
}

impl LifecyclePhase {
    /// Whether a fresh submit may start from this phase.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, LifecyclePhase::Idle | LifecyclePhase::Failed)
    }

    pub fn is_terminal(&self) -> bool {
        *self == LifecyclePhase::Completed
    }

    pub fn view(&self) -> OrderView {
        match self {
            LifecyclePhase::Completed => OrderView::Confirmation,
            other => OrderView::Form {
                submitting: *other == LifecyclePhase::Submitting,
            },
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecyclePhase::Idle => "idle",
            LifecyclePhase::Submitting => "submitting",
            LifecyclePhase::Completed => "completed",
            LifecyclePhase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// What the buyer sees for a given phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "view")]
pub enum OrderView {
    /// The editable form; `submitting` disables the submit control.
    Form { submitting: bool },
    Confirmation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_acceptance() {
        assert!(LifecyclePhase::Idle.accepts_submit());
        assert!(LifecyclePhase::Failed.accepts_submit());
        assert!(!LifecyclePhase::Submitting.accepts_submit());
        assert!(!LifecyclePhase::Completed.accepts_submit());
    }

    #[test]
    fn test_views() {
        assert_eq!(
            LifecyclePhase::Idle.view(),
            OrderView::Form { submitting: false }
        );
        assert_eq!(
            LifecyclePhase::Submitting.view(),
            OrderView::Form { submitting: true }
        );
        assert_eq!(
            LifecyclePhase::Failed.view(),
            OrderView::Form { submitting: false }
        );
        assert_eq!(LifecyclePhase::Completed.view(), OrderView::Confirmation);
        assert!(LifecyclePhase::Completed.is_terminal());
    }
}

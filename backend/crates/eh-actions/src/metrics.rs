use crate::ActionOutcome;

use metrics::counter;

pub const ACTIONS_TOTAL: &str = "eh_actions_total";

/// Counter of finished actions, labelled by action name and outcome
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionMetrics;

impl ActionMetrics {
    pub fn record(action: &'static str, outcome: &ActionOutcome) {
        counter!(ACTIONS_TOTAL, "action" => action, "outcome" => outcome.label()).increment(1);
    }
}

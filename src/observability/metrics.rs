//! Action metrics.
//!
//! # Metrics
//! - `fundme_actions_total` (counter): actions by name and outcome
//!   (`ok`, `error`, `no_provider`, `ignored` for clicks on disabled buttons)
//! - `fundme_action_duration_seconds` (histogram): time spent per action
//!
//! Nothing installs a recorder here; without one these calls are no-ops.

use std::time::Duration;

/// Record a finished coordinator action.
pub fn record_action(action: &'static str, outcome: &'static str, elapsed: Duration) {
    metrics::counter!("fundme_actions_total", "action" => action, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("fundme_action_duration_seconds", "action" => action)
        .record(elapsed.as_secs_f64());
}

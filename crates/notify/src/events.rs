//! Remediation outcome event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed subject line for outcome notifications.
pub const SUBJECT: &str = "PacerPro: EC2 auto-remediation triggered";

/// Fixed reason recorded on every outcome.
pub const REASON: &str = "Triggered by alert (slow /api/data responses)";

/// What the handler did to an instance during one invocation.
///
/// Built once per invocation, immediately after the remediation branch
/// executes, and consumed only to render the outbound notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationOutcome {
    /// Instance the action targeted.
    pub instance_id: String,
    /// Run state observed before acting. Raw provider string, unmodified.
    pub previous_state: String,
    /// `rebooted`, `started`, or `no_action_state_<state>`.
    pub action_taken: String,
    /// When the outcome was recorded (UTC, ISO-8601 on the wire).
    pub timestamp_utc: DateTime<Utc>,
    /// Why the handler ran.
    pub reason: String,
}

impl RemediationOutcome {
    /// Record an outcome at the current time.
    #[must_use]
    pub fn new(
        instance_id: impl Into<String>,
        previous_state: impl Into<String>,
        action_taken: impl Into<String>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            previous_state: previous_state.into(),
            action_taken: action_taken.into(),
            timestamp_utc: Utc::now(),
            reason: REASON.to_string(),
        }
    }

    /// Subject line for the outbound notification.
    #[must_use]
    pub const fn subject(&self) -> &'static str {
        SUBJECT
    }

    /// Human-readable message body (pretty-printed JSON).
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn message(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

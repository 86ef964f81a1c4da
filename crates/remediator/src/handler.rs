//! Remediation decision logic.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use remedy_cloud::ComputeControl;
use remedy_notify::{NotifyChannel, RemediationOutcome};

use crate::config::HandlerConfig;
use crate::error::HandlerError;

/// Remediation action chosen for an observed run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Instance was running and was rebooted.
    Rebooted,
    /// Instance was stopped and was started.
    Started,
    /// Any other run state; nothing was done.
    NoAction(String),
}

impl Action {
    /// The `action_taken` string recorded on the outcome.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Rebooted => "rebooted".to_string(),
            Self::Started => "started".to_string(),
            Self::NoAction(state) => format!("no_action_state_{state}"),
        }
    }
}

/// Result returned to the invoking platform on success.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    /// HTTP-style status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded body: `{"ok": true, "action": <action_taken>}`.
    pub body: String,
}

impl HandlerResponse {
    fn ok(action_taken: &str) -> Self {
        Self {
            status_code: 200,
            body: serde_json::json!({ "ok": true, "action": action_taken }).to_string(),
        }
    }
}

/// One-shot remediation handler.
///
/// Collaborators are injected so tests can substitute recording fakes for
/// the EC2 control plane and the SNS topic.
#[derive(Clone)]
pub struct RemediationHandler {
    config: HandlerConfig,
    compute: Arc<dyn ComputeControl>,
    channel: Arc<dyn NotifyChannel>,
}

impl RemediationHandler {
    /// Create a handler with injected collaborators.
    #[must_use]
    pub fn new(
        config: HandlerConfig,
        compute: Arc<dyn ComputeControl>,
        channel: Arc<dyn NotifyChannel>,
    ) -> Self {
        Self {
            config,
            compute,
            channel,
        }
    }

    /// Handle one trigger event.
    ///
    /// The event payload is opaque; it is logged verbatim for audit and
    /// never inspected. The run-state branch is a case-sensitive exact
    /// match: `running` reboots, `stopped` starts, anything else is left
    /// alone.
    ///
    /// # Errors
    /// Returns [`HandlerError`] on observation, remediation, or
    /// notification failure. No step is retried.
    pub async fn handle(
        &self,
        event: &serde_json::Value,
    ) -> Result<HandlerResponse, HandlerError> {
        info!(event = %event, "Received trigger event");

        let instance_id = self.config.instance_id.as_str();

        let state = self
            .compute
            .instance_state(instance_id)
            .await
            .map_err(HandlerError::Observation)?;

        info!(instance_id = %instance_id, state = %state, "Current instance state");

        let action = match state.as_str() {
            "running" => {
                self.compute
                    .reboot_instance(instance_id)
                    .await
                    .map_err(|e| Self::command_rejected(instance_id, "reboot", e))?;
                Action::Rebooted
            }
            "stopped" => {
                self.compute
                    .start_instance(instance_id)
                    .await
                    .map_err(|e| Self::command_rejected(instance_id, "start", e))?;
                Action::Started
            }
            other => {
                info!(instance_id = %instance_id, state = %other, "No action taken");
                Action::NoAction(other.to_string())
            }
        };

        let action_taken = action.label();
        let outcome = RemediationOutcome::new(instance_id, &state, &action_taken);
        self.channel.send(&outcome).await?;

        info!(action_taken = %action_taken, "Notification sent");

        Ok(HandlerResponse::ok(&action_taken))
    }

    /// Log and wrap a rejected remediation command.
    fn command_rejected(
        instance_id: &str,
        command: &str,
        e: remedy_cloud::ComputeError,
    ) -> HandlerError {
        error!(
            instance_id = %instance_id,
            command = %command,
            error = %e,
            "Remediation command rejected"
        );
        HandlerError::Remediation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels() {
        assert_eq!(Action::Rebooted.label(), "rebooted");
        assert_eq!(Action::Started.label(), "started");
        assert_eq!(
            Action::NoAction("pending".to_string()).label(),
            "no_action_state_pending"
        );
    }

    #[test]
    fn response_body_shape() {
        let response = HandlerResponse::ok("rebooted");
        assert_eq!(response.status_code, 200);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["action"], "rebooted");
    }
}

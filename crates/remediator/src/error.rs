//! Handler error taxonomy.
//!
//! Every variant is fatal. Nothing is retried or recovered locally; the
//! invoking platform owns whatever retry or alerting policy applies.

use remedy_cloud::ComputeError;
use remedy_notify::ChannelError;
use thiserror::Error;

/// Errors surfaced by one handler invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Required configuration value missing or empty. Raised before any
    /// external call is made.
    #[error("Missing configuration: {0}")]
    Config(String),

    /// Querying the instance state failed (provider error or an empty
    /// describe result).
    #[error("Instance state observation failed: {0}")]
    Observation(#[source] ComputeError),

    /// The reboot/start command was rejected by the provider. No
    /// notification is sent on this path.
    #[error("Remediation command failed: {0}")]
    Remediation(#[source] ComputeError),

    /// Publishing the outcome failed. Propagates even though the
    /// remediation action already took effect.
    #[error("Outcome notification failed: {0}")]
    Notification(#[from] ChannelError),
}

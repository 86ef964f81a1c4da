//! Compute-control trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during compute-control operations.
#[derive(Error, Debug)]
pub enum ComputeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Instance not found (or the describe call returned an empty result).
    #[error("Instance not found: {0}")]
    NotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for the compute control plane.
///
/// The run state returned by [`instance_state`](ComputeControl::instance_state)
/// is the provider's raw state name (e.g. `"running"`, `"stopped"`,
/// `"pending"`). The domain is open-ended; callers must tolerate state
/// strings they have never seen.
#[async_trait]
pub trait ComputeControl: Send + Sync {
    /// Read the current run state of an instance.
    async fn instance_state(&self, id: &str) -> Result<String, ComputeError>;

    /// Reboot an instance. Fails on provider error.
    async fn reboot_instance(&self, id: &str) -> Result<(), ComputeError>;

    /// Start a stopped instance. Fails on provider error.
    async fn start_instance(&self, id: &str) -> Result<(), ComputeError>;
}

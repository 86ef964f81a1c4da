//! Alert-triggered EC2 auto-remediation handler.
//!
//! Invoked when the alerting stack observes slow `/api/data` responses.
//! Each invocation is one-shot and fully sequential: observe the target
//! instance's run state, reboot it if `running`, start it if `stopped`,
//! do nothing for any other state, then publish an outcome notification
//! and return a `{statusCode, body}` payload to the platform.
//!
//! Nothing is retried or recovered here; every failure is logged and
//! surfaced to the invoking platform. See [`error::HandlerError`] for the
//! failure taxonomy.

pub mod config;
pub mod error;
pub mod handler;

pub use config::HandlerConfig;
pub use error::HandlerError;
pub use handler::{Action, HandlerResponse, RemediationHandler};

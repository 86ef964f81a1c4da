//! Notification system for remediation outcomes.
//!
//! After the handler acts on an instance it publishes a single
//! [`RemediationOutcome`] to a notification channel so operators can see
//! what was done and why. Delivery is awaited and failures propagate to
//! the caller; the handler treats an unsent notification as a failed
//! invocation.
//!
//! # Architecture
//!
//! The system uses a trait-based channel design:
//!
//! - [`NotifyChannel`] defines the interface for notification channels
//! - [`SnsChannel`] implements SNS topic publishing

pub mod channels;
pub mod error;
pub mod events;

pub use channels::sns::SnsChannel;
pub use channels::NotifyChannel;
pub use error::ChannelError;
pub use events::RemediationOutcome;

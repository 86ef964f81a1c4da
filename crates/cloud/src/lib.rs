//! Compute-control integration for the PacerPro auto-remediation handler.
//!
//! This crate provides the [`ComputeControl`] trait — the handler's view of
//! the cloud control plane — plus the concrete [`Ec2`] client that speaks
//! the EC2 Query API. The handler only ever needs three operations:
//!
//! - read the current run state of a single instance
//! - reboot an instance
//! - start an instance
//!
//! The trait exists so tests can substitute recording fakes for the real
//! control plane; nothing in this crate retries or recovers on its own.

pub mod ec2;
mod traits;

pub use ec2::Ec2;
pub use traits::{ComputeControl, ComputeError};

//! EC2 (Elastic Compute Cloud) control-plane client.
//!
//! Implements the [`ComputeControl`](crate::ComputeControl) trait against
//! the EC2 Query API (`Version=2016-11-15`).

mod client;
mod models;

pub use client::Ec2;
pub use models::*;

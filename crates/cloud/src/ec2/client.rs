//! EC2 API client implementation.
//!
//! Note: In production, use the aws-sigv4 crate for proper request signing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use super::models::DescribeInstancesResponse;
use crate::traits::{ComputeControl, ComputeError};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// EC2 Query API version.
const API_VERSION: &str = "2016-11-15";

/// EC2 compute-control client.
#[derive(Clone)]
pub struct Ec2 {
    /// HTTP client.
    client: Client,
    /// AWS region.
    region: String,
    /// Endpoint override (tests point this at a mock server).
    endpoint: Option<String>,
}

impl Ec2 {
    /// Create a new EC2 client for a region.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(region: impl Into<String>) -> Result<Self, ComputeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ComputeError::Http)?;

        Ok(Self {
            client,
            region: region.into(),
            endpoint: None,
        })
    }

    /// Override the API endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Get the EC2 API endpoint.
    fn ec2_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://ec2.{}.amazonaws.com", self.region))
    }

    /// Execute an EC2 Query API action against a single instance.
    async fn instance_action<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        action: &str,
        instance_id: &str,
    ) -> Result<T, ComputeError> {
        let url = format!(
            "{}/?Action={action}&Version={API_VERSION}&InstanceId.1={instance_id}",
            self.ec2_endpoint()
        );

        debug!(url = %url, action = %action, "EC2 request");

        let response = self
            .client
            .request(method, &url)
            .header(
                "X-Amz-Date",
                chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string(),
            )
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ComputeError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse EC2 response");
                ComputeError::Serialization(e)
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(ComputeError::NotFound(text))
        } else {
            Err(ComputeError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl ComputeControl for Ec2 {
    async fn instance_state(&self, id: &str) -> Result<String, ComputeError> {
        let response: DescribeInstancesResponse = self
            .instance_action(reqwest::Method::GET, "DescribeInstances", id)
            .await?;

        // A well-formed describe can still come back empty (wrong ID,
        // recently terminated instance). Surface that as NotFound instead
        // of indexing into nothing.
        let instance = response
            .reservations
            .first()
            .and_then(|r| r.instances.first())
            .ok_or_else(|| ComputeError::NotFound(format!("Instance not found: {id}")))?;

        debug!(instance_id = %id, state = %instance.state.name, "Observed instance state");

        Ok(instance.state.name.clone())
    }

    async fn reboot_instance(&self, id: &str) -> Result<(), ComputeError> {
        info!(instance_id = %id, "Rebooting instance");

        self.instance_action::<serde_json::Value>(reqwest::Method::POST, "RebootInstances", id)
            .await?;

        info!(instance_id = %id, "Instance reboot initiated");
        Ok(())
    }

    async fn start_instance(&self, id: &str) -> Result<(), ComputeError> {
        info!(instance_id = %id, "Starting instance");

        self.instance_action::<serde_json::Value>(reqwest::Method::POST, "StartInstances", id)
            .await?;

        info!(instance_id = %id, "Instance start initiated");
        Ok(())
    }
}

//! SNS topic notification channel.
//!
//! Publishes outcome messages through the SNS Query API
//! (`Action=Publish`, form-encoded parameters).
//!
//! Note: In production, use the aws-sigv4 crate for proper request signing.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ChannelError;
use crate::events::RemediationOutcome;
use crate::NotifyChannel;

/// Default timeout for publish requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// SNS Query API version.
const API_VERSION: &str = "2010-03-31";

/// SNS topic notification channel.
#[derive(Clone)]
pub struct SnsChannel {
    /// Destination topic ARN.
    topic_arn: String,
    /// AWS region.
    region: String,
    /// HTTP client.
    client: reqwest::Client,
    /// Endpoint override (tests point this at a mock server).
    endpoint: Option<String>,
}

impl SnsChannel {
    /// Create a new SNS channel for a region and topic.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(
        region: impl Into<String>,
        topic_arn: impl Into<String>,
    ) -> Result<Self, ChannelError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ChannelError::Http)?;

        Ok(Self {
            topic_arn: topic_arn.into(),
            region: region.into(),
            client,
            endpoint: None,
        })
    }

    /// Override the API endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Get the SNS API endpoint.
    fn sns_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://sns.{}.amazonaws.com", self.region))
    }
}

#[async_trait]
impl NotifyChannel for SnsChannel {
    fn name(&self) -> &'static str {
        "sns"
    }

    fn enabled(&self) -> bool {
        !self.topic_arn.is_empty()
    }

    async fn send(&self, outcome: &RemediationOutcome) -> Result<(), ChannelError> {
        if self.topic_arn.is_empty() {
            return Err(ChannelError::NotConfigured("SNS_TOPIC_ARN".to_string()));
        }

        let message = outcome.message()?;

        debug!(
            channel = "sns",
            topic_arn = %self.topic_arn,
            action_taken = %outcome.action_taken,
            "Publishing notification"
        );

        let params = [
            ("Action", "Publish"),
            ("Version", API_VERSION),
            ("TopicArn", self.topic_arn.as_str()),
            ("Subject", outcome.subject()),
            ("Message", message.as_str()),
        ];

        let response = self
            .client
            .post(self.sns_endpoint())
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            debug!(channel = "sns", "Notification sent successfully");
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            warn!(
                channel = "sns",
                status = %status,
                body = %body,
                "SNS publish request failed"
            );

            Err(ChannelError::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn channel(server: &MockServer) -> SnsChannel {
        SnsChannel::new("us-east-1", "arn:aws:sns:us-east-1:123456789012:ops-alerts")
            .unwrap()
            .with_endpoint(server.uri())
    }

    #[tokio::test]
    async fn publish_carries_topic_subject_and_outcome() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_string_contains("Action=Publish"))
            .and(body_string_contains("ops-alerts"))
            .and(body_string_contains("auto-remediation"))
            .and(body_string_contains("rebooted"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<PublishResponse/>"))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = RemediationOutcome::new("i-abc123", "running", "rebooted");
        channel(&server).send(&outcome).await.unwrap();
    }

    #[tokio::test]
    async fn publish_failure_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("AuthorizationError"))
            .mount(&server)
            .await;

        let outcome = RemediationOutcome::new("i-abc123", "stopped", "started");
        let err = channel(&server).send(&outcome).await.unwrap_err();
        assert!(matches!(err, ChannelError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn empty_topic_is_not_configured() {
        let channel = SnsChannel::new("us-east-1", "").unwrap();
        assert!(!channel.enabled());

        let outcome = RemediationOutcome::new("i-abc123", "running", "rebooted");
        let err = channel.send(&outcome).await.unwrap_err();
        assert!(matches!(err, ChannelError::NotConfigured(_)));
    }
}

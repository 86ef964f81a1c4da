//! Handler configuration.

use crate::error::HandlerError;

/// Environment variable naming the target instance.
pub const ENV_INSTANCE_ID: &str = "INSTANCE_ID";

/// Environment variable naming the notification topic.
pub const ENV_SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";

/// Environment variable naming the AWS region.
pub const ENV_AWS_REGION: &str = "AWS_REGION";

/// Region used when `AWS_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

/// Configuration for one handler process.
///
/// Both identifiers are validated non-empty at construction, before any
/// collaborator client exists, so a misconfigured deployment fails without
/// making a single external call.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Target compute instance identifier.
    pub instance_id: String,
    /// Destination notification topic ARN.
    pub topic_arn: String,
    /// AWS region for both collaborators.
    pub region: String,
}

impl HandlerConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    /// Returns [`HandlerError::Config`] if `instance_id` or `topic_arn`
    /// is empty.
    pub fn new(
        instance_id: impl Into<String>,
        topic_arn: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, HandlerError> {
        let instance_id = instance_id.into();
        let topic_arn = topic_arn.into();

        if instance_id.is_empty() {
            return Err(HandlerError::Config(ENV_INSTANCE_ID.to_string()));
        }
        if topic_arn.is_empty() {
            return Err(HandlerError::Config(ENV_SNS_TOPIC_ARN.to_string()));
        }

        Ok(Self {
            instance_id,
            topic_arn,
            region: region.into(),
        })
    }

    /// Read configuration from the execution environment.
    ///
    /// # Errors
    /// Returns [`HandlerError::Config`] if `INSTANCE_ID` or `SNS_TOPIC_ARN`
    /// is missing or empty.
    pub fn from_env() -> Result<Self, HandlerError> {
        let instance_id = std::env::var(ENV_INSTANCE_ID).unwrap_or_default();
        let topic_arn = std::env::var(ENV_SNS_TOPIC_ARN).unwrap_or_default();
        let region =
            std::env::var(ENV_AWS_REGION).unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Self::new(instance_id, topic_arn, region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(ENV_INSTANCE_ID);
        std::env::remove_var(ENV_SNS_TOPIC_ARN);
        std::env::remove_var(ENV_AWS_REGION);
    }

    #[test]
    #[serial]
    fn from_env_reads_required_values() {
        clear_env();
        std::env::set_var(ENV_INSTANCE_ID, "i-abc123");
        std::env::set_var(ENV_SNS_TOPIC_ARN, "arn:aws:sns:us-east-1:123456789012:topic");
        std::env::set_var(ENV_AWS_REGION, "eu-west-1");

        let config = HandlerConfig::from_env().unwrap();
        assert_eq!(config.instance_id, "i-abc123");
        assert_eq!(config.topic_arn, "arn:aws:sns:us-east-1:123456789012:topic");
        assert_eq!(config.region, "eu-west-1");
    }

    #[test]
    #[serial]
    fn missing_instance_id_fails() {
        clear_env();
        std::env::set_var(ENV_SNS_TOPIC_ARN, "arn:aws:sns:us-east-1:123456789012:topic");

        let err = HandlerConfig::from_env().unwrap_err();
        assert!(matches!(err, HandlerError::Config(ref name) if name == ENV_INSTANCE_ID));
    }

    #[test]
    #[serial]
    fn missing_topic_arn_fails() {
        clear_env();
        std::env::set_var(ENV_INSTANCE_ID, "i-abc123");

        let err = HandlerConfig::from_env().unwrap_err();
        assert!(matches!(err, HandlerError::Config(ref name) if name == ENV_SNS_TOPIC_ARN));
    }

    #[test]
    #[serial]
    fn empty_values_are_treated_as_missing() {
        clear_env();
        std::env::set_var(ENV_INSTANCE_ID, "");
        std::env::set_var(ENV_SNS_TOPIC_ARN, "arn:aws:sns:us-east-1:123456789012:topic");

        assert!(HandlerConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn region_defaults_when_unset() {
        clear_env();
        std::env::set_var(ENV_INSTANCE_ID, "i-abc123");
        std::env::set_var(ENV_SNS_TOPIC_ARN, "arn:aws:sns:us-east-1:123456789012:topic");

        let config = HandlerConfig::from_env().unwrap();
        assert_eq!(config.region, "us-east-1");
    }
}

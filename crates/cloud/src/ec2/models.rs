//! EC2 API response models.

use serde::Deserialize;

/// Describe instances response.
#[derive(Debug, Deserialize)]
pub struct DescribeInstancesResponse {
    /// Reservations.
    #[serde(rename = "Reservations", default)]
    pub reservations: Vec<Reservation>,
}

/// Reservation.
#[derive(Debug, Deserialize)]
pub struct Reservation {
    /// Instances.
    #[serde(rename = "Instances", default)]
    pub instances: Vec<Ec2Instance>,
}

/// EC2 instance information (the subset the handler needs).
#[derive(Debug, Clone, Deserialize)]
pub struct Ec2Instance {
    /// Instance ID.
    #[serde(rename = "InstanceId")]
    pub instance_id: String,
    /// Instance state.
    #[serde(rename = "State")]
    pub state: InstanceState,
}

/// Instance state.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceState {
    /// State code.
    #[serde(rename = "Code", default)]
    pub code: i32,
    /// State name (e.g. "running", "stopped", "pending").
    #[serde(rename = "Name")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_describe_response() {
        let body = serde_json::json!({
            "Reservations": [{
                "Instances": [{
                    "InstanceId": "i-1234567890abcdef0",
                    "State": { "Code": 16, "Name": "running" }
                }]
            }]
        });

        let response: DescribeInstancesResponse = serde_json::from_value(body).unwrap();
        let instance = &response.reservations[0].instances[0];
        assert_eq!(instance.instance_id, "i-1234567890abcdef0");
        assert_eq!(instance.state.name, "running");
    }

    #[test]
    fn parses_empty_reservations() {
        let response: DescribeInstancesResponse =
            serde_json::from_value(serde_json::json!({ "Reservations": [] })).unwrap();
        assert!(response.reservations.is_empty());
    }
}

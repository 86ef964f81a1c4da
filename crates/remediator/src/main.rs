//! Lambda entrypoint.
//!
//! Collaborator clients are constructed once per cold start and injected
//! into the handler; each invocation then runs start-to-finish with no
//! shared mutable state.

use std::sync::Arc;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use remediator::{HandlerConfig, RemediationHandler};
use remedy_cloud::Ec2;
use remedy_notify::SnsChannel;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    let config = HandlerConfig::from_env()?;
    let compute = Arc::new(Ec2::new(config.region.clone())?);
    let channel = Arc::new(SnsChannel::new(
        config.region.clone(),
        config.topic_arn.clone(),
    )?);
    let handler = RemediationHandler::new(config, compute, channel);

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let handler = handler.clone();
        async move { handler.handle(&event.payload).await.map_err(Error::from) }
    }))
    .await
}

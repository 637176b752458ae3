use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use reqid_lookup::utils::{logger, validation::Validate};
use reqid_lookup::{ApiResponse, EnvConfig, HttpUpstream, LookupEngine};
use serde::Deserialize;
use std::collections::HashMap;

/// The part of an API Gateway proxy event we read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

async fn function_handler(
    engine: &LookupEngine<HttpUpstream>,
    event: LambdaEvent<Request>,
) -> Result<ApiResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling lookup request");

    let params = event.payload.query_string_parameters.unwrap_or_default();
    Ok(engine.handle(&params).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = EnvConfig::from_env();
    config.validate()?;

    // One client per cold start; it carries no session state between invocations.
    let upstream = HttpUpstream::new(&config)?;
    let engine = LookupEngine::new(upstream, &config);
    let engine = &engine;

    run(service_fn(move |event| function_handler(engine, event))).await
}

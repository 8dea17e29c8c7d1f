use anyhow::Context;
use greeter_core::config::{CONFIG_PATH_ENV_VAR, load_config};
use greeter_core::telemetry::init_tracing;
use greeter_core::{Greeter, RequestEvent, Response};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{debug, info};

pub async fn lambda_handler(
    greeter: &Greeter,
    event: LambdaEvent<RequestEvent>,
) -> Result<Response, Error> {
    debug!(request_id = %event.context.request_id, "Handling greeting request");
    Ok(greeter.greet(&event.payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config_path = std::env::var(CONFIG_PATH_ENV_VAR).ok();
    let config = load_config(config_path.as_deref()).context("Failed to load greeter config")?;
    info!(?config, "Starting greeter");

    let greeter = Greeter::new(config);
    let greeter = &greeter;
    lambda_runtime::run(service_fn(move |event| lambda_handler(greeter, event))).await
}

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

mod config;
mod handlers;
mod models;
mod services;
mod util;

use handlers::public_ip_handler::public_ip_handler;
use services::aws_service::Ec2InstanceProvider;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = config::Config::from_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let provider = Ec2InstanceProvider::new(&config)?;
    let provider = &provider;

    log::info!("starting ec2 public ip handler");
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        public_ip_handler(provider, event).await
    }))
    .await
}

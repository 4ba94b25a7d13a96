use super::handler::{ErrorResponse, HandlerError, InvocationResponse, PublicIpsResponse};
use crate::{
    models::cloud_instance::public_ips,
    services::aws_service::InstanceProvider,
    util::{is_falsy, json_type_name},
};
use anyhow::anyhow;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Map, Value};

/// Answers one invocation with the public addresses of the running instances
/// in the requested region. Failures are turned into 400/500 responses, so the
/// runtime only sees an `Err` if the response itself cannot be encoded.
pub async fn public_ip_handler(
    provider: &dyn InstanceProvider,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    let request_id = event.context.request_id;

    match lookup_public_ips(provider, event.payload, &request_id).await {
        Ok(ips) => {
            log::info!("[{}] found {} public ip(s)", request_id, ips.len());
            Ok(InvocationResponse::new(200, &PublicIpsResponse::new(ips))?)
        }
        Err(err) => {
            match &err {
                HandlerError::MissingRegion => log::warn!("[{}] {}", request_id, err),
                HandlerError::Unhandled(_) => {
                    log::error!("[{}] failed to list public ips: {}", request_id, err)
                }
            }
            Ok(InvocationResponse::new(
                err.status_code(),
                &ErrorResponse::new(err.to_string()),
            )?)
        }
    }
}

async fn lookup_public_ips(
    provider: &dyn InstanceProvider,
    event: Value,
    request_id: &str,
) -> Result<Vec<String>, HandlerError> {
    let request = parse_request(event)?;
    let region = requested_region(&request)?;

    log::info!("[{}] listing running instances in {}", request_id, region);
    let reservations = provider.list_running_instances(region).await?;

    Ok(public_ips(reservations))
}

// Function URL and API gateway events wrap the request as JSON text in `body`.
fn parse_request(event: Value) -> anyhow::Result<Map<String, Value>> {
    let request = match event {
        Value::Object(mut event) => match event.remove("body") {
            Some(body) => decode_body(body, is_base64_encoded(&event))?,
            None => Value::Object(event),
        },
        other => other,
    };

    match request {
        Value::Object(request) => Ok(request),
        other => Err(anyhow!(
            "request must be a JSON object, not {}",
            json_type_name(&other)
        )),
    }
}

fn is_base64_encoded(event: &Map<String, Value>) -> bool {
    event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn decode_body(body: Value, base64_encoded: bool) -> anyhow::Result<Value> {
    let text = match body {
        Value::String(text) => text,
        other => {
            return Err(anyhow!(
                "request body must be a JSON string, not {}",
                json_type_name(&other)
            ))
        }
    };

    if base64_encoded {
        let bytes = STANDARD.decode(text.as_bytes())?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        Ok(serde_json::from_str(&text)?)
    }
}

fn requested_region(request: &Map<String, Value>) -> Result<&str, HandlerError> {
    match request.get("region") {
        None => Err(HandlerError::MissingRegion),
        Some(value) if is_falsy(value) => Err(HandlerError::MissingRegion),
        Some(Value::String(region)) => Ok(region.as_str()),
        Some(other) => Err(anyhow!("region must be a string, not {}", json_type_name(other)).into()),
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

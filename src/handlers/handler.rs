use serde::Serialize;
use std::error::Error;
use std::fmt;

pub const MISSING_REGION_MESSAGE: &str = "Missing 'region' parameter in request body.";

/// The envelope handed back to the Lambda runtime. `body` is JSON text.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn new<T: Serialize>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        Ok(InvocationResponse {
            status_code,
            body: serde_json::to_string(body)?,
        })
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PublicIpsResponse {
    pub public_ips: Vec<String>,
}

impl PublicIpsResponse {
    pub fn new(public_ips: Vec<String>) -> Self {
        PublicIpsResponse { public_ips }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        ErrorResponse { error }
    }
}

#[derive(Debug)]
pub enum HandlerError {
    MissingRegion,
    Unhandled(anyhow::Error),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingRegion => 400,
            HandlerError::Unhandled(_) => 500,
        }
    }
}

impl Error for HandlerError {}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HandlerError::MissingRegion => write!(f, "{}", MISSING_REGION_MESSAGE),
            HandlerError::Unhandled(err) => write!(f, "{}", err),
        }
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        HandlerError::Unhandled(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_response_serializes_status_code() {
        let response =
            InvocationResponse::new(200, &PublicIpsResponse::new(vec!["1.2.3.4".to_string()]))
                .unwrap();

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], r#"{"public_ips":["1.2.3.4"]}"#);
    }

    #[test]
    fn test_handler_error_display_and_status() {
        let missing = HandlerError::MissingRegion;
        let unhandled = HandlerError::from(anyhow::anyhow!("boom"));

        assert_eq!(missing.status_code(), 400);
        assert_eq!(missing.to_string(), MISSING_REGION_MESSAGE);
        assert_eq!(unhandled.status_code(), 500);
        assert_eq!(unhandled.to_string(), "boom");
    }
}

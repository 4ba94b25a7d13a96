// -----------------------------------------------------------------------------
// Config
// -----------------------------------------------------------------------------

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Overrides the EC2 endpoint (e.g. LocalStack). The requested region name is kept.
    pub ec2_endpoint: Option<String>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            ec2_endpoint: non_empty("EC2_ENDPOINT_URL"),
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.ec2_endpoint, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_reads_endpoint_and_log_filter() {
        let config = Config::from_lookup(lookup_from(&[
            ("EC2_ENDPOINT_URL", "http://localhost:4566"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.ec2_endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config =
            Config::from_lookup(lookup_from(&[("EC2_ENDPOINT_URL", "  "), ("RUST_LOG", "")]));

        assert_eq!(config.ec2_endpoint, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}

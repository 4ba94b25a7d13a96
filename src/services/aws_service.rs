use crate::config::Config;
use crate::models::cloud_instance::Reservation;
use async_trait::async_trait;
use rusoto_core::HttpClient;
use rusoto_credential::DefaultCredentialsProvider;
use rusoto_ec2::{DescribeInstancesRequest, Ec2, Ec2Client, Filter};
use rusoto_signature::Region;
use std::str::FromStr;
use std::sync::Arc;

pub const INSTANCE_STATE_FILTER: &str = "instance-state-name";
pub const RUNNING_STATE: &str = "running";

/// Lists the running instances of a region, grouped by reservation.
#[async_trait]
pub trait InstanceProvider: Send + Sync {
    async fn list_running_instances(&self, region: &str) -> anyhow::Result<Vec<Reservation>>;
}

// -----------------------------------------------------------------------------
// EC2
// -----------------------------------------------------------------------------

pub struct Ec2InstanceProvider {
    endpoint: Option<String>,
    http_client: Arc<HttpClient>,
    credentials: DefaultCredentialsProvider,
}

impl Ec2InstanceProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Ec2InstanceProvider {
            endpoint: config.ec2_endpoint.clone(),
            http_client: Arc::new(HttpClient::new()?),
            credentials: DefaultCredentialsProvider::new()?,
        })
    }

    fn client(&self, region: &str) -> Ec2Client {
        Ec2Client::new_with(
            self.http_client.clone(),
            self.credentials.clone(),
            resolve_region(self.endpoint.as_deref(), region),
        )
    }
}

#[async_trait]
impl InstanceProvider for Ec2InstanceProvider {
    async fn list_running_instances(&self, region: &str) -> anyhow::Result<Vec<Reservation>> {
        let ec2_client = self.client(region);

        let result = ec2_client
            .describe_instances(running_instances_request())
            .await?;

        Ok(result
            .reservations
            .unwrap_or_default()
            .into_iter()
            .map(Reservation::from)
            .collect())
    }
}

/// Regions missing from rusoto's table are addressed through their regional
/// EC2 endpoint, so EC2 itself decides whether the name is valid.
fn resolve_region(endpoint: Option<&str>, region: &str) -> Region {
    if let Some(endpoint) = endpoint {
        return Region::Custom {
            name: region.to_string(),
            endpoint: endpoint.to_string(),
        };
    }

    Region::from_str(region).unwrap_or_else(|_| Region::Custom {
        name: region.to_string(),
        endpoint: format!("https://ec2.{}.amazonaws.com", region),
    })
}

fn running_instances_request() -> DescribeInstancesRequest {
    DescribeInstancesRequest {
        filters: Some(vec![Filter {
            name: Some(INSTANCE_STATE_FILTER.to_string()),
            values: Some(vec![RUNNING_STATE.to_string()]),
        }]),
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

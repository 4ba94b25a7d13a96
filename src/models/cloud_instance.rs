/// One instance as reported by the compute API. Only the public address is
/// used to build responses; the id is kept for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceRecord {
    pub instance_id: Option<String>,
    pub public_ip_address: Option<String>,
}

/// A group of instances returned together by a describe-instances query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reservation {
    pub instances: Vec<InstanceRecord>,
}

impl From<rusoto_ec2::Instance> for InstanceRecord {
    fn from(instance: rusoto_ec2::Instance) -> Self {
        InstanceRecord {
            instance_id: instance.instance_id,
            public_ip_address: instance.public_ip_address,
        }
    }
}

impl From<rusoto_ec2::Reservation> for Reservation {
    fn from(reservation: rusoto_ec2::Reservation) -> Self {
        Reservation {
            instances: reservation
                .instances
                .unwrap_or_default()
                .into_iter()
                .map(InstanceRecord::from)
                .collect(),
        }
    }
}

/// Flattens reservations into their public addresses, in encounter order.
/// Instances without a public address are skipped.
pub fn public_ips(reservations: Vec<Reservation>) -> Vec<String> {
    reservations
        .into_iter()
        .flat_map(|reservation| reservation.instances)
        .filter_map(|instance| {
            if instance.public_ip_address.is_none() {
                log::debug!(
                    "skipping {} without a public ip",
                    instance.instance_id.as_deref().unwrap_or("unknown instance")
                );
            }
            instance.public_ip_address
        })
        .collect()
}

//! EC2 convenience operations and their response shapes.
//!
//! Each operation is a parameter preset over [`Client::call`]; nothing here talks to the
//! transport directly.

// self
use crate::{_prelude::*, client::Client, http::QueryHttpClient, query::Params, xml::ItemSet};

/// `DescribeInstances` action name.
pub const DESCRIBE_INSTANCES: &str = "DescribeInstances";

/// Response body of `DescribeInstances`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeInstancesResponse {
	/// Request identifier assigned by the endpoint.
	#[serde(default)]
	pub request_id: String,
	/// Reservations matching the request.
	#[serde(rename = "reservationSet", default)]
	pub reservations: ItemSet<Reservation>,
}
impl DescribeInstancesResponse {
	/// Iterates over every instance across all reservations.
	pub fn instances(&self) -> impl Iterator<Item = &Instance> {
		self.reservations.items.iter().flat_map(|r| r.instances.items.iter())
	}
}

/// Group of instances launched together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
	/// Reservation identifier.
	#[serde(default)]
	pub reservation_id: String,
	/// Account that owns the reservation.
	#[serde(default)]
	pub owner_id: String,
	/// Instances in the reservation.
	#[serde(rename = "instancesSet", default)]
	pub instances: ItemSet<Instance>,
}

/// Single EC2 instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
	/// Instance identifier.
	#[serde(alias = "InstanceId", default)]
	pub instance_id: String,
	/// AMI the instance was launched from.
	#[serde(default)]
	pub image_id: String,
	/// Current lifecycle state.
	#[serde(default)]
	pub instance_state: InstanceState,
	/// Instance type, e.g. `m1.small`.
	#[serde(default)]
	pub instance_type: String,
	/// Public DNS name; empty until the instance is running.
	#[serde(alias = "DnsName", default)]
	pub dns_name: String,
	/// Private DNS name.
	#[serde(default)]
	pub private_dns_name: String,
	/// Public IP address; empty when none is assigned.
	#[serde(alias = "IpAddress", default)]
	pub ip_address: String,
	/// Private IP address.
	#[serde(default)]
	pub private_ip_address: String,
}
impl Instance {
	/// State name, e.g. `running`.
	pub fn state_name(&self) -> &str {
		&self.instance_state.name
	}
}

/// Instance lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
	/// Numeric state code (`16` = running).
	#[serde(default)]
	pub code: u16,
	/// State name.
	#[serde(default)]
	pub name: String,
}

impl<C> Client<C>
where
	C: ?Sized + QueryHttpClient,
{
	/// Describes every instance visible to the credentials.
	pub async fn describe_instances(&self) -> Result<DescribeInstancesResponse> {
		self.call(DESCRIBE_INSTANCES, Params::new()).await
	}

	/// Describes the given instances, sent as `InstanceId.1`, `InstanceId.2`, ...
	pub async fn describe_instances_by_id<I, S>(
		&self,
		instance_ids: I,
	) -> Result<DescribeInstancesResponse>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let params = instance_ids
			.into_iter()
			.enumerate()
			.map(|(idx, id)| (format!("InstanceId.{}", idx + 1), id.into()))
			.collect::<Params>();

		self.call(DESCRIBE_INSTANCES, params).await
	}
}

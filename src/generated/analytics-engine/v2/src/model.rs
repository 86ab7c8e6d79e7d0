// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Details of an Analytics Engine cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AnalyticsEngine {
    /// GUID of the service instance.
    pub id: Option<String>,

    /// Name of the service instance.
    pub name: Option<String>,

    /// Service plan, for example `standard-hourly`.
    pub service_plan: Option<String>,

    /// Hardware size of the cluster nodes, for example `default`.
    pub hardware_size: Option<String>,

    /// Software package installed in the cluster, for example `ae-1.2-hadoop-spark`.
    pub software_package: Option<String>,

    /// Domain of the cluster.
    pub domain: Option<String>,

    /// Timestamp when the cluster was created, in RFC 3339 format.
    pub creation_time: Option<String>,

    /// Timestamp when the cluster was commissioned.
    #[serde(rename = "commision_time")]
    pub commission_time: Option<String>,

    /// Timestamp when the cluster was decommissioned.
    #[serde(rename = "decommision_time")]
    pub decommission_time: Option<String>,

    /// Timestamp when the cluster was deleted.
    pub deletion_time: Option<String>,

    /// Timestamp when the state of the cluster changed.
    pub state_change_time: Option<String>,

    /// State of the cluster, for example `Active` or `Preparing`.
    pub state: Option<String>,

    /// The nodes in the cluster.
    pub nodes: Vec<ClusterNode>,

    /// Credentials of the cluster user.
    pub user_credentials: Option<UserCredentials>,

    /// Endpoints of the services running in the cluster, keyed by
    /// service name.
    pub service_endpoints: std::collections::HashMap<String, String>,
}

impl AnalyticsEngine {
    /// Sets the value of [id][AnalyticsEngine::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][AnalyticsEngine::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [service_plan][AnalyticsEngine::service_plan].
    pub fn set_service_plan<T: Into<String>>(mut self, v: T) -> Self {
        self.service_plan = Some(v.into());
        self
    }

    /// Sets the value of [hardware_size][AnalyticsEngine::hardware_size].
    pub fn set_hardware_size<T: Into<String>>(mut self, v: T) -> Self {
        self.hardware_size = Some(v.into());
        self
    }

    /// Sets the value of [software_package][AnalyticsEngine::software_package].
    pub fn set_software_package<T: Into<String>>(mut self, v: T) -> Self {
        self.software_package = Some(v.into());
        self
    }

    /// Sets the value of [domain][AnalyticsEngine::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][AnalyticsEngine::creation_time].
    pub fn set_creation_time<T: Into<String>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [commission_time][AnalyticsEngine::commission_time].
    pub fn set_commission_time<T: Into<String>>(mut self, v: T) -> Self {
        self.commission_time = Some(v.into());
        self
    }

    /// Sets the value of [decommission_time][AnalyticsEngine::decommission_time].
    pub fn set_decommission_time<T: Into<String>>(mut self, v: T) -> Self {
        self.decommission_time = Some(v.into());
        self
    }

    /// Sets the value of [deletion_time][AnalyticsEngine::deletion_time].
    pub fn set_deletion_time<T: Into<String>>(mut self, v: T) -> Self {
        self.deletion_time = Some(v.into());
        self
    }

    /// Sets the value of [state_change_time][AnalyticsEngine::state_change_time].
    pub fn set_state_change_time<T: Into<String>>(mut self, v: T) -> Self {
        self.state_change_time = Some(v.into());
        self
    }

    /// Sets the value of [state][AnalyticsEngine::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [nodes][AnalyticsEngine::nodes].
    pub fn set_nodes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ClusterNode>,
    {
        self.nodes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [user_credentials][AnalyticsEngine::user_credentials].
    pub fn set_user_credentials<T: Into<UserCredentials>>(mut self, v: T) -> Self {
        self.user_credentials = Some(v.into());
        self
    }

    /// Sets the value of [service_endpoints][AnalyticsEngine::service_endpoints].
    pub fn set_service_endpoints<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.service_endpoints = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A node in an Analytics Engine cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ClusterNode {
    /// Node ID, unique within the cluster.
    pub id: Option<i32>,

    /// Fully qualified domain name of the node.
    pub fqdn: Option<String>,

    /// Type of the node, one of `management`, `data`, or `task`.
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// State of the node.
    pub state: Option<String>,

    /// Public IP address of the node.
    pub public_ip: Option<String>,

    /// Private IP address of the node.
    pub private_ip: Option<String>,

    /// Timestamp when the state of the node changed.
    pub state_change_time: Option<String>,

    /// Timestamp when the node was commissioned.
    pub commission_time: Option<String>,
}

impl ClusterNode {
    /// Sets the value of [id][ClusterNode::id].
    pub fn set_id<T: Into<i32>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [fqdn][ClusterNode::fqdn].
    pub fn set_fqdn<T: Into<String>>(mut self, v: T) -> Self {
        self.fqdn = Some(v.into());
        self
    }

    /// Sets the value of [r#type][ClusterNode::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [state][ClusterNode::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// Credentials of the cluster user.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct UserCredentials {
    /// Username of the cluster user.
    pub user: Option<String>,

    /// Password of the cluster user. Only returned when the password is
    /// reset.
    pub password: Option<String>,
}

impl UserCredentials {
    /// Sets the value of [user][UserCredentials::user].
    pub fn set_user<T: Into<String>>(mut self, v: T) -> Self {
        self.user = Some(v.into());
        self
    }

    /// Sets the value of [password][UserCredentials::password].
    pub fn set_password<T: Into<String>>(mut self, v: T) -> Self {
        self.password = Some(v.into());
        self
    }
}

/// The state of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AnalyticsEngineState {
    /// State of the cluster, for example `Active`.
    pub state: Option<String>,
}

impl AnalyticsEngineState {
    /// Sets the value of [state][AnalyticsEngineState::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// An item in the list of customization requests of a cluster.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomizationRequest {
    /// ID of the customization request.
    pub id: Option<String>,
}

impl CustomizationRequest {
    /// Sets the value of [id][CustomizationRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}

/// The result of a customization request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomizationRunDetails {
    /// ID of the customization request.
    pub id: Option<String>,

    /// Status of the customization run on each node.
    pub run_details: Option<CustomizationRunStatus>,
}

impl CustomizationRunDetails {
    /// Sets the value of [id][CustomizationRunDetails::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [run_details][CustomizationRunDetails::run_details].
    pub fn set_run_details<T: Into<CustomizationRunStatus>>(mut self, v: T) -> Self {
        self.run_details = Some(v.into());
        self
    }
}

/// The aggregated status of a customization run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CustomizationRunStatus {
    /// Overall status, `success` or `failed`.
    pub overall_status: Option<String>,

    /// Status of the run in each node.
    pub details: Vec<NodeCustomizationRunDetails>,
}

impl CustomizationRunStatus {
    /// Sets the value of [overall_status][CustomizationRunStatus::overall_status].
    pub fn set_overall_status<T: Into<String>>(mut self, v: T) -> Self {
        self.overall_status = Some(v.into());
        self
    }

    /// Sets the value of [details][CustomizationRunStatus::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NodeCustomizationRunDetails>,
    {
        self.details = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Status of a customization run in a single node.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NodeCustomizationRunDetails {
    pub node_name: Option<String>,
    pub node_type: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub time_taken: Option<String>,
    pub status: Option<String>,
    pub log_file: Option<String>,
}

impl NodeCustomizationRunDetails {
    /// Sets the value of [node_name][NodeCustomizationRunDetails::node_name].
    pub fn set_node_name<T: Into<String>>(mut self, v: T) -> Self {
        self.node_name = Some(v.into());
        self
    }

    /// Sets the value of [node_type][NodeCustomizationRunDetails::node_type].
    pub fn set_node_type<T: Into<String>>(mut self, v: T) -> Self {
        self.node_type = Some(v.into());
        self
    }

    /// Sets the value of [status][NodeCustomizationRunDetails::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [log_file][NodeCustomizationRunDetails::log_file].
    pub fn set_log_file<T: Into<String>>(mut self, v: T) -> Self {
        self.log_file = Some(v.into());
        self
    }
}

/// The response message for [resize_cluster][crate::client::AnalyticsEngines::resize_cluster].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResizeClusterResponse {
    /// ID of the resize request.
    pub request_id: Option<String>,
}

impl ResizeClusterResponse {
    /// Sets the value of [request_id][ResizeClusterResponse::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// The response message for [reset_cluster_password][crate::client::AnalyticsEngines::reset_cluster_password].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResetClusterPasswordResponse {
    /// GUID of the service instance.
    pub id: Option<String>,

    /// The new credentials of the cluster user.
    pub user_credentials: Option<UserCredentials>,
}

impl ResetClusterPasswordResponse {
    /// Sets the value of [id][ResetClusterPasswordResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [user_credentials][ResetClusterPasswordResponse::user_credentials].
    pub fn set_user_credentials<T: Into<UserCredentials>>(mut self, v: T) -> Self {
        self.user_credentials = Some(v.into());
        self
    }
}

/// The request message for [get_analytics_engine_by_id][crate::client::AnalyticsEngines::get_analytics_engine_by_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAnalyticsEngineByIdRequest {
    /// GUID of the service instance.
    pub instance_guid: String,
}

impl GetAnalyticsEngineByIdRequest {
    /// Sets the value of [instance_guid][GetAnalyticsEngineByIdRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }
}

/// The request message for [get_analytics_engine_state_by_id][crate::client::AnalyticsEngines::get_analytics_engine_state_by_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAnalyticsEngineStateByIdRequest {
    /// GUID of the service instance.
    pub instance_guid: String,
}

impl GetAnalyticsEngineStateByIdRequest {
    /// Sets the value of [instance_guid][GetAnalyticsEngineStateByIdRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }
}

/// The request message for [get_all_customization_requests][crate::client::AnalyticsEngines::get_all_customization_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAllCustomizationRequestsRequest {
    /// GUID of the service instance.
    pub instance_guid: String,
}

impl GetAllCustomizationRequestsRequest {
    /// Sets the value of [instance_guid][GetAllCustomizationRequestsRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }
}

/// The request message for [get_customization_request_by_id][crate::client::AnalyticsEngines::get_customization_request_by_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCustomizationRequestByIdRequest {
    /// GUID of the service instance.
    pub instance_guid: String,

    /// ID of the customization request.
    pub request_id: String,
}

impl GetCustomizationRequestByIdRequest {
    /// Sets the value of [instance_guid][GetCustomizationRequestByIdRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }

    /// Sets the value of [request_id][GetCustomizationRequestByIdRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// The request message for [resize_cluster][crate::client::AnalyticsEngines::resize_cluster].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ResizeClusterRequest {
    /// GUID of the service instance.
    #[serde(skip)]
    pub instance_guid: String,

    /// The new number of compute nodes in the cluster.
    pub compute_nodes_count: Option<i32>,
}

impl ResizeClusterRequest {
    /// Sets the value of [instance_guid][ResizeClusterRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }

    /// Sets the value of [compute_nodes_count][ResizeClusterRequest::compute_nodes_count].
    pub fn set_compute_nodes_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.compute_nodes_count = Some(v.into());
        self
    }
}

/// The request message for [reset_cluster_password][crate::client::AnalyticsEngines::reset_cluster_password].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResetClusterPasswordRequest {
    /// GUID of the service instance.
    pub instance_guid: String,
}

impl ResetClusterPasswordRequest {
    /// Sets the value of [instance_guid][ResetClusterPasswordRequest::instance_guid].
    pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_guid = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn analytics_engine() -> anyhow::Result<()> {
        let input = json!({
            "id": "my-instance",
            "name": "my-cluster",
            "service_plan": "standard-hourly",
            "hardware_size": "default",
            "software_package": "ae-1.2-hadoop-spark",
            "commision_time": "2025-03-01T10:00:00Z",
            "state": "Active",
            "nodes": [
                {"id": 1, "fqdn": "chs-abc-mn001.example.com", "type": "management", "state": "Active"},
                {"id": 2, "fqdn": "chs-abc-dn001.example.com", "type": "data", "state": "Active"},
            ],
            "user_credentials": {"user": "clsadmin"},
            "service_endpoints": {"ambari_console": "https://example.com:9443"},
        });
        let got = serde_json::from_value::<AnalyticsEngine>(input)?;
        assert_eq!(got.commission_time.as_deref(), Some("2025-03-01T10:00:00Z"));
        assert_eq!(
            got.nodes,
            vec![
                ClusterNode::default()
                    .set_id(1)
                    .set_fqdn("chs-abc-mn001.example.com")
                    .set_type("management")
                    .set_state("Active"),
                ClusterNode::default()
                    .set_id(2)
                    .set_fqdn("chs-abc-dn001.example.com")
                    .set_type("data")
                    .set_state("Active"),
            ]
        );
        assert_eq!(
            got.user_credentials,
            Some(UserCredentials::default().set_user("clsadmin"))
        );
        assert_eq!(
            got.service_endpoints.get("ambari_console").map(String::as_str),
            Some("https://example.com:9443")
        );

        let json = serde_json::to_value(&got)?;
        assert_eq!(json.get("commision_time"), Some(&json!("2025-03-01T10:00:00Z")));
        assert_eq!(json.get("deletion_time"), None);
        Ok(())
    }

    #[test]
    fn customization_run_details() -> anyhow::Result<()> {
        let input = json!({
            "id": "37",
            "run_details": {
                "overall_status": "success",
                "details": [{
                    "node_name": "chs-abc-mn003.example.com",
                    "node_type": "management",
                    "status": "CustomizeSuccess",
                    "log_file": "/var/log/chs-abc-mn003.log",
                }],
            },
        });
        let got = serde_json::from_value::<CustomizationRunDetails>(input)?;
        let want = CustomizationRunDetails::default().set_id("37").set_run_details(
            CustomizationRunStatus::default()
                .set_overall_status("success")
                .set_details([NodeCustomizationRunDetails::default()
                    .set_node_name("chs-abc-mn003.example.com")
                    .set_node_type("management")
                    .set_status("CustomizeSuccess")
                    .set_log_file("/var/log/chs-abc-mn003.log")]),
        );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn resize_cluster_request() -> anyhow::Result<()> {
        let request = ResizeClusterRequest::default()
            .set_instance_guid("my-instance")
            .set_compute_nodes_count(4);
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"compute_nodes_count": 4})
        );
        let request = ResizeClusterRequest::default().set_instance_guid("my-instance");
        assert_eq!(serde_json::to_value(&request)?, json!({}));
        Ok(())
    }
}

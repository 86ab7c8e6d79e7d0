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

use std::collections::HashMap;

/// Details of an Analytics Engine instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Instance {
    /// GUID of the instance.
    pub id: Option<String>,

    /// Full URL of the resource.
    pub href: Option<String>,

    /// State of the instance, for example `active` or `creation_accepted`.
    pub state: Option<String>,

    /// Timestamp when the state of the instance was changed, in RFC 3339
    /// format.
    pub state_change_time: Option<String>,

    /// Runtime used by default when submitting applications.
    pub default_runtime: Option<Runtime>,

    /// Object storage where the instance stores its logs and application
    /// files.
    pub instance_home: Option<InstanceHome>,

    /// Default Spark configuration for the instance.
    pub default_config: Option<InstanceDefaultConfig>,
}

impl Instance {
    /// Sets the value of [id][Instance::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [href][Instance::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Sets the value of [state][Instance::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [state_change_time][Instance::state_change_time].
    pub fn set_state_change_time<T: Into<String>>(mut self, v: T) -> Self {
        self.state_change_time = Some(v.into());
        self
    }

    /// Sets the value of [default_runtime][Instance::default_runtime].
    pub fn set_default_runtime<T: Into<Runtime>>(mut self, v: T) -> Self {
        self.default_runtime = Some(v.into());
        self
    }

    /// Sets the value of [instance_home][Instance::instance_home].
    pub fn set_instance_home<T: Into<InstanceHome>>(mut self, v: T) -> Self {
        self.instance_home = Some(v.into());
        self
    }

    /// Sets the value of [default_config][Instance::default_config].
    pub fn set_default_config<T: Into<InstanceDefaultConfig>>(mut self, v: T) -> Self {
        self.default_config = Some(v.into());
        self
    }
}

/// The object storage configured as the home of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InstanceHome {
    /// UUID of the instance home.
    pub id: Option<String>,

    /// Currently only `ibm-cos` is supported.
    pub provider: Option<String>,

    /// Type of the instance home storage, for example `objectstore`.
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// Region of the object storage instance.
    pub region: Option<String>,

    /// Endpoint to access the object storage instance.
    pub endpoint: Option<String>,

    /// Bucket name used as the instance home.
    pub bucket: Option<String>,

    /// The HMAC access key, redacted by the service.
    pub hmac_access_key: Option<String>,

    /// The HMAC secret key, redacted by the service.
    pub hmac_secret_key: Option<String>,
}

impl InstanceHome {
    /// Sets the value of [id][InstanceHome::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [provider][InstanceHome::provider].
    pub fn set_provider<T: Into<String>>(mut self, v: T) -> Self {
        self.provider = Some(v.into());
        self
    }

    /// Sets the value of [r#type][InstanceHome::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [region][InstanceHome::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the value of [endpoint][InstanceHome::endpoint].
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the value of [bucket][InstanceHome::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}

/// Default configuration of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InstanceDefaultConfig {
    /// Spark configuration key-value pairs.
    pub key: Option<String>,
}

/// The state of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InstanceGetStateResponse {
    /// GUID of the instance.
    pub id: Option<String>,

    /// State of the instance.
    pub state: Option<String>,
}

impl InstanceGetStateResponse {
    /// Sets the value of [id][InstanceGetStateResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [state][InstanceGetStateResponse::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// The response to [set_instance_home_credentials][crate::client::AnalyticsEngine::set_instance_home_credentials].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InstanceHomeResponse {
    /// GUID of the instance.
    pub instance_id: Option<String>,

    /// Currently only `ibm-cos` is supported.
    pub provider: Option<String>,

    /// Type of the instance home storage.
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// Region of the object storage instance.
    pub region: Option<String>,

    /// Endpoint to access the object storage instance.
    pub endpoint: Option<String>,

    /// The HMAC access key, redacted by the service.
    pub hmac_access_key: Option<String>,

    /// The HMAC secret key, redacted by the service.
    pub hmac_secret_key: Option<String>,
}

impl InstanceHomeResponse {
    /// Sets the value of [instance_id][InstanceHomeResponse::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    /// Sets the value of [provider][InstanceHomeResponse::provider].
    pub fn set_provider<T: Into<String>>(mut self, v: T) -> Self {
        self.provider = Some(v.into());
        self
    }

    /// Sets the value of [endpoint][InstanceHomeResponse::endpoint].
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }
}

/// The Spark runtime used by an instance or application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Runtime {
    /// The Spark version, for example `3.3`.
    pub spark_version: Option<String>,
}

impl Runtime {
    /// Sets the value of [spark_version][Runtime::spark_version].
    pub fn set_spark_version<T: Into<String>>(mut self, v: T) -> Self {
        self.spark_version = Some(v.into());
        self
    }
}

/// The payload of a Spark application submission.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationDetails {
    /// Path of the application to run.
    pub application: Option<String>,

    /// The runtime for this application, overrides the instance default.
    pub runtime: Option<Runtime>,

    /// Path of the jar files containing the application.
    pub jars: Option<String>,

    /// Package names, comma separated.
    pub packages: Option<String>,

    /// Repositories used to resolve the packages, comma separated.
    pub repositories: Option<String>,

    /// File names, comma separated.
    pub files: Option<String>,

    /// Archive names, comma separated.
    pub archives: Option<String>,

    /// Display name of the Spark application.
    pub name: Option<String>,

    /// Entry point for a Java or Scala application.
    #[serde(rename = "class")]
    pub class_name: Option<String>,

    /// Arguments passed to the application.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,

    /// Spark configuration properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub conf: HashMap<String, String>,

    /// Environment variables for the application.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

impl ApplicationDetails {
    /// Sets the value of [application][ApplicationDetails::application].
    pub fn set_application<T: Into<String>>(mut self, v: T) -> Self {
        self.application = Some(v.into());
        self
    }

    /// Sets the value of [runtime][ApplicationDetails::runtime].
    pub fn set_runtime<T: Into<Runtime>>(mut self, v: T) -> Self {
        self.runtime = Some(v.into());
        self
    }

    /// Sets the value of [jars][ApplicationDetails::jars].
    pub fn set_jars<T: Into<String>>(mut self, v: T) -> Self {
        self.jars = Some(v.into());
        self
    }

    /// Sets the value of [packages][ApplicationDetails::packages].
    pub fn set_packages<T: Into<String>>(mut self, v: T) -> Self {
        self.packages = Some(v.into());
        self
    }

    /// Sets the value of [repositories][ApplicationDetails::repositories].
    pub fn set_repositories<T: Into<String>>(mut self, v: T) -> Self {
        self.repositories = Some(v.into());
        self
    }

    /// Sets the value of [files][ApplicationDetails::files].
    pub fn set_files<T: Into<String>>(mut self, v: T) -> Self {
        self.files = Some(v.into());
        self
    }

    /// Sets the value of [archives][ApplicationDetails::archives].
    pub fn set_archives<T: Into<String>>(mut self, v: T) -> Self {
        self.archives = Some(v.into());
        self
    }

    /// Sets the value of [name][ApplicationDetails::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [class_name][ApplicationDetails::class_name].
    pub fn set_class_name<T: Into<String>>(mut self, v: T) -> Self {
        self.class_name = Some(v.into());
        self
    }

    /// Sets the value of [arguments][ApplicationDetails::arguments].
    pub fn set_arguments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [conf][ApplicationDetails::conf].
    pub fn set_conf<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.conf = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [env][ApplicationDetails::env].
    pub fn set_env<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The response to [create_application][crate::client::AnalyticsEngine::create_application].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationResponse {
    /// Identifier of the application.
    pub id: Option<String>,

    /// State of the application.
    pub state: Option<ApplicationState>,
}

impl ApplicationResponse {
    /// Sets the value of [id][ApplicationResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [state][ApplicationResponse::state].
    pub fn set_state<T: Into<ApplicationState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// A Spark application, as returned in [ApplicationCollection].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Application {
    /// Identifier of the application.
    pub id: Option<String>,

    /// Full URL of the resource.
    pub href: Option<String>,

    /// Identifier assigned by Spark to the application.
    pub spark_application_id: Option<String>,

    /// Name of the application in Spark.
    pub spark_application_name: Option<String>,

    /// State of the application.
    pub state: Option<ApplicationState>,

    /// The runtime used by the application.
    pub runtime: Option<Runtime>,

    /// Time the application was submitted, in RFC 3339 format.
    pub submission_time: Option<String>,

    /// Time the application started, in RFC 3339 format.
    pub start_time: Option<String>,

    /// Time the application ended, in RFC 3339 format.
    pub end_time: Option<String>,

    /// Time the application finished, in RFC 3339 format.
    pub finish_time: Option<String>,

    /// Time the application was automatically terminated, in RFC 3339
    /// format.
    pub auto_termination_time: Option<String>,
}

impl Application {
    /// Sets the value of [id][Application::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [href][Application::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Sets the value of [spark_application_id][Application::spark_application_id].
    pub fn set_spark_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.spark_application_id = Some(v.into());
        self
    }

    /// Sets the value of [spark_application_name][Application::spark_application_name].
    pub fn set_spark_application_name<T: Into<String>>(mut self, v: T) -> Self {
        self.spark_application_name = Some(v.into());
        self
    }

    /// Sets the value of [state][Application::state].
    pub fn set_state<T: Into<ApplicationState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [submission_time][Application::submission_time].
    pub fn set_submission_time<T: Into<String>>(mut self, v: T) -> Self {
        self.submission_time = Some(v.into());
        self
    }

    /// Sets the value of [start_time][Application::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Application::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }
}

/// A link to a page in a paginated collection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct PageLink {
    /// The full URL of the page.
    pub href: Option<String>,

    /// The continuation token to request the page.
    pub start: Option<String>,
}

impl PageLink {
    /// Sets the value of [href][PageLink::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Sets the value of [start][PageLink::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = Some(v.into());
        self
    }
}

/// One page of the applications in an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationCollection {
    /// The applications in this page.
    pub applications: Vec<Application>,

    /// The link to the first page.
    pub first: Option<PageLink>,

    /// The link to the next page, absent in the last page.
    pub next: Option<PageLink>,

    /// The link to the previous page.
    pub previous: Option<PageLink>,

    /// The maximum number of applications in each page.
    pub limit: Option<i32>,

    /// The total number of applications matching the request.
    pub total_count: Option<i64>,
}

impl ApplicationCollection {
    /// Sets the value of [applications][ApplicationCollection::applications].
    pub fn set_applications<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Application>,
    {
        self.applications = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][ApplicationCollection::first].
    pub fn set_first<T: Into<PageLink>>(mut self, v: T) -> Self {
        self.first = Some(v.into());
        self
    }

    /// Sets the value of [next][ApplicationCollection::next].
    pub fn set_next<T: Into<PageLink>>(mut self, v: T) -> Self {
        self.next = Some(v.into());
        self
    }

    /// Sets the value of [previous][ApplicationCollection::previous].
    pub fn set_previous<T: Into<PageLink>>(mut self, v: T) -> Self {
        self.previous = Some(v.into());
        self
    }

    /// Sets the value of [limit][ApplicationCollection::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [total_count][ApplicationCollection::total_count].
    pub fn set_total_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_count = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ApplicationCollection {
    type PageItem = Application;

    fn items(self) -> Vec<Self::PageItem> {
        self.applications
    }

    fn next_page_token(&self) -> Option<String> {
        self.next.as_ref().and_then(|n| n.start.clone())
    }
}

/// An entry in the state history of an application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationStateDetails {
    /// Type of the message, for example `server_error`.
    #[serde(rename = "type")]
    pub r#type: Option<String>,

    /// Status code.
    pub code: Option<String>,

    /// Details about the state.
    pub message: Option<String>,
}

/// Details of a Spark application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationGetResponse {
    /// The payload used to submit the application.
    pub application_details: Option<ApplicationDetails>,

    /// Identifier of the application.
    pub id: Option<String>,

    /// Identifier assigned by Spark to the application.
    pub spark_application_id: Option<String>,

    /// Name of the application in Spark.
    pub spark_application_name: Option<String>,

    /// State of the application.
    pub state: Option<ApplicationState>,

    /// The state history of the application.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub state_details: Vec<ApplicationStateDetails>,

    /// The runtime used by the application.
    pub runtime: Option<Runtime>,

    /// Time the application was submitted, in RFC 3339 format.
    pub submission_time: Option<String>,

    /// Time the application started, in RFC 3339 format.
    pub start_time: Option<String>,

    /// Time the application ended, in RFC 3339 format.
    pub end_time: Option<String>,

    /// Time the application finished, in RFC 3339 format.
    pub finish_time: Option<String>,

    /// Time the application was automatically terminated.
    pub auto_termination_time: Option<String>,
}

impl ApplicationGetResponse {
    /// Sets the value of [id][ApplicationGetResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [state][ApplicationGetResponse::state].
    pub fn set_state<T: Into<ApplicationState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [application_details][ApplicationGetResponse::application_details].
    pub fn set_application_details<T: Into<ApplicationDetails>>(mut self, v: T) -> Self {
        self.application_details = Some(v.into());
        self
    }
}

/// The state of a Spark application.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApplicationGetStateResponse {
    /// Identifier of the application.
    pub id: Option<String>,

    /// State of the application.
    pub state: Option<ApplicationState>,

    /// Time the application started, in RFC 3339 format.
    pub start_time: Option<String>,

    /// Time the application ended, in RFC 3339 format.
    pub end_time: Option<String>,

    /// Time the application finished, in RFC 3339 format.
    pub finish_time: Option<String>,

    /// Time the application was automatically terminated.
    pub auto_termination_time: Option<String>,
}

impl ApplicationGetStateResponse {
    /// Sets the value of [id][ApplicationGetStateResponse::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [state][ApplicationGetStateResponse::state].
    pub fn set_state<T: Into<ApplicationState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// The resources used by the running applications and the Spark history
/// server of an instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CurrentResourceConsumptionResponse {
    /// Number of virtual processor cores used.
    pub cores: Option<String>,

    /// Amount of memory used.
    pub memory: Option<String>,
}

impl CurrentResourceConsumptionResponse {
    /// Sets the value of [cores][CurrentResourceConsumptionResponse::cores].
    pub fn set_cores<T: Into<String>>(mut self, v: T) -> Self {
        self.cores = Some(v.into());
        self
    }

    /// Sets the value of [memory][CurrentResourceConsumptionResponse::memory].
    pub fn set_memory<T: Into<String>>(mut self, v: T) -> Self {
        self.memory = Some(v.into());
        self
    }
}

/// Status of the Spark history server.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SparkHistoryServerResponse {
    /// State of the server, `started` or `stopped`.
    pub state: Option<String>,

    /// Number of cpu cores used by the server.
    pub cores: Option<String>,

    /// Amount of memory used by the server.
    pub memory: Option<String>,

    /// Time the server was started, in RFC 3339 format.
    pub start_time: Option<String>,

    /// Time the server was stopped, in RFC 3339 format.
    pub stop_time: Option<String>,
}

impl SparkHistoryServerResponse {
    /// Sets the value of [state][SparkHistoryServerResponse::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [cores][SparkHistoryServerResponse::cores].
    pub fn set_cores<T: Into<String>>(mut self, v: T) -> Self {
        self.cores = Some(v.into());
        self
    }

    /// Sets the value of [memory][SparkHistoryServerResponse::memory].
    pub fn set_memory<T: Into<String>>(mut self, v: T) -> Self {
        self.memory = Some(v.into());
        self
    }
}

/// The state of a Spark application.
///
/// The service may add new states in the future. Applications should handle
/// the [UnknownValue][ApplicationState::UnknownValue] variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
#[non_exhaustive]
pub enum ApplicationState {
    Accepted,
    Running,
    Finished,
    Failed,
    Stopped,
    AutoTerminated,
    OpsTerminated,
    /// A state not known to this version of the client library.
    UnknownValue(String),
}

impl ApplicationState {
    /// The name of the state, as used in requests and responses.
    pub fn name(&self) -> &str {
        match self {
            Self::Accepted => "accepted",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Stopped => "stopped",
            Self::AutoTerminated => "auto_terminated",
            Self::OpsTerminated => "ops_terminated",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ApplicationState {
    fn from(value: &str) -> Self {
        match value {
            "accepted" => Self::Accepted,
            "running" => Self::Running,
            "finished" => Self::Finished,
            "failed" => Self::Failed,
            "stopped" => Self::Stopped,
            "auto_terminated" => Self::AutoTerminated,
            "ops_terminated" => Self::OpsTerminated,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl From<String> for ApplicationState {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ApplicationState> for String {
    fn from(value: ApplicationState) -> Self {
        match value {
            ApplicationState::UnknownValue(v) => v,
            v => v.name().to_string(),
        }
    }
}

/// The request message for [get_instance][crate::client::AnalyticsEngine::get_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetInstanceRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetInstanceRequest {
    /// Sets the value of [instance_id][GetInstanceRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [get_instance_state][crate::client::AnalyticsEngine::get_instance_state].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetInstanceStateRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetInstanceStateRequest {
    /// Sets the value of [instance_id][GetInstanceStateRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [set_instance_home_credentials][crate::client::AnalyticsEngine::set_instance_home_credentials].
///
/// Only the HMAC keys are sent in the request body.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct SetInstanceHomeCredentialsRequest {
    /// GUID of the instance.
    #[serde(skip)]
    pub instance_id: String,

    /// The HMAC access key of the object storage instance.
    pub hmac_access_key: Option<String>,

    /// The HMAC secret key of the object storage instance.
    pub hmac_secret_key: Option<String>,
}

impl SetInstanceHomeCredentialsRequest {
    /// Sets the value of [instance_id][SetInstanceHomeCredentialsRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [hmac_access_key][SetInstanceHomeCredentialsRequest::hmac_access_key].
    pub fn set_hmac_access_key<T: Into<String>>(mut self, v: T) -> Self {
        self.hmac_access_key = Some(v.into());
        self
    }

    /// Sets the value of [hmac_secret_key][SetInstanceHomeCredentialsRequest::hmac_secret_key].
    pub fn set_hmac_secret_key<T: Into<String>>(mut self, v: T) -> Self {
        self.hmac_secret_key = Some(v.into());
        self
    }
}

/// The request message for [get_instance_default_configs][crate::client::AnalyticsEngine::get_instance_default_configs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetInstanceDefaultConfigsRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetInstanceDefaultConfigsRequest {
    /// Sets the value of [instance_id][GetInstanceDefaultConfigsRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [replace_instance_default_configs][crate::client::AnalyticsEngine::replace_instance_default_configs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReplaceInstanceDefaultConfigsRequest {
    /// GUID of the instance.
    pub instance_id: String,

    /// The new default Spark configuration, sent as the request body.
    pub body: HashMap<String, String>,
}

impl ReplaceInstanceDefaultConfigsRequest {
    /// Sets the value of [instance_id][ReplaceInstanceDefaultConfigsRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [body][ReplaceInstanceDefaultConfigsRequest::body].
    pub fn set_body<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.body = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The request message for [get_instance_default_runtime][crate::client::AnalyticsEngine::get_instance_default_runtime].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetInstanceDefaultRuntimeRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetInstanceDefaultRuntimeRequest {
    /// Sets the value of [instance_id][GetInstanceDefaultRuntimeRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [replace_instance_default_runtime][crate::client::AnalyticsEngine::replace_instance_default_runtime].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct ReplaceInstanceDefaultRuntimeRequest {
    /// GUID of the instance.
    #[serde(skip)]
    pub instance_id: String,

    /// The Spark version of the new default runtime.
    pub spark_version: Option<String>,
}

impl ReplaceInstanceDefaultRuntimeRequest {
    /// Sets the value of [instance_id][ReplaceInstanceDefaultRuntimeRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [spark_version][ReplaceInstanceDefaultRuntimeRequest::spark_version].
    pub fn set_spark_version<T: Into<String>>(mut self, v: T) -> Self {
        self.spark_version = Some(v.into());
        self
    }
}

/// The request message for [create_application][crate::client::AnalyticsEngine::create_application].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[non_exhaustive]
pub struct CreateApplicationRequest {
    /// GUID of the instance.
    #[serde(skip)]
    pub instance_id: String,

    /// The application to submit.
    pub application_details: Option<ApplicationDetails>,

    /// The runtime for this application.
    pub runtime: Option<Runtime>,
}

impl CreateApplicationRequest {
    /// Sets the value of [instance_id][CreateApplicationRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [application_details][CreateApplicationRequest::application_details].
    pub fn set_application_details<T: Into<ApplicationDetails>>(mut self, v: T) -> Self {
        self.application_details = Some(v.into());
        self
    }

    /// Sets the value of [runtime][CreateApplicationRequest::runtime].
    pub fn set_runtime<T: Into<Runtime>>(mut self, v: T) -> Self {
        self.runtime = Some(v.into());
        self
    }
}

/// The request message for [list_applications][crate::client::AnalyticsEngine::list_applications].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListApplicationsRequest {
    /// GUID of the instance.
    pub instance_id: String,

    /// Only return applications in these states.
    pub state: Vec<ApplicationState>,

    /// Only return applications started in this interval. Two RFC 3339
    /// timestamps separated by a comma.
    pub start_time_interval: Option<String>,

    /// Only return applications submitted in this interval.
    pub submission_time_interval: Option<String>,

    /// Only return applications that ended in this interval.
    pub end_time_interval: Option<String>,

    /// The maximum number of applications in each page.
    pub limit: Option<i32>,

    /// The continuation token. The pagers in this crate own this value,
    /// only set it when calling `send()` directly.
    pub start: Option<String>,
}

impl ListApplicationsRequest {
    /// Sets the value of [instance_id][ListApplicationsRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [state][ListApplicationsRequest::state].
    pub fn set_state<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ApplicationState>,
    {
        self.state = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [start_time_interval][ListApplicationsRequest::start_time_interval].
    pub fn set_start_time_interval<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time_interval = Some(v.into());
        self
    }

    /// Sets the value of [submission_time_interval][ListApplicationsRequest::submission_time_interval].
    pub fn set_submission_time_interval<T: Into<String>>(mut self, v: T) -> Self {
        self.submission_time_interval = Some(v.into());
        self
    }

    /// Sets the value of [end_time_interval][ListApplicationsRequest::end_time_interval].
    pub fn set_end_time_interval<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time_interval = Some(v.into());
        self
    }

    /// Sets the value of [limit][ListApplicationsRequest::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [start][ListApplicationsRequest::start].
    pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
        self.start = Some(v.into());
        self
    }

    /// Sets or clears the value of [start][ListApplicationsRequest::start].
    pub fn set_or_clear_start<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request message for [get_application][crate::client::AnalyticsEngine::get_application].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetApplicationRequest {
    /// GUID of the instance.
    pub instance_id: String,

    /// Identifier of the application.
    pub application_id: String,
}

impl GetApplicationRequest {
    /// Sets the value of [instance_id][GetApplicationRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [application_id][GetApplicationRequest::application_id].
    pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.application_id = v.into();
        self
    }
}

/// The request message for [delete_application][crate::client::AnalyticsEngine::delete_application].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteApplicationRequest {
    /// GUID of the instance.
    pub instance_id: String,

    /// Identifier of the application.
    pub application_id: String,
}

impl DeleteApplicationRequest {
    /// Sets the value of [instance_id][DeleteApplicationRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [application_id][DeleteApplicationRequest::application_id].
    pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.application_id = v.into();
        self
    }
}

/// The request message for [get_application_state][crate::client::AnalyticsEngine::get_application_state].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetApplicationStateRequest {
    /// GUID of the instance.
    pub instance_id: String,

    /// Identifier of the application.
    pub application_id: String,
}

impl GetApplicationStateRequest {
    /// Sets the value of [instance_id][GetApplicationStateRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }

    /// Sets the value of [application_id][GetApplicationStateRequest::application_id].
    pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
        self.application_id = v.into();
        self
    }
}

/// The request message for [get_current_resource_consumption][crate::client::AnalyticsEngine::get_current_resource_consumption].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCurrentResourceConsumptionRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetCurrentResourceConsumptionRequest {
    /// Sets the value of [instance_id][GetCurrentResourceConsumptionRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [get_spark_history_server][crate::client::AnalyticsEngine::get_spark_history_server].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSparkHistoryServerRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl GetSparkHistoryServerRequest {
    /// Sets the value of [instance_id][GetSparkHistoryServerRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [start_spark_history_server][crate::client::AnalyticsEngine::start_spark_history_server].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StartSparkHistoryServerRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl StartSparkHistoryServerRequest {
    /// Sets the value of [instance_id][StartSparkHistoryServerRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

/// The request message for [stop_spark_history_server][crate::client::AnalyticsEngine::stop_spark_history_server].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StopSparkHistoryServerRequest {
    /// GUID of the instance.
    pub instance_id: String,
}

impl StopSparkHistoryServerRequest {
    /// Sets the value of [instance_id][StopSparkHistoryServerRequest::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = v.into();
        self
    }
}

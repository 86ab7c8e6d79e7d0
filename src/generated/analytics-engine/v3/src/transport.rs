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

use crate::Result;
use gax::options::RequestOptions;
use gax::options::internal::set_path_template;
use gax::response::Response;
use gaxi::http::NoBody;
use gaxi::path_parameter::required;
use std::collections::HashMap;

const BASE: &str = "/v3/analytics_engines";

/// Implements [AnalyticsEngine](super::stub::AnalyticsEngine) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct AnalyticsEngine {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for AnalyticsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("AnalyticsEngine")
            .field("inner", &self.inner)
            .finish()
    }
}

impl AnalyticsEngine {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner.builder(method, path).header(
            gaxi::api_header::X_CLIENT_LIBRARY,
            reqwest::header::HeaderValue::from_static(&crate::info::X_CLIENT_LIBRARY_HEADER),
        )
    }
}

impl super::stub::AnalyticsEngine for AnalyticsEngine {
    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Instance>> {
        let path = format!("{BASE}/{}", required(&req.instance_id, "instance_id")?);
        let options = set_path_template(options, "/v3/analytics_engines/{instance_id}");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_instance_state(
        &self,
        req: crate::model::GetInstanceStateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InstanceGetStateResponse>> {
        let path = format!(
            "{BASE}/{}/state",
            required(&req.instance_id, "instance_id")?
        );
        let options = set_path_template(options, "/v3/analytics_engines/{instance_id}/state");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn set_instance_home_credentials(
        &self,
        req: crate::model::SetInstanceHomeCredentialsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::InstanceHomeResponse>> {
        let path = format!(
            "{BASE}/{}/instance_home",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/instance_home");
        let builder = self.builder(reqwest::Method::PUT, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_instance_default_configs(
        &self,
        req: crate::model::GetInstanceDefaultConfigsRequest,
        options: RequestOptions,
    ) -> Result<Response<HashMap<String, String>>> {
        let path = format!(
            "{BASE}/{}/default_configs",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/default_configs");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn replace_instance_default_configs(
        &self,
        req: crate::model::ReplaceInstanceDefaultConfigsRequest,
        options: RequestOptions,
    ) -> Result<Response<HashMap<String, String>>> {
        let path = format!(
            "{BASE}/{}/default_configs",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/default_configs");
        let builder = self.builder(reqwest::Method::PUT, path);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_instance_default_runtime(
        &self,
        req: crate::model::GetInstanceDefaultRuntimeRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Runtime>> {
        let path = format!(
            "{BASE}/{}/default_runtime",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/default_runtime");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn replace_instance_default_runtime(
        &self,
        req: crate::model::ReplaceInstanceDefaultRuntimeRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::Runtime>> {
        let path = format!(
            "{BASE}/{}/default_runtime",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/default_runtime");
        let builder = self.builder(reqwest::Method::PUT, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn create_application(
        &self,
        req: crate::model::CreateApplicationRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApplicationResponse>> {
        let path = format!(
            "{BASE}/{}/spark_applications",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/spark_applications");
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn list_applications(
        &self,
        req: crate::model::ListApplicationsRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApplicationCollection>> {
        use gaxi::query_parameter::add;
        let path = format!(
            "{BASE}/{}/spark_applications",
            required(&req.instance_id, "instance_id")?
        );
        let options =
            set_path_template(options, "/v3/analytics_engines/{instance_id}/spark_applications");
        let builder = self.builder(reqwest::Method::GET, path);
        // The service expects one comma-separated `state` value.
        let state = (!req.state.is_empty()).then(|| {
            req.state
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(",")
        });
        let builder = add(builder, "state", &state);
        let builder = add(builder, "start_time_interval", &req.start_time_interval);
        let builder = add(
            builder,
            "submission_time_interval",
            &req.submission_time_interval,
        );
        let builder = add(builder, "end_time_interval", &req.end_time_interval);
        let builder = add(builder, "limit", &req.limit);
        let builder = add(builder, "start", &req.start);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_application(
        &self,
        req: crate::model::GetApplicationRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApplicationGetResponse>> {
        let path = format!(
            "{BASE}/{}/spark_applications/{}",
            required(&req.instance_id, "instance_id")?,
            required(&req.application_id, "application_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_applications/{application_id}",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn delete_application(
        &self,
        req: crate::model::DeleteApplicationRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!(
            "{BASE}/{}/spark_applications/{}",
            required(&req.instance_id, "instance_id")?,
            required(&req.application_id, "application_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_applications/{application_id}",
        );
        let builder = self.builder(reqwest::Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_application_state(
        &self,
        req: crate::model::GetApplicationStateRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ApplicationGetStateResponse>> {
        let path = format!(
            "{BASE}/{}/spark_applications/{}/state",
            required(&req.instance_id, "instance_id")?,
            required(&req.application_id, "application_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_applications/{application_id}/state",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_current_resource_consumption(
        &self,
        req: crate::model::GetCurrentResourceConsumptionRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::CurrentResourceConsumptionResponse>> {
        let path = format!(
            "{BASE}/{}/current_resource_consumption",
            required(&req.instance_id, "instance_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/current_resource_consumption",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_spark_history_server(
        &self,
        req: crate::model::GetSparkHistoryServerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::SparkHistoryServerResponse>> {
        let path = format!(
            "{BASE}/{}/spark_history_server",
            required(&req.instance_id, "instance_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_history_server",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn start_spark_history_server(
        &self,
        req: crate::model::StartSparkHistoryServerRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::SparkHistoryServerResponse>> {
        let path = format!(
            "{BASE}/{}/spark_history_server",
            required(&req.instance_id, "instance_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_history_server",
        );
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn stop_spark_history_server(
        &self,
        req: crate::model::StopSparkHistoryServerRequest,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let path = format!(
            "{BASE}/{}/spark_history_server",
            required(&req.instance_id, "instance_id")?
        );
        let options = set_path_template(
            options,
            "/v3/analytics_engines/{instance_id}/spark_history_server",
        );
        let builder = self.builder(reqwest::Method::DELETE, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

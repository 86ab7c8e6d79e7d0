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

const BASE: &str = "/v2/analytics_engines";

/// Implements [AnalyticsEngines](super::stub::AnalyticsEngines) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct AnalyticsEngines {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for AnalyticsEngines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("AnalyticsEngines")
            .field("inner", &self.inner)
            .finish()
    }
}

impl AnalyticsEngines {
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

impl super::stub::AnalyticsEngines for AnalyticsEngines {
    async fn get_analytics_engine_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineByIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::AnalyticsEngine>> {
        let path = format!("{BASE}/{}", required(&req.instance_guid, "instance_guid")?);
        let options = set_path_template(options, "/v2/analytics_engines/{instance_guid}");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_analytics_engine_state_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineStateByIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::AnalyticsEngineState>> {
        let path = format!(
            "{BASE}/{}/state",
            required(&req.instance_guid, "instance_guid")?
        );
        let options = set_path_template(options, "/v2/analytics_engines/{instance_guid}/state");
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_all_customization_requests(
        &self,
        req: crate::model::GetAllCustomizationRequestsRequest,
        options: RequestOptions,
    ) -> Result<Response<Vec<crate::model::CustomizationRequest>>> {
        let path = format!(
            "{BASE}/{}/customization_requests",
            required(&req.instance_guid, "instance_guid")?
        );
        let options = set_path_template(
            options,
            "/v2/analytics_engines/{instance_guid}/customization_requests",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_customization_request_by_id(
        &self,
        req: crate::model::GetCustomizationRequestByIdRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::CustomizationRunDetails>> {
        let path = format!(
            "{BASE}/{}/customization_requests/{}",
            required(&req.instance_guid, "instance_guid")?,
            required(&req.request_id, "request_id")?
        );
        let options = set_path_template(
            options,
            "/v2/analytics_engines/{instance_guid}/customization_requests/{request_id}",
        );
        let builder = self.builder(reqwest::Method::GET, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn resize_cluster(
        &self,
        req: crate::model::ResizeClusterRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResizeClusterResponse>> {
        let path = format!(
            "{BASE}/{}/resize",
            required(&req.instance_guid, "instance_guid")?
        );
        let options = set_path_template(options, "/v2/analytics_engines/{instance_guid}/resize");
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner.execute(builder, Some(req), options).await
    }

    async fn reset_cluster_password(
        &self,
        req: crate::model::ResetClusterPasswordRequest,
        options: RequestOptions,
    ) -> Result<Response<crate::model::ResetClusterPasswordResponse>> {
        let path = format!(
            "{BASE}/{}/reset_password",
            required(&req.instance_guid, "instance_guid")?
        );
        let options = set_path_template(
            options,
            "/v2/analytics_engines/{instance_guid}/reset_password",
        );
        let builder = self.builder(reqwest::Method::POST, path);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

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

/// A dyn-compatible, crate-private version of [super::AnalyticsEngines].
#[async_trait::async_trait]
pub trait AnalyticsEngines: std::fmt::Debug + Send + Sync {
    async fn get_analytics_engine_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AnalyticsEngine>>;

    async fn get_analytics_engine_state_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineStateByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AnalyticsEngineState>>;

    async fn get_all_customization_requests(
        &self,
        req: crate::model::GetAllCustomizationRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::vec::Vec<crate::model::CustomizationRequest>>>;

    async fn get_customization_request_by_id(
        &self,
        req: crate::model::GetCustomizationRequestByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomizationRunDetails>>;

    async fn resize_cluster(
        &self,
        req: crate::model::ResizeClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResizeClusterResponse>>;

    async fn reset_cluster_password(
        &self,
        req: crate::model::ResetClusterPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResetClusterPasswordResponse>>;
}

/// All implementations of [super::AnalyticsEngines] also implement [AnalyticsEngines].
#[async_trait::async_trait]
impl<T: super::AnalyticsEngines> AnalyticsEngines for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_analytics_engine_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AnalyticsEngine>> {
        T::get_analytics_engine_by_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_analytics_engine_state_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineStateByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AnalyticsEngineState>> {
        T::get_analytics_engine_state_by_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_all_customization_requests(
        &self,
        req: crate::model::GetAllCustomizationRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::vec::Vec<crate::model::CustomizationRequest>>> {
        T::get_all_customization_requests(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_customization_request_by_id(
        &self,
        req: crate::model::GetCustomizationRequestByIdRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomizationRunDetails>> {
        T::get_customization_request_by_id(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn resize_cluster(
        &self,
        req: crate::model::ResizeClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResizeClusterResponse>> {
        T::resize_cluster(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn reset_cluster_password(
        &self,
        req: crate::model::ResetClusterPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ResetClusterPasswordResponse>> {
        T::reset_cluster_password(self, req, options).await
    }
}

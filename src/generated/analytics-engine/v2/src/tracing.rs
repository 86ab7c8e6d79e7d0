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

/// Implements a [AnalyticsEngines](super::stub::AnalyticsEngines) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct AnalyticsEngines<T>
where
    T: super::stub::AnalyticsEngines + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> AnalyticsEngines<T>
where
    T: super::stub::AnalyticsEngines + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::AnalyticsEngines for AnalyticsEngines<T>
where
    T: super::stub::AnalyticsEngines + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_analytics_engine_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineByIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnalyticsEngine>> {
        self.inner.get_analytics_engine_by_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_analytics_engine_state_by_id(
        &self,
        req: crate::model::GetAnalyticsEngineStateByIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AnalyticsEngineState>> {
        self.inner.get_analytics_engine_state_by_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_all_customization_requests(
        &self,
        req: crate::model::GetAllCustomizationRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<std::vec::Vec<crate::model::CustomizationRequest>>> {
        self.inner.get_all_customization_requests(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_customization_request_by_id(
        &self,
        req: crate::model::GetCustomizationRequestByIdRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomizationRunDetails>> {
        self.inner.get_customization_request_by_id(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn resize_cluster(
        &self,
        req: crate::model::ResizeClusterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResizeClusterResponse>> {
        self.inner.resize_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn reset_cluster_password(
        &self,
        req: crate::model::ResetClusterPasswordRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ResetClusterPasswordResponse>> {
        self.inner.reset_cluster_password(req, options).await
    }
}

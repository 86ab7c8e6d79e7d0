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

/// Implements a [AnalyticsEngine](super::stub::AnalyticsEngine) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct AnalyticsEngine<T>
where
    T: super::stub::AnalyticsEngine + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> AnalyticsEngine<T>
where
    T: super::stub::AnalyticsEngine + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::AnalyticsEngine for AnalyticsEngine<T>
where
    T: super::stub::AnalyticsEngine + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Instance>> {
        self.inner.get_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_instance_state(
        &self,
        req: crate::model::GetInstanceStateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceGetStateResponse>> {
        self.inner.get_instance_state(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_instance_home_credentials(
        &self,
        req: crate::model::SetInstanceHomeCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceHomeResponse>> {
        self.inner.set_instance_home_credentials(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_instance_default_configs(
        &self,
        req: crate::model::GetInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<std::collections::HashMap<String, String>>> {
        self.inner.get_instance_default_configs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn replace_instance_default_configs(
        &self,
        req: crate::model::ReplaceInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<std::collections::HashMap<String, String>>> {
        self.inner.replace_instance_default_configs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_instance_default_runtime(
        &self,
        req: crate::model::GetInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Runtime>> {
        self.inner.get_instance_default_runtime(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn replace_instance_default_runtime(
        &self,
        req: crate::model::ReplaceInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Runtime>> {
        self.inner.replace_instance_default_runtime(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_application(
        &self,
        req: crate::model::CreateApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApplicationResponse>> {
        self.inner.create_application(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_applications(
        &self,
        req: crate::model::ListApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApplicationCollection>> {
        self.inner.list_applications(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_application(
        &self,
        req: crate::model::GetApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApplicationGetResponse>> {
        self.inner.get_application(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_application(
        &self,
        req: crate::model::DeleteApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_application(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_application_state(
        &self,
        req: crate::model::GetApplicationStateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ApplicationGetStateResponse>> {
        self.inner.get_application_state(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_current_resource_consumption(
        &self,
        req: crate::model::GetCurrentResourceConsumptionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CurrentResourceConsumptionResponse>> {
        self.inner.get_current_resource_consumption(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_spark_history_server(
        &self,
        req: crate::model::GetSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SparkHistoryServerResponse>> {
        self.inner.get_spark_history_server(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn start_spark_history_server(
        &self,
        req: crate::model::StartSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SparkHistoryServerResponse>> {
        self.inner.start_spark_history_server(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_spark_history_server(
        &self,
        req: crate::model::StopSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.stop_spark_history_server(req, options).await
    }
}

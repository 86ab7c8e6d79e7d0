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

/// A dyn-compatible, crate-private version of [super::AnalyticsEngine].
#[async_trait::async_trait]
pub trait AnalyticsEngine: std::fmt::Debug + Send + Sync {
    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Instance>>;

    async fn get_instance_state(
        &self,
        req: crate::model::GetInstanceStateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InstanceGetStateResponse>>;

    async fn set_instance_home_credentials(
        &self,
        req: crate::model::SetInstanceHomeCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InstanceHomeResponse>>;

    async fn get_instance_default_configs(
        &self,
        req: crate::model::GetInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::collections::HashMap<String, String>>>;

    async fn replace_instance_default_configs(
        &self,
        req: crate::model::ReplaceInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::collections::HashMap<String, String>>>;

    async fn get_instance_default_runtime(
        &self,
        req: crate::model::GetInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Runtime>>;

    async fn replace_instance_default_runtime(
        &self,
        req: crate::model::ReplaceInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Runtime>>;

    async fn create_application(
        &self,
        req: crate::model::CreateApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationResponse>>;

    async fn list_applications(
        &self,
        req: crate::model::ListApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationCollection>>;

    async fn get_application(
        &self,
        req: crate::model::GetApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationGetResponse>>;

    async fn delete_application(
        &self,
        req: crate::model::DeleteApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_application_state(
        &self,
        req: crate::model::GetApplicationStateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationGetStateResponse>>;

    async fn get_current_resource_consumption(
        &self,
        req: crate::model::GetCurrentResourceConsumptionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CurrentResourceConsumptionResponse>>;

    async fn get_spark_history_server(
        &self,
        req: crate::model::GetSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>>;

    async fn start_spark_history_server(
        &self,
        req: crate::model::StartSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>>;

    async fn stop_spark_history_server(
        &self,
        req: crate::model::StopSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;
}

/// All implementations of [super::AnalyticsEngine] also implement [AnalyticsEngine].
#[async_trait::async_trait]
impl<T: super::AnalyticsEngine> AnalyticsEngine for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Instance>> {
        T::get_instance(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_instance_state(
        &self,
        req: crate::model::GetInstanceStateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InstanceGetStateResponse>> {
        T::get_instance_state(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn set_instance_home_credentials(
        &self,
        req: crate::model::SetInstanceHomeCredentialsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::InstanceHomeResponse>> {
        T::set_instance_home_credentials(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_instance_default_configs(
        &self,
        req: crate::model::GetInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::collections::HashMap<String, String>>> {
        T::get_instance_default_configs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn replace_instance_default_configs(
        &self,
        req: crate::model::ReplaceInstanceDefaultConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<std::collections::HashMap<String, String>>> {
        T::replace_instance_default_configs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_instance_default_runtime(
        &self,
        req: crate::model::GetInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Runtime>> {
        T::get_instance_default_runtime(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn replace_instance_default_runtime(
        &self,
        req: crate::model::ReplaceInstanceDefaultRuntimeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Runtime>> {
        T::replace_instance_default_runtime(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_application(
        &self,
        req: crate::model::CreateApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationResponse>> {
        T::create_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_applications(
        &self,
        req: crate::model::ListApplicationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationCollection>> {
        T::list_applications(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_application(
        &self,
        req: crate::model::GetApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationGetResponse>> {
        T::get_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_application(
        &self,
        req: crate::model::DeleteApplicationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_application(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_application_state(
        &self,
        req: crate::model::GetApplicationStateRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ApplicationGetStateResponse>> {
        T::get_application_state(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_current_resource_consumption(
        &self,
        req: crate::model::GetCurrentResourceConsumptionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CurrentResourceConsumptionResponse>> {
        T::get_current_resource_consumption(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_spark_history_server(
        &self,
        req: crate::model::GetSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>> {
        T::get_spark_history_server(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_spark_history_server(
        &self,
        req: crate::model::StartSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>> {
        T::start_spark_history_server(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_spark_history_server(
        &self,
        req: crate::model::StopSparkHistoryServerRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::stop_spark_history_server(self, req, options).await
    }
}

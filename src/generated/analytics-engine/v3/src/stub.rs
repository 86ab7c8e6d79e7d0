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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::AnalyticsEngine].
///
/// Application developers may need to implement this trait to mock
/// `client::AnalyticsEngine`.  In other use-cases, application developers only
/// use `client::AnalyticsEngine` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait AnalyticsEngine: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::AnalyticsEngine::get_instance].
    fn get_instance(
        &self,
        _req: crate::model::GetInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Instance>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_instance_state].
    fn get_instance_state(
        &self,
        _req: crate::model::GetInstanceStateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::InstanceGetStateResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::set_instance_home_credentials].
    fn set_instance_home_credentials(
        &self,
        _req: crate::model::SetInstanceHomeCredentialsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::InstanceHomeResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_instance_default_configs].
    fn get_instance_default_configs(
        &self,
        _req: crate::model::GetInstanceDefaultConfigsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<std::collections::HashMap<String, String>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::replace_instance_default_configs].
    fn replace_instance_default_configs(
        &self,
        _req: crate::model::ReplaceInstanceDefaultConfigsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<std::collections::HashMap<String, String>>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_instance_default_runtime].
    fn get_instance_default_runtime(
        &self,
        _req: crate::model::GetInstanceDefaultRuntimeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Runtime>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::replace_instance_default_runtime].
    fn replace_instance_default_runtime(
        &self,
        _req: crate::model::ReplaceInstanceDefaultRuntimeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::Runtime>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::create_application].
    fn create_application(
        &self,
        _req: crate::model::CreateApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApplicationResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::list_applications].
    fn list_applications(
        &self,
        _req: crate::model::ListApplicationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApplicationCollection>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_application].
    fn get_application(
        &self,
        _req: crate::model::GetApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApplicationGetResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::delete_application].
    fn delete_application(
        &self,
        _req: crate::model::DeleteApplicationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_application_state].
    fn get_application_state(
        &self,
        _req: crate::model::GetApplicationStateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ApplicationGetStateResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_current_resource_consumption].
    fn get_current_resource_consumption(
        &self,
        _req: crate::model::GetCurrentResourceConsumptionRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<crate::model::CurrentResourceConsumptionResponse>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::get_spark_history_server].
    fn get_spark_history_server(
        &self,
        _req: crate::model::GetSparkHistoryServerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::start_spark_history_server].
    fn start_spark_history_server(
        &self,
        _req: crate::model::StartSparkHistoryServerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SparkHistoryServerResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngine::stop_spark_history_server].
    fn stop_spark_history_server(
        &self,
        _req: crate::model::StopSparkHistoryServerRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<()>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}

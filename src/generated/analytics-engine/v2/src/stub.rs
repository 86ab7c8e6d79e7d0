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

/// Defines the trait used to implement [super::client::AnalyticsEngines].
///
/// Application developers may need to implement this trait to mock
/// `client::AnalyticsEngines`.  In other use-cases, application developers only
/// use `client::AnalyticsEngines` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations routinely. Consequently, this trait gains new
/// methods too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait AnalyticsEngines: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::AnalyticsEngines::get_analytics_engine_by_id].
    fn get_analytics_engine_by_id(
        &self,
        _req: crate::model::GetAnalyticsEngineByIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AnalyticsEngine>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngines::get_analytics_engine_state_by_id].
    fn get_analytics_engine_state_by_id(
        &self,
        _req: crate::model::GetAnalyticsEngineStateByIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::AnalyticsEngineState>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngines::get_all_customization_requests].
    fn get_all_customization_requests(
        &self,
        _req: crate::model::GetAllCustomizationRequestsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<
            gax::response::Response<std::vec::Vec<crate::model::CustomizationRequest>>,
        >,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngines::get_customization_request_by_id].
    fn get_customization_request_by_id(
        &self,
        _req: crate::model::GetCustomizationRequestByIdRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::CustomizationRunDetails>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngines::resize_cluster].
    fn resize_cluster(
        &self,
        _req: crate::model::ResizeClusterRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ResizeClusterResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::AnalyticsEngines::reset_cluster_password].
    fn reset_cluster_password(
        &self,
        _req: crate::model::ResetClusterPasswordRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ResetClusterPasswordResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}

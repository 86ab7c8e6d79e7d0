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

//! Analytics Engine Client Libraries for Rust - Serverless Spark API (v3)
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to interact with the
//! serverless Spark instances of the Analytics Engine service. Most
//! applications will use the structs defined in the [client] module:
//! * [AnalyticsEngine](client/struct.AnalyticsEngine.html)
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use analytics_engine_v3::client::AnalyticsEngine;
//! let client = AnalyticsEngine::builder()
//!     .with_credentials(gax::credentials::bearer("my-token")?)
//!     .build()
//!     .await?;
//! let applications = client
//!     .list_applications()
//!     .set_instance_id("my-instance")
//!     .set_limit(50)
//!     .paginator()?
//!     .get_all()
//!     .await?;
//! for app in applications {
//!     println!("{app:?}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

pub mod builder;
pub mod client;
pub mod stub;

#[doc(hidden)]
pub(crate) mod tracing;
#[doc(hidden)]
pub(crate) mod transport;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://api.us-south.ae.cloud.ibm.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::options::InstrumentationClientInfo =
        gaxi::options::InstrumentationClientInfo {
            service_name: "ibm-analytics-engine",
            client_version: VERSION,
            client_artifact: NAME,
            default_endpoint: crate::DEFAULT_HOST,
        };

    lazy_static::lazy_static! {
        pub(crate) static ref X_CLIENT_LIBRARY_HEADER: String =
            INSTRUMENTATION_CLIENT_INFO.header().header_value();
    }
}

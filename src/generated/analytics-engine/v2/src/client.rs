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

//! Contains the client for Analytics Engine clusters.

/// Implements a client for the Analytics Engine Hadoop and Spark clusters API (v2).
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use analytics_engine_v2::client::AnalyticsEngines;
/// let client = AnalyticsEngines::builder().build().await?;
/// // use `client` to make requests to the Analytics Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages Hadoop and Spark clusters: their details and state, the
/// customization requests run on the cluster nodes, the number of compute
/// nodes, and the password of the cluster user.
///
/// # Configuration
///
/// To configure `AnalyticsEngines` use the `with_*` methods in the type
/// returned by [builder()][AnalyticsEngines::builder]. The default
/// configuration should work for most applications. Common configuration
/// changes include
///
/// * [with_endpoint()]: by default this client uses the `us-south` regional
///   endpoint (`https://api.us-south.ae.cloud.ibm.com`).
/// * [with_credentials()]: by default this client sends no credentials.
///
/// [with_endpoint()]: super::builder::analytics_engines::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::analytics_engines::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `AnalyticsEngines` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `AnalyticsEngines` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AnalyticsEngines {
    inner: std::sync::Arc<dyn super::stub::dynamic::AnalyticsEngines>,
}

impl AnalyticsEngines {
    /// Returns a builder for [AnalyticsEngines].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use analytics_engine_v2::client::AnalyticsEngines;
    /// let client = AnalyticsEngines::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::analytics_engines::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::analytics_engines::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::AnalyticsEngines + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::AnalyticsEngines>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsEngines> {
        super::transport::AnalyticsEngines::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsEngines> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::AnalyticsEngines::new)
    }

    /// Retrieves the details of a cluster, including its nodes and service
    /// endpoints.
    pub fn get_analytics_engine_by_id(
        &self,
    ) -> super::builder::analytics_engines::GetAnalyticsEngineById {
        super::builder::analytics_engines::GetAnalyticsEngineById::new(self.inner.clone())
    }

    /// Returns the state of a cluster.
    pub fn get_analytics_engine_state_by_id(
        &self,
    ) -> super::builder::analytics_engines::GetAnalyticsEngineStateById {
        super::builder::analytics_engines::GetAnalyticsEngineStateById::new(self.inner.clone())
    }

    /// Lists the customization requests of a cluster.
    pub fn get_all_customization_requests(
        &self,
    ) -> super::builder::analytics_engines::GetAllCustomizationRequests {
        super::builder::analytics_engines::GetAllCustomizationRequests::new(self.inner.clone())
    }

    /// Retrieves the run details of a customization request.
    ///
    /// # Example
    /// ```
    /// # use analytics_engine_v2::client::AnalyticsEngines;
    /// async fn example(client: &AnalyticsEngines) -> gax::Result<()> {
    ///     let details = client
    ///         .get_customization_request_by_id()
    ///         .set_instance_guid("my-instance")
    ///         .set_request_id("37")
    ///         .send()
    ///         .await?;
    ///     if let Some(status) = details.run_details {
    ///         println!("overall status: {:?}", status.overall_status);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_customization_request_by_id(
        &self,
    ) -> super::builder::analytics_engines::GetCustomizationRequestById {
        super::builder::analytics_engines::GetCustomizationRequestById::new(self.inner.clone())
    }

    /// Changes the number of compute nodes in a cluster.
    ///
    /// The service resizes the cluster asynchronously, the response contains
    /// the ID of the resize request.
    pub fn resize_cluster(&self) -> super::builder::analytics_engines::ResizeCluster {
        super::builder::analytics_engines::ResizeCluster::new(self.inner.clone())
    }

    /// Resets the password of the cluster user.
    ///
    /// The response is the only place where the new password is returned.
    pub fn reset_cluster_password(
        &self,
    ) -> super::builder::analytics_engines::ResetClusterPassword {
        super::builder::analytics_engines::ResetClusterPassword::new(self.inner.clone())
    }
}

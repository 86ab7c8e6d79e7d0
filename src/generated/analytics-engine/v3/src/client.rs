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

//! Contains the client for the serverless Spark instances.

/// Implements a client for the Analytics Engine serverless Spark API (v3).
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use analytics_engine_v3::client::AnalyticsEngine;
/// let client = AnalyticsEngine::builder().build().await?;
/// // use `client` to make requests to the Analytics Engine API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages serverless Spark instances: their default configuration and
/// runtime, the object storage used as the instance home, the Spark
/// applications submitted to the instance, and the Spark history server.
///
/// # Configuration
///
/// To configure `AnalyticsEngine` use the `with_*` methods in the type returned
/// by [builder()][AnalyticsEngine::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `us-south` regional
///   endpoint (`https://api.us-south.ae.cloud.ibm.com`). Applications using
///   instances in other regions must override this default.
/// * [with_credentials()]: by default this client sends no credentials.
///   Almost all applications need to override this default.
///
/// [with_endpoint()]: super::builder::analytics_engine::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::analytics_engine::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `AnalyticsEngine` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `AnalyticsEngine` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AnalyticsEngine {
    inner: std::sync::Arc<dyn super::stub::dynamic::AnalyticsEngine>,
}

impl AnalyticsEngine {
    /// Returns a builder for [AnalyticsEngine].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use analytics_engine_v3::client::AnalyticsEngine;
    /// let client = AnalyticsEngine::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::analytics_engine::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::analytics_engine::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::AnalyticsEngine + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::AnalyticsEngine>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsEngine> {
        super::transport::AnalyticsEngine::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsEngine> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::AnalyticsEngine::new)
    }

    /// Retrieves the details of a serverless Spark instance.
    pub fn get_instance(&self) -> super::builder::analytics_engine::GetInstance {
        super::builder::analytics_engine::GetInstance::new(self.inner.clone())
    }

    /// Returns the state of a serverless Spark instance.
    pub fn get_instance_state(&self) -> super::builder::analytics_engine::GetInstanceState {
        super::builder::analytics_engine::GetInstanceState::new(self.inner.clone())
    }

    /// Updates the HMAC credentials used to access the instance home.
    ///
    /// The instance home is the object storage where the instance keeps its
    /// logs and application files. Use this method when the HMAC keys are
    /// rotated.
    pub fn set_instance_home_credentials(
        &self,
    ) -> super::builder::analytics_engine::SetInstanceHomeCredentials {
        super::builder::analytics_engine::SetInstanceHomeCredentials::new(self.inner.clone())
    }

    /// Returns the default Spark configuration of an instance.
    pub fn get_instance_default_configs(
        &self,
    ) -> super::builder::analytics_engine::GetInstanceDefaultConfigs {
        super::builder::analytics_engine::GetInstanceDefaultConfigs::new(self.inner.clone())
    }

    /// Replaces the default Spark configuration of an instance.
    ///
    /// The new configuration replaces all the existing key-value pairs.
    pub fn replace_instance_default_configs(
        &self,
    ) -> super::builder::analytics_engine::ReplaceInstanceDefaultConfigs {
        super::builder::analytics_engine::ReplaceInstanceDefaultConfigs::new(self.inner.clone())
    }

    /// Returns the runtime used by default for new applications.
    pub fn get_instance_default_runtime(
        &self,
    ) -> super::builder::analytics_engine::GetInstanceDefaultRuntime {
        super::builder::analytics_engine::GetInstanceDefaultRuntime::new(self.inner.clone())
    }

    /// Replaces the runtime used by default for new applications.
    pub fn replace_instance_default_runtime(
        &self,
    ) -> super::builder::analytics_engine::ReplaceInstanceDefaultRuntime {
        super::builder::analytics_engine::ReplaceInstanceDefaultRuntime::new(self.inner.clone())
    }

    /// Submits a Spark application to an instance.
    ///
    /// # Example
    /// ```
    /// # use analytics_engine_v3::client::AnalyticsEngine;
    /// use analytics_engine_v3::model::ApplicationDetails;
    /// async fn example(client: &AnalyticsEngine) -> gax::Result<()> {
    ///     let response = client
    ///         .create_application()
    ///         .set_instance_id("my-instance")
    ///         .set_application_details(
    ///             ApplicationDetails::default()
    ///                 .set_application("/opt/ibm/spark/examples/src/main/python/wordcount.py")
    ///                 .set_arguments(["/opt/ibm/spark/examples/src/main/resources/people.txt"]),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("submitted application {:?}", response.id);
    ///     Ok(())
    /// }
    /// ```
    pub fn create_application(&self) -> super::builder::analytics_engine::CreateApplication {
        super::builder::analytics_engine::CreateApplication::new(self.inner.clone())
    }

    /// Lists the Spark applications in an instance.
    ///
    /// The service returns the applications in pages. Use
    /// [paginator()][super::builder::analytics_engine::ListApplications::paginator],
    /// [by_page()][super::builder::analytics_engine::ListApplications::by_page], or
    /// [by_item()][super::builder::analytics_engine::ListApplications::by_item]
    /// to iterate over all the pages.
    ///
    /// # Example
    /// ```
    /// # use analytics_engine_v3::client::AnalyticsEngine;
    /// use analytics_engine_v3::model::ApplicationState;
    /// async fn example(client: &AnalyticsEngine) -> gax::Result<()> {
    ///     let mut pager = client
    ///         .list_applications()
    ///         .set_instance_id("my-instance")
    ///         .set_state([ApplicationState::Running, ApplicationState::Accepted])
    ///         .set_limit(100)
    ///         .paginator()?;
    ///     while pager.has_next() {
    ///         for app in pager.get_next().await? {
    ///             println!("{app:?}");
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_applications(&self) -> super::builder::analytics_engine::ListApplications {
        super::builder::analytics_engine::ListApplications::new(self.inner.clone())
    }

    /// Retrieves the details of a Spark application.
    pub fn get_application(&self) -> super::builder::analytics_engine::GetApplication {
        super::builder::analytics_engine::GetApplication::new(self.inner.clone())
    }

    /// Stops a running application, or deletes the record of a finished
    /// application.
    pub fn delete_application(&self) -> super::builder::analytics_engine::DeleteApplication {
        super::builder::analytics_engine::DeleteApplication::new(self.inner.clone())
    }

    /// Returns the state of a Spark application.
    pub fn get_application_state(&self) -> super::builder::analytics_engine::GetApplicationState {
        super::builder::analytics_engine::GetApplicationState::new(self.inner.clone())
    }

    /// Returns the cores and memory currently used by an instance.
    pub fn get_current_resource_consumption(
        &self,
    ) -> super::builder::analytics_engine::GetCurrentResourceConsumption {
        super::builder::analytics_engine::GetCurrentResourceConsumption::new(self.inner.clone())
    }

    /// Returns the status of the Spark history server.
    pub fn get_spark_history_server(
        &self,
    ) -> super::builder::analytics_engine::GetSparkHistoryServer {
        super::builder::analytics_engine::GetSparkHistoryServer::new(self.inner.clone())
    }

    /// Starts the Spark history server.
    pub fn start_spark_history_server(
        &self,
    ) -> super::builder::analytics_engine::StartSparkHistoryServer {
        super::builder::analytics_engine::StartSparkHistoryServer::new(self.inner.clone())
    }

    /// Stops the Spark history server.
    pub fn stop_spark_history_server(
        &self,
    ) -> super::builder::analytics_engine::StopSparkHistoryServer {
        super::builder::analytics_engine::StopSparkHistoryServer::new(self.inner.clone())
    }
}

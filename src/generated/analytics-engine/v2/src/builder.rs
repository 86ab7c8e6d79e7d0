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

pub mod analytics_engines {
    use crate::Result;

    /// A builder for [AnalyticsEngines][crate::client::AnalyticsEngines].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use analytics_engine_v2::*;
    /// # use builder::analytics_engines::ClientBuilder;
    /// # use client::AnalyticsEngines;
    /// let builder : ClientBuilder = AnalyticsEngines::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.eu-de.ae.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::AnalyticsEngines;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = AnalyticsEngines;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::AnalyticsEngines] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [AnalyticsEngines::get_analytics_engine_by_id][crate::client::AnalyticsEngines::get_analytics_engine_by_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::GetAnalyticsEngineById;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAnalyticsEngineById {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAnalyticsEngineById(RequestBuilder<crate::model::GetAnalyticsEngineByIdRequest>);

    impl GetAnalyticsEngineById {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAnalyticsEngineByIdRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AnalyticsEngine> {
            (*self.0.stub)
                .get_analytics_engine_by_id(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::GetAnalyticsEngineByIdRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAnalyticsEngineById {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngines::get_analytics_engine_state_by_id][crate::client::AnalyticsEngines::get_analytics_engine_state_by_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::GetAnalyticsEngineStateById;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAnalyticsEngineStateById {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAnalyticsEngineStateById(
        RequestBuilder<crate::model::GetAnalyticsEngineStateByIdRequest>,
    );

    impl GetAnalyticsEngineStateById {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAnalyticsEngineStateByIdRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AnalyticsEngineState> {
            (*self.0.stub)
                .get_analytics_engine_state_by_id(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::GetAnalyticsEngineStateByIdRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAnalyticsEngineStateById {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngines::get_all_customization_requests][crate::client::AnalyticsEngines::get_all_customization_requests] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::GetAllCustomizationRequests;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetAllCustomizationRequests {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAllCustomizationRequests(
        RequestBuilder<crate::model::GetAllCustomizationRequestsRequest>,
    );

    impl GetAllCustomizationRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAllCustomizationRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<std::vec::Vec<crate::model::CustomizationRequest>> {
            (*self.0.stub)
                .get_all_customization_requests(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::GetAllCustomizationRequestsRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAllCustomizationRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngines::get_customization_request_by_id][crate::client::AnalyticsEngines::get_customization_request_by_id] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::GetCustomizationRequestById;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCustomizationRequestById {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCustomizationRequestById(
        RequestBuilder<crate::model::GetCustomizationRequestByIdRequest>,
    );

    impl GetCustomizationRequestById {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCustomizationRequestByIdRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CustomizationRunDetails> {
            (*self.0.stub)
                .get_customization_request_by_id(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::GetCustomizationRequestByIdRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::GetCustomizationRequestByIdRequest::request_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCustomizationRequestById {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngines::resize_cluster][crate::client::AnalyticsEngines::resize_cluster] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::ResizeCluster;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ResizeCluster {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ResizeCluster(RequestBuilder<crate::model::ResizeClusterRequest>);

    impl ResizeCluster {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResizeClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ResizeClusterResponse> {
            (*self.0.stub)
                .resize_cluster(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::ResizeClusterRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }

        /// Sets the value of [compute_nodes_count][crate::model::ResizeClusterRequest::compute_nodes_count].
        pub fn set_compute_nodes_count<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.compute_nodes_count = Some(v.into());
            self
        }

        /// Sets or clears the value of [compute_nodes_count][crate::model::ResizeClusterRequest::compute_nodes_count].
        pub fn set_or_clear_compute_nodes_count<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.compute_nodes_count = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResizeCluster {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngines::reset_cluster_password][crate::client::AnalyticsEngines::reset_cluster_password] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v2::builder;
    /// use builder::analytics_engines::ResetClusterPassword;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ResetClusterPassword {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ResetClusterPassword(RequestBuilder<crate::model::ResetClusterPasswordRequest>);

    impl ResetClusterPassword {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResetClusterPasswordRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ResetClusterPasswordResponse> {
            (*self.0.stub)
                .reset_cluster_password(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_guid][crate::model::ResetClusterPasswordRequest::instance_guid].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_guid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_guid = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResetClusterPassword {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

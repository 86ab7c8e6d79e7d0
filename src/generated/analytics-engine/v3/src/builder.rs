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

pub mod analytics_engine {
    use crate::Result;

    /// A builder for [AnalyticsEngine][crate::client::AnalyticsEngine].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use analytics_engine_v3::*;
    /// # use builder::analytics_engine::ClientBuilder;
    /// # use client::AnalyticsEngine;
    /// let builder : ClientBuilder = AnalyticsEngine::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.eu-de.ae.cloud.ibm.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::AnalyticsEngine;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = AnalyticsEngine;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::AnalyticsEngine] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [AnalyticsEngine::get_instance][crate::client::AnalyticsEngine::get_instance] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetInstance;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetInstance {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInstance(RequestBuilder<crate::model::GetInstanceRequest>);

    impl GetInstance {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInstanceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Instance> {
            (*self.0.stub)
                .get_instance(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_instance_state][crate::client::AnalyticsEngine::get_instance_state] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetInstanceState;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetInstanceState {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInstanceState(RequestBuilder<crate::model::GetInstanceStateRequest>);

    impl GetInstanceState {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInstanceStateRequest>>(
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
        pub async fn send(self) -> Result<crate::model::InstanceGetStateResponse> {
            (*self.0.stub)
                .get_instance_state(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetInstanceStateRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInstanceState {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::set_instance_home_credentials][crate::client::AnalyticsEngine::set_instance_home_credentials] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::SetInstanceHomeCredentials;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> SetInstanceHomeCredentials {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SetInstanceHomeCredentials(
        RequestBuilder<crate::model::SetInstanceHomeCredentialsRequest>,
    );

    impl SetInstanceHomeCredentials {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetInstanceHomeCredentialsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::InstanceHomeResponse> {
            (*self.0.stub)
                .set_instance_home_credentials(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::SetInstanceHomeCredentialsRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [hmac_access_key][crate::model::SetInstanceHomeCredentialsRequest::hmac_access_key].
        pub fn set_hmac_access_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.hmac_access_key = Some(v.into());
            self
        }

        /// Sets or clears the value of [hmac_access_key][crate::model::SetInstanceHomeCredentialsRequest::hmac_access_key].
        pub fn set_or_clear_hmac_access_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.hmac_access_key = v.map(|x| x.into());
            self
        }

        /// Sets the value of [hmac_secret_key][crate::model::SetInstanceHomeCredentialsRequest::hmac_secret_key].
        pub fn set_hmac_secret_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.hmac_secret_key = Some(v.into());
            self
        }

        /// Sets or clears the value of [hmac_secret_key][crate::model::SetInstanceHomeCredentialsRequest::hmac_secret_key].
        pub fn set_or_clear_hmac_secret_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.hmac_secret_key = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetInstanceHomeCredentials {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_instance_default_configs][crate::client::AnalyticsEngine::get_instance_default_configs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetInstanceDefaultConfigs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetInstanceDefaultConfigs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInstanceDefaultConfigs(
        RequestBuilder<crate::model::GetInstanceDefaultConfigsRequest>,
    );

    impl GetInstanceDefaultConfigs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInstanceDefaultConfigsRequest>>(
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
        pub async fn send(self) -> Result<std::collections::HashMap<String, String>> {
            (*self.0.stub)
                .get_instance_default_configs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetInstanceDefaultConfigsRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInstanceDefaultConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::replace_instance_default_configs][crate::client::AnalyticsEngine::replace_instance_default_configs] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::ReplaceInstanceDefaultConfigs;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReplaceInstanceDefaultConfigs {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReplaceInstanceDefaultConfigs(
        RequestBuilder<crate::model::ReplaceInstanceDefaultConfigsRequest>,
    );

    impl ReplaceInstanceDefaultConfigs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceInstanceDefaultConfigsRequest>>(
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
        pub async fn send(self) -> Result<std::collections::HashMap<String, String>> {
            (*self.0.stub)
                .replace_instance_default_configs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::ReplaceInstanceDefaultConfigsRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::ReplaceInstanceDefaultConfigsRequest::body].
        pub fn set_body<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request.body = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReplaceInstanceDefaultConfigs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_instance_default_runtime][crate::client::AnalyticsEngine::get_instance_default_runtime] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetInstanceDefaultRuntime;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetInstanceDefaultRuntime {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetInstanceDefaultRuntime(
        RequestBuilder<crate::model::GetInstanceDefaultRuntimeRequest>,
    );

    impl GetInstanceDefaultRuntime {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInstanceDefaultRuntimeRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Runtime> {
            (*self.0.stub)
                .get_instance_default_runtime(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetInstanceDefaultRuntimeRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInstanceDefaultRuntime {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::replace_instance_default_runtime][crate::client::AnalyticsEngine::replace_instance_default_runtime] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::ReplaceInstanceDefaultRuntime;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ReplaceInstanceDefaultRuntime {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ReplaceInstanceDefaultRuntime(
        RequestBuilder<crate::model::ReplaceInstanceDefaultRuntimeRequest>,
    );

    impl ReplaceInstanceDefaultRuntime {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceInstanceDefaultRuntimeRequest>>(
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
        pub async fn send(self) -> Result<crate::model::Runtime> {
            (*self.0.stub)
                .replace_instance_default_runtime(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::ReplaceInstanceDefaultRuntimeRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [spark_version][crate::model::ReplaceInstanceDefaultRuntimeRequest::spark_version].
        pub fn set_spark_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.spark_version = Some(v.into());
            self
        }

        /// Sets or clears the value of [spark_version][crate::model::ReplaceInstanceDefaultRuntimeRequest::spark_version].
        pub fn set_or_clear_spark_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.spark_version = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReplaceInstanceDefaultRuntime {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::create_application][crate::client::AnalyticsEngine::create_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::CreateApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> CreateApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateApplication(RequestBuilder<crate::model::CreateApplicationRequest>);

    impl CreateApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateApplicationRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ApplicationResponse> {
            (*self.0.stub)
                .create_application(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::CreateApplicationRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [application_details][crate::model::CreateApplicationRequest::application_details].
        pub fn set_application_details<T: Into<crate::model::ApplicationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.application_details = Some(v.into());
            self
        }

        /// Sets or clears the value of [application_details][crate::model::CreateApplicationRequest::application_details].
        pub fn set_or_clear_application_details<T: Into<crate::model::ApplicationDetails>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.application_details = v.map(|x| x.into());
            self
        }

        /// Sets the value of [runtime][crate::model::CreateApplicationRequest::runtime].
        pub fn set_runtime<T: Into<crate::model::Runtime>>(mut self, v: T) -> Self {
            self.0.request.runtime = Some(v.into());
            self
        }

        /// Sets or clears the value of [runtime][crate::model::CreateApplicationRequest::runtime].
        pub fn set_or_clear_runtime<T: Into<crate::model::Runtime>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.runtime = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::list_applications][crate::client::AnalyticsEngine::list_applications] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::ListApplications;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListApplications {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListApplications(RequestBuilder<crate::model::ListApplicationsRequest>);

    impl ListApplications {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListApplicationsRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ApplicationCollection> {
            (*self.0.stub)
                .list_applications(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Returns a [Pager][gax::paginator::Pager] over the pages of results.
        ///
        /// The pager owns the `start` continuation token. If the request
        /// already has a [start][crate::model::ListApplicationsRequest::start]
        /// value this function fails with an error where
        /// [is_invalid_argument()][crate::Error::is_invalid_argument] is
        /// `true`. The other fields, including `limit`, are sent unchanged in
        /// each request.
        pub fn paginator(
            self,
        ) -> Result<gax::paginator::Pager<crate::model::ApplicationCollection>> {
            let seed = self.0.request.start.clone();
            let execute = move |token: Option<String>| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_or_clear_start(token);
                builder.send()
            };
            gax::paginator::Pager::new(seed, execute)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> Result<gax::paginator::PageStream<crate::model::ApplicationCollection>> {
            self.paginator().map(gax::paginator::Pager::into_stream)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> Result<gax::paginator::ItemStream<crate::model::Application>> {
            self.paginator().map(gax::paginator::Pager::into_items)
        }

        /// Sets the value of [instance_id][crate::model::ListApplicationsRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [state][crate::model::ListApplicationsRequest::state].
        pub fn set_state<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::ApplicationState>,
        {
            self.0.request.state = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [start_time_interval][crate::model::ListApplicationsRequest::start_time_interval].
        pub fn set_start_time_interval<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start_time_interval = Some(v.into());
            self
        }

        /// Sets or clears the value of [start_time_interval][crate::model::ListApplicationsRequest::start_time_interval].
        pub fn set_or_clear_start_time_interval<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start_time_interval = v.map(|x| x.into());
            self
        }

        /// Sets the value of [submission_time_interval][crate::model::ListApplicationsRequest::submission_time_interval].
        pub fn set_submission_time_interval<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.submission_time_interval = Some(v.into());
            self
        }

        /// Sets or clears the value of [submission_time_interval][crate::model::ListApplicationsRequest::submission_time_interval].
        pub fn set_or_clear_submission_time_interval<T: Into<String>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.submission_time_interval = v.map(|x| x.into());
            self
        }

        /// Sets the value of [end_time_interval][crate::model::ListApplicationsRequest::end_time_interval].
        pub fn set_end_time_interval<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.end_time_interval = Some(v.into());
            self
        }

        /// Sets or clears the value of [end_time_interval][crate::model::ListApplicationsRequest::end_time_interval].
        pub fn set_or_clear_end_time_interval<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.end_time_interval = v.map(|x| x.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListApplicationsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListApplicationsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i32>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListApplicationsRequest::start].
        pub fn set_start<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListApplicationsRequest::start].
        pub fn set_or_clear_start<T: Into<String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListApplications {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_application][crate::client::AnalyticsEngine::get_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetApplication(RequestBuilder<crate::model::GetApplicationRequest>);

    impl GetApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetApplicationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ApplicationGetResponse> {
            (*self.0.stub)
                .get_application(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetApplicationRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [application_id][crate::model::GetApplicationRequest::application_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.application_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::delete_application][crate::client::AnalyticsEngine::delete_application] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::DeleteApplication;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> DeleteApplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteApplication(RequestBuilder<crate::model::DeleteApplicationRequest>);

    impl DeleteApplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteApplicationRequest>>(
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
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_application(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::DeleteApplicationRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [application_id][crate::model::DeleteApplicationRequest::application_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.application_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteApplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_application_state][crate::client::AnalyticsEngine::get_application_state] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetApplicationState;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetApplicationState {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetApplicationState(RequestBuilder<crate::model::GetApplicationStateRequest>);

    impl GetApplicationState {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetApplicationStateRequest>>(
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
        pub async fn send(self) -> Result<crate::model::ApplicationGetStateResponse> {
            (*self.0.stub)
                .get_application_state(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetApplicationStateRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [application_id][crate::model::GetApplicationStateRequest::application_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_application_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.application_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApplicationState {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_current_resource_consumption][crate::client::AnalyticsEngine::get_current_resource_consumption] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetCurrentResourceConsumption;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetCurrentResourceConsumption {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetCurrentResourceConsumption(
        RequestBuilder<crate::model::GetCurrentResourceConsumptionRequest>,
    );

    impl GetCurrentResourceConsumption {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCurrentResourceConsumptionRequest>>(
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
        pub async fn send(self) -> Result<crate::model::CurrentResourceConsumptionResponse> {
            (*self.0.stub)
                .get_current_resource_consumption(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetCurrentResourceConsumptionRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCurrentResourceConsumption {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::get_spark_history_server][crate::client::AnalyticsEngine::get_spark_history_server] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::GetSparkHistoryServer;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> GetSparkHistoryServer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSparkHistoryServer(RequestBuilder<crate::model::GetSparkHistoryServerRequest>);

    impl GetSparkHistoryServer {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSparkHistoryServerRequest>>(
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
        pub async fn send(self) -> Result<crate::model::SparkHistoryServerResponse> {
            (*self.0.stub)
                .get_spark_history_server(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::GetSparkHistoryServerRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSparkHistoryServer {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::start_spark_history_server][crate::client::AnalyticsEngine::start_spark_history_server] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::StartSparkHistoryServer;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StartSparkHistoryServer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StartSparkHistoryServer(
        RequestBuilder<crate::model::StartSparkHistoryServerRequest>,
    );

    impl StartSparkHistoryServer {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::StartSparkHistoryServerRequest>>(
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
        pub async fn send(self) -> Result<crate::model::SparkHistoryServerResponse> {
            (*self.0.stub)
                .start_spark_history_server(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::StartSparkHistoryServerRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StartSparkHistoryServer {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsEngine::stop_spark_history_server][crate::client::AnalyticsEngine::stop_spark_history_server] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use analytics_engine_v3::builder;
    /// use builder::analytics_engine::StopSparkHistoryServer;
    /// # tokio_test::block_on(async {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> StopSparkHistoryServer {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StopSparkHistoryServer(RequestBuilder<crate::model::StopSparkHistoryServerRequest>);

    impl StopSparkHistoryServer {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::StopSparkHistoryServerRequest>>(
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
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .stop_spark_history_server(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [instance_id][crate::model::StopSparkHistoryServerRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StopSparkHistoryServer {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

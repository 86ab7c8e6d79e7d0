// Copyright 2024 Google LLC
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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of some
//! calls. Applications sometimes change the timeout for an specific call, or
//! need to send additional headers. The `*Builder` returned by each client
//! method implements the [RequestOptionsBuilder] trait where applications can
//! override some defaults.
//!
//! Client-wide configuration (the endpoint, the credentials) is set via
//! [ClientBuilder][crate::client_builder::ClientBuilder].

use http::{HeaderName, HeaderValue};

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    headers: http::HeaderMap,
    path_template: Option<&'static str>,
}

impl RequestOptions {
    /// Set the user agent header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// The client libraries send each request once, so this is the timeout
    /// for the full request, including reading the response body.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Adds a header to send with the request.
    ///
    /// Headers set here replace any client-wide default header with the same
    /// name.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// The additional headers sent with the request.
    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    pub(crate) fn path_template(&self) -> Option<&'static str> {
        self.path_template
    }

    pub(crate) fn set_path_template(&mut self, v: &'static str) {
        self.path_template = Some(v);
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The Analytics Engine client libraries for Rust provide a builder for each
/// service request. These builders can be used to set the request parameters,
/// e.g., the instance id, and also to configure the request options, e.g. the
/// timeout.
///
/// # Example
/// ```
/// # use analytics_engine_gax::options::{RequestOptions, RequestOptionsBuilder};
/// # use analytics_engine_gax::options::internal::RequestBuilder;
/// # #[derive(Default)]
/// # struct GetInstance(RequestOptions);
/// # impl RequestBuilder for GetInstance {
/// #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.0 }
/// # }
/// let builder = GetInstance::default()
///     .with_attempt_timeout(std::time::Duration::from_secs(30))
///     .with_user_agent("my-app/1.0");
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Adds a header to the request.
    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Records the URL template used by the request, for the tracing spans.
    pub fn set_path_template(
        mut options: RequestOptions,
        path_template: &'static str,
    ) -> RequestOptions {
        options.set_path_template(path_template);
        options
    }

    pub fn get_path_template(options: &RequestOptions) -> Option<&'static str> {
        options.path_template()
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().insert_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.headers().is_empty(), "{opts:?}");

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.insert_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("v1"),
        );
        opts.insert_header(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("v2"),
        );
        assert_eq!(
            opts.headers().get("x-test"),
            Some(&HeaderValue::from_static("v2"))
        );
        assert_eq!(opts.headers().len(), 1, "{opts:?}");
    }

    #[test]
    fn request_options_path_template() {
        let opts = RequestOptions::default();
        assert_eq!(get_path_template(&opts), None);
        let opts = set_path_template(opts, "/v3/analytics_engines/{instance_id}");
        assert_eq!(
            get_path_template(&opts),
            Some("/v3/analytics_engines/{instance_id}")
        );
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(7))
            .with_header(
                HeaderName::from_static("x-test"),
                HeaderValue::from_static("abc"),
            );
        let opts = builder.request_options;
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(7)));
        assert_eq!(
            opts.headers().get("x-test"),
            Some(&HeaderValue::from_static("abc"))
        );
    }
}

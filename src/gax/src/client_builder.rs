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
//! Configuration shared by every Analytics Engine client.
//!
//! The service is deployed per region, each region with its own host name.
//! Requests must carry an IAM bearer token. A client built without any
//! configuration talks to `us-south` and sends no `Authorization` header,
//! which is only useful against local test servers.
//!
//! Each client crate exposes `Client::builder()`, returning a
//! [ClientBuilder] bound to that client. Applications pick a region (or a
//! full endpoint URL), attach credentials, and call `build()`.
//!
//! ```
//! # use analytics_engine_gax::client_builder::doc_client::Client;
//! use analytics_engine_gax::credentials;
//! # tokio_test::block_on(async {
//! let client = Client::builder()
//!     .with_region("eu-de")
//!     .with_credentials(credentials::bearer("my-iam-token")?)
//!     .build()
//!     .await?;
//! # Ok::<(), anyhow::Error>(()) });
//! ```

use http::{HeaderMap, HeaderName, HeaderValue};

/// The result type for [ClientBuilder::build].
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the public endpoint for an Analytics Engine region.
///
/// ```
/// # use analytics_engine_gax::client_builder::regional_endpoint;
/// assert_eq!(regional_endpoint("jp-tok"), "https://api.jp-tok.ae.cloud.ibm.com");
/// ```
pub fn regional_endpoint(region: &str) -> String {
    format!("https://api.{region}.ae.cloud.ibm.com")
}

/// A client could not be created.
///
/// The two causes are bad credentials and a transport that could not be set
/// up, typically because the endpoint is not a valid URL.
///
/// ```no_run
/// # use analytics_engine_gax::client_builder::doc_client::Client;
/// # tokio_test::block_on(async {
/// match Client::builder().with_endpoint("not a url").build().await {
///     Ok(_) => println!("ready"),
///     Err(e) if e.is_transport() => eprintln!("check the endpoint: {e}"),
///     Err(e) => eprintln!("cannot create client: {e}"),
/// }
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(Cause);

#[derive(thiserror::Error, Debug)]
enum Cause {
    #[error("could not create the credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    /// The credentials could not be created.
    pub fn is_credentials(&self) -> bool {
        matches!(self.0, Cause::Credentials(_))
    }

    /// The HTTP client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(self.0, Cause::Transport(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(Cause::Credentials(source.into()))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(Cause::Transport(source.into()))
    }
}

/// Collects the configuration for a client of type `F::Client`.
///
/// `F` is the factory that turns the configuration into a client, and `Cr`
/// is the credentials type. Applications never name these types, they get
/// the builder from the client:
///
/// ```
/// # use analytics_engine_gax::client_builder::doc_client::Client;
/// # tokio_test::block_on(async {
/// let client = Client::builder()
///     .with_endpoint("http://localhost:8080")
///     .with_tracing()
///     .build()
///     .await?;
/// # Ok::<(), anyhow::Error>(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    factory: F,
    config: internal::ClientConfig<Cr>,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Consumes the builder and creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        let Self { factory, config } = self;
        factory.build(config).await
    }

    /// Sends requests to `https://api.{region}.ae.cloud.ibm.com`.
    ///
    /// Replaces any endpoint set earlier.
    pub fn with_region<V: AsRef<str>>(self, region: V) -> Self {
        self.with_endpoint(regional_endpoint(region.as_ref()))
    }

    /// Sends requests to `v`, a URL such as `https://api.eu-gb.ae.cloud.ibm.com`
    /// or the address of a private endpoint.
    ///
    /// The request paths, including the version prefix, are appended to it.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Emits [tracing] spans for every request, even when the
    /// `ANALYTICS_ENGINE_RUST_LOGGING` environment variable is unset.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Authenticates every request with `v`.
    ///
    /// Use [bearer][crate::credentials::bearer] with a token obtained from
    /// IAM, or implement
    /// [CredentialsProvider][crate::credentials::CredentialsProvider] to
    /// refresh tokens.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sends `name: value` with every request.
    ///
    /// A header with the same name in the
    /// [RequestOptions][crate::options::RequestOptions] of a call wins.
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::{ClientBuilder, HeaderMap, Result};

    /// Creates a client from its configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F>(factory: F) -> ClientBuilder<F, F::Credentials>
    where
        F: ClientFactory,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The values collected by [ClientBuilder].
    ///
    /// `None` means the client applies its own default.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub default_headers: HeaderMap,
    }

    // Derive would require `Cr: Default`.
    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                default_headers: HeaderMap::new(),
            }
        }
    }
}

#[doc(hidden)]
pub mod doc_client {
    //! A stand-in client for the rustdoc examples in this module.

    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use crate::credentials::Credentials;

    pub struct Client {
        pub config: ClientConfig<Credentials>,
    }

    impl Client {
        pub fn builder() -> super::ClientBuilder<Factory, Credentials> {
            new_builder(Factory)
        }
    }

    pub struct Factory;

    impl ClientFactory for Factory {
        type Client = Client;
        type Credentials = Credentials;
        async fn build(self, config: ClientConfig<Credentials>) -> super::Result<Client> {
            if let Some(endpoint) = &config.endpoint {
                endpoint
                    .parse::<http::Uri>()
                    .map_err(super::Error::transport)?;
            }
            Ok(Client { config })
        }
    }
}

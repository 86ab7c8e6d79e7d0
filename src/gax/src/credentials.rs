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

//! Authentication headers for the client libraries.
//!
//! The Analytics Engine API authenticates requests with an IAM bearer token.
//! The client libraries do not implement the token exchange: applications
//! provide a [Credentials] value, and the clients ask it for the
//! authentication headers before each request.
//!
//! # Example
//! ```
//! # use analytics_engine_gax::credentials;
//! let creds = credentials::bearer("eyJraWQiOi...")?;
//! # Ok::<(), analytics_engine_gax::error::CredentialsError>(())
//! ```

use crate::error::CredentialsError;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::future::Future;
use std::sync::Arc;

/// The result type for credentials operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// A source of authentication headers.
///
/// Credentials are shared by all the clients created with them, and cloning a
/// `Credentials` value is cheap.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Shared across threads and across clones of `ReqwestClient`.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to send with a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Implemented by types that produce authentication headers.
///
/// Applications may implement this trait to integrate their own token
/// sources, or to mock the credentials in tests.
///
/// # Example
/// ```
/// # use analytics_engine_gax::credentials::{Credentials, CredentialsProvider};
/// # use analytics_engine_gax::error::CredentialsError;
/// #[derive(Debug)]
/// struct ApiKey(String);
/// impl CredentialsProvider for ApiKey {
///     async fn headers(&self) -> Result<http::HeaderMap, CredentialsError> {
///         let mut headers = http::HeaderMap::new();
///         let value = http::HeaderValue::from_str(&self.0)
///             .map_err(|e| CredentialsError::new(false, e))?;
///         headers.insert("x-api-key", value);
///         Ok(headers)
///     }
/// }
/// let creds = Credentials::from(ApiKey("test-only".into()));
/// ```
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// Implementations refresh any tokens as needed.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible version.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Credentials that send no authentication headers.
///
/// Useful with test servers and local emulators.
pub fn anonymous() -> Credentials {
    anonymous::Builder::new().build()
}

/// Credentials that send a fixed IAM bearer token.
///
/// The token is not refreshed. Applications with long running processes
/// should implement [CredentialsProvider] instead.
///
/// Fails if the token cannot be used in an HTTP header.
pub fn bearer<T: AsRef<str>>(token: T) -> Result<Credentials> {
    let value = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))
        .map_err(|e| CredentialsError::new(false, e))?;
    Ok(Credentials::from(Bearer(value)))
}

pub mod anonymous {
    //! Anonymous credentials.
    use super::{Credentials, HeaderMap, Result};

    /// A builder for anonymous credentials.
    #[derive(Debug, Default)]
    pub struct Builder;

    impl Builder {
        pub fn new() -> Self {
            Self
        }

        pub fn build(self) -> Credentials {
            Credentials::from(Anonymous)
        }
    }

    #[derive(Debug)]
    struct Anonymous;

    impl super::CredentialsProvider for Anonymous {
        async fn headers(&self) -> Result<HeaderMap> {
            Ok(HeaderMap::new())
        }
    }
}

struct Bearer(HeaderValue);

impl std::fmt::Debug for Bearer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Bearer").field(&"[censored]").finish()
    }
}

impl CredentialsProvider for Bearer {
    async fn headers(&self) -> Result<HeaderMap> {
        let mut value = self.0.clone();
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

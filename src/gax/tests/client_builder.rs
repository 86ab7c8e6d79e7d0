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

// Verify `ClientBuilder` can be used outside the crate.
#[cfg(test)]
mod test {
    use analytics_engine_gax as gax;
    use gax::client_builder::internal::ClientConfig;
    use gax::credentials::Credentials;

    #[tokio::test]
    async fn test_default() -> anyhow::Result<()> {
        let client = MyClient::builder().build().await?;
        assert_eq!(client.endpoint, None);
        assert!(client.credentials.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_with_endpoint() -> anyhow::Result<()> {
        let client = MyClient::builder().with_endpoint("abc123").build().await?;
        assert_eq!(client.endpoint.as_deref(), Some("abc123"));
        Ok(())
    }

    #[tokio::test]
    async fn test_with_credentials() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_credentials(gax::credentials::bearer("test-only")?)
            .build()
            .await?;
        let headers = client
            .credentials
            .expect("credentials are set")
            .headers()
            .await?;
        assert_eq!(
            headers.get(http::header::AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Bearer test-only"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_build_error() -> anyhow::Result<()> {
        let err = MyClient::builder()
            .with_endpoint("")
            .build()
            .await
            .err()
            .expect("empty endpoints are rejected");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    pub struct MyClient {
        endpoint: Option<String>,
        credentials: Option<Credentials>,
    }
    impl MyClient {
        pub fn builder() -> my_client::Builder {
            gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig<Credentials>) -> gax::client_builder::Result<Self> {
            if config.endpoint.as_deref() == Some("") {
                return Err(gax::client_builder::Error::transport("empty endpoint"));
            }
            Ok(Self {
                endpoint: config.endpoint,
                credentials: config.cred,
            })
        }
    }
    mod my_client {
        use super::gax;
        pub type Builder = gax::client_builder::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::MyClient;
            type Credentials = super::Credentials;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}

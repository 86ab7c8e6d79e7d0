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

#[cfg(test)]
mod tests {
    use analytics_engine_gax_internal::http::{NoBody, ReqwestClient};
    use analytics_engine_gax_internal::options::ClientConfig;
    use gax::credentials::{Credentials, CredentialsProvider};
    use gax::error::CredentialsError;
    use gax::options::RequestOptions;
    use http::{HeaderMap, HeaderName, HeaderValue};
    use httptest::matchers::{contains, eq, json_decoded, key, matches, not, request};
    use httptest::{Expectation, Server, all_of, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tracing_subscriber::util::SubscriberInitExt;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> std::result::Result<HeaderMap, CredentialsError>;
        }
    }

    async fn test_client(server: &Server, config: ClientConfig) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        let mut config = config;
        config.endpoint = Some(endpoint);
        Ok(ReqwestClient::new(config, "https://api.us-south.ae.cloud.ibm.com").await?)
    }

    #[tokio::test]
    async fn default_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/test"),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("user-agent", matches("^analytics-engine-rust/")))),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(json_encoded(json!({"hello": "world"}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.body(), &json!({"hello": "world"}));
        Ok(())
    }

    #[tokio::test]
    async fn header_overrides() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/test"),
                request::headers(contains(("user-agent", "test-agent/1.0"))),
                request::headers(contains(("x-client-default", "from-client"))),
                request::headers(contains(("x-request", "from-request"))),
                request::headers(contains(("x-both", "from-request"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut config = ClientConfig::default();
        config.default_headers.insert(
            HeaderName::from_static("x-client-default"),
            HeaderValue::from_static("from-client"),
        );
        config.default_headers.insert(
            HeaderName::from_static("x-both"),
            HeaderValue::from_static("from-client"),
        );
        let client = test_client(&server, config).await?;

        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.0");
        options.insert_header(
            HeaderName::from_static("x-request"),
            HeaderValue::from_static("from-request"),
        );
        options.insert_header(
            HeaderName::from_static("x-both"),
            HeaderValue::from_static("from-request"),
        );
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let _ = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn json_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v3/test/instance_home"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "hmac_access_key": "test-access",
                    "hmac_secret_key": "test-secret",
                })))),
            ])
            .respond_with(json_encoded(json!({"instance_id": "test"}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::PUT, "/v3/test/instance_home".into());
        let body = json!({"hmac_access_key": "test-access", "hmac_secret_key": "test-secret"});
        let response = client
            .execute::<Value, Value>(builder, Some(body), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), json!({"instance_id": "test"}));
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v3/test"))
                .respond_with(status_code(204)),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/v3/test".into());
        let response = client
            .execute::<NoBody, ()>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[tokio::test]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/test"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut mock = MockCredentials::new();
        mock.expect_headers().times(1).returning(|| {
            Ok(HeaderMap::from_iter([
                (
                    HeaderName::from_static("auth-key-1"),
                    HeaderValue::from_static("auth-value-1"),
                ),
                (
                    HeaderName::from_static("auth-key-2"),
                    HeaderValue::from_static("auth-value-2"),
                ),
            ]))
        });
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = test_client(&server, config).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let _ = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn bearer_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/test"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut config = ClientConfig::default();
        config.cred = Some(gax::credentials::bearer("test-token")?);
        let client = test_client(&server, config).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let _ = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn auth_error() -> Result<()> {
        // No expectations, the request must not reach the server.
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .times(1)
            .returning(|| Err(CredentialsError::from_msg(false, "test-only")));
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let client = test_client(&server, config).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        let payload = json!({
            "errors": [{
                "code": "not_found",
                "message": "Instance not found",
            }],
            "trace": "test-trace",
            "status_code": 404,
        });
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/missing")).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(payload.to_string()),
            ),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/missing".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code(), "not_found");
        assert_eq!(status.message(), "Instance not found");
        assert_eq!(status.trace.as_deref(), Some("test-trace"));
        assert_eq!(err.http_status_code(), Some(404));
        let headers = err.http_headers().expect("service errors have headers");
        assert_eq!(
            headers.get("content-type"),
            Some(&HeaderValue::from_static("application/json"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/proxy"))
                .respond_with(status_code(502).body("bad gateway")),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/proxy".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"bad gateway"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/slow"))
                .times(..)
                .respond_with(delay_and_then(
                    Duration::from_secs(2),
                    json_encoded(json!({})),
                )),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let err = client
            .execute::<NoBody, Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> Result<()> {
        let server = Server::run();
        let endpoint = format!("http://{}", server.addr());
        drop(server);

        let mut config = ClientConfig::default();
        config.endpoint = Some(endpoint);
        let client = ReqwestClient::new(config, "https://unused.example.com").await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn with_subscriber() -> Result<()> {
        let _guard = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .set_default();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/test"))
                .respond_with(json_encoded(json!({"ok": true}))),
        );

        let client = test_client(&server, ClientConfig::default()).await?;
        let options =
            gax::options::internal::set_path_template(RequestOptions::default(), "/v3/test");
        let builder = client.builder(reqwest::Method::GET, "/v3/test".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), json!({"ok": true}));
        Ok(())
    }
}

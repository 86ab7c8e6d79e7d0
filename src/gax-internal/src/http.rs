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

use crate::options::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use tracing::Instrument;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    default_headers: HeaderMap,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = endpoint.trim_end_matches('/').to_string();
        reqwest::Url::parse(&endpoint).map_err(BuilderError::transport)?;
        let cred = config.cred.unwrap_or_else(gax::credentials::anonymous);
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&crate::api_header::user_agent())
            .map_err(BuilderError::transport)?;
        default_headers.insert(USER_AGENT, user_agent);
        default_headers.extend(config.default_headers);
        Ok(Self {
            inner,
            cred,
            endpoint,
            default_headers,
        })
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let mut headers = self.default_headers.clone();
        if let Some(user_agent) = options.user_agent() {
            headers.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        headers.extend(options.headers().clone());
        builder = builder.headers(headers);
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(payload);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(*timeout);
        }
        let auth_headers = self
            .cred
            .headers()
            .await
            .map_err(Error::authentication)?;
        builder = builder.headers(auth_headers);

        let request = builder.build().map_err(Error::invalid_argument)?;
        let template = gax::options::internal::get_path_template(&options).unwrap_or_default();
        let span = tracing::info_span!(
            "http_request",
            http.request.method = %request.method(),
            url.template = template,
            http.response.status_code = tracing::field::Empty,
        );
        self.send(request).instrument(span).await
    }

    async fn send<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
    ) -> Result<Response<O>> {
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        let status = response.status();
        tracing::Span::current().record("http.response.status_code", status.as_u16());
        tracing::debug!(status = status.as_u16(), "received response");
        if !status.is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::service::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // 204 No Content has no body, parsing it as JSON fails.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_status(parts.status)
            .set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use gax::error::service::{ErrorDetail, Status};
        let body = json!({
            "errors": [{
                "code": "not_found",
                "message": "Application with id 'abc' not found",
                "more_info": "https://cloud.ibm.com/apidocs/ibm-analytics-engine-v3",
            }],
            "trace": "test-trace-id",
            "status_code": 404,
        });
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let response = super::to_http_error::<()>(response).await;
        let err = response.err().unwrap();
        let want_status = Status::default()
            .set_status_code(404_u16)
            .set_trace("test-trace-id")
            .set_errors([ErrorDetail::default()
                .set_code("not_found")
                .set_message("Application with id 'abc' not found")
                .set_more_info("https://cloud.ibm.com/apidocs/ibm-analytics-engine-v3")]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert!(err.http_payload().is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<HashMapBody>(response).await?;
        assert_eq!(response.status(), code);
        assert_eq!(response.into_body(), HashMapBody::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "not-json"; "200 with bad content")]
    async fn client_error_with_bad_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());

        let response = super::to_http_response::<HashMapBody>(response).await;
        let err = response.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    type HashMapBody = std::collections::HashMap<String, String>;

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }

    #[tokio::test]
    async fn new_rejects_bad_endpoint() {
        let err = ReqwestClient::new(crate::options::ClientConfig::default(), "not a url")
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }

    #[tokio::test]
    async fn new_uses_configured_endpoint() -> TestResult {
        let mut config = crate::options::ClientConfig::default();
        config.endpoint = Some("https://api.eu-de.ae.cloud.ibm.com/".to_string());
        let client = ReqwestClient::new(config, "https://api.us-south.ae.cloud.ibm.com").await?;
        let request = client
            .builder(reqwest::Method::GET, "/v3/analytics_engines/abc".into())
            .build()?;
        assert_eq!(
            request.url().as_str(),
            "https://api.eu-de.ae.cloud.ibm.com/v3/analytics_engines/abc"
        );
        Ok(())
    }
}

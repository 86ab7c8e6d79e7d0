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
    use analytics_engine_v2::client::AnalyticsEngines;
    use analytics_engine_v2::model::*;
    use httptest::matchers::{contains, eq, json_decoded, key, matches, not, request};
    use httptest::{Expectation, Server, all_of, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<AnalyticsEngines> {
        let client = AnalyticsEngines::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(gax::credentials::bearer("test-token")?)
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_analytics_engine_by_id() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/analytics_engines/my-instance"),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains((
                    "x-client-library",
                    matches("analytics-engine-v2/[0-9]+")
                ))),
            ])
            .respond_with(json_encoded(json!({
                "id": "my-instance",
                "name": "my-cluster",
                "state": "Active",
                "nodes": [{"id": 1, "type": "management", "state": "Active"}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_analytics_engine_by_id()
            .set_instance_guid("my-instance")
            .send()
            .await?;
        let want = AnalyticsEngine::default()
            .set_id("my-instance")
            .set_name("my-cluster")
            .set_state("Active")
            .set_nodes([ClusterNode::default()
                .set_id(1)
                .set_type("management")
                .set_state("Active")]);
        assert_eq!(got, want);
        Ok(())
    }

    #[tokio::test]
    async fn get_analytics_engine_state_by_id() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/analytics_engines/my-instance/state",
            ))
            .respond_with(json_encoded(json!({"state": "Preparing"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_analytics_engine_state_by_id()
            .set_instance_guid("my-instance")
            .send()
            .await?;
        assert_eq!(got, AnalyticsEngineState::default().set_state("Preparing"));
        Ok(())
    }

    #[tokio::test]
    #[test_case("my-instance", "37", "/v2/analytics_engines/my-instance/customization_requests/37"; "plain")]
    #[test_case("my instance", "37", "/v2/analytics_engines/my%20instance/customization_requests/37"; "space")]
    #[test_case("my-instance", "a/b", "/v2/analytics_engines/my-instance/customization_requests/a%2Fb"; "slash")]
    #[test_case("my-instance", "50%", "/v2/analytics_engines/my-instance/customization_requests/50%25"; "percent")]
    async fn customization_request_path(guid: &str, id: &str, path: &str) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", path.to_string()))
                .respond_with(json_encoded(json!({"id": id}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_customization_request_by_id()
            .set_instance_guid(guid)
            .set_request_id(id)
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some(id));
        Ok(())
    }

    #[tokio::test]
    #[test_case("", "37", "instance_guid"; "missing instance")]
    #[test_case("my-instance", "", "request_id"; "missing request")]
    async fn customization_request_missing_parameter(
        guid: &str,
        id: &str,
        name: &str,
    ) -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_customization_request_by_id()
            .set_instance_guid(guid)
            .set_request_id(id)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(format!("{err}").contains(name), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn customization_requests() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/analytics_engines/my-instance/customization_requests",
            ))
            .respond_with(json_encoded(json!([{"id": "36"}, {"id": "37"}]))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v2/analytics_engines/my-instance/customization_requests/37",
            ))
            .respond_with(json_encoded(json!({
                "id": "37",
                "run_details": {"overall_status": "failed", "details": []},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_all_customization_requests()
            .set_instance_guid("my-instance")
            .send()
            .await?;
        assert_eq!(
            got,
            vec![
                CustomizationRequest::default().set_id("36"),
                CustomizationRequest::default().set_id("37"),
            ]
        );

        let got = client
            .get_customization_request_by_id()
            .set_instance_guid("my-instance")
            .set_request_id("37")
            .send()
            .await?;
        assert_eq!(
            got.run_details.and_then(|d| d.overall_status).as_deref(),
            Some("failed")
        );
        Ok(())
    }

    #[tokio::test]
    async fn resize_cluster() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/analytics_engines/my-instance/resize"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"compute_nodes_count": 4})))),
            ])
            .respond_with(json_encoded(json!({"request_id": "r-123"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .resize_cluster()
            .set_instance_guid("my-instance")
            .set_compute_nodes_count(4)
            .send()
            .await?;
        assert_eq!(got.request_id.as_deref(), Some("r-123"));
        Ok(())
    }

    #[tokio::test]
    async fn reset_cluster_password() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/analytics_engines/my-instance/reset_password"),
                request::headers(not(contains(key("content-type")))),
            ])
            .respond_with(json_encoded(json!({
                "id": "my-instance",
                "user_credentials": {"user": "clsadmin", "password": "new-password"},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .reset_cluster_password()
            .set_instance_guid("my-instance")
            .send()
            .await?;
        assert_eq!(
            got.user_credentials,
            Some(
                UserCredentials::default()
                    .set_user("clsadmin")
                    .set_password("new-password")
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v2/analytics_engines/my-instance/resize",
            ))
            .respond_with(
                status_code(400)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({
                            "errors": [{
                                "code": "bad_request",
                                "message": "compute_nodes_count must be positive",
                            }],
                            "trace": "test-trace",
                            "status_code": 400,
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .resize_cluster()
            .set_instance_guid("my-instance")
            .set_compute_nodes_count(-1)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let status = err.status().expect("the error has a status");
        assert_eq!(status.code(), "bad_request");
        assert_eq!(status.trace.as_deref(), Some("test-trace"));
        Ok(())
    }
}

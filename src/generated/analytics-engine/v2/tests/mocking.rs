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
    use gax::error::Error;
    use gax::error::service::{ErrorDetail, Status};
    use gax::options::{RequestOptions, RequestOptionsBuilder};
    use gax::response::Response;
    use pretty_assertions::assert_eq;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        AnalyticsEngines {}
        impl analytics_engine_v2::stub::AnalyticsEngines for AnalyticsEngines {
            async fn get_all_customization_requests(&self, req: GetAllCustomizationRequestsRequest, options: RequestOptions) -> gax::Result<Response<Vec<CustomizationRequest>>>;
            async fn resize_cluster(&self, req: ResizeClusterRequest, options: RequestOptions) -> gax::Result<Response<ResizeClusterResponse>>;
            async fn reset_cluster_password(&self, req: ResetClusterPasswordRequest, options: RequestOptions) -> gax::Result<Response<ResetClusterPasswordResponse>>;
        }
    }

    #[tokio::test]
    async fn get_all_customization_requests() -> Result<()> {
        let mut mock = MockAnalyticsEngines::new();
        mock.expect_get_all_customization_requests()
            .withf(|r, _| r.instance_guid == "my-instance")
            .return_once(|_, _| {
                Ok(Response::from(vec![
                    CustomizationRequest::default().set_id("36"),
                    CustomizationRequest::default().set_id("37"),
                ]))
            });

        let client = AnalyticsEngines::from_stub(mock);
        let got = client
            .get_all_customization_requests()
            .set_instance_guid("my-instance")
            .send()
            .await?;
        let ids = got.into_iter().filter_map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["36", "37"]);
        Ok(())
    }

    #[tokio::test]
    async fn resize_cluster() -> Result<()> {
        let mut mock = MockAnalyticsEngines::new();
        mock.expect_resize_cluster()
            .withf(|r, o| {
                r.instance_guid == "my-instance"
                    && r.compute_nodes_count == Some(4)
                    && o.user_agent().as_deref() == Some("my-app/1.0")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    ResizeClusterResponse::default().set_request_id("r-123"),
                ))
            });

        let client = AnalyticsEngines::from_stub(mock);
        let got = client
            .resize_cluster()
            .set_instance_guid("my-instance")
            .set_compute_nodes_count(4)
            .with_user_agent("my-app/1.0")
            .send()
            .await?;
        assert_eq!(got.request_id.as_deref(), Some("r-123"));
        Ok(())
    }

    #[tokio::test]
    async fn reset_cluster_password_error() -> Result<()> {
        let mut mock = MockAnalyticsEngines::new();
        mock.expect_reset_cluster_password().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_status_code(409_u16)
                    .set_errors([ErrorDetail::default()
                        .set_code("conflict")
                        .set_message("cluster is not active")]),
            ))
        });

        let client = AnalyticsEngines::from_stub(mock);
        let err = client
            .reset_cluster_password()
            .set_instance_guid("my-instance")
            .send()
            .await
            .unwrap_err();
        let status = err.status().expect("the error has a status");
        assert_eq!(status.status_code, 409);
        assert_eq!(status.code(), "conflict");
        Ok(())
    }

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_operation() {
        let mock = MockAnalyticsEngines::new();
        let client = AnalyticsEngines::from_stub(mock);
        let _ = client
            .get_analytics_engine_state_by_id()
            .set_instance_guid("my-instance")
            .send()
            .await;
    }
}

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
    use analytics_engine_v3::client::AnalyticsEngine;
    use analytics_engine_v3::model::*;
    use futures::stream::StreamExt;
    use gax::error::Error;
    use gax::error::service::{ErrorDetail, Status};
    use gax::options::{RequestOptions, RequestOptionsBuilder};
    use gax::response::Response;
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    static_assertions::assert_impl_all!(AnalyticsEngine: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(gax::paginator::Pager<ApplicationCollection>: Send);

    mockall::mock! {
        #[derive(Debug)]
        AnalyticsEngine {}
        impl analytics_engine_v3::stub::AnalyticsEngine for AnalyticsEngine {
            async fn get_instance(&self, req: GetInstanceRequest, options: RequestOptions) -> gax::Result<Response<Instance>>;
            async fn list_applications(&self, req: ListApplicationsRequest, options: RequestOptions) -> gax::Result<Response<ApplicationCollection>>;
            async fn delete_application(&self, req: DeleteApplicationRequest, options: RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    fn app(id: &str) -> Application {
        Application::default()
            .set_id(id)
            .set_state(ApplicationState::Finished)
    }

    fn page(apps: &[&str], next: Option<&str>) -> ApplicationCollection {
        let page = ApplicationCollection::default()
            .set_applications(apps.iter().map(|id| app(id)))
            .set_limit(1)
            .set_total_count(apps.len() as i64);
        match next {
            None => page,
            Some(start) => page.set_next(PageLink::default().set_start(start)),
        }
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_status_code(503_u16)
                .set_errors([ErrorDetail::default()
                    .set_code("service_unavailable")
                    .set_message("try again later")]),
        )
    }

    #[tokio::test]
    async fn get_instance() -> Result<()> {
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_get_instance()
            .withf(|r, o| {
                r.instance_id == "my-instance"
                    && o.attempt_timeout() == &Some(Duration::from_secs(5))
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    Instance::default().set_id("my-instance").set_state("active"),
                ))
            });

        let client = AnalyticsEngine::from_stub(mock);
        let instance = client
            .get_instance()
            .set_instance_id("my-instance")
            .with_attempt_timeout(Duration::from_secs(5))
            .send()
            .await?;
        assert_eq!(instance.id.as_deref(), Some("my-instance"));
        assert_eq!(instance.state.as_deref(), Some("active"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_application_error() -> Result<()> {
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_delete_application()
            .withf(|r, _| r.instance_id == "my-instance" && r.application_id == "my-app")
            .return_once(|_, _| Err(unavailable()));

        let client = AnalyticsEngine::from_stub(mock);
        let err = client
            .delete_application()
            .set_instance_id("my-instance")
            .set_application_id("my-app")
            .send()
            .await
            .unwrap_err();
        let status = err.status().expect("the error has a status");
        assert_eq!(status.code(), "service_unavailable");
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_get_all() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.instance_id == "my-instance" && r.limit == Some(1) && r.start.is_none()
            })
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| {
                r.instance_id == "my-instance"
                    && r.limit == Some(1)
                    && r.start.as_deref() == Some("1")
            })
            .return_once(|_, _| Ok(Response::from(page(&["B"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .set_limit(1)
            .paginator()?;
        let all = pager.get_all().await?;
        assert_eq!(all, vec![app("A"), app("B")]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_has_next() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["B"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .set_limit(1)
            .paginator()?;
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec![app("A")]);
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec![app("B")]);
        assert!(!pager.has_next());

        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_single_page() -> Result<()> {
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .times(1)
            .returning(|_, _| Ok(Response::from(page(&["C"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .paginator()?;
        assert_eq!(pager.get_all().await?, vec![app("C")]);
        assert!(!pager.has_next());
        assert_eq!(pager.get_all().await?, Vec::<Application>::new());
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_preset_start() -> Result<()> {
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications().never();

        let client = AnalyticsEngine::from_stub(mock);
        let err = client
            .list_applications()
            .set_instance_id("my-instance")
            .set_start("abc")
            .paginator()
            .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");

        let err = client
            .list_applications()
            .set_instance_id("my-instance")
            .set_start("abc")
            .by_item()
            .err()
            .expect("preset start is rejected");
        assert!(err.is_invalid_argument(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_retry_same_page() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.start.is_none())
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.start.as_deref() == Some("1"))
            .return_once(|_, _| Err(unavailable()));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.start.as_deref() == Some("1"))
            .return_once(|_, _| Ok(Response::from(page(&["B"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .paginator()?;
        assert_eq!(pager.get_next().await?, vec![app("A")]);
        let err = pager.get_next().await.unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec![app("B")]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_get_all_fails() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Err(unavailable()));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .paginator()?;
        let err = pager.get_all().await.unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        assert!(pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_repeated_start() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut pager = client
            .list_applications()
            .set_instance_id("my-instance")
            .paginator()?;
        let err = pager.get_all().await.unwrap_err();
        assert!(err.is_pagination(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_by_item() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A", "B"], Some("2")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&[], Some("3")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["C"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let mut items = client
            .list_applications()
            .set_instance_id("my-instance")
            .by_item()?;
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item?);
        }
        assert_eq!(got, vec![app("A"), app("B"), app("C")]);
        Ok(())
    }

    #[tokio::test]
    async fn list_applications_by_page() -> Result<()> {
        let mut seq = Sequence::new();
        let mut mock = MockAnalyticsEngine::new();
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["A"], Some("1")))));
        mock.expect_list_applications()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["B"], None))));

        let client = AnalyticsEngine::from_stub(mock);
        let pages = client
            .list_applications()
            .set_instance_id("my-instance")
            .by_page()?
            .collect::<Vec<_>>()
            .await;
        let pages = pages.into_iter().collect::<gax::Result<Vec<_>>>()?;
        assert_eq!(pages, vec![page(&["A"], Some("1")), page(&["B"], None)]);
        Ok(())
    }
}

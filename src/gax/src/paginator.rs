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

//! Walk cursor-paginated list operations.
//!
//! Some service operations return a bounded subset of a collection and a
//! continuation token (the `next.start` field in the response) to resume the
//! listing. A [Pager] hides the token management: applications ask for the
//! next page (or the next batch of items) until [Pager::has_next] returns
//! `false`, or collect everything with [Pager::get_all].
//!
//! # Example
//! ```
//! # use analytics_engine_gax::paginator::{Pager, PageableResponse};
//! # use analytics_engine_gax::Result;
//! struct Page { items: Vec<i32>, next: Option<String> }
//! impl PageableResponse for Page {
//!     type PageItem = i32;
//!     fn items(self) -> Vec<i32> { self.items }
//!     fn next_page_token(&self) -> Option<String> { self.next.clone() }
//! }
//! # tokio_test::block_on(async {
//! let mut pager = Pager::new(None, |token: Option<String>| async move {
//!     match token.as_deref() {
//!         None => Ok(Page { items: vec![1, 2], next: Some("2".into()) }),
//!         _ => Ok(Page { items: vec![3], next: None }),
//!     }
//! })?;
//! while pager.has_next() {
//!     let items = pager.get_next().await?;
//!     println!("{items:?}");
//! }
//! # Result::<()>::Ok(()) });
//! ```

use crate::Result;
use crate::error::Error;
use futures::Stream;
use futures::stream::unfold;
use pin_project::pin_project;
use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::pin::Pin;

/// Describes a list response that a [Pager] can walk.
///
/// Implemented by the response envelope of each cursor-paginated operation.
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the response, returning the items in service order.
    fn items(self) -> Vec<Self::PageItem>;

    /// The continuation token, `None` on the last page.
    fn next_page_token(&self) -> Option<String>;
}

/// Detailed causes for the errors returned by a [Pager].
///
/// The [Error] returned by the pager wraps one of these values as its
/// [source][std::error::Error::source].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PagerError {
    /// The initial request already had a continuation token.
    #[error("the continuation token is managed by the pager, found {0:?} in the initial request")]
    PresetToken(String),
    /// The application asked for a page after the last page.
    #[error("the last page was already returned")]
    Exhausted,
    /// The service returned a token already used to request a page.
    #[error("the service returned a continuation token ({0:?}) already used in a previous request")]
    RepeatedToken(String),
    /// The page limit set with [Pager::with_max_pages] was reached.
    #[error("reached the limit of {0} pages with more pages remaining")]
    MaxPages(usize),
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = Result<T>> + Send>>;
type Execute<T> = Box<dyn Fn(Option<String>) -> BoxFuture<T> + Send>;

/// Converts a cursor-paginated list operation into a sequence of pages.
///
/// The pager owns the continuation token. The token sent in each request is
/// always the token returned in the previous response, and the pager stops
/// (permanently) after the first response without a token.
///
/// A failed request leaves the pager unchanged, calling [Pager::next_page]
/// (or [Pager::get_next]) again retries the same page. Dropping one of these
/// futures before it completes also leaves the pager unchanged.
///
/// A response with a continuation token that the pager already sent fails
/// with [PagerError::RepeatedToken], so cyclic tokens cannot make
/// [Pager::get_all] loop forever.
pub struct Pager<T> {
    execute: Execute<T>,
    token: Option<String>,
    sent: HashSet<String>,
    exhausted: bool,
    pages: usize,
    max_pages: Option<usize>,
}

impl<T> Pager<T>
where
    T: PageableResponse,
{
    /// Creates a new pager.
    ///
    /// `execute` sends one request, using its argument as the continuation
    /// token. It receives `None` for the first page.
    ///
    /// `seed_token` is the continuation token found in the initial request.
    /// The pager rejects initial requests with a token: the token is only
    /// valid as a response to the previous page.
    pub fn new<F, Fut>(seed_token: Option<String>, execute: F) -> Result<Self>
    where
        F: Fn(Option<String>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if let Some(token) = seed_token {
            return Err(Error::invalid_argument(PagerError::PresetToken(token)));
        }
        Ok(Self {
            execute: Box::new(move |token| Box::pin(execute(token))),
            token: None,
            sent: HashSet::new(),
            exhausted: false,
            pages: 0,
            max_pages: None,
        })
    }

    /// Limits the number of pages returned by the pager.
    ///
    /// Requesting more pages after the limit fails with an error where
    /// [is_pagination()][Error::is_pagination] is `true`.
    pub fn with_max_pages(mut self, v: usize) -> Self {
        self.max_pages = Some(v);
        self
    }

    /// Returns `true` if there may be more pages.
    ///
    /// This is `true` before the first request, and `false` forever after the
    /// first page without a continuation token.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// The number of pages returned so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// Fetches the next page and returns the full response.
    ///
    /// Fails without sending a request if [has_next()][Pager::has_next] is
    /// `false`.
    pub async fn next_page(&mut self) -> Result<T> {
        if self.exhausted {
            return Err(Error::exhausted(PagerError::Exhausted));
        }
        if let Some(max) = self.max_pages {
            if self.pages >= max {
                return Err(Error::pagination(PagerError::MaxPages(max)));
            }
        }
        let sent = self.token.clone();
        let response = (self.execute)(sent.clone()).await?;
        let next = response.next_page_token().filter(|t| !t.is_empty());
        match next {
            Some(token) if sent.as_ref() == Some(&token) || self.sent.contains(&token) => {
                return Err(Error::pagination(PagerError::RepeatedToken(token)));
            }
            Some(token) => self.token = Some(token),
            None => {
                self.token = None;
                self.exhausted = true;
            }
        }
        self.sent.extend(sent);
        self.pages += 1;
        Ok(response)
    }

    /// Fetches the next page and returns its items.
    pub async fn get_next(&mut self) -> Result<Vec<T::PageItem>> {
        self.next_page().await.map(T::items)
    }

    /// Fetches all the remaining pages and returns their items.
    ///
    /// The items are returned in page order, and in service order within
    /// each page. Stops at the first error, discarding any items already
    /// received.
    pub async fn get_all(&mut self) -> Result<Vec<T::PageItem>> {
        let mut all = Vec::new();
        while self.has_next() {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }
}

impl<T> Pager<T>
where
    T: PageableResponse + Send + 'static,
{
    /// Converts the pager into a stream of pages.
    ///
    /// The stream ends after the last page, or after the first error.
    pub fn into_stream(self) -> PageStream<T> {
        let stream = unfold(Some(self), |state| async move {
            let mut pager = state?;
            if !pager.has_next() {
                return None;
            }
            match pager.next_page().await {
                Ok(page) => Some((Ok(page), Some(pager))),
                Err(e) => Some((Err(e), None)),
            }
        });
        PageStream {
            stream: Box::pin(stream),
        }
    }

    /// Converts the pager into a stream of items.
    ///
    /// The stream ends after the last item in the last page, or after the
    /// first error.
    pub fn into_items(self) -> ItemStream<T::PageItem>
    where
        T::PageItem: 'static,
    {
        let state = Some((self, VecDeque::new()));
        let stream = unfold(state, |state| async move {
            let (mut pager, mut buffer) = state?;
            loop {
                if let Some(item) = buffer.pop_front() {
                    return Some((Ok(item), Some((pager, buffer))));
                }
                if !pager.has_next() {
                    return None;
                }
                match pager.get_next().await {
                    Ok(items) => buffer.extend(items),
                    Err(e) => return Some((Err(e), None)),
                }
            }
        });
        ItemStream {
            stream: Box::pin(stream),
        }
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("token", &self.token)
            .field("sent", &self.sent.len())
            .field("exhausted", &self.exhausted)
            .field("pages", &self.pages)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

/// A stream of pages, returned by [Pager::into_stream].
#[pin_project]
pub struct PageStream<T> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T>> + Send>>,
}

impl<T> Stream for PageStream<T> {
    type Item = Result<T>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of items, returned by [Pager::into_items].
#[pin_project]
pub struct ItemStream<I> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<I>> + Send>>,
}

impl<I> Stream for ItemStream<I> {
    type Item = Result<I>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::service::{ErrorDetail, Status};
    use futures::StreamExt;
    use std::error::Error as _;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    static_assertions::assert_impl_all!(Pager<TestPage>: Send);
    static_assertions::assert_impl_all!(PageStream<TestPage>: Send);
    static_assertions::assert_impl_all!(ItemStream<String>: Send);

    #[derive(Clone, Debug, PartialEq)]
    struct TestPage {
        items: Vec<String>,
        next: Option<String>,
    }

    impl TestPage {
        fn new(items: &[&str], next: Option<&str>) -> Self {
            Self {
                items: items.iter().map(|s| s.to_string()).collect(),
                next: next.map(str::to_string),
            }
        }
    }

    impl PageableResponse for TestPage {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> Option<String> {
            self.next.clone()
        }
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_status_code(503_u16)
                .set_errors([ErrorDetail::default()
                    .set_code("unavailable")
                    .set_message("try again")]),
        )
    }

    /// A fake service that returns canned responses and records the tokens.
    #[derive(Clone, Default)]
    struct FakeService {
        responses: Arc<Mutex<VecDeque<Result<TestPage>>>>,
        calls: Arc<Mutex<Vec<Option<String>>>>,
    }

    impl FakeService {
        fn new<I: IntoIterator<Item = Result<TestPage>>>(responses: I) -> Self {
            Self {
                responses: Arc::new(Mutex::new(responses.into_iter().collect())),
                calls: Arc::default(),
            }
        }

        fn pager(&self) -> Pager<TestPage> {
            let fake = self.clone();
            Pager::new(None, move |token| {
                let fake = fake.clone();
                async move { fake.list(token) }
            })
            .unwrap()
        }

        fn list(&self, token: Option<String>) -> Result<TestPage> {
            self.calls.lock().unwrap().push(token);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected call")
        }

        fn calls(&self) -> Vec<Option<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn two_pages() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec!["A"]);
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec!["B"]);
        assert!(!pager.has_next());
        assert_eq!(fake.calls(), vec![None, Some("1".to_string())]);
        assert_eq!(pager.pages_fetched(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn get_all_two_pages() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_all().await?, vec!["A", "B"]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn get_all_single_page() -> anyhow::Result<()> {
        let fake = FakeService::new([Ok(TestPage::new(&["C"], None))]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_all().await?, vec!["C"]);
        assert!(!pager.has_next());
        assert_eq!(fake.calls().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn get_all_preserves_order() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["a1", "a2", "a3"], Some("p2"))),
            Ok(TestPage::new(&[], Some("p3"))),
            Ok(TestPage::new(&["c1", "c2"], None)),
        ]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_all().await?, vec!["a1", "a2", "a3", "c1", "c2"]);
        assert_eq!(
            fake.calls(),
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_token_is_last_page() -> anyhow::Result<()> {
        let fake = FakeService::new([Ok(TestPage::new(&["A"], Some("")))]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_next().await?, vec!["A"]);
        assert!(!pager.has_next());
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_makes_no_call() -> anyhow::Result<()> {
        let fake = FakeService::new([Ok(TestPage::new(&["C"], None))]);
        let mut pager = fake.pager();
        pager.get_next().await?;
        for _ in 0..3 {
            let err = pager.get_next().await.unwrap_err();
            assert!(err.is_exhausted(), "{err:?}");
            let source = err.source().and_then(|e| e.downcast_ref::<PagerError>());
            assert_eq!(source, Some(&PagerError::Exhausted), "{err:?}");
            assert!(!pager.has_next());
        }
        let err = pager.next_page().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(fake.calls().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn retry_after_failure() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Err(unavailable()),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_next().await?, vec!["A"]);

        let err = pager.get_next().await.unwrap_err();
        assert_eq!(err.status().map(|s| s.status_code), Some(503), "{err:?}");
        assert!(pager.has_next());
        assert_eq!(pager.pages_fetched(), 1);

        assert_eq!(pager.get_next().await?, vec!["B"]);
        assert_eq!(
            fake.calls(),
            vec![None, Some("1".to_string()), Some("1".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn first_page_failure() -> anyhow::Result<()> {
        let fake = FakeService::new([Err(unavailable()), Ok(TestPage::new(&["A"], None))]);
        let mut pager = fake.pager();
        let err = pager.get_next().await.unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        assert!(pager.has_next());
        assert_eq!(pager.get_next().await?, vec!["A"]);
        assert_eq!(fake.calls(), vec![None, None]);
        Ok(())
    }

    #[tokio::test]
    async fn get_all_fails_fast() {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Err(unavailable()),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        let err = pager.get_all().await.unwrap_err();
        assert!(err.status().is_some(), "{err:?}");
        assert_eq!(fake.calls().len(), 2);
        assert!(pager.has_next());
    }

    #[test_case(Some("start-token".to_string()))]
    #[test_case(Some(String::new()))]
    fn preset_token(seed: Option<String>) {
        let fake = FakeService::default();
        let f = fake.clone();
        let err = Pager::new(seed.clone(), move |token| {
            let f = f.clone();
            async move { f.list(token) }
        })
        .unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PagerError>());
        assert!(
            matches!(source, Some(PagerError::PresetToken(t)) if Some(t) == seed.as_ref()),
            "{err:?}"
        );
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn repeated_token() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], Some("1"))),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_next().await?, vec!["A"]);
        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_pagination(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PagerError>());
        assert_eq!(
            source,
            Some(&PagerError::RepeatedToken("1".to_string())),
            "{err:?}"
        );
        assert!(pager.has_next());
        assert_eq!(pager.pages_fetched(), 1);

        // The state is unchanged, the next call resends the same token.
        assert_eq!(pager.get_next().await?, vec!["B"]);
        assert_eq!(
            fake.calls(),
            vec![None, Some("1".to_string()), Some("1".to_string())]
        );
        Ok(())
    }

    #[tokio::test]
    async fn cyclic_token() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], Some("2"))),
            Ok(TestPage::new(&["C"], Some("1"))),
            Ok(TestPage::new(&["C"], None)),
        ]);
        let mut pager = fake.pager();
        assert_eq!(pager.get_next().await?, vec!["A"]);
        assert_eq!(pager.get_next().await?, vec!["B"]);
        let err = pager.get_next().await.unwrap_err();
        assert!(err.is_pagination(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PagerError>());
        assert_eq!(
            source,
            Some(&PagerError::RepeatedToken("1".to_string())),
            "{err:?}"
        );
        assert!(pager.has_next());
        assert_eq!(pager.pages_fetched(), 2);

        // The state is unchanged, the next call resends the same token.
        assert_eq!(pager.get_next().await?, vec!["C"]);
        assert!(!pager.has_next());
        assert_eq!(
            fake.calls(),
            vec![
                None,
                Some("1".to_string()),
                Some("2".to_string()),
                Some("2".to_string())
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_all_stops_on_cyclic_token() -> anyhow::Result<()> {
        let pages = (0..100).map(|i| {
            let next = if i % 2 == 0 { "1" } else { "2" };
            Ok(TestPage::new(&["A"], Some(next)))
        });
        let fake = FakeService::new(pages);
        let mut pager = fake.pager();
        let err = pager.get_all().await.unwrap_err();
        assert!(err.is_pagination(), "{err:?}");
        assert_eq!(fake.calls().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn max_pages() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], Some("2"))),
        ]);
        let mut pager = fake.pager().with_max_pages(2);
        let err = pager.get_all().await.unwrap_err();
        assert!(err.is_pagination(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PagerError>());
        assert_eq!(source, Some(&PagerError::MaxPages(2)), "{err:?}");
        assert_eq!(fake.calls().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn max_pages_not_reached() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager().with_max_pages(2);
        assert_eq!(pager.get_all().await?, vec!["A", "B"]);
        Ok(())
    }

    #[tokio::test]
    async fn next_page_returns_envelope() -> anyhow::Result<()> {
        let fake = FakeService::new([Ok(TestPage::new(&["A", "B"], None))]);
        let mut pager = fake.pager();
        let page = pager.next_page().await?;
        assert_eq!(page, TestPage::new(&["A", "B"], None));
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_fetch_leaves_state() -> anyhow::Result<()> {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let rx = Arc::new(tokio::sync::Mutex::new(Some(rx)));
        let calls = Arc::new(Mutex::new(Vec::new()));
        let c = calls.clone();
        let mut pager = Pager::new(None, move |token: Option<String>| {
            let rx = rx.clone();
            c.lock().unwrap().push(token.clone());
            async move {
                if let Some(rx) = rx.lock().await.take() {
                    // Never completes in this test, the sender is held open.
                    let _ = rx.await;
                }
                Ok(TestPage::new(&["A"], None))
            }
        })?;
        let fetch = pager.get_next();
        let timeout = tokio::time::timeout(std::time::Duration::from_millis(10), fetch).await;
        assert!(timeout.is_err(), "{timeout:?}");
        assert!(pager.has_next());
        assert_eq!(pager.pages_fetched(), 0);

        drop(tx);
        assert_eq!(pager.get_next().await?, vec!["A"]);
        assert_eq!(*calls.lock().unwrap(), vec![None, None]);
        Ok(())
    }

    #[tokio::test]
    async fn into_stream() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A", "B"], Some("1"))),
            Ok(TestPage::new(&["C"], None)),
        ]);
        let pages = fake.pager().into_stream().collect::<Vec<_>>().await;
        let pages = pages.into_iter().collect::<Result<Vec<_>>>()?;
        assert_eq!(
            pages,
            vec![
                TestPage::new(&["A", "B"], Some("1")),
                TestPage::new(&["C"], None)
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn into_stream_stops_on_error() {
        let fake = FakeService::new([Ok(TestPage::new(&["A"], Some("1"))), Err(unavailable())]);
        let mut stream = fake.pager().into_stream();
        assert!(matches!(stream.next().await, Some(Ok(_))));
        assert!(matches!(stream.next().await, Some(Err(_))));
        assert!(stream.next().await.is_none());
        assert_eq!(fake.calls().len(), 2);
    }

    #[tokio::test]
    async fn into_items() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A", "B"], Some("1"))),
            Ok(TestPage::new(&[], Some("2"))),
            Ok(TestPage::new(&["C"], None)),
        ]);
        let items = fake.pager().into_items().collect::<Vec<_>>().await;
        let items = items.into_iter().collect::<Result<Vec<_>>>()?;
        assert_eq!(items, vec!["A", "B", "C"]);
        Ok(())
    }

    #[tokio::test]
    async fn into_items_stops_on_error() {
        let fake = FakeService::new([Ok(TestPage::new(&["A"], Some("1"))), Err(unavailable())]);
        let mut stream = fake.pager().into_items();
        assert!(matches!(stream.next().await, Some(Ok(a)) if a == "A"));
        assert!(matches!(stream.next().await, Some(Err(_))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn spawned_pager() -> anyhow::Result<()> {
        let fake = FakeService::new([
            Ok(TestPage::new(&["A"], Some("1"))),
            Ok(TestPage::new(&["B"], None)),
        ]);
        let mut pager = fake.pager();
        let items = tokio::spawn(async move { pager.get_all().await }).await??;
        assert_eq!(items, vec!["A", "B"]);
        Ok(())
    }

    #[test]
    fn debug() {
        let pager = FakeService::default().pager().with_max_pages(7);
        let fmt = format!("{pager:?}");
        assert!(fmt.contains("max_pages: Some(7)"), "{fmt}");
    }
}

//! Paginated stream for lazy iteration over list endpoints.
//!
//! Aircall list endpoints are page-numbered (`page`, `per_page`) and report
//! a `next_page_link` in their `meta` object while more pages remain.
//! [`PaginatedStream`] walks those pages and yields items one by one.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;

use super::query::QueryValues;
use super::ClientInner;
use crate::models::ResponseMeta;
use crate::Result;

/// Default number of items per page (the Aircall maximum).
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// A list response that can be split into items and pagination metadata.
pub trait ListPage: DeserializeOwned + Default + Send + 'static {
    /// Element type of the list.
    type Item: Send + 'static;

    /// Split the page into its items and metadata.
    fn into_parts(self) -> (Vec<Self::Item>, Option<ResponseMeta>);
}

type Page<T> = (Vec<T>, Option<ResponseMeta>);

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages from a list endpoint.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: aircall_rs::AircallClient) -> aircall_rs::Result<()> {
/// let mut stream = client.calls().list_stream(None);
///
/// while let Some(call) = stream.next().await {
///     let call = call?;
///     println!("{:?}", call.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by number.
    fetch_page: Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Next page to fetch, None if exhausted.
    next_page: Option<u32>,
    /// Page number of the in-flight fetch.
    fetching_page: u32,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T: Send + 'static> PaginatedStream<T> {
    /// Create a new paginated stream starting at `first_page`.
    pub(crate) fn new<F>(first_page: u32, fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: Some(first_page),
            fetching_page: first_page,
            pending_fetch: None,
        }
    }
}

fn next_page_after(page: u32, meta: Option<&ResponseMeta>) -> Option<u32> {
    meta.filter(|meta| meta.has_more()).and_then(|_| page.checked_add(1))
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok((items, meta))) => {
                        this.pending_fetch = None;
                        this.current_items = items.into();
                        this.next_page = next_page_after(this.fetching_page, meta.as_ref());

                        if !this.current_items.is_empty() {
                            continue;
                        }
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page.take() {
                this.fetching_page = page;
                this.pending_fetch = Some((this.fetch_page)(page));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder for creating paginated streams over one list endpoint.
pub(crate) struct PaginatedStreamBuilder {
    inner: Arc<ClientInner>,
    path: String,
    query: QueryValues,
}

impl PaginatedStreamBuilder {
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            query: QueryValues::new(),
        }
    }

    /// Extra options sent with every page request.
    ///
    /// A `page` option sets the first page fetched and a `per_page` option
    /// the batch size; both default to 1 and [`DEFAULT_PAGE_SIZE`].
    pub(crate) fn query(mut self, query: Option<&QueryValues>) -> Self {
        if let Some(query) = query {
            self.query = query.clone();
        }
        self
    }

    pub(crate) fn build<L: ListPage>(self) -> PaginatedStream<L::Item> {
        let inner = self.inner;
        let path = self.path;
        let query = self.query;

        let first_page = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let per_page = query
            .get("per_page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        PaginatedStream::new(first_page, move |page: u32| {
            let inner = inner.clone();
            let path = path.clone();
            let mut query = query.clone();
            query.set_pagination(page, per_page);

            Box::pin(async move {
                let response = inner.get_json::<L>(&path, Some(&query)).await?;
                Ok(response.data.into_parts())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn page<F>(fut: F) -> BoxFuture<'static, Result<Page<i32>>>
    where
        F: Future<Output = Result<Page<i32>>> + Send + 'static,
    {
        Box::pin(fut)
    }

    fn meta(next: Option<&str>) -> Option<ResponseMeta> {
        Some(ResponseMeta {
            next_page_link: next.map(String::from),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_stream_walks_pages_until_no_next_link() {
        let stream = PaginatedStream::new(1, |n: u32| {
            page(async move {
                match n {
                    1 => Ok((vec![1, 2], meta(Some("https://next")))),
                    2 => Ok((vec![3], meta(None))),
                    _ => panic!("unexpected page {n}"),
                }
            })
        });

        let items: Vec<i32> = stream.map(|item| item.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stream_stops_on_error() {
        let mut stream = PaginatedStream::new(1, |_n: u32| {
            page(async move { Err(crate::Error::AttemptsExhausted) })
        });

        assert!(matches!(stream.next().await, Some(Err(crate::Error::AttemptsExhausted))));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_stream_ends_on_empty_page() {
        let mut stream = PaginatedStream::new(1, |_n: u32| {
            page(async move { Ok((Vec::new(), meta(Some("https://next")))) })
        });

        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_next_page_after() {
        assert_eq!(next_page_after(1, meta(Some("link")).as_ref()), Some(2));
        assert_eq!(next_page_after(1, meta(None).as_ref()), None);
        assert_eq!(next_page_after(1, None), None);
        assert_eq!(next_page_after(u32::MAX, meta(Some("link")).as_ref()), None);
    }
}

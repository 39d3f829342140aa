//! Pagination driver
//!
//! Pull-based page sequence over a prepared request. Each pull performs
//! one request/decode cycle and follows the envelope's `next_url`
//! cursor until the server stops reporting one or the page budget is
//! exhausted.


use crate::envelope::{decode_response, Payload};
use crate::error::Result;
use crate::http::{ApiClient, PreparedRequest};
use crate::types::{JsonValue, OptionStringExt, ResponseShape};
use futures::Stream;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Driver state between pulls
#[derive(Debug, Clone, PartialEq, Eq)]
enum PagerState {
    /// Next pull fetches this URL
    Ready(String),
    /// Sequence exhausted
    Done,
}

/// One fetched page: the decoded payload and the continuation cursor
/// under the effective cursor key.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub payload: Payload<T>,
    pub next_cursor: Option<JsonValue>,
}

/// Lazy page sequence over a paginated endpoint.
///
/// Construction performs no I/O; each `next_page` call performs exactly
/// one network round trip. The sequence is finite (bounded by
/// `max_pages`) and restartable only by building a new pager.
pub struct Pager<'a, T> {
    client: &'a ApiClient,
    request: PreparedRequest,
    state: PagerState,
    shape: ResponseShape,
    objectify: bool,
    cursor_key: String,
    pages_read: usize,
    max_pages: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pager<'a, T> {
    pub(crate) fn new(
        client: &'a ApiClient,
        request: PreparedRequest,
        shape: ResponseShape,
        objectify: bool,
        cursor_key: String,
        max_pages: usize,
    ) -> Self {
        let state = if request.url.is_empty() {
            PagerState::Done
        } else {
            PagerState::Ready(request.url.clone())
        };

        Self {
            client,
            request,
            state,
            shape,
            objectify,
            cursor_key,
            pages_read: 0,
            max_pages,
            _marker: PhantomData,
        }
    }

    /// Pages fetched so far
    pub fn pages_read(&self) -> usize {
        self.pages_read
    }

    /// Whether the sequence is exhausted
    pub fn is_done(&self) -> bool {
        self.state == PagerState::Done
    }

    /// Fetch the next page, or `None` once the sequence is exhausted.
    ///
    /// An error during a fetch propagates out of this pull and leaves
    /// the pager exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let PagerState::Ready(url) = &self.state else {
            return Ok(None);
        };
        if self.pages_read >= self.max_pages {
            self.state = PagerState::Done;
            return Ok(None);
        }

        let mut request = self.request.clone();
        request.url = url.clone();

        let response = match self.client.executor().execute(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.state = PagerState::Done;
                return Err(e);
            }
        };
        let decoded =
            decode_response::<T>(response.status, &response.body, self.shape, self.objectify);
        let (payload, pagination) = match decoded {
            Ok(decoded) => decoded,
            Err(e) => {
                self.state = PagerState::Done;
                return Err(e);
            }
        };

        self.pages_read += 1;
        let next_cursor = pagination.next_cursor(&self.cursor_key);
        self.state = match pagination.next_url.clone().none_if_empty() {
            Some(next_url) => PagerState::Ready(next_url),
            None => PagerState::Done,
        };
        debug!(
            pages_read = self.pages_read,
            entries = payload.len(),
            done = self.is_done(),
            "fetched page"
        );

        Ok(Some(Page {
            payload,
            next_cursor,
        }))
    }

    /// Drain the sequence into a vector of pages
    pub async fn collect_pages(mut self) -> Result<Vec<Page<T>>> {
        let mut pages = Vec::new();
        while let Some(page) = self.next_page().await? {
            pages.push(page);
        }
        Ok(pages)
    }

    /// Adapt the pager into a `futures::Stream` of pages
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>>> + 'a
    where
        T: 'a,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok(page.map(|page| (page, pager)))
        })
    }
}

impl<T> std::fmt::Debug for Pager<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("state", &self.state)
            .field("cursor_key", &self.cursor_key)
            .field("pages_read", &self.pages_read)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

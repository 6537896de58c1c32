//! Lazy, cursor-driven listing of entities.
//!
//! [`ResourceStream`] is a [`Stream`] that fetches pages on demand and yields
//! entities one at a time. A page is requested only when the local buffer
//! runs dry, and never for more entities than the remaining limit allows.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::{StreamExt, TryStreamExt};
//!
//! let params = IssuingHolderQuery {
//!     limit: Some(250),
//!     ..Default::default()
//! };
//! let mut holders = IssuingHolder::query(&client, &params)?;
//!
//! while let Some(holder) = holders.next().await {
//!     let holder = holder?;
//!     println!("{:?}", holder.name);
//! }
//!
//! let all: Vec<IssuingHolder> = IssuingHolder::query(&client, &Default::default())?
//!     .try_collect()
//!     .await?;
//! ```

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_util::stream;

use crate::clients::StarkClient;
use crate::rest::operations::{fetch_page, MAX_PAGE_LIMIT};
use crate::rest::{Resource, ResourceError};

/// A lazily fetched sequence of entities.
///
/// Created by [`get_stream`](crate::rest::operations::get_stream) and the
/// `query` functions of each resource. Use `StreamExt::next` to pull items
/// one by one or `TryStreamExt::try_collect` to drain it. An error is
/// yielded at most once; afterwards the stream is finished.
pub struct ResourceStream<'c, R> {
    inner: Pin<Box<dyn Stream<Item = Result<R, ResourceError>> + Send + 'c>>,
}

impl<'c, R: Resource + 'c> ResourceStream<'c, R> {
    pub(crate) fn new(
        client: &'c StarkClient,
        query: HashMap<String, String>,
        limit: Option<u32>,
    ) -> Self {
        let state = PageState {
            client,
            query,
            remaining: limit,
            buffer: VecDeque::new(),
            cursor: None,
            exhausted: limit == Some(0),
        };

        let inner = stream::try_unfold(state, |mut state| async move {
            let item = state.next_item().await?;
            Ok::<_, ResourceError>(item.map(|item| (item, state)))
        });

        Self {
            inner: Box::pin(inner),
        }
    }
}

impl<R> Stream for ResourceStream<'_, R> {
    type Item = Result<R, ResourceError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl<R> fmt::Debug for ResourceStream<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStream").finish_non_exhaustive()
    }
}

/// Paging state threaded through the stream.
struct PageState<'c, R> {
    client: &'c StarkClient,
    query: HashMap<String, String>,
    remaining: Option<u32>,
    buffer: VecDeque<R>,
    cursor: Option<String>,
    exhausted: bool,
}

impl<R: Resource> PageState<'_, R> {
    async fn next_item(&mut self) -> Result<Option<R>, ResourceError> {
        loop {
            if self.remaining == Some(0) {
                return Ok(None);
            }

            if let Some(item) = self.buffer.pop_front() {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Ok(Some(item));
            }

            if self.exhausted {
                return Ok(None);
            }

            self.fetch_next_page().await?;
        }
    }

    async fn fetch_next_page(&mut self) -> Result<(), ResourceError> {
        let page_limit = self
            .remaining
            .map_or(MAX_PAGE_LIMIT, |remaining| remaining.min(MAX_PAGE_LIMIT));

        let mut query = self.query.clone();
        query.insert("limit".to_string(), page_limit.to_string());
        if let Some(cursor) = &self.cursor {
            query.insert("cursor".to_string(), cursor.clone());
        }

        let page = fetch_page::<R>(self.client, query).await?;
        let (items, cursor) = page.into_parts();

        self.exhausted = cursor.is_none();
        self.cursor = cursor;
        self.buffer.extend(items);
        Ok(())
    }
}

//! Lazy paged sequences.
//!
//! List calls return a [`BoxStream`] of records. The first page is requested on
//! the first poll and every following page only once the records of the
//! previous one have been handed out, so a consumer that stops early never
//! pays for the remaining pages. An absent or empty `nextPageToken` ends the
//! sequence; an error is yielded once and ends it as well.

use crate::error::AppError;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use std::future::Future;
use tracing::debug;

/// A single page of a list response
pub trait Page {
    /// Record type carried by the page
    type Item;

    /// Splits the page into its records and the token of the next page
    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

struct Pager<T, F> {
    fetch: F,
    buffer: VecDeque<T>,
    cursor: Cursor,
    pages: usize,
}

impl<T, P, F, Fut> Pager<T, F>
where
    P: Page<Item = T>,
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<P, AppError>>,
{
    async fn advance(mut self) -> Result<Option<(T, Self)>, AppError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some((item, self)));
            }

            let page_token = match std::mem::replace(&mut self.cursor, Cursor::Done) {
                Cursor::Done => return Ok(None),
                Cursor::Start => None,
                Cursor::Next(token) => Some(token),
            };

            let (items, next) = (self.fetch)(page_token).await?.into_parts();
            self.pages += 1;
            debug!("Page {} fetched with {} records", self.pages, items.len());

            self.buffer.extend(items);
            self.cursor = match next {
                Some(token) if !token.is_empty() => Cursor::Next(token),
                _ => Cursor::Done,
            };
        }
    }
}

/// Builds a lazy stream over every record of a paged list call
///
/// `fetch` receives `None` for the first page and the previous page's
/// `nextPageToken` afterwards.
pub fn paginate<'a, T, P, F, Fut>(fetch: F) -> BoxStream<'a, Result<T, AppError>>
where
    T: Send + 'a,
    P: Page<Item = T> + Send + 'a,
    F: FnMut(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<P, AppError>> + Send + 'a,
{
    let pager = Pager {
        fetch,
        buffer: VecDeque::new(),
        cursor: Cursor::Start,
        pages: 0,
    };
    stream::try_unfold(pager, Pager::advance).boxed()
}

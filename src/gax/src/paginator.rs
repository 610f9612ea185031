// Copyright 2025 IBM Cloud Rust SDK Authors
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

mod cursor;
mod page;
#[cfg(feature = "unstable-stream")]
mod stream;

pub use cursor::Cursor;
pub use page::Page;
#[cfg(feature = "unstable-stream")]
pub use stream::{ItemStream, PageStream};

use crate::Result;
use crate::error::Error;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

/// The problems detected by the pagers.
///
/// These are always wrapped in an [Error], use the predicates in [Error] to
/// classify them, and [std::error::Error::source] to get the details.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PaginationError {
    /// The request has a cursor set by the application.
    #[error("the request already has a cursor ({0}), pagers manage the cursor")]
    CursorInRequest(String),
    /// All the pages were already returned.
    #[error("all the pages have been returned")]
    Exhausted,
    /// The response is not a JSON object.
    #[error("the response is not a JSON object")]
    NotAnObject,
    /// The response does not contain the field with the items.
    #[error("the `{0}` field is missing from the response")]
    MissingItems(String),
    /// The field expected to contain the items is not an array.
    #[error("the `{0}` field in the response is not an array")]
    ItemsNotArray(String),
    /// The `next` field does not contain a link.
    #[error("the `next` field in the response does not contain an `href` string")]
    InvalidNextLink,
    /// The link to the next page has no cursor.
    #[error("the next page link `{0}` does not contain an `offset` query parameter")]
    MissingCursor(String),
    /// The link to the next page is not a valid URL.
    #[error("cannot parse the next page link `{href}`: {source}")]
    InvalidNextHref {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

/// The requests for list operations that pagers can iterate over.
///
/// Each list request holds the filters, sort order, and page size the
/// application sets once for the full enumeration. It also has a field for
/// the cursor, which the pager sets before fetching each page after the first.
pub trait PageRequest: Clone + Send {
    /// The cursor, if any, set in this request.
    fn cursor(&self) -> Option<&str>;

    /// Sets the cursor for the next request.
    fn set_cursor(&mut self, cursor: Cursor);
}

/// The type returned by [ListOperation::list].
pub type ListFuture = Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send>>;

/// A list operation bound to a specific endpoint and client.
///
/// The operation receives the request, including the cursor, and returns the
/// decoded JSON body of the response. Any error is returned to the
/// application without modification.
///
/// This trait is implemented for any closure returning a suitable future:
///
/// ```
/// # use ibm_cloud_gax::paginator::ListOperation;
/// # #[derive(Clone)] struct Request;
/// async fn list(_: Request) -> ibm_cloud_gax::Result<serde_json::Value> {
///     Ok(serde_json::json!({"items": []}))
/// }
/// fn assert_list<L: ListOperation<Request>>(_: L) {}
/// assert_list(list);
/// ```
pub trait ListOperation<R>: Send + Sync {
    /// Fetches one page.
    fn list(&self, request: R) -> ListFuture;
}

impl<R, F, Fut> ListOperation<R> for F
where
    F: Fn(R) -> Fut + Send + Sync,
    Fut: Future<Output = Result<serde_json::Value>> + Send + 'static,
{
    fn list(&self, request: R) -> ListFuture {
        Box::pin(self(request))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct PagerState {
    next_cursor: Option<Cursor>,
    initialized: bool,
    exhausted: bool,
}

impl PagerState {
    fn has_next(&self) -> bool {
        !self.initialized || self.next_cursor.is_some()
    }

    fn advance(&mut self, next: Option<Cursor>) {
        self.initialized = true;
        self.exhausted = next.is_none();
        self.next_cursor = next;
    }
}

/// Iterates over the pages returned by a list operation.
///
/// The IBM Cloud list operations return one page of results at a time. If
/// more results are available the response includes a link to the next page,
/// with an opaque cursor in the `offset` query parameter. A `CursorPager`
/// manages this cursor. Pages are fetched lazily, one request per page, only
/// when the application asks for them.
///
/// The pager has two states. It starts as *active*, and becomes *exhausted*
/// as soon as a response does not include a link to the next page. An
/// exhausted pager remains exhausted.
///
/// Failed requests do not change the state. Applications can call
/// [get_next][CursorPager::get_next] again to retry the same page.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::paginator::{Cursor, CursorPager, PageRequest};
/// # use serde_json::json;
/// #[derive(Clone, Default)]
/// struct ListThings { offset: Option<String> }
/// impl PageRequest for ListThings {
///     fn cursor(&self) -> Option<&str> { self.offset.as_deref() }
///     fn set_cursor(&mut self, cursor: Cursor) { self.offset = Some(cursor.into()); }
/// }
/// async fn list(r: ListThings) -> ibm_cloud_gax::Result<serde_json::Value> {
///     match r.offset.as_deref() {
///         None => Ok(json!({"things": ["a", "b"], "next": {"href": "https://example.com/things?offset=2"}})),
///         Some(_) => Ok(json!({"things": ["c"]})),
///     }
/// }
/// # tokio_test::block_on(async {
/// let mut pager = CursorPager::<String, _>::new(list, ListThings::default(), "things")?;
/// assert!(pager.has_next());
/// assert_eq!(pager.get_all().await?, vec!["a", "b", "c"]);
/// assert!(!pager.has_next());
/// # ibm_cloud_gax::Result::<()>::Ok(()) });
/// ```
///
/// # Concurrency
///
/// Fetching a page requires exclusive access (`&mut self`) to the pager, the
/// compiler rejects any attempt to fetch two pages concurrently from the same
/// pager. To enumerate the same results twice, create a second pager.
pub struct CursorPager<T, R> {
    list: Box<dyn ListOperation<R>>,
    request: R,
    items_field: &'static str,
    state: PagerState,
    _item: PhantomData<fn() -> T>,
}

impl<T, R> CursorPager<T, R>
where
    T: DeserializeOwned,
    R: PageRequest,
{
    /// Creates a new pager.
    ///
    /// No requests are made until the application requests the first page.
    ///
    /// # Parameters
    /// * `list` - the list operation, bound to an endpoint and client.
    /// * `request` - the filters and page size, used for every page.
    /// * `items_field` - the name of the response field with the items.
    ///
    /// Returns an error, classified as
    /// [invalid argument][Error::is_invalid_argument], if the request already
    /// contains a cursor.
    pub fn new<L>(list: L, request: R, items_field: &'static str) -> Result<Self>
    where
        L: ListOperation<R> + 'static,
    {
        if let Some(cursor) = request.cursor() {
            return Err(Error::invalid_argument(PaginationError::CursorInRequest(
                cursor.to_string(),
            )));
        }
        Ok(Self {
            list: Box::new(list),
            request,
            items_field,
            state: PagerState::default(),
            _item: PhantomData,
        })
    }

    /// Returns true if there may be more pages to fetch.
    ///
    /// This is true before the first page is fetched, even if the results are
    /// empty, and remains true until a response does not include a link to
    /// the next page. Once it returns `false` it always returns `false`.
    pub fn has_next(&self) -> bool {
        self.state.has_next()
    }

    /// Fetches the next page, returning its items in the order the service
    /// returned them.
    ///
    /// Each call makes exactly one request and advances the pager: calling
    /// this function twice returns two different pages.
    ///
    /// # Errors
    /// * [illegal state][Error::is_illegal_state] if [has_next][Self::has_next]
    ///   is `false`. No request is made in this case.
    /// * [protocol violation][Error::is_protocol_violation] if the response
    ///   does not have the expected structure.
    /// * Any error returned by the list operation, unchanged.
    ///
    /// The pager state is not modified on errors, the next call requests the
    /// same page. The same applies if the returned future is dropped before it
    /// completes.
    pub async fn get_next(&mut self) -> Result<Vec<T>> {
        if !self.has_next() {
            return Err(Error::illegal_state(PaginationError::Exhausted));
        }
        let mut request = self.request.clone();
        if let Some(cursor) = &self.state.next_cursor {
            request.set_cursor(cursor.clone());
        }
        let body = self.list.list(request).await?;
        let page = Page::<T>::from_response(body, self.items_field)?;
        self.state.advance(page.next);
        Ok(page.items)
    }

    /// Fetches all the remaining pages, returning their items in order.
    ///
    /// This is equivalent to calling [get_next][Self::get_next] while
    /// [has_next][Self::has_next] returns `true`, and concatenating the
    /// results. The number of requests depends on the number of results, use
    /// the `limit` field in the request to control the page size.
    ///
    /// Returns an empty vector if the pager is already exhausted.
    ///
    /// # Errors
    /// Stops at the first error and returns it, the items from any pages
    /// fetched before the error are discarded. The pager state reflects the
    /// successful pages, calling this function again resumes with the page
    /// that failed.
    pub async fn get_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while self.has_next() {
            items.extend(self.get_next().await?);
        }
        Ok(items)
    }

    /// The cursor used to fetch the next page.
    ///
    /// This is `None` before the first page, and after the last page.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.state.next_cursor.as_ref()
    }

    /// The name of the response field containing the items.
    pub fn items_field(&self) -> &str {
        self.items_field
    }

    /// The request used for each page, without the cursor.
    pub fn request(&self) -> &R {
        &self.request
    }
}

impl<T, R> std::fmt::Debug for CursorPager<T, R>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorPager")
            .field("request", &self.request)
            .field("items_field", &self.items_field)
            .field("state", &self.state)
            .finish()
    }
}

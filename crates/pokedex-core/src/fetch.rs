//! List and Detail Fetchers
//!
//! Thin async wrappers over an [`HttpGet`] transport. One attempt per call:
//! no retry, no timeout. Any transport or decode problem becomes a
//! [`FetchError`].

use serde::de::DeserializeOwned;

use crate::error::{FetchError, FetchResult};
use crate::model::{ItemDetail, PageResult};

/// Transport performing a single GET and returning the response body.
///
/// Implementations must treat non-success statuses as errors. Futures are not
/// required to be `Send`; the browser runs everything on one thread.
#[allow(async_fn_in_trait)]
pub trait HttpGet {
    async fn get_text(&self, url: &str) -> FetchResult<String>;
}

async fn fetch_json<H, T>(http: &H, url: &str) -> FetchResult<T>
where
    H: HttpGet,
    T: DeserializeOwned,
{
    let body = http.get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::new(url, e))
}

/// Fetch one list page. `url` is either the first-page request or a cursor
/// taken verbatim from a previous response.
pub async fn fetch_page<H: HttpGet>(http: &H, url: &str) -> FetchResult<PageResult> {
    fetch_json(http, url).await
}

pub async fn fetch_detail<H: HttpGet>(http: &H, url: &str) -> FetchResult<ItemDetail> {
    fetch_json(http, url).await
}

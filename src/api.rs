//! Remote Catalog Transport
//!
//! `HttpGet` over reqwest. On wasm32 reqwest goes through the browser's
//! `fetch`, so there is no timeout and no retry.

use pokedex_core::{FetchError, FetchResult, HttpGet};

#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpGet for ReqwestTransport {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;
        // 404 for unknown names is a failure like any other
        let response = response
            .error_for_status()
            .map_err(|e| FetchError::new(url, e))?;
        response.text().await.map_err(|e| FetchError::new(url, e))
    }
}

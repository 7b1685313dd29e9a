//! HTTP fragment fetcher.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: an error, since fragments are only served to browsers.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses and transport failures become `FetchError`s; the
//! manager renders them inline in the panel instead of propagating them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use panels::{FetchError, FragmentFetcher};

/// Fetches `/posts/{slug}/fragment` from the page's origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFragmentFetcher;

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16) -> FetchError {
    FetchError::Status(status)
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl FragmentFetcher for HttpFragmentFetcher {
    async fn fetch(&self, slug: &str) -> Result<String, FetchError> {
        #[cfg(feature = "csr")]
        {
            let url = panels::fetch::fragment_url(slug);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            if !is_success(resp.status()) {
                return Err(status_error(resp.status()));
            }
            resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = slug;
            Err(FetchError::Transport("not available outside the browser".to_owned()))
        }
    }
}

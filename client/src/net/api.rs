//! REST calls to the recommendation service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, `cargo check`): every call fails with a transport
//! error since there is no browser to issue it.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged to the browser console with full detail and returned
//! as `RecommendError`; the page only ever shows the fixed failure message.

#![allow(clippy::unused_async)]

use recommend::service::RecommendService;
use recommend::{RecommendError, RecommendResponse};
use serde_json::Value;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Service base URL, overridable at compile time with `RECOMMENDER_BASE_URL`.
pub fn base_url() -> &'static str {
    option_env!("RECOMMENDER_BASE_URL").unwrap_or(recommend::DEFAULT_BASE_URL)
}

/// [`RecommendService`] backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRecommendService;

#[async_trait::async_trait(?Send)]
impl RecommendService for BrowserRecommendService {
    async fn recommend(&self, query: &str) -> Result<RecommendResponse, RecommendError> {
        #[cfg(feature = "csr")]
        {
            let result = post_recommend(query).await;
            if let Err(error) = &result {
                log::error!("API Error: {error}");
            }
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = query;
            Err(unavailable())
        }
    }

    async fn health(&self) -> Result<Value, RecommendError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&recommend::health_endpoint(base_url()))
                .send()
                .await
                .map_err(transport)?;
            resp.json::<Value>().await.map_err(|e| RecommendError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }
}

#[cfg(feature = "csr")]
async fn post_recommend(query: &str) -> Result<RecommendResponse, RecommendError> {
    let resp = gloo_net::http::Request::post(&recommend::recommend_endpoint(base_url()))
        .json(&recommend::RecommendRequest::new(query))
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let body = resp.text().await.map_err(transport)?;
    if !resp.ok() {
        return Err(RecommendError::Status { status: resp.status(), body });
    }
    recommend::decode_response(&body)
}

#[cfg(feature = "csr")]
fn transport(error: gloo_net::Error) -> RecommendError {
    RecommendError::Transport(error.to_string())
}

/// Error returned when there is no browser to send the request from.
pub fn unavailable() -> RecommendError {
    RecommendError::Transport("not available outside the browser".to_owned())
}

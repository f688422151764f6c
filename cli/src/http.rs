//! `reqwest` transport for the recommendation service.
//!
//! ERROR HANDLING
//! ==============
//! Failure detail (status, body, transport error) is logged here at `warn`
//! and then returned; the coordinator only ever shows the fixed message.

use std::time::Duration;

use recommend::service::RecommendService;
use recommend::{RecommendError, RecommendRequest, RecommendResponse, health_endpoint, recommend_endpoint};
use serde_json::Value;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

pub struct HttpRecommendService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRecommendService {
    /// Build a client for `base_url`. `timeout` of `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the body and reject non-success statuses.
    async fn read_body(response: reqwest::Response) -> Result<String, RecommendError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecommendError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(RecommendError::Status { status: status.as_u16(), body });
        }
        Ok(body)
    }
}

#[async_trait::async_trait(?Send)]
impl RecommendService for HttpRecommendService {
    async fn recommend(&self, query: &str) -> Result<RecommendResponse, RecommendError> {
        let url = recommend_endpoint(&self.base_url);
        tracing::debug!(%url, "sending recommendation request");

        let result = async {
            let response = self
                .http
                .post(&url)
                .json(&RecommendRequest::new(query))
                .send()
                .await
                .map_err(|e| RecommendError::Transport(e.to_string()))?;
            let body = Self::read_body(response).await?;
            recommend::decode_response(&body)
        }
        .await;

        if let Err(error) = &result {
            tracing::warn!(status = ?error.status(), %error, "recommendation request failed");
        }
        result
    }

    async fn health(&self) -> Result<Value, RecommendError> {
        let response = self
            .http
            .get(health_endpoint(&self.base_url))
            .send()
            .await
            .map_err(|e| RecommendError::Transport(e.to_string()))?;
        let body = Self::read_body(response).await?;
        serde_json::from_str(&body).map_err(|e| RecommendError::Decode(e.to_string()))
    }
}

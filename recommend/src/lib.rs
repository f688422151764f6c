//! Shared recommendation contract, request lifecycle, and result rendering.
//!
//! This crate owns the wire representation exchanged with the recommendation
//! service and the state machine used by both `client` and `cli`. It performs
//! no I/O itself; transports plug in through [`service::RecommendService`].

pub mod error;
pub mod render;
pub mod service;
pub mod state;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use error::{FAILURE_MESSAGE, RecommendError};

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

/// Base URL of the hosted recommendation service.
pub const DEFAULT_BASE_URL: &str = "https://assessment-recommendation-engine-0mg0.onrender.com";

/// Body of `POST /recommend`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Free-text hiring context, sent exactly as typed.
    pub query: String,
}

impl RecommendRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }
}

/// Successful body of `POST /recommend`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommended_assessments: Option<Vec<AssessmentRecord>>,
}

impl RecommendResponse {
    /// Records carried by the response; absent or `null` means no matches.
    #[must_use]
    pub fn into_records(self) -> Vec<AssessmentRecord> {
        self.recommended_assessments.unwrap_or_default()
    }
}

/// One catalogued assessment returned by the service.
///
/// Decoding is lenient per field: a value of an unexpected JSON type reads as
/// absent instead of failing the whole response, so one odd record never turns
/// a successful reply into an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Display title.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    /// Product page, opened in a new browsing context. Empty when the service
    /// sent none.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub description: Option<String>,
    /// Length in minutes. Numeric strings are accepted.
    #[serde(default, deserialize_with = "minutes_or_none")]
    pub duration: Option<f64>,
    /// Category tags, in service order. Anything but an array reads as empty.
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub test_type: Vec<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub remote_support: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub adaptive_support: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

fn minutes_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|m| m.is_finite()),
        _ => None,
    })
}

fn tags_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(tag) => Some(tag),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

/// Returns the query when it has non-whitespace content.
///
/// The returned slice is the untrimmed input; trimming only decides whether a
/// submission may proceed.
#[must_use]
pub fn submittable(query: &str) -> Option<&str> {
    if query.trim().is_empty() { None } else { Some(query) }
}

/// Parse a `POST /recommend` body.
///
/// # Errors
///
/// Returns [`RecommendError::Decode`] when the body is not JSON of the response
/// shape. Odd values inside individual records never fail the decode.
pub fn decode_response(body: &str) -> Result<RecommendResponse, RecommendError> {
    serde_json::from_str(body).map_err(|e| RecommendError::Decode(e.to_string()))
}

/// `GET` endpoint probed once at startup.
#[must_use]
pub fn health_endpoint(base_url: &str) -> String {
    format!("{}/health", base_url.trim_end_matches('/'))
}

/// `POST` endpoint that maps a query to assessment records.
#[must_use]
pub fn recommend_endpoint(base_url: &str) -> String {
    format!("{}/recommend", base_url.trim_end_matches('/'))
}

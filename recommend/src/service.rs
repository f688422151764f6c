//! Transport seam and request coordinator.
//!
//! ARCHITECTURE
//! ============
//! `RecommendService` is the only path to the network. Front-ends provide an
//! implementation (`gloo-net` in the browser, `reqwest` on the host) and the
//! [`Coordinator`] drives [`RecommendState`] through begin/settle around it.
//!
//! The trait is `?Send`: everything runs on one event-loop thread and state
//! lives in a `RefCell` that is never borrowed across an await.

use std::cell::RefCell;

use serde_json::Value;

use crate::render::{Screen, render};
use crate::state::{RecommendState, Settlement};
use crate::{RecommendError, RecommendResponse};

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

/// Remote recommendation service.
#[async_trait::async_trait(?Send)]
pub trait RecommendService {
    /// `POST /recommend` with `{"query": query}`.
    async fn recommend(&self, query: &str) -> Result<RecommendResponse, RecommendError>;

    /// `GET /health`; the body is only ever logged.
    async fn health(&self) -> Result<Value, RecommendError>;
}

/// Owns the lifecycle state and issues one request per trigger.
pub struct Coordinator<S> {
    service: S,
    state: RefCell<RecommendState>,
}

impl<S: RecommendService> Coordinator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: RefCell::new(RecommendState::default()),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Input controller setter; the raw edit value passes through unchanged.
    pub fn set_query(&self, raw: impl Into<String>) {
        self.state.borrow_mut().set_query(raw);
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&RecommendState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn screen(&self) -> Screen {
        render(&self.state.borrow())
    }

    /// Submit the current query.
    ///
    /// Returns `None` when the query is blank (no request, no state change).
    /// Otherwise the state is settled exactly once for this submission before
    /// returning, whatever the transport did.
    pub async fn submit(&self) -> Option<Settlement> {
        let ticket = self.state.borrow_mut().begin()?;
        let outcome = self.service.recommend(&ticket.query).await;
        Some(self.state.borrow_mut().settle(&ticket, outcome))
    }

    /// Best-effort startup probe. Never touches state.
    ///
    /// # Errors
    ///
    /// Returns whatever the service reported; callers only log it.
    pub async fn probe_health(&self) -> Result<Value, RecommendError> {
        self.service.health().await
    }
}

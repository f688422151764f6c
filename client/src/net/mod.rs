//! Networking for the recommendation service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only module that issues HTTP requests; pages hand its results
//! to the shared state container.

pub mod api;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of the derived `Screen`; only `search_bar` writes
//! to shared state (the query text).

pub mod empty_state;
pub mod error_banner;
pub mod help_modal;
pub mod recommendation_table;
pub mod search_bar;

//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The page owns request orchestration and delegates rendering details to
//! `components`.

pub mod home;

//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own workflow logic and session state so route handlers
//! can stay focused on request/response translation.

pub mod edit;
pub mod generate;
pub mod session;
pub mod styles;

//! Reusable view pieces shared across pages.

pub mod header;
pub mod route_guard;

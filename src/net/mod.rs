//! Networking for the user REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the client wrapper (base URL, bearer injection, 401/403
//! logout), `api` defines the typed calls, and `types` the wire schema.

pub mod api;
pub mod http;
pub mod types;

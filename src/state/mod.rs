//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One [`Store`] holds two slices (`auth`, `profile`). Views and flows never
//! mutate slices directly; they dispatch typed actions, and the store mirrors
//! the auth token into browser storage as part of the dispatch.

pub mod auth;
pub mod profile;
pub mod store;

pub use store::{Action, AppState, Store};

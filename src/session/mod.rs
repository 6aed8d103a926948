//! Session flows that tie the REST client to the store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `bootstrap` restores a persisted session once at startup, `login` drives
//! the sign-in form, and `profile` handles profile edits and sign-out. Views
//! call into these; none of them touch the DOM.

pub mod bootstrap;
pub mod login;
pub mod profile;

//! Routed views. Kept thin: flow logic lives in `session`.

pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;

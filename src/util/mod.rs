//! Browser glue shared by the network layer and the store.

pub mod token_storage;

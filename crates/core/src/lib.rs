//! Domain layer for the rural producer registry.
//!
//! Holds the producer record types, the normalization and validation
//! pipeline, the record store contract, and the service that ties them
//! together. Nothing in this crate touches the network or the database
//! directly.

pub mod error;
pub mod pagination;
pub mod producer;
pub mod types;

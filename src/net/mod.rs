//! Networking modules for the hosted store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the read operations, `types` defines the row DTOs they decode
//! into. Request shapes come from `storeq` descriptors so the query surface
//! stays schema-checked.

pub mod api;
pub mod types;

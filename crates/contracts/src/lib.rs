//! Shared wire contracts between the storefront frontend and the REST backend.
//!
//! Everything here is plain serde data: aggregates as the API returns them,
//! submission payloads as the API expects them, and the response envelopes
//! both sides agree on. No UI or transport code.

pub mod domain;
pub mod shared;
pub mod system;

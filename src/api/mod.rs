//! Monarch Money API client
//!
//! Only client construction and request building live here; sending
//! requests belongs to the callers of this crate.

pub mod client;

//! Shared Infrastructure
//!
//! Cross-cutting pieces used by every aggregate: error types, id
//! generation, logging setup, and the generic in-memory collection.

pub mod collection;
pub mod error;
pub mod logging;
pub mod tsid;

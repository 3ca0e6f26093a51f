//! User Aggregate
//!
//! Account records holding a single role reference plus status and
//! profile fields.

pub mod entity;

pub use entity::{User, UserUpdate};

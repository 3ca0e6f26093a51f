//! Permission Aggregate
//!
//! Atomic named capabilities, grouped by category. Permissions are
//! structural: they are toggled inactive rather than deleted.

pub mod entity;

pub use entity::{names, Permission, PermissionCategory, PermissionUpdate};

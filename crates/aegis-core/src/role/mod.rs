//! Role Aggregate
//!
//! Named bundles of permission references assignable to users.

pub mod colors;
pub mod entity;

pub use colors::{colors_for, RoleColors};
pub use entity::{Role, RoleUpdate};

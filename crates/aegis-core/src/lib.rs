//! Aegis RBAC Console Core
//!
//! Domain model and in-memory state store for a role-based access
//! control admin console:
//! - Users, Roles and Permissions with name-keyed cross references
//! - A seeded, insertion-ordered store with synchronous CRUD
//! - Pure derived views (roles by permission, category counts,
//!   active-user count, role display colors)
//! - Free-text search over permissions
//!
//! The store models permissions; it does not enforce them. There is no
//! persistence, no network surface, and no concurrent writer: the
//! store is owned by one in-process consumer and passed by reference.
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate (`user`, `role`, `permission`) holds its entity and
//! update types; `store` owns the collections; `views` and `search`
//! are pure read layers; `seed` is the bootstrap dataset.

// Core aggregates
pub mod permission;
pub mod role;
pub mod user;

// State and read layers
pub mod search;
pub mod store;
pub mod views;

// Bootstrap dataset
pub mod seed;

// Shared infrastructure
pub mod shared;

// Re-export common types from shared
pub use shared::error::{RbacError, Result};
pub use shared::logging::init_logging;
pub use shared::tsid::TsidGenerator;

// Re-export main entity types for convenience
pub use permission::{Permission, PermissionCategory, PermissionUpdate};
pub use role::{colors_for, Role, RoleColors, RoleUpdate};
pub use user::{User, UserUpdate};

// Re-export store and seed
pub use seed::SeedData;
pub use store::{RbacStore, Snapshot};

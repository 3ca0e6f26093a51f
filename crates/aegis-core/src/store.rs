//! RBAC Store
//!
//! The single source of truth for the running process: three
//! insertion-ordered collections with synchronous mutation operations.
//! The store is an explicit context object owned by the host and
//! passed by reference to whatever reads or writes it - there is no
//! global, and no secondary index to keep in sync. Derived views
//! (`views`, `search`) recompute from the current collections on
//! every call.
//!
//! Consistency is deliberately relaxed, matching the console's
//! behavior: references are by name, nothing cascades, and duplicate
//! names or dangling references are accepted silently. Mutations
//! targeting an unknown id are no-ops, never errors.

use serde::Serialize;
use tracing::info;

use crate::permission::{Permission, PermissionUpdate};
use crate::role::{Role, RoleUpdate};
use crate::seed::SeedData;
use crate::shared::collection::Collection;
use crate::shared::error::Result;
use crate::user::{User, UserUpdate};

/// Process-wide RBAC state.
#[derive(Debug, Clone, Default)]
pub struct RbacStore {
    users: Collection<User>,
    roles: Collection<Role>,
    permissions: Collection<Permission>,
}

impl RbacStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bootstrap a store from the fixed seed catalogue. Invoked once
    /// by the hosting process before any other operation.
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::load())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self {
            users: Collection::from_items(seed.users),
            roles: Collection::from_items(seed.roles),
            permissions: Collection::from_items(seed.permissions),
        };

        info!(
            users = store.users.len(),
            roles = store.roles.len(),
            permissions = store.permissions.len(),
            "store bootstrapped"
        );

        store
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    /// Current users in insertion order.
    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    /// Append a user, returning its id.
    pub fn add_user(&mut self, user: User) -> String {
        self.users.push(user)
    }

    /// Merge the given fields into the user at `id`. Silent no-op when
    /// the id is unknown.
    pub fn update_user(&mut self, id: &str, update: UserUpdate) -> bool {
        self.users.update(id, |user| update.apply(user))
    }

    /// Remove the user at `id`. Silent no-op when the id is unknown.
    /// No cascade: nothing else changes.
    pub fn remove_user(&mut self, id: &str) -> bool {
        self.users.remove(id)
    }

    // ------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------

    /// Current roles in insertion order.
    pub fn roles(&self) -> &[Role] {
        self.roles.as_slice()
    }

    /// Append a role, returning its id.
    pub fn add_role(&mut self, role: Role) -> String {
        self.roles.push(role)
    }

    /// Merge the given fields into the role at `id`. Silent no-op when
    /// the id is unknown.
    pub fn update_role(&mut self, id: &str, update: RoleUpdate) -> bool {
        self.roles.update(id, |role| update.apply(role))
    }

    /// Remove the role at `id`. Users referencing the role's name keep
    /// that name; the dangling reference is expected state.
    pub fn remove_role(&mut self, id: &str) -> bool {
        self.roles.remove(id)
    }

    // ------------------------------------------------------------------
    // Permissions (restricted subset - never hard-deleted)
    // ------------------------------------------------------------------

    /// Current permissions in insertion order.
    pub fn permissions(&self) -> &[Permission] {
        self.permissions.as_slice()
    }

    /// Append a permission, returning its id.
    pub fn add_permission(&mut self, permission: Permission) -> String {
        self.permissions.push(permission)
    }

    /// Merge the given fields into the permission at `id`. Silent
    /// no-op when the id is unknown.
    pub fn update_permission(&mut self, id: &str, update: PermissionUpdate) -> bool {
        self.permissions.update(id, |permission| update.apply(permission))
    }

    /// Toggle only `is_active`. Silent no-op when the id is unknown.
    pub fn set_permission_active(&mut self, id: &str, is_active: bool) -> bool {
        self.permissions
            .update(id, |permission| permission.is_active = is_active)
    }

    // ------------------------------------------------------------------
    // Snapshot
    // ------------------------------------------------------------------

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users().to_vec(),
            roles: self.roles().to_vec(),
            permissions: self.permissions().to_vec(),
        }
    }
}

/// Point-in-time copy of the three collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionCategory;

    #[test]
    fn test_add_appends_and_returns_id() {
        let mut store = RbacStore::new();
        let user = User::new("Jane Doe", "jane@example.com", "Basic User");
        let expected = user.id.clone();

        let id = store.add_user(user);
        assert_eq!(id, expected);
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn test_mutation_visible_to_next_read() {
        let mut store = RbacStore::seeded();
        let id = store.permissions()[0].id.clone();

        assert!(store.set_permission_active(&id, false));
        assert!(!store.permissions()[0].is_active);

        assert!(store.set_permission_active(&id, true));
        assert!(store.permissions()[0].is_active);
    }

    #[test]
    fn test_unknown_id_mutations_are_noops() {
        let mut store = RbacStore::seeded();
        let before = store.snapshot();

        assert!(!store.update_user("missing", UserUpdate::default()));
        assert!(!store.remove_role("missing"));
        assert!(!store.set_permission_active("missing", false));

        assert_eq!(store.users().len(), before.users.len());
        assert_eq!(store.roles().len(), before.roles.len());
        assert_eq!(store.permissions().len(), before.permissions.len());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut store = RbacStore::new();
        store.add_permission(Permission::new(
            "view_reports",
            "View reporting screens",
            PermissionCategory::General,
        ));

        let json = store.snapshot().to_json().unwrap();
        assert!(json.contains("\"isActive\": true"));
        assert!(json.contains("\"category\": \"general\""));
    }
}

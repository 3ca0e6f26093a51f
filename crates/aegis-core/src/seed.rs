//! Seed Data Provider
//!
//! Produces the fixed bootstrap dataset: 20 permissions across the 5
//! categories, 8 roles, 8 users. Content is deterministic - names,
//! order, references and timestamps never change between invocations
//! (ids are freshly generated per process).
//!
//! The seed satisfies the referential integrity the store itself never
//! enforces: every role permission resolves to a catalogue permission
//! and every user role resolves to a catalogue role. `verify` checks
//! exactly that.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::permission::{names, Permission, PermissionCategory};
use crate::role::Role;
use crate::shared::error::{RbacError, Result};
use crate::user::User;

/// The full initial dataset.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
}

impl SeedData {
    /// Build the fixed catalogue. Called once by the hosting process.
    pub fn load() -> Self {
        let permissions = seed_permissions();
        let roles = seed_roles();
        let users = seed_users();

        info!(
            permissions = permissions.len(),
            roles = roles.len(),
            users = users.len(),
            "seed data loaded"
        );

        Self {
            users,
            roles,
            permissions,
        }
    }

    /// Check seed consistency: unique permission names, and every
    /// name-based reference resolving inside the dataset.
    pub fn verify(&self) -> Result<()> {
        let mut permission_names = HashSet::new();
        for permission in &self.permissions {
            if !permission_names.insert(permission.name.as_str()) {
                return Err(RbacError::validation(format!(
                    "duplicate permission name '{}'",
                    permission.name
                )));
            }
        }

        for role in &self.roles {
            for name in &role.permissions {
                if !permission_names.contains(name.as_str()) {
                    return Err(RbacError::validation(format!(
                        "role '{}' references unknown permission '{}'",
                        role.name, name
                    )));
                }
            }
        }

        let role_names: HashSet<&str> = self.roles.iter().map(|r| r.name.as_str()).collect();
        for user in &self.users {
            if !role_names.contains(user.role.as_str()) {
                return Err(RbacError::validation(format!(
                    "user '{}' references unknown role '{}'",
                    user.email, user.role
                )));
            }
        }

        Ok(())
    }
}

fn seed_permissions() -> Vec<Permission> {
    use PermissionCategory::*;

    vec![
        // Dashboard
        Permission::new(names::VIEW_DASHBOARD, "View main dashboard and analytics", General),
        Permission::new(names::MANAGE_DASHBOARD, "Customize and configure dashboard", General),
        // User management
        Permission::new(names::VIEW_USERS, "View user list and profiles", Users),
        Permission::new(names::CREATE_USERS, "Create new user accounts", Users),
        Permission::new(names::EDIT_USERS, "Edit existing user accounts", Users),
        Permission::new(names::DELETE_USERS, "Delete user accounts", Users),
        // Role management
        Permission::new(names::VIEW_ROLES, "View role configurations", Admin),
        Permission::new(names::CREATE_ROLES, "Create new roles", Admin),
        Permission::new(names::EDIT_ROLES, "Modify existing roles", Admin),
        Permission::new(names::DELETE_ROLES, "Delete roles from system", Admin),
        // Permission management
        Permission::new(names::VIEW_PERMISSIONS, "View permission settings", Admin),
        Permission::new(names::MANAGE_PERMISSIONS, "Modify system permissions", Admin),
        // Security
        Permission::new(names::VIEW_AUDIT_LOGS, "Access system audit logs", Security),
        Permission::new(names::MANAGE_SECURITY, "Configure security settings", Security),
        Permission::new(names::MANAGE_API_KEYS, "Generate and manage API keys", Security),
        // Content
        Permission::new(names::VIEW_CONTENT, "View system content", Content),
        Permission::new(names::CREATE_CONTENT, "Create new content", Content),
        Permission::new(names::EDIT_CONTENT, "Modify existing content", Content),
        Permission::new(names::DELETE_CONTENT, "Delete system content", Content),
        // System settings
        Permission::new(names::MANAGE_SETTINGS, "Configure system settings", Admin),
    ]
}

fn seed_roles() -> Vec<Role> {
    vec![
        Role::new("Super Admin", "Complete system access with all permissions")
            .with_permissions(names::ALL.iter().copied()),
        Role::new("System Admin", "System administration without security management")
            .with_permissions([
                names::VIEW_DASHBOARD,
                names::MANAGE_DASHBOARD,
                names::VIEW_USERS,
                names::CREATE_USERS,
                names::EDIT_USERS,
                names::VIEW_ROLES,
                names::CREATE_ROLES,
                names::EDIT_ROLES,
                names::VIEW_PERMISSIONS,
                names::VIEW_AUDIT_LOGS,
                names::VIEW_CONTENT,
                names::CREATE_CONTENT,
                names::EDIT_CONTENT,
                names::MANAGE_SETTINGS,
            ]),
        Role::new("Security Admin", "Security and audit management").with_permissions([
            names::VIEW_DASHBOARD,
            names::VIEW_USERS,
            names::VIEW_ROLES,
            names::VIEW_PERMISSIONS,
            names::VIEW_AUDIT_LOGS,
            names::MANAGE_SECURITY,
            names::MANAGE_API_KEYS,
        ]),
        Role::new("User Manager", "User account management").with_permissions([
            names::VIEW_DASHBOARD,
            names::VIEW_USERS,
            names::CREATE_USERS,
            names::EDIT_USERS,
            names::VIEW_ROLES,
        ]),
        Role::new("Content Manager", "Content management and creation").with_permissions([
            names::VIEW_DASHBOARD,
            names::VIEW_CONTENT,
            names::CREATE_CONTENT,
            names::EDIT_CONTENT,
            names::DELETE_CONTENT,
        ]),
        Role::new("Content Editor", "Content editing only").with_permissions([
            names::VIEW_DASHBOARD,
            names::VIEW_CONTENT,
            names::EDIT_CONTENT,
        ]),
        Role::new("Auditor", "Read-only access for auditing").with_permissions([
            names::VIEW_DASHBOARD,
            names::VIEW_USERS,
            names::VIEW_ROLES,
            names::VIEW_PERMISSIONS,
            names::VIEW_AUDIT_LOGS,
            names::VIEW_CONTENT,
        ]),
        Role::new("Basic User", "Basic system access")
            .with_permissions([names::VIEW_DASHBOARD, names::VIEW_CONTENT]),
    ]
}

fn seed_users() -> Vec<User> {
    vec![
        User::new("John Smith", "john.smith@vrvsecurity.com", "Super Admin")
            .with_department("IT Administration")
            .with_location("HQ")
            .with_last_login(login_at(2024, 3, 20, 10, 30)),
        User::new("Emily Johnson", "emily.j@vrvsecurity.com", "System Admin")
            .with_department("IT Operations")
            .with_location("HQ")
            .with_last_login(login_at(2024, 3, 20, 9, 15)),
        User::new("Michael Chen", "michael.c@vrvsecurity.com", "Security Admin")
            .with_department("Security")
            .with_location("Remote")
            .with_last_login(login_at(2024, 3, 20, 8, 45)),
        User::new("Sarah Williams", "sarah.w@vrvsecurity.com", "User Manager")
            .with_department("HR")
            .with_location("Branch Office")
            .with_last_login(login_at(2024, 3, 19, 17, 30)),
        User::new("David Brown", "david.b@vrvsecurity.com", "Content Manager")
            .with_department("Marketing")
            .with_location("HQ")
            .with_last_login(login_at(2024, 3, 20, 11, 0)),
        User::new("Lisa Anderson", "lisa.a@vrvsecurity.com", "Content Editor")
            .with_department("Marketing")
            .with_location("Remote")
            .with_last_login(login_at(2024, 3, 20, 10, 0)),
        User::new("Robert Taylor", "robert.t@vrvsecurity.com", "Auditor")
            .with_department("Compliance")
            .with_location("HQ")
            .with_last_login(login_at(2024, 3, 19, 16, 45)),
        User::new("Jennifer Martinez", "jennifer.m@vrvsecurity.com", "Basic User")
            .with_department("Sales")
            .with_location("Branch Office")
            .with_last_login(login_at(2024, 3, 20, 9, 30)),
    ]
}

fn login_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        let seed = SeedData::load();
        assert_eq!(seed.permissions.len(), 20);
        assert_eq!(seed.roles.len(), 8);
        assert_eq!(seed.users.len(), 8);
    }

    #[test]
    fn test_seed_verifies() {
        SeedData::load().verify().unwrap();
    }

    #[test]
    fn test_seed_content_is_stable() {
        let a = SeedData::load();
        let b = SeedData::load();

        let names_a: Vec<&str> = a.permissions.iter().map(|p| p.name.as_str()).collect();
        let names_b: Vec<&str> = b.permissions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names_a, names_b);

        assert_eq!(a.users[0].last_login, b.users[0].last_login);
    }

    #[test]
    fn test_super_admin_grants_everything() {
        let seed = SeedData::load();
        let super_admin = &seed.roles[0];
        assert_eq!(super_admin.name, "Super Admin");
        assert_eq!(super_admin.permissions.len(), seed.permissions.len());
    }

    #[test]
    fn test_verify_catches_dangling_role_reference() {
        let mut seed = SeedData::load();
        seed.users[0].role = "Ghost Role".to_string();
        assert!(seed.verify().is_err());
    }
}

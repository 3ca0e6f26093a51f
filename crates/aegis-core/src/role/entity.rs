//! Role Entity

use serde::{Deserialize, Serialize};

use crate::shared::collection::Entity;
use crate::shared::tsid::TsidGenerator;

/// Role definition.
///
/// `permissions` is an ordered sequence of permission *names*, not
/// ids. The sequence may hold names that no longer exist in the
/// permission collection - references are by lookup, not ownership,
/// and nothing cascades on permission changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// TSID as Crockford Base32 string
    pub id: String,

    /// Display name; uniqueness is expected but not enforced
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Permission names granted by this role, in display order
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TsidGenerator::generate(),
            name: name.into(),
            description: description.into(),
            permissions: Vec::new(),
        }
    }

    pub fn with_permissions(
        mut self,
        permissions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.permissions.extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn grants(&self, permission_name: &str) -> bool {
        self.permissions.iter().any(|p| p == permission_name)
    }
}

impl Entity for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type() -> &'static str {
        "role"
    }
}

/// Partial update for a role. When `permissions` is present it replaces
/// the whole sequence; the id is never changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl RoleUpdate {
    pub fn apply(self, role: &mut Role) {
        if let Some(name) = self.name {
            role.name = name;
        }
        if let Some(description) = self.description {
            role.description = description;
        }
        if let Some(permissions) = self.permissions {
            role.permissions = permissions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::names;

    #[test]
    fn test_permissions_keep_declared_order() {
        let role = Role::new("User Manager", "User account management")
            .with_permissions([names::VIEW_DASHBOARD, names::VIEW_USERS, names::EDIT_USERS]);

        assert_eq!(
            role.permissions,
            vec![names::VIEW_DASHBOARD, names::VIEW_USERS, names::EDIT_USERS]
        );
        assert!(role.grants(names::VIEW_USERS));
        assert!(!role.grants(names::DELETE_USERS));
    }

    #[test]
    fn test_update_replaces_permission_sequence() {
        let mut role = Role::new("Content Editor", "Content editing only")
            .with_permissions([names::VIEW_CONTENT]);
        let id = role.id.clone();

        RoleUpdate {
            permissions: Some(vec![
                names::VIEW_CONTENT.to_string(),
                names::EDIT_CONTENT.to_string(),
            ]),
            ..Default::default()
        }
        .apply(&mut role);

        assert_eq!(role.id, id);
        assert_eq!(role.permissions.len(), 2);
    }
}

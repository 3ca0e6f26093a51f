//! Permission Entity

use serde::{Deserialize, Serialize};

use crate::shared::collection::Entity;
use crate::shared::tsid::TsidGenerator;

/// Fixed category set used for grouping permissions in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionCategory {
    General,
    Users,
    Content,
    Security,
    Admin,
}

impl PermissionCategory {
    /// All categories, in display order.
    pub const ALL: [PermissionCategory; 5] = [
        PermissionCategory::General,
        PermissionCategory::Users,
        PermissionCategory::Content,
        PermissionCategory::Security,
        PermissionCategory::Admin,
    ];

    /// Stable identifier, matches the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            PermissionCategory::General => "general",
            PermissionCategory::Users => "users",
            PermissionCategory::Content => "content",
            PermissionCategory::Security => "security",
            PermissionCategory::Admin => "admin",
        }
    }

    /// Human-readable label for summaries and dropdowns.
    pub fn label(&self) -> &'static str {
        match self {
            PermissionCategory::General => "General",
            PermissionCategory::Users => "Users",
            PermissionCategory::Content => "Content",
            PermissionCategory::Security => "Security",
            PermissionCategory::Admin => "Administration",
        }
    }
}

impl std::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Permission definition.
///
/// `name` is the slug referenced by `Role.permissions` - roles point at
/// permissions by name, never by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// TSID as Crockford Base32 string
    pub id: String,

    /// Unique slug, e.g. "view_users"
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Category for grouping in the UI
    pub category: PermissionCategory,

    /// Inactive permissions stay in the system, flagged for display
    pub is_active: bool,
}

impl Permission {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: PermissionCategory,
    ) -> Self {
        Self {
            id: TsidGenerator::generate(),
            name: name.into(),
            description: description.into(),
            category,
            is_active: true,
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Entity for Permission {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type() -> &'static str {
        "permission"
    }
}

/// Partial update for a permission. Absent fields are left untouched;
/// the id is never changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PermissionCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl PermissionUpdate {
    pub fn apply(self, permission: &mut Permission) {
        if let Some(name) = self.name {
            permission.name = name;
        }
        if let Some(description) = self.description {
            permission.description = description;
        }
        if let Some(category) = self.category {
            permission.category = category;
        }
        if let Some(is_active) = self.is_active {
            permission.is_active = is_active;
        }
    }
}

/// Permission name registry - the closed catalogue the console ships
/// with. Roles reference these slugs in their permission sequences.
pub mod names {
    pub const VIEW_DASHBOARD: &str = "view_dashboard";
    pub const MANAGE_DASHBOARD: &str = "manage_dashboard";

    pub const VIEW_USERS: &str = "view_users";
    pub const CREATE_USERS: &str = "create_users";
    pub const EDIT_USERS: &str = "edit_users";
    pub const DELETE_USERS: &str = "delete_users";

    pub const VIEW_ROLES: &str = "view_roles";
    pub const CREATE_ROLES: &str = "create_roles";
    pub const EDIT_ROLES: &str = "edit_roles";
    pub const DELETE_ROLES: &str = "delete_roles";

    pub const VIEW_PERMISSIONS: &str = "view_permissions";
    pub const MANAGE_PERMISSIONS: &str = "manage_permissions";

    pub const VIEW_AUDIT_LOGS: &str = "view_audit_logs";
    pub const MANAGE_SECURITY: &str = "manage_security";
    pub const MANAGE_API_KEYS: &str = "manage_api_keys";

    pub const VIEW_CONTENT: &str = "view_content";
    pub const CREATE_CONTENT: &str = "create_content";
    pub const EDIT_CONTENT: &str = "edit_content";
    pub const DELETE_CONTENT: &str = "delete_content";

    pub const MANAGE_SETTINGS: &str = "manage_settings";

    /// All catalogue permission names
    pub const ALL: &[&str] = &[
        VIEW_DASHBOARD,
        MANAGE_DASHBOARD,
        VIEW_USERS,
        CREATE_USERS,
        EDIT_USERS,
        DELETE_USERS,
        VIEW_ROLES,
        CREATE_ROLES,
        EDIT_ROLES,
        DELETE_ROLES,
        VIEW_PERMISSIONS,
        MANAGE_PERMISSIONS,
        VIEW_AUDIT_LOGS,
        MANAGE_SECURITY,
        MANAGE_API_KEYS,
        VIEW_CONTENT,
        CREATE_CONTENT,
        EDIT_CONTENT,
        DELETE_CONTENT,
        MANAGE_SETTINGS,
    ];
}

//! User Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::collection::Entity;
use crate::shared::tsid::TsidGenerator;

/// User account.
///
/// `role` is a role *name*, not an id. Removing or renaming a role
/// leaves users pointing at the old name - a dangling reference is
/// expected state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// TSID as Crockford Base32 string
    pub id: String,

    pub name: String,

    pub email: String,

    /// Role name reference
    pub role: String,

    pub is_active: bool,

    pub department: String,

    pub location: String,

    /// Set once at creation, display-only afterwards
    pub last_login: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: TsidGenerator::generate(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            is_active: true,
            department: String::new(),
            location: String::new(),
            last_login: Utc::now(),
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_last_login(mut self, last_login: DateTime<Utc>) -> Self {
        self.last_login = last_login;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type() -> &'static str {
        "user"
    }
}

/// Partial update for a user. `last_login` is deliberately absent: it
/// is set at creation and never recomputed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
        if let Some(department) = self.department {
            user.department = department;
        }
        if let Some(location) = self.location {
            user.location = location;
        }
    }
}

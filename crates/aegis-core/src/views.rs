//! Derived Views
//!
//! Pure, stateless projections over a snapshot of the collections.
//! Nothing here mutates or memoizes; every call recomputes from the
//! slices it is given, so results can never go stale behind a store
//! mutation.
//!
//! Category counts take whatever slice the caller passes. Pages that
//! show counts next to a search box pass the *filtered* view, so the
//! numbers always agree with the list underneath them.

use crate::permission::{Permission, PermissionCategory};
use crate::role::Role;
use crate::user::User;

/// Names of all roles whose permission sequence contains
/// `permission_name`, in collection order.
pub fn roles_referencing<'a>(roles: &'a [Role], permission_name: &str) -> Vec<&'a str> {
    roles
        .iter()
        .filter(|role| role.grants(permission_name))
        .map(|role| role.name.as_str())
        .collect()
}

/// Number of permissions in `category` within the given slice.
pub fn permissions_in_category(
    permissions: &[Permission],
    category: PermissionCategory,
) -> usize {
    permissions
        .iter()
        .filter(|permission| permission.category == category)
        .count()
}

/// Per-category counts over the given slice, in category display order.
pub fn category_counts(permissions: &[Permission]) -> Vec<(PermissionCategory, usize)> {
    PermissionCategory::ALL
        .iter()
        .map(|&category| (category, permissions_in_category(permissions, category)))
        .collect()
}

/// Number of users currently flagged active.
pub fn active_user_count(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_active).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::names;
    use crate::seed::SeedData;

    #[test]
    fn test_roles_referencing_view_dashboard() {
        let seed = SeedData::load();
        let referencing = roles_referencing(&seed.roles, names::VIEW_DASHBOARD);

        // Every seeded role grants the dashboard.
        assert_eq!(referencing.len(), seed.roles.len());
        assert_eq!(referencing[0], "Super Admin");
    }

    #[test]
    fn test_roles_referencing_respects_collection_order() {
        let seed = SeedData::load();
        let referencing = roles_referencing(&seed.roles, names::MANAGE_API_KEYS);
        assert_eq!(referencing, vec!["Super Admin", "Security Admin"]);
    }

    #[test]
    fn test_roles_referencing_unknown_permission_is_empty() {
        let seed = SeedData::load();
        assert!(roles_referencing(&seed.roles, "no_such_permission").is_empty());
    }

    #[test]
    fn test_category_counts_cover_whole_slice() {
        let seed = SeedData::load();
        let counts = category_counts(&seed.permissions);

        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, seed.permissions.len());
        assert_eq!(counts[0].0, PermissionCategory::General);
    }

    #[test]
    fn test_active_user_count_tracks_flag() {
        let mut seed = SeedData::load();
        assert_eq!(active_user_count(&seed.users), seed.users.len());

        seed.users[0].is_active = false;
        seed.users[3].is_active = false;
        assert_eq!(active_user_count(&seed.users), seed.users.len() - 2);
    }
}

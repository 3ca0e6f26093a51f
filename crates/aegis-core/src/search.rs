//! Search and Category Filtering
//!
//! Free-text narrowing for the permissions page. Recomputed on every
//! keystroke: both functions are side-effect free and keep the
//! original slice order, so repeated calls accumulate nothing.

use crate::permission::{Permission, PermissionCategory};

/// Permissions whose name or description contains `query`
/// case-insensitively. An empty query returns the full slice.
pub fn filter_permissions<'a>(
    permissions: &'a [Permission],
    query: &str,
) -> Vec<&'a Permission> {
    if query.is_empty() {
        return permissions.iter().collect();
    }

    let needle = query.to_lowercase();
    permissions
        .iter()
        .filter(|permission| {
            permission.name.to_lowercase().contains(&needle)
                || permission.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Permissions belonging to `category`, in original order. This is the
/// membership behind the per-category counts shown beside the list.
pub fn permissions_in_category_view<'a>(
    permissions: &'a [Permission],
    category: PermissionCategory,
) -> Vec<&'a Permission> {
    permissions
        .iter()
        .filter(|permission| permission.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let seed = SeedData::load();
        let filtered = filter_permissions(&seed.permissions, "");

        assert_eq!(filtered.len(), seed.permissions.len());
        for (filtered, original) in filtered.iter().zip(&seed.permissions) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let seed = SeedData::load();
        let filtered = filter_permissions(&seed.permissions, "aUdIt");

        assert!(!filtered.is_empty());
        for permission in &filtered {
            let haystack = format!(
                "{} {}",
                permission.name.to_lowercase(),
                permission.description.to_lowercase()
            );
            assert!(haystack.contains("audit"));
        }
    }

    #[test]
    fn test_query_matches_description_too() {
        let seed = SeedData::load();
        // "analytics" only occurs in view_dashboard's description.
        let filtered = filter_permissions(&seed.permissions, "analytics");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "view_dashboard");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let seed = SeedData::load();
        assert!(filter_permissions(&seed.permissions, "zzz_nothing").is_empty());
    }

    #[test]
    fn test_category_view_matches_category() {
        let seed = SeedData::load();
        let security =
            permissions_in_category_view(&seed.permissions, PermissionCategory::Security);

        assert_eq!(security.len(), 3);
        for permission in security {
            assert_eq!(permission.category, PermissionCategory::Security);
        }
    }
}

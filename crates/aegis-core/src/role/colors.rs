//! Role Display Colors
//!
//! Fixed visual classification for role badges. Lookup is total: any
//! name outside the known set gets the gray default, so pages can
//! render tags for dangling or operator-created role names without a
//! fallback path.

use serde::Serialize;

/// Tailwind class triple for a role tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

const DEFAULT: RoleColors = RoleColors {
    bg: "bg-gray-100 dark:bg-gray-700",
    text: "text-gray-800 dark:text-gray-200",
    border: "border-gray-200 dark:border-gray-600",
};

/// Colors for a role name. Never fails; unknown names get the default.
pub fn colors_for(role_name: &str) -> RoleColors {
    match role_name {
        "Super Admin" => RoleColors {
            bg: "bg-purple-100 dark:bg-purple-900",
            text: "text-purple-800 dark:text-purple-200",
            border: "border-purple-200 dark:border-purple-800",
        },
        "System Admin" => RoleColors {
            bg: "bg-red-100 dark:bg-red-900",
            text: "text-red-800 dark:text-red-200",
            border: "border-red-200 dark:border-red-800",
        },
        "Security Admin" => RoleColors {
            bg: "bg-orange-100 dark:bg-orange-900",
            text: "text-orange-800 dark:text-orange-200",
            border: "border-orange-200 dark:border-orange-800",
        },
        "User Manager" => RoleColors {
            bg: "bg-blue-100 dark:bg-blue-900",
            text: "text-blue-800 dark:text-blue-200",
            border: "border-blue-200 dark:border-blue-800",
        },
        "Content Manager" => RoleColors {
            bg: "bg-green-100 dark:bg-green-900",
            text: "text-green-800 dark:text-green-200",
            border: "border-green-200 dark:border-green-800",
        },
        "Content Editor" => RoleColors {
            bg: "bg-emerald-100 dark:bg-emerald-900",
            text: "text-emerald-800 dark:text-emerald-200",
            border: "border-emerald-200 dark:border-emerald-800",
        },
        "Auditor" => RoleColors {
            bg: "bg-cyan-100 dark:bg-cyan-900",
            text: "text-cyan-800 dark:text-cyan-200",
            border: "border-cyan-200 dark:border-cyan-800",
        },
        "Basic User" => DEFAULT,
        _ => DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_has_palette() {
        let colors = colors_for("Auditor");
        assert_eq!(colors.bg, "bg-cyan-100 dark:bg-cyan-900");
    }

    #[test]
    fn test_unknown_role_gets_default() {
        assert_eq!(colors_for("No Such Role"), DEFAULT);
        assert_eq!(colors_for(""), DEFAULT);
    }

    #[test]
    fn test_basic_user_matches_default() {
        assert_eq!(colors_for("Basic User"), DEFAULT);
    }
}

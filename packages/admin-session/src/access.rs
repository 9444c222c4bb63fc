//! Role-based navigation.
//!
//! The sidebar shows a fixed list of entries; which of them an identity sees
//! is a pure function of its role and access-page list:
//!
//! - no identity: nothing
//! - top rank: everything
//! - any other role: `Always` entries plus `Page` entries named in the
//!   identity's `access_pages`
//!
//! Order is always that of the static list.

use crate::identity::Identity;

/// Access-page keys assignable to restricted roles.
pub mod pages {
    pub const BLOGS: &str = "blogs";
    pub const JOBS: &str = "jobs";
    pub const APPLICANTS: &str = "applicants";

    /// Keys offered when creating a subadmin, with their display labels.
    pub const ASSIGNABLE: &[(&str, &str)] = &[
        (BLOGS, "Blogs Management"),
        (JOBS, "Jobs Management"),
        (APPLICANTS, "Applicants Management"),
    ];
}

/// What an identity needs to see a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Visible to every authenticated identity
    Always,
    /// Visible to the top rank only
    TopRankOnly,
    /// Visible when the access-page key is granted
    Page(&'static str),
}

/// Icon names rendered by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    FileText,
    Briefcase,
    Settings,
}

/// One sidebar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub route: &'static str,
    pub icon: NavIcon,
    pub label: &'static str,
    pub requirement: Requirement,
}

/// The console's navigation, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        route: "/",
        icon: NavIcon::Dashboard,
        label: "Dashboard",
        requirement: Requirement::Always,
    },
    NavEntry {
        route: "/subadmin",
        icon: NavIcon::Users,
        label: "Manage Subadmin",
        requirement: Requirement::TopRankOnly,
    },
    NavEntry {
        route: "/blogs",
        icon: NavIcon::FileText,
        label: "Blog Manager",
        requirement: Requirement::Page(pages::BLOGS),
    },
    NavEntry {
        route: "/jobs",
        icon: NavIcon::Briefcase,
        label: "Job Posts",
        requirement: Requirement::Page(pages::JOBS),
    },
    NavEntry {
        route: "/applicants",
        icon: NavIcon::Users,
        label: "Applicants",
        requirement: Requirement::Page(pages::APPLICANTS),
    },
    NavEntry {
        route: "/settings",
        icon: NavIcon::Settings,
        label: "Settings",
        requirement: Requirement::Always,
    },
];

/// Whether `identity` satisfies `requirement`.
pub fn can_view(identity: Option<&Identity>, requirement: Requirement) -> bool {
    let Some(identity) = identity else {
        return false;
    };

    if identity.role.is_top_rank() {
        return true;
    }

    match requirement {
        Requirement::Always => true,
        Requirement::TopRankOnly => false,
        Requirement::Page(key) => identity.has_page(key),
    }
}

/// The entries `identity` may see, preserving the order of `entries`.
pub fn visible_entries<'a>(
    identity: Option<&Identity>,
    entries: &'a [NavEntry],
) -> Vec<&'a NavEntry> {
    entries
        .iter()
        .filter(|entry| can_view(identity, entry.requirement))
        .collect()
}

/// The navigation entry for a route path, if any.
pub fn entry_for_route(route: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Role, UserId};

    fn identity(role: Role, pages: &[&str]) -> Identity {
        Identity {
            id: UserId::Text("u1".to_string()),
            email: "someone@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            access_pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn labels(entries: Vec<&NavEntry>) -> Vec<&'static str> {
        entries.into_iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_top_rank_sees_everything_in_order() {
        for pages in [&[][..], &["blogs"][..], &["nonsense"][..]] {
            let admin = identity(Role::Admin, pages);
            let visible = visible_entries(Some(&admin), NAV_ENTRIES);
            assert_eq!(visible, NAV_ENTRIES.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_restricted_role_sees_granted_pages_and_always_entries() {
        let user = identity(Role::Subadmin, &["blogs", "jobs"]);
        let visible = visible_entries(Some(&user), NAV_ENTRIES);

        assert_eq!(
            labels(visible),
            vec!["Dashboard", "Blog Manager", "Job Posts", "Settings"]
        );
    }

    #[test]
    fn test_no_identity_sees_nothing() {
        assert!(visible_entries(None, NAV_ENTRIES).is_empty());
        assert!(!can_view(None, Requirement::Always));
    }

    #[test]
    fn test_single_page_subadmin_scenario() {
        let user = identity(Role::Subadmin, &["blogs"]);
        let visible = visible_entries(Some(&user), NAV_ENTRIES);

        assert_eq!(labels(visible), vec!["Dashboard", "Blog Manager", "Settings"]);
    }

    #[test]
    fn test_unrecognized_role_falls_back_to_access_list() {
        let user = identity(Role::Unrecognized("auditor".to_string()), &["applicants"]);
        let visible = visible_entries(Some(&user), NAV_ENTRIES);

        assert_eq!(labels(visible), vec!["Dashboard", "Applicants", "Settings"]);
    }

    #[test]
    fn test_top_rank_only_entry_hidden_even_if_listed() {
        let user = identity(Role::Subadmin, &["admin", "subadmin"]);
        assert!(!can_view(Some(&user), Requirement::TopRankOnly));
    }

    #[test]
    fn test_unknown_keys_contribute_nothing() {
        let user = identity(Role::Subadmin, &["reports", "billing"]);
        let visible = visible_entries(Some(&user), NAV_ENTRIES);

        assert_eq!(labels(visible), vec!["Dashboard", "Settings"]);
    }

    #[test]
    fn test_custom_entry_list_keeps_relative_order() {
        let entries = [
            NavEntry {
                route: "/jobs",
                icon: NavIcon::Briefcase,
                label: "Jobs",
                requirement: Requirement::Page("jobs"),
            },
            NavEntry {
                route: "/",
                icon: NavIcon::Dashboard,
                label: "Home",
                requirement: Requirement::Always,
            },
            NavEntry {
                route: "/blogs",
                icon: NavIcon::FileText,
                label: "Blogs",
                requirement: Requirement::Page("blogs"),
            },
        ];
        let user = identity(Role::Subadmin, &["blogs", "jobs"]);

        assert_eq!(
            labels(visible_entries(Some(&user), &entries)),
            vec!["Jobs", "Home", "Blogs"]
        );
    }

    #[test]
    fn test_entry_for_route() {
        assert_eq!(entry_for_route("/jobs").map(|e| e.label), Some("Job Posts"));
        assert!(entry_for_route("/nowhere").is_none());
    }
}

//! Route definitions for the application

use admin_session::access::{self, NavEntry};
use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::{
    Applicants, BlogManager, Dashboard, Jobs, Login, NotFound, Settings, Subadmins,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    // Console routes, guarded by the layout
    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},

        #[route("/subadmin")]
        Subadmins {},

        #[route("/blogs")]
        BlogManager {},

        #[route("/jobs")]
        Jobs {},

        #[route("/applicants")]
        Applicants {},

        #[route("/settings")]
        Settings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Navigation entry guarding this route, if it has one
    pub fn nav_entry(&self) -> Option<&'static NavEntry> {
        access::entry_for_route(&self.to_string())
    }

    /// Route for a navigation entry's path
    pub fn for_entry(entry: &NavEntry) -> Option<Route> {
        entry.route.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_session::access::{Requirement, NAV_ENTRIES};

    #[test]
    fn test_every_nav_entry_has_a_route() {
        for entry in NAV_ENTRIES {
            let route = Route::for_entry(entry)
                .unwrap_or_else(|| panic!("no route for {}", entry.route));
            assert_eq!(route.nav_entry(), Some(entry));
        }
    }

    #[test]
    fn test_route_requirements() {
        let requirement = |route: Route| route.nav_entry().map(|e| e.requirement);

        assert_eq!(requirement(Route::Dashboard {}), Some(Requirement::Always));
        assert_eq!(requirement(Route::Subadmins {}), Some(Requirement::TopRankOnly));
        assert_eq!(requirement(Route::Jobs {}), Some(Requirement::Page("jobs")));
        assert_eq!(requirement(Route::Login {}), None);
    }
}

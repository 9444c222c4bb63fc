//! Dashboard page

use admin_session::access::{self, Requirement};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing page: a card for every section the user can open
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let identity = auth.identity();
    let greeting = identity
        .as_ref()
        .map(|user| user.display_name())
        .unwrap_or_default();

    let sections: Vec<(Route, &'static str, &'static str)> =
        access::visible_entries(identity.as_ref(), access::NAV_ENTRIES)
            .into_iter()
            .filter(|entry| entry.requirement != Requirement::Always)
            .filter_map(|entry| {
                Route::for_entry(entry).map(|route| {
                    let blurb = section_blurb(&route);
                    (route, entry.label, blurb)
                })
            })
            .collect();

    rsx! {
        div {
            class: "space-y-6",

            div {
                h1 { class: "text-3xl font-bold text-gray-900", "Dashboard" }
                p { class: "text-gray-500", "Welcome back, {greeting}!" }
            }

            if sections.is_empty() {
                div {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                    p {
                        class: "text-gray-500",
                        "No management sections are assigned to your account yet."
                    }
                }
            } else {
                div {
                    class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                    for (route, label, blurb) in sections {
                        Link {
                            key: "{label}",
                            to: route,
                            class: "block bg-white rounded-lg shadow-sm border border-gray-200 p-4 hover:shadow-md transition-shadow",
                            h3 { class: "text-sm font-medium text-gray-900 mb-1", "{label}" }
                            p { class: "text-xs text-gray-500", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}

fn section_blurb(route: &Route) -> &'static str {
    match route {
        Route::Subadmins {} => "Create accounts and assign page access",
        Route::BlogManager {} => "Write, edit and publish blog posts",
        Route::Jobs {} => "Open, update and close job postings",
        Route::Applicants {} => "Review candidates and track their status",
        _ => "",
    }
}

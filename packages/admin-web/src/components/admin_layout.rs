//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::{Navbar, Redirect, Sidebar};
use crate::auth::use_auth;
use crate::routes::Route;

/// Below this viewport width the sidebar starts collapsed
#[cfg(feature = "web")]
const COLLAPSE_BELOW_PX: f64 = 640.0;

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let mut collapsed = use_signal(starts_collapsed);

    // Redirect if not authenticated
    if !auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Login {} }
        };
    }

    // Page-level access: a restricted role typing a URL it can't see
    let allowed = route
        .nav_entry()
        .map(|entry| auth.can_view(entry.requirement))
        .unwrap_or(true);

    rsx! {
        div {
            class: "flex h-screen w-full overflow-hidden",

            Sidebar { collapsed: collapsed() }

            div {
                class: "flex flex-1 flex-col overflow-hidden",

                Navbar {
                    on_toggle: move |_| collapsed.set(!collapsed())
                }

                // Main content
                main {
                    class: "flex-1 overflow-y-auto p-6 bg-[#F4F7FA]",
                    if allowed {
                        Outlet::<Route> {}
                    } else {
                        AccessDenied {}
                    }
                }
            }
        }
    }
}

#[component]
fn AccessDenied() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
            h2 { class: "text-lg font-semibold text-gray-900 mb-2", "Access denied" }
            p {
                class: "text-gray-500",
                "Your account does not have access to this page. Ask an administrator to grant it."
            }
            Link {
                to: Route::Dashboard {},
                class: "inline-block mt-4 text-sm text-sky-700 hover:underline",
                "Back to dashboard"
            }
        }
    }
}

#[cfg(feature = "web")]
fn starts_collapsed() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width < COLLAPSE_BELOW_PX)
        .unwrap_or(false)
}

#[cfg(not(feature = "web"))]
fn starts_collapsed() -> bool {
    false
}

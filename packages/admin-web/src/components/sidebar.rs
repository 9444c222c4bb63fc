//! Sidebar navigation component

use admin_session::access::{self, NavIcon};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Sidebar with the entries the current identity may see, plus logout
#[component]
pub fn Sidebar(collapsed: bool) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut confirming = use_signal(|| false);

    let identity = auth.identity();
    let links: Vec<(Route, NavIcon, &'static str)> =
        access::visible_entries(identity.as_ref(), access::NAV_ENTRIES)
            .into_iter()
            .filter_map(|entry| Route::for_entry(entry).map(|route| (route, entry.icon, entry.label)))
            .collect();

    let handle_confirm_logout = move |_| {
        confirming.set(false);
        auth.logout();
        navigator.push(Route::Login {});
    };

    rsx! {
        aside {
            class: if collapsed {
                "sidebar flex flex-col w-16 transition-all duration-300"
            } else {
                "sidebar flex flex-col w-64 transition-all duration-300"
            },

            // Brand
            div {
                class: "flex h-16 items-center justify-center border-b border-white/10 px-4",
                span {
                    class: "text-white font-bold text-lg",
                    if collapsed { "M" } else { "Mehdi Admin" }
                }
            }

            // Nav links
            nav {
                class: "flex-1 space-y-1 p-3",
                for (route, icon, label) in links {
                    NavLink { key: "{label}", to: route, icon: icon, label: label, collapsed: collapsed }
                }
            }

            div {
                class: "p-3",
                button {
                    class: "flex w-full items-center gap-3 rounded-lg px-3 py-2.5 text-white hover:bg-white/10",
                    onclick: move |_| confirming.set(true),
                    span { class: "w-5 text-center", "\u{21AA}" }
                    if !collapsed {
                        span { class: "text-sm font-medium", "Logout" }
                    }
                }
            }

            // Confirmation dialog
            if confirming() {
                div {
                    class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
                    div {
                        class: "bg-white rounded-lg p-6 max-w-sm mx-4",
                        h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Confirm Logout" }
                        p {
                            class: "text-gray-600 mb-6",
                            "Are you sure you want to log out? You will need to sign in again to access the dashboard."
                        }
                        div {
                            class: "flex gap-3 justify-end",
                            button {
                                class: "px-4 py-2 text-gray-600 border border-gray-300 rounded-lg hover:bg-gray-50",
                                onclick: move |_| confirming.set(false),
                                "Cancel"
                            }
                            button {
                                class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
                                onclick: handle_confirm_logout,
                                "Logout"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    icon: NavIcon,
    label: &'static str,
    collapsed: bool,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;
    let glyph = icon_glyph(props.icon);

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "sidebar-link-active flex items-center gap-3 rounded-lg px-3 py-2.5"
            } else {
                "flex items-center gap-3 rounded-lg px-3 py-2.5 text-white hover:bg-white/10"
            },
            span { class: "w-5 text-center", "{glyph}" }
            if !props.collapsed {
                span { class: "text-sm font-medium", "{props.label}" }
            }
        }
    }
}

fn icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Dashboard => "\u{1F4CA}", // 📊
        NavIcon::Users => "\u{1F465}",     // 👥
        NavIcon::FileText => "\u{1F4C4}",  // 📄
        NavIcon::Briefcase => "\u{1F4BC}", // 💼
        NavIcon::Settings => "\u{2699}",   // ⚙
    }
}

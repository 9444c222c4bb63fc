//! Settings page

use admin_session::access::pages;
use dioxus::prelude::*;

use crate::auth::use_auth;

/// Read-only profile of the signed-in user
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let Some(identity) = auth.identity() else {
        return rsx! {};
    };

    let name = identity.display_name();
    let role = identity.role.label().to_string();
    let access = if identity.role.is_top_rank() {
        "All pages".to_string()
    } else {
        page_labels(&identity.access_pages)
    };

    rsx! {
        div {
            class: "space-y-6 max-w-2xl",

            div {
                h1 { class: "text-2xl font-bold text-gray-900", "Settings" }
                p { class: "text-gray-500 text-sm", "Your account details." }
            }

            dl {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                ProfileRow { label: "Name", value: name }
                ProfileRow { label: "Email", value: identity.email.clone() }
                ProfileRow { label: "Role", value: role }
                ProfileRow { label: "Page access", value: access }
            }
        }
    }
}

#[component]
fn ProfileRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "px-6 py-4 grid grid-cols-3 gap-4",
            dt { class: "text-sm font-medium text-gray-500", "{label}" }
            dd { class: "col-span-2 text-sm text-gray-900", "{value}" }
        }
    }
}

/// Human labels for access keys; unknown keys are listed verbatim.
fn page_labels(keys: &[String]) -> String {
    if keys.is_empty() {
        return "None".to_string();
    }
    keys.iter()
        .map(|key| {
            pages::ASSIGNABLE
                .iter()
                .find(|(k, _)| *k == key.as_str())
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| key.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

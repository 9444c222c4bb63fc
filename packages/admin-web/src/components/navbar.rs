//! Top bar component

use dioxus::prelude::*;

use crate::auth::use_auth;

/// Top bar with the sidebar toggle and the signed-in user
#[component]
pub fn Navbar(on_toggle: EventHandler<()>) -> Element {
    let auth = use_auth();
    let user = auth
        .identity()
        .map(|user| (user.display_name(), user.email.clone(), user.role.label().to_string()));

    rsx! {
        header {
            class: "flex h-16 items-center justify-between border-b border-gray-200 bg-white px-6",

            button {
                class: "text-gray-500 hover:text-gray-900 p-2 rounded hover:bg-gray-100",
                title: "Toggle sidebar",
                onclick: move |_| on_toggle.call(()),
                "\u{2630}"
            }

            if let Some((name, email, role)) = user {
                div {
                    class: "flex flex-col items-end",
                    span { class: "text-sm font-medium text-gray-900", "{name}" }
                    span { class: "text-xs text-gray-500", "{email} \u{00B7} {role}" }
                }
            }
        }
    }
}

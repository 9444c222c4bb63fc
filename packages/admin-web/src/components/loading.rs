//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner(#[props(into)] message: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-sky-800 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-purple-600 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
                div { class: "w-3 h-3 bg-pink-500 rounded-full animate-bounce", style: "animation-delay: 0.4s" }
            }
            if let Some(message) = message {
                p { class: "mt-4 text-sm text-gray-500 animate-pulse", "{message}" }
            }
        }
    }
}

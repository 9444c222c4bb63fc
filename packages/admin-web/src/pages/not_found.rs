//! Fallback for unknown URLs

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "min-h-screen bg-[#F4F7FA] flex items-center justify-center px-4",
            div {
                class: "text-center",
                h1 { class: "text-6xl font-bold text-gray-900 mb-2", "404" }
                p { class: "text-gray-600 mb-1", "Page not found" }
                p { class: "text-sm text-gray-400 mb-6 font-mono", "{path}" }
                Link {
                    to: Route::Dashboard {},
                    class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900",
                    "Go to dashboard"
                }
            }
        }
    }
}

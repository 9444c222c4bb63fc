//! Read-only HTML preview dialog

use dioxus::prelude::*;

/// Modal rendering trusted backend HTML
#[component]
pub fn PreviewDialog(html: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg max-w-4xl w-full mx-4",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "flex justify-end border-b border-gray-200 px-4 py-2",
                    button {
                        class: "text-gray-500 hover:text-gray-900",
                        title: "Close preview",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div {
                    class: "prose max-w-none h-[70vh] overflow-y-auto p-6",
                    dangerous_inner_html: "{html}"
                }
            }
        }
    }
}

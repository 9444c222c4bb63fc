//! Toast notifications

use dioxus::prelude::*;

use crate::state::{use_toast, Toast};

/// Fixed stack of the current toasts
#[component]
pub fn ToastViewport() -> Element {
    let toasts = use_toast();
    let items = toasts.queue.read().toasts().to_vec();

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-80",
            for toast in items {
                ToastItem { key: "{toast.id}", toast: toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toasts = use_toast();
    let id = toast.id;
    let class = toast.kind.class();
    let icon = toast.kind.icon();

    rsx! {
        div {
            class: "flex items-start gap-2 border rounded-lg shadow-sm px-4 py-3 text-sm {class}",
            span { "{icon}" }
            p { class: "flex-1", "{toast.message}" }
            button {
                class: "text-xs opacity-60 hover:opacity-100",
                onclick: move |_| toasts.dismiss(id),
                "\u{2715}"
            }
        }
    }
}

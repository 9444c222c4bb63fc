//! Subadmin management page

use admin_api::{NewSubadmin, RecordId, Subadmin};
use admin_session::access::pages;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::format::display_date;
use crate::state::use_toast;

/// List, create and delete subadmin accounts
#[component]
pub fn Subadmins() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut form = use_signal(NewSubadmin::default);
    let mut is_form_open = use_signal(|| false);
    let mut creating = use_signal(|| false);
    let mut deleting = use_signal(|| None::<RecordId>);

    let api_auth = auth.clone();
    let mut subadmins = use_resource(move || {
        let api = api_auth.api();
        async move { api.list_subadmins().await }
    });

    let create_auth = auth.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = form();
        if let Err(message) = validate(&payload) {
            toast.error(message);
            return;
        }

        let api = create_auth.api();
        spawn(async move {
            creating.set(true);
            match api.create_subadmin(&payload).await {
                Ok(()) => {
                    toast.success("Subadmin created successfully");
                    form.set(NewSubadmin::default());
                    is_form_open.set(false);
                    subadmins.restart();
                }
                Err(e) => toast.error(e.user_message()),
            }
            creating.set(false);
        });
    };

    let handle_delete = use_callback(move |id: RecordId| {
        let api = auth.api();
        spawn(async move {
            deleting.set(Some(id.clone()));
            match api.delete_subadmin(&id).await {
                Ok(()) => {
                    toast.success("Subadmin deleted successfully");
                    subadmins.restart();
                }
                Err(e) => toast.error(format!("Failed to delete subadmin: {}", e.user_message())),
            }
            deleting.set(None);
        });
    });

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Manage Subadmins" }
                    p {
                        class: "text-gray-500 text-sm",
                        "Create and manage subadmin accounts with different access levels."
                    }
                }
                button {
                    class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900",
                    onclick: move |_| is_form_open.set(!is_form_open()),
                    if is_form_open() { "Close" } else { "Create Subadmin" }
                }
            }

            if is_form_open() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                    onsubmit: handle_create,

                    div {
                        class: "grid gap-4 md:grid-cols-2",
                        TextField {
                            label: "First Name",
                            value: form.read().first_name.clone(),
                            on_input: move |v| form.write().first_name = v
                        }
                        TextField {
                            label: "Last Name",
                            value: form.read().last_name.clone(),
                            on_input: move |v| form.write().last_name = v
                        }
                        TextField {
                            label: "Email",
                            input_type: "email",
                            value: form.read().email.clone(),
                            on_input: move |v| form.write().email = v
                        }
                        TextField {
                            label: "Password",
                            input_type: "password",
                            value: form.read().password.clone(),
                            on_input: move |v| form.write().password = v
                        }
                    }

                    div {
                        class: "space-y-2",
                        p { class: "text-sm font-medium text-gray-700", "Page Access" }
                        for (page, page_label) in pages::ASSIGNABLE.iter().copied() {
                            label {
                                key: "{page}",
                                class: "flex items-center gap-2 text-sm text-gray-700",
                                input {
                                    r#type: "checkbox",
                                    checked: form.read().access_pages.iter().any(|p| p == page),
                                    onchange: move |_| form.write().toggle_page(page)
                                }
                                "{page_label}"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900 disabled:opacity-50",
                        disabled: creating(),
                        if creating() { "Creating..." } else { "Create" }
                    }
                }
            }

            match &*subadmins.read_unchecked() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for subadmin in list.iter() {
                            SubadminRow {
                                key: "{subadmin.id}",
                                subadmin: subadmin.clone(),
                                deleting: deleting.read().as_ref() == Some(&subadmin.id),
                                on_delete: handle_delete
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No subadmins yet." }
                    }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Failed to fetch subadmins: {message}"
                        }
                    }
                }
                None => rsx! {
                    div { class: "py-12", LoadingSpinner { message: "Loading subadmins..." } }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SubadminRowProps {
    subadmin: Subadmin,
    deleting: bool,
    on_delete: EventHandler<RecordId>,
}

#[component]
fn SubadminRow(props: SubadminRowProps) -> Element {
    let subadmin = &props.subadmin;
    let mut confirming = use_signal(|| false);

    let name = format!("{} {}", subadmin.first_name, subadmin.last_name);
    let access = if subadmin.access_pages.is_empty() {
        "No page access".to_string()
    } else {
        subadmin.access_pages.join(", ")
    };
    let joined = display_date(subadmin.date_joined.as_deref());
    let id = subadmin.id.clone();

    rsx! {
        div {
            class: "p-4 flex items-center justify-between hover:bg-gray-50",
            div {
                class: "min-w-0",
                h3 { class: "text-sm font-medium text-gray-900", "{name}" }
                p { class: "text-sm text-gray-500", "{subadmin.email}" }
                p { class: "text-xs text-gray-400 mt-1", "{access} \u{00B7} joined {joined}" }
            }
            if confirming() {
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-1.5 bg-red-600 text-white text-sm rounded hover:bg-red-700 disabled:opacity-50",
                        disabled: props.deleting,
                        onclick: move |_| {
                            confirming.set(false);
                            props.on_delete.call(id.clone());
                        },
                        "Confirm"
                    }
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                }
            } else {
                button {
                    class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200 disabled:opacity-50",
                    disabled: props.deleting,
                    onclick: move |_| confirming.set(true),
                    if props.deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                r#type: input_type,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500"
            }
        }
    }
}

/// Check a new-subadmin form before sending it.
fn validate(form: &NewSubadmin) -> Result<(), &'static str> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err("First and last name are required");
    }
    if !form.email.contains('@') {
        return Err("A valid email is required");
    }
    if form.password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

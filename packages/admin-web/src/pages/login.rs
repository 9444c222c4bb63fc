//! Login page

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Redirect;
use crate::routes::Route;

/// Email/password sign-in
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        return rsx! {
            Redirect { to: Route::Dashboard {} }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match auth.api().login(&email_value, &password_value).await {
                Ok(login) => {
                    auth.login(login.user, login.tokens);
                    navigator.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error.set(Some(e.user_message()));
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-[#F4F7FA] flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Admin Login" }
                    p { class: "text-gray-600 text-sm", "Mehdi Technologies" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-orange-50 border border-orange-200 text-orange-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "admin@example.com",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label { class: "block text-sm font-medium text-gray-700 mb-2", "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-sky-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-[#041431] text-white py-2 px-4 rounded-md hover:bg-sky-900 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}

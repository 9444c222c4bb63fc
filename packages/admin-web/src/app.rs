//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::components::ToastViewport;
use crate::config::Config;
use crate::routes::Route;
use crate::state::ToastState;

/// Root application component
#[component]
pub fn App() -> Element {
    use_context_provider(Config::load);
    use_context_provider(ToastState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Auth context provider wraps the entire app
        AuthProvider {
            Router::<Route> {}
        }

        ToastViewport {}
    }
}

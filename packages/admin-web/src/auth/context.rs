//! Authentication context provider

use std::rc::Rc;

use admin_api::AdminApiClient;
use admin_session::access::{self, Requirement};
use admin_session::{Identity, MemoryStorage, SessionSnapshot, SessionStore, Storage, Tokens};
use dioxus::prelude::*;

use super::revoke::{refresh_to_revoke, revoke_refresh_token};
use crate::components::LoadingSpinner;
use crate::config::Config;

/// Authentication context that provides session state to the entire app
///
/// Wraps the one [`SessionStore`] owned by [`AuthProvider`]; `session` is a
/// signal mirror of the store so components re-render on login/logout.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<SessionStore>,
    api: AdminApiClient,
    /// Latest session snapshot
    pub session: Signal<SessionSnapshot>,
}

impl AuthContext {
    /// Whether the persisted session is still being restored
    pub fn is_loading(&self) -> bool {
        self.session.read().bootstrap_pending
    }

    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity.clone()
    }

    /// Check if the user may open pages guarded by `requirement`
    pub fn can_view(&self, requirement: Requirement) -> bool {
        access::can_view(self.session.read().identity.as_ref(), requirement)
    }

    /// API client carrying the current access token, if any
    pub fn api(&self) -> AdminApiClient {
        match self.session.read().access_token() {
            Some(token) => self.api.clone().with_token(token),
            None => self.api.clone(),
        }
    }

    /// Record a successful login
    pub fn login(&self, identity: Identity, tokens: Tokens) {
        self.store.login(identity, tokens);
    }

    /// Clear the session locally, then revoke the refresh token in the background
    ///
    /// The local logout never waits on the network.
    pub fn logout(&self) {
        if let Some(refresh) = refresh_to_revoke(self.store.logout()) {
            // Outlives the calling component, which unmounts on redirect.
            spawn_forever(revoke_refresh_token(self.api.clone(), refresh));
        }
    }
}

/// Auth provider component that wraps the app
///
/// Renders a neutral loading state until the persisted session is restored,
/// so the router never sees a transient "logged out".
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<Config>();
    let session = use_signal(SessionSnapshot::pending);

    let auth = use_context_provider(move || {
        let store = Rc::new(SessionStore::new(open_storage()));
        store.subscribe(move |snapshot| {
            let mut session = session;
            session.set(snapshot.clone());
        });

        AuthContext {
            store,
            api: AdminApiClient::new(config.api_base_url.clone()),
            session,
        }
    });

    // Restore the previous session after first render
    use_effect(move || {
        auth.store.bootstrap();
    });

    if session.read().bootstrap_pending {
        return rsx! {
            div {
                class: "flex h-screen w-full items-center justify-center",
                LoadingSpinner {}
            }
        };
    }

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

fn open_storage() -> Rc<dyn Storage> {
    #[cfg(feature = "web")]
    {
        match admin_session::LocalStorage::open() {
            Ok(storage) => return Rc::new(storage),
            Err(e) => {
                tracing::warn!(error = %e, "localStorage unavailable, session will not persist");
            }
        }
    }

    Rc::new(MemoryStorage::new())
}

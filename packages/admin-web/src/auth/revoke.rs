//! Best-effort server-side logout.

use admin_api::AdminApiClient;
use admin_session::Tokens;
use tracing::{debug, warn};

/// Refresh token to revoke after a local logout, if the evicted session had one.
pub fn refresh_to_revoke(evicted: Option<Tokens>) -> Option<String> {
    evicted.and_then(|tokens| tokens.refresh)
}

/// Ask the backend to invalidate `refresh`.
///
/// Runs detached from the local logout; the outcome is only logged.
pub async fn revoke_refresh_token(api: AdminApiClient, refresh: String) {
    match api.logout(&refresh).await {
        Ok(()) => debug!("Refresh token revoked"),
        Err(e) => warn!(error = %e, "Logout API failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_session::{Identity, MemoryStorage, Role, SessionStore, UserId};

    fn admin() -> Identity {
        Identity {
            id: UserId::Int(1),
            email: "admin@example.com".to_string(),
            first_name: "Site".to_string(),
            last_name: "Admin".to_string(),
            role: Role::Admin,
            access_pages: vec![],
        }
    }

    #[test]
    fn test_refresh_to_revoke() {
        assert_eq!(refresh_to_revoke(None), None);
        assert_eq!(refresh_to_revoke(Some(Tokens::new("access", None))), None);
        assert_eq!(
            refresh_to_revoke(Some(Tokens::new("access", Some("refresh".to_string())))),
            Some("refresh".to_string())
        );
    }

    #[test]
    fn test_second_logout_revokes_nothing() {
        let store = SessionStore::new(MemoryStorage::new());
        store.bootstrap();
        store.login(admin(), Tokens::new("access", Some("refresh".to_string())));

        assert_eq!(refresh_to_revoke(store.logout()), Some("refresh".to_string()));
        assert_eq!(refresh_to_revoke(store.logout()), None);
    }

    // `SessionStore::logout` clears memory and storage synchronously; the
    // revocation only ever sees a token that is already gone locally.
    #[tokio::test]
    async fn test_logout_completes_before_revocation_fails() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.bootstrap();
        store.login(admin(), Tokens::new("access", Some("refresh".to_string())));

        // Local logout is synchronous and done before the network is touched
        let refresh = refresh_to_revoke(store.logout()).expect("refresh token issued");
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());

        // Nothing listens on the discard port, so the revocation fails
        let api = AdminApiClient::new("http://127.0.0.1:9");
        let revocation = tokio::spawn(revoke_refresh_token(api, refresh));

        assert!(!store.is_authenticated());
        revocation.await.expect("revocation task must not panic");
        assert!(!store.is_authenticated());
    }
}

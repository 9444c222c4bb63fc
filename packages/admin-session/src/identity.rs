//! The authenticated principal and its bearer credentials.
//!
//! These mirror the payload returned by the backend's login endpoint and are
//! persisted verbatim (as JSON) for session restoration.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend user id. The API has used both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

/// Privilege class of an identity.
///
/// On the wire a role is either an integer rank (`1` admin, `2` subadmin) or
/// a string tag. Anything else is kept as `Unrecognized` and grants no
/// implicit privileges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Subadmin,
    Unrecognized(String),
}

impl Role {
    const ADMIN_RANK: i64 = 1;
    const SUBADMIN_RANK: i64 = 2;

    /// Top rank sees every page regardless of its access list.
    pub fn is_top_rank(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Subadmin => "Subadmin",
            Role::Unrecognized(tag) => tag,
        }
    }

    fn from_rank(rank: i64) -> Self {
        match rank {
            Self::ADMIN_RANK => Role::Admin,
            Self::SUBADMIN_RANK => Role::Subadmin,
            other => Role::Unrecognized(other.to_string()),
        }
    }

    fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "subadmin" => Role::Subadmin,
            _ => Role::Unrecognized(tag.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Rank(i64),
    Tag(String),
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Role::Admin => RoleRepr::Rank(Self::ADMIN_RANK),
            Role::Subadmin => RoleRepr::Rank(Self::SUBADMIN_RANK),
            Role::Unrecognized(tag) => RoleRepr::Tag(tag.clone()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RoleRepr::deserialize(deserializer)? {
            RoleRepr::Rank(rank) => Role::from_rank(rank),
            RoleRepr::Tag(tag) => Role::from_tag(&tag),
        })
    }
}

/// The logged-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    /// Page keys a restricted role may open (e.g. `"blogs"`, `"jobs"`)
    #[serde(default)]
    pub access_pages: Vec<String>,
}

impl Identity {
    /// "First Last", falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn has_page(&self, key: &str) -> bool {
        self.access_pages.iter().any(|page| page == key)
    }
}

/// Opaque bearer credentials issued by the backend. Never decoded here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

impl Tokens {
    pub fn new(access: impl Into<String>, refresh: Option<String>) -> Self {
        Self {
            access: access.into(),
            refresh,
        }
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access)
    }
}

// Keep credentials out of logs.
impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("access", &"<redacted>")
            .field("refresh", &self.refresh.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_integer_rank() {
        let admin: Role = serde_json::from_str("1").unwrap();
        let subadmin: Role = serde_json::from_str("2").unwrap();
        let other: Role = serde_json::from_str("9").unwrap();

        assert_eq!(admin, Role::Admin);
        assert_eq!(subadmin, Role::Subadmin);
        assert_eq!(other, Role::Unrecognized("9".to_string()));
    }

    #[test]
    fn test_role_from_string_tag() {
        let admin: Role = serde_json::from_str("\"Admin\"").unwrap();
        let subadmin: Role = serde_json::from_str("\"subadmin\"").unwrap();
        let other: Role = serde_json::from_str("\"auditor\"").unwrap();

        assert_eq!(admin, Role::Admin);
        assert_eq!(subadmin, Role::Subadmin);
        assert_eq!(other, Role::Unrecognized("auditor".to_string()));
        assert!(!other.is_top_rank());
    }

    #[test]
    fn test_unrecognized_role_survives_persistence() {
        let role = Role::Unrecognized("42".to_string());
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }

    #[test]
    fn test_identity_from_login_payload() {
        let json = r#"{
            "id": 12,
            "email": "ops@example.com",
            "first_name": "Grace",
            "last_name": "Hopper",
            "role": 2,
            "access_pages": ["blogs", "jobs"]
        }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, UserId::Int(12));
        assert_eq!(identity.role, Role::Subadmin);
        assert!(identity.has_page("jobs"));
        assert!(!identity.has_page("applicants"));
        assert_eq!(identity.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_identity_defaults_missing_optional_fields() {
        let json = r#"{ "id": "u1", "email": "root@example.com", "role": "admin" }"#;

        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, UserId::Text("u1".to_string()));
        assert!(identity.access_pages.is_empty());
        assert_eq!(identity.display_name(), "root@example.com");
    }

    #[test]
    fn test_tokens_debug_is_redacted() {
        let tokens = Tokens::new("secret-access", Some("secret-refresh".to_string()));
        let debug = format!("{:?}", tokens);
        assert!(!debug.contains("secret"));
        assert_eq!(tokens.bearer(), "Bearer secret-access");
    }
}

//! User domain model

use serde::{Deserialize, Serialize};

/// Account role. Admins get the admin navigation entry; everyone signed
/// up through the public form is a plain user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Role::User => "user",
            Role::Admin => "admin",
        })
    }
}

/// A user account, both as it sits in the registered-users list and as
/// the single persisted current-session record.
///
/// Field names serialize camelCase to stay compatible with the persisted
/// store blob (`expiresAt` etc). The password is stored in plaintext:
/// this is a simulated exchange with no real identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    /// Single glyph shown in the avatar affordance
    pub avatar: char,
    /// Session expiry, epoch milliseconds
    pub expires_at: i64,
}

impl UserRecord {
    /// Build a fresh signup record. Role is always `user`; the display
    /// name is the email local part and the avatar its first character.
    pub fn from_signup(email: &str, password: &str, id: i64, expires_at: i64) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let avatar = email
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U');
        Self {
            id,
            email: email.to_string(),
            password: password.to_string(),
            name,
            role: Role::User,
            avatar,
            expires_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// True once the expiry timestamp is at or before `now_ms`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at <= now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_derives_name_and_avatar() {
        let user = UserRecord::from_signup("new@x.com", "pw1", 42, 1_000);
        assert_eq!(user.name, "new");
        assert_eq!(user.avatar, 'N');
        assert_eq!(user.role, Role::User);
        assert_eq!(user.expires_at, 1_000);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let user = UserRecord::from_signup("a@b.com", "pw", 1, 5_000);
        assert!(user.is_expired(5_000));
        assert!(user.is_expired(5_001));
        assert!(!user.is_expired(4_999));
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let user = UserRecord::from_signup("a@b.com", "pw", 1, 5_000);
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("expiresAt").is_some());
        assert_eq!(json.get("role").unwrap(), "user");
        assert_eq!(json.get("avatar").unwrap(), "A");
    }
}

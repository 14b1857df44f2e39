//! User domain entity and partial update type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity.
///
/// Identifiers are opaque strings; `role_id` refers to a stored [`Role`](crate::Role).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Empty until the user has been stored
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role_id: String,
    /// The Unix epoch (the `Default` value) means "not set"
    pub last_seen: DateTime<Utc>,
}

impl User {
    /// Check whether `last_seen` carries a real value
    pub fn has_last_seen(&self) -> bool {
        !is_unset(&self.last_seen)
    }
}

/// `true` for the placeholder timestamp used by `User::default()`.
pub fn is_unset(ts: &DateTime<Utc>) -> bool {
    *ts == DateTime::<Utc>::default()
}

/// Partial update for a stored user.
///
/// `None` leaves the stored value untouched, `Some` overwrites it. An empty
/// string inside `Some` is written as-is, so a field can be cleared on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Identifier of the user to update
    pub id: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub hashed_password: Option<String>,
    pub role_id: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
}

impl UserPatch {
    /// Empty patch for the given user
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn hashed_password(mut self, hashed_password: impl Into<String>) -> Self {
        self.hashed_password = Some(hashed_password.into());
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = Some(role_id.into());
        self
    }

    pub fn last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// Check if no field is supplied
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.hashed_password.is_none()
            && self.role_id.is_none()
            && self.last_seen.is_none()
    }
}

/// Build a patch from a whole user: empty strings and an unset `last_seen`
/// count as "not supplied".
impl From<User> for UserPatch {
    fn from(user: User) -> Self {
        fn non_empty(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }

        let last_seen = user.has_last_seen().then_some(user.last_seen);
        Self {
            id: user.id,
            username: non_empty(user.username),
            email: non_empty(user.email),
            hashed_password: non_empty(user.hashed_password),
            role_id: non_empty(user.role_id),
            last_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn default_user_has_no_last_seen() {
        let user = User::default();
        assert!(!user.has_last_seen());

        let seen = User {
            last_seen: Utc::now(),
            ..Default::default()
        };
        assert!(seen.has_last_seen());
    }

    #[test]
    fn patch_from_user_drops_empty_fields() {
        let user = User {
            id: "7".to_string(),
            username: "alice".to_string(),
            ..Default::default()
        };

        let patch = UserPatch::from(user);
        assert_eq!(patch.id, "7");
        assert_eq!(patch.username.as_deref(), Some("alice"));
        assert!(patch.email.is_none());
        assert!(patch.hashed_password.is_none());
        assert!(patch.role_id.is_none());
        assert!(patch.last_seen.is_none());
    }

    #[test]
    fn patch_from_user_keeps_last_seen() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let user = User {
            id: "1".to_string(),
            last_seen: ts,
            ..Default::default()
        };

        assert_eq!(UserPatch::from(user).last_seen, Some(ts));
    }

    #[test]
    fn explicit_clear_is_not_empty() {
        let patch = UserPatch::new("3").email("");
        assert!(!patch.is_empty());
        assert_eq!(patch.email.as_deref(), Some(""));

        assert!(UserPatch::new("3").is_empty());
    }

    #[test]
    fn hashed_password_is_not_serialized() {
        let user = User {
            id: "1".to_string(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            hashed_password: "secret-hash".to_string(),
            role_id: "2".to_string(),
            last_seen: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("bob@example.com"));
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("hashed_password"));
    }
}

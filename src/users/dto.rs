use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Outward-facing user representation. Built from a [`User`] row, never
/// carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: OffsetDateTime,
}

impl From<User> for UserPublic {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
        }
    }
}

/// Profile patch. Email is an immutable business key and is not editable
/// here; unknown fields in the body are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn public_user_never_serializes_a_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@test.com".into(),
            password_hash: "$argon2id$secret".into(),
            first_name: None,
            last_name: None,
            created_at: datetime!(2024-01-01 00:00 UTC),
            updated_at: datetime!(2024-01-01 00:00 UTC),
        };
        let json = serde_json::to_string(&UserPublic::from(user)).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
        assert!(json.contains("a@test.com"));
    }

    #[test]
    fn absent_patch_fields_stay_none() {
        let patch: EditUserRequest =
            serde_json::from_value(serde_json::json!({ "firstName": "Ann" })).unwrap();
        assert_eq!(patch.first_name.as_deref(), Some("Ann"));
        assert!(patch.last_name.is_none());
    }
}

//! Data models for the users API

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use validator::Validate;

/// User model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a user.
///
/// The identifier is owned by the store; an `id` sent by the client is
/// accepted so round-tripped records deserialize, but it is never read.
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "fullName must not be empty"))]
    pub full_name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "phoneNumber must not be empty"))]
    pub phone_number: String,
}

impl UserPayload {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Builds a fresh record from this payload with the given identifier
    pub fn into_user(self, id: i64, now: DateTime<Utc>) -> User {
        User {
            id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            created_at: now,
            updated_at: now,
        }
    }
}

impl User {
    /// Replaces the profile fields, keeping the identifier and creation time
    pub fn apply(&mut self, payload: UserPayload, now: DateTime<Utc>) {
        self.full_name = payload.full_name;
        self.email = payload.email;
        self.phone_number = payload.phone_number;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_deserializes_camel_case_and_ignores_id() {
        let payload: UserPayload = serde_json::from_str(
            r#"{"id":42,"fullName":"Ada Lovelace","email":"ada@example.com","phoneNumber":"555-0100"}"#,
        )
        .unwrap();

        assert_eq!(payload.full_name, "Ada Lovelace");
        assert_eq!(payload.phone_number, "555-0100");

        let user = payload.into_user(7, Utc::now());
        assert_eq!(user.id, 7);
    }

    #[test]
    fn test_payload_validation() {
        assert!(UserPayload::new("Ada", "ada@example.com", "555-0100")
            .validate()
            .is_ok());
        assert!(UserPayload::new("", "ada@example.com", "555-0100")
            .validate()
            .is_err());
        assert!(UserPayload::new("Ada", "not-an-email", "555-0100")
            .validate()
            .is_err());
        assert!(UserPayload::new("Ada", "ada@example.com", "")
            .validate()
            .is_err());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = UserPayload::new("Ada", "ada@example.com", "555-0100").into_user(1, Utc::now());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["fullName"], "Ada");
        assert_eq!(value["phoneNumber"], "555-0100");
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let created = Utc::now();
        let mut user = UserPayload::new("Ada", "ada@example.com", "555-0100").into_user(3, created);

        user.apply(
            UserPayload::new("Ada King", "ada.king@example.com", "555-0199"),
            Utc::now(),
        );

        assert_eq!(user.id, 3);
        assert_eq!(user.created_at, created);
        assert_eq!(user.full_name, "Ada King");
        assert_eq!(user.email, "ada.king@example.com");
    }
}

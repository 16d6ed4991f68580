//! User entity and role definitions.
//!
//! Users are created idempotently on first sign-in and carry exactly one
//! role. The role is only mutated by the trainer-application workflow
//! (approve/revoke) or by administrative action.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// The three roles a user can hold. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Trainer,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Trainer => "trainer",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(role: &str) -> Option<UserRole> {
        match role {
            "member" => Some(UserRole::Member),
            "trainer" => Some(UserRole::Trainer),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Posted by the frontend after a sign-in; inserting an already known
/// email is a no-op.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub inserted_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Member, UserRole::Trainer, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert_eq!(UserRole::parse("superadmin"), None);
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("Admin"), None);
    }

    #[test]
    fn test_create_user_dto_deserialize() {
        let json = r#"{"name":"Jane","email":"jane@test.com","photo":null}"#;
        let dto: CreateUserDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.name, "Jane");
        assert_eq!(dto.email, "jane@test.com");
        assert!(dto.photo.is_none());
    }

    #[test]
    fn test_create_user_dto_validation() {
        let dto = CreateUserDto {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            photo: None,
        };
        assert!(dto.validate().is_err());
    }
}

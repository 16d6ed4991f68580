use serde::{Deserialize, Serialize};
use validator::Validate;

/// Decoded payload of a verified bearer token. `email` is the identity
/// every downstream guard keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_requires_valid_email() {
        let ok = TokenRequest {
            email: "user@example.com".to_string(),
            name: None,
        };
        assert!(ok.validate().is_ok());

        let bad = TokenRequest {
            email: "nope".to_string(),
            name: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_claims_serialization_skips_missing_name() {
        let claims = Claims {
            email: "user@example.com".to_string(),
            name: None,
            exp: 2,
            iat: 1,
        };
        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("name"));
    }
}

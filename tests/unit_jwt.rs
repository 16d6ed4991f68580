use fitvessel::config::jwt::JwtConfig;
use fitvessel::utils::jwt::{create_access_token, verify_token};

mod common;

use common::test_jwt_config;

#[test]
fn test_create_access_token_success() {
    let jwt_config = test_jwt_config();

    let result = create_access_token("test@example.com", Some("Test User"), &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_success() {
    let jwt_config = test_jwt_config();
    let email = "test@example.com";

    let token = create_access_token(email, Some("Test User"), &jwt_config).unwrap();
    let result = verify_token(&token, &jwt_config);

    assert!(result.is_ok());
    let claims = result.unwrap();
    assert_eq!(claims.email, email);
    assert_eq!(claims.name.as_deref(), Some("Test User"));
}

#[test]
fn test_token_without_name() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.name.is_none());
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = test_jwt_config();

    let result = verify_token("", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_token_with_special_characters_in_email() {
    let jwt_config = test_jwt_config();
    let email = "test+special@example.co.uk";

    let token = create_access_token(email, None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.email, email);
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = test_jwt_config();
    let malformed_tokens = vec![
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(result.is_err());
    }
}

#[test]
fn test_create_token_different_users_different_tokens() {
    let jwt_config = test_jwt_config();

    let token1 = create_access_token("user1@example.com", None, &jwt_config).unwrap();
    let token2 = create_access_token("user2@example.com", None, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.email, "user1@example.com");
    assert_eq!(claims2.email, "user2@example.com");
}

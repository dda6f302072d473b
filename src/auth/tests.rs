//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Access token (JWT) validation
//! - Sign-up defaults (tier, credits, display name)
//! - Claims structure

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::services::supabase::SubscriptionTier;
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

    #[test]
    fn test_claims_structure() {
        let claims = models::Claims {
            sub: "user-123".to_string(),
            email: Some("test@example.com".to_string()),
            exp: 1234567890,
        };

        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.email.as_deref(), Some("test@example.com"));
        assert_eq!(claims.exp, 1234567890);
    }

    #[test]
    fn test_access_token_encoding_and_decoding() {
        let secret = "test_secret_key";
        let claims = models::Claims {
            sub: "user-123".to_string(),
            email: Some("test@example.com".to_string()),
            exp: 9999999999, // Far future
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token");

        assert_eq!(decoded.claims.sub, "user-123");
        assert_eq!(decoded.claims.email.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_access_token_validation_fails_with_wrong_secret() {
        let claims = models::Claims {
            sub: "user-123".to_string(),
            email: None,
            exp: 9999999999,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key"),
        )
        .expect("Failed to encode token");

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong_secret_key"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(
            result.is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[test]
    fn test_signup_defaults() {
        // Every new account starts on the free tier with 10 credits
        assert_eq!(models::SIGNUP_TIER, SubscriptionTier::Free);
        assert_eq!(models::SIGNUP_CREDITS, 10);
    }

    #[test]
    fn test_default_name_uses_email_local_part() {
        assert_eq!(models::default_name("alice@example.com"), "alice");
        assert_eq!(models::default_name("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn test_login_request_deserializes() {
        let req: models::LoginRequest = serde_json::from_value(serde_json::json!({
            "email": "test@example.com",
            "password": "hunter2",
        }))
        .expect("login request should deserialize");

        assert_eq!(req.email, "test@example.com");
        assert_eq!(req.password, "hunter2");
    }

    #[test]
    fn test_signup_request_name_optional() {
        let req: models::SignupRequest = serde_json::from_value(serde_json::json!({
            "email": "test@example.com",
            "password": "hunter2",
        }))
        .expect("signup request should deserialize without name");

        assert!(req.name.is_none());
    }
}

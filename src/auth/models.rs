//! Authentication data models

use serde::{Deserialize, Serialize};

/// Claims carried by a Supabase access token (HS256)
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub exp: usize,
}

/// Password sign-in request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request; `name` defaults to the email local-part
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Default subscription tier granted at sign-up
pub const SIGNUP_TIER: crate::services::supabase::SubscriptionTier =
    crate::services::supabase::SubscriptionTier::Free;

/// Starting credit balance granted at sign-up
pub const SIGNUP_CREDITS: i64 = 10;

/// Derive the default display name from an email address
pub fn default_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

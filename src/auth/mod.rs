//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Password sign-in and sign-up against the hosted auth service
//! - Profile row creation at sign-up (free tier, starting credits)
//! - Access token validation and the AuthedUser extractor

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;

//! # Generation Proxy Module
//!
//! Forwards browser generation requests to the engine backend:
//! - Defaults `style`/`quality` and tags the fixed workflow
//! - Reshapes the snake_case backend reply for the browser
//! - Collapses all upstream failures into a fixed-string 500

pub mod handlers;
pub mod models;
pub mod routes;


pub use routes::generate_routes;

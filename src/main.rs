// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use std::collections::HashSet;
use std::env;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod common;
mod dashboard;
mod generate;
mod health;
mod logging_middleware;
mod pages;
mod schedule;
mod services;
mod targeting;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::AppState;
use services::{EngineClient, StatusMonitor, SupabaseService};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let engine_url =
        env::var("FASTAPI_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let monitor_url =
        env::var("MONITOR_URL").unwrap_or_else(|_| "http://localhost:8001".to_string());
    let supabase_url = env::var("SUPABASE_URL")
        .map_err(|_| anyhow::anyhow!("SUPABASE_URL must be set"))?;
    let supabase_anon_key = env::var("SUPABASE_ANON_KEY")
        .map_err(|_| anyhow::anyhow!("SUPABASE_ANON_KEY must be set"))?;
    let jwt_secret = env::var("SUPABASE_JWT_SECRET").ok();

    if jwt_secret.is_none() {
        warn!("SUPABASE_JWT_SECRET not set; access tokens will be resolved via the auth service");
    }

    // Parse admin emails from comma-separated env var
    let admin_emails: HashSet<String> = env::var("ADMIN_EMAILS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    info!("Loaded admin emails: {:?}", admin_emails);
    info!(engine_url = %engine_url, monitor_url = %monitor_url, "External backends configured");

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Client::builder().no_proxy().build()?;

    let supabase = Arc::new(SupabaseService::new(
        http_client.clone(),
        supabase_url,
        supabase_anon_key,
    ));
    info!("SupabaseService initialized");

    let engine = Arc::new(EngineClient::new(http_client.clone(), engine_url));
    info!("EngineClient initialized");

    let monitor = Arc::new(StatusMonitor::new(http_client, monitor_url));
    monitor.clone().start();
    info!("StatusMonitor started");

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        supabase,
        engine,
        monitor,
        jwt_secret,
        admin_emails,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        // ====================================================================
        // STATIC PAGES
        // ====================================================================
        .merge(pages::pages_routes())
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // PROXY ROUTES (Generation, Scheduling, Targeting)
        // ====================================================================
        .merge(generate::generate_routes())
        .merge(schedule::schedule_routes())
        .merge(targeting::targeting_routes())
        // ====================================================================
        // DASHBOARD ROUTES (Navigation, Overview, Library, Analytics)
        // ====================================================================
        .merge(dashboard::dashboard_routes())
        // ====================================================================
        // SYSTEM STATUS
        // ====================================================================
        .merge(health::health_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        // Add request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared.clone()))
        .layer({
            // Get CORS origins from environment variable
            let cors_origins = std::env::var("CORS_ORIGINS").unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:3001,http://localhost:5173".to_string()
            });

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

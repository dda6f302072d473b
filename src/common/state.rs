// Application state shared across all modules

use std::collections::HashSet;
use std::sync::Arc;

use crate::services::{EngineClient, StatusMonitor, SupabaseService};

/// Application state containing the external service clients and
/// configuration.
///
/// There is no local database: every entity (profiles, content, schedules)
/// lives in the hosted auth/database service, and generation/scheduling/
/// targeting are performed by the engine backend. Handlers are stateless;
/// the only shared mutable state is the monitor snapshot behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseService>,
    pub engine: Arc<EngineClient>,
    pub monitor: Arc<StatusMonitor>,
    pub jwt_secret: Option<String>,
    pub admin_emails: HashSet<String>,
}

// Services module - clients for external collaborators

pub mod engine;
pub mod monitor;
pub mod supabase;

pub use engine::{EngineClient, EngineError};
pub use monitor::StatusMonitor;
pub use supabase::{SupabaseError, SupabaseService};

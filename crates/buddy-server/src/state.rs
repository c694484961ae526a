use std::sync::Arc;

use buddy_core::ChatEngine;

/// Shared application state accessible from all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    /// Page size for chat history reads.
    pub history_limit: usize,
    /// CORS allow-list; empty allows any origin.
    pub allowed_origins: Vec<String>,
}

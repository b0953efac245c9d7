use std::sync::Arc;

use tokio::sync::RwLock;

use crate::answer::Answerer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The single retained profile slot. The extraction and answering core
    /// is single-writer/single-reader; this lock is where concurrent HTTP
    /// callers get serialized.
    pub answerer: Arc<RwLock<Answerer>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            answerer: Arc::new(RwLock::new(Answerer::new())),
        }
    }
}

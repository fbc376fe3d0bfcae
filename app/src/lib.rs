pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use error::{CoreError, CoreResult};
pub use utils::config::Config;

// Re-export common types
pub use anyhow::Result;
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;

use std::sync::Arc;

use tokio::sync::RwLock;

use services::{GenerationService, MatchEngine};
use state::CoreState;
use utils::SessionStore;

/// Shared handler state: the owned core behind one lock, plus the engine and
/// collaborators. The lock is only ever held for synchronous state steps,
/// never across a generation call.
#[derive(Clone)]
pub struct AppContext {
    pub core: Arc<RwLock<CoreState>>,
    pub engine: Arc<MatchEngine>,
    pub generation: GenerationService,
    pub session: Arc<SessionStore>,
}

impl AppContext {
    pub fn new(core: CoreState, generation: GenerationService, session: SessionStore) -> Self {
        Self {
            core: Arc::new(RwLock::new(core)),
            engine: Arc::new(MatchEngine::new(generation.clone())),
            generation,
            session: Arc::new(session),
        }
    }
}

pub mod engine;
pub mod extract;
pub mod types;

pub use engine::RefactorEngine;
pub use types::RefactorError;

use once_cell::sync::OnceCell;

use crate::shared::config::LlmConfig;

static ENGINE: OnceCell<RefactorEngine> = OnceCell::new();

/// Build the process-wide engine from config. Called once at startup.
pub fn init_engine(config: &LlmConfig) -> anyhow::Result<()> {
    ENGINE
        .set(RefactorEngine::from_config(config))
        .map_err(|_| anyhow::anyhow!("refactor engine already initialized"))
}

/// The process-wide engine. `init_engine` runs before the router is built,
/// so handlers can rely on it being present.
pub fn engine() -> &'static RefactorEngine {
    ENGINE.get().expect("refactor engine not initialized")
}

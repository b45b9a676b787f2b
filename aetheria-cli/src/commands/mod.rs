//! CLI commands

pub mod attune;
pub mod config;
pub mod crystals;
pub mod demo;
pub mod grade;
pub mod profile;
pub mod quest;
pub mod realm;
pub mod submit;
pub mod transfer;

use std::sync::Arc;

use aetheria_core::{JsonStore, OllamaOracle, ProgressionController};

use crate::config::AetheriaConfig;

/// Open the file-backed store at the configured data directory.
pub fn open_store(config: &AetheriaConfig) -> Arc<JsonStore> {
    Arc::new(JsonStore::open(&config.store.data_dir))
}

/// Build a progression controller against the configured Ollama oracle.
pub fn controller(config: &AetheriaConfig) -> ProgressionController {
    let oracle = OllamaOracle::new(config.theme)
        .with_base_url(&config.oracle.base_url)
        .with_model(&config.oracle.model);
    ProgressionController::new(open_store(config), Arc::new(oracle), config.theme)
}

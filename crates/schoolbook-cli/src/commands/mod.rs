//! Subcommand implementations.

pub mod attendance;
pub mod dashboard;
pub mod init;
pub mod leaderboard;
pub mod report;
pub mod students;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use schoolbook_core::store::EntityStore;
use schoolbook_seed::BundledSeed;
use schoolbook_storage::FileStore;

use crate::config::{load_config_from, SchoolbookConfig};

/// Open the store over the configured data directory and hydrate it
/// from the bundled seed if this is the first run.
pub async fn open_store(config: &SchoolbookConfig) -> Result<EntityStore> {
    let storage = FileStore::open(&config.data_dir)
        .with_context(|| format!("cannot open data dir {}", config.data_dir.display()))?;
    let seed = Arc::new(BundledSeed::with_delay(Duration::from_millis(
        config.seed_delay_ms,
    )));

    let mut store = EntityStore::open(seed, Box::new(storage));
    if !store.is_loaded() {
        tracing::info!("first run: hydrating store from the bundled seed");
        store
            .load_with_timeout(Duration::from_secs(config.load_timeout_secs))
            .await
            .context("initial data load failed")?;
    }
    Ok(store)
}

/// Load config for a command.
pub fn config(path: Option<PathBuf>) -> Result<SchoolbookConfig> {
    load_config_from(path.as_deref())
}

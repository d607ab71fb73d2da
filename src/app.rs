use axum::Router;
use sea_orm::{ConnectOptions, Database, DbErr};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, StorageBackend};
use crate::entities::setup_schema;
use crate::routes::api_router;
use crate::seed::seed_catalog;
use crate::storage::{DatabaseStore, MemoryStore, SharedStore, StoreError};
use crate::uploads::ImageStore;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to prepare database: {0}")]
    Database(#[from] DbErr),
    #[error("Failed to seed sample data: {0}")]
    Seed(#[from] StoreError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens the configured backend. The choice is made once; nothing switches
/// stores after startup.
pub async fn build_store(config: &Config) -> Result<SharedStore, StartupError> {
    let store: SharedStore = match &config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory catalog store");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Database { url } => {
            info!("Using database catalog store");
            let mut options = ConnectOptions::new(url.clone());
            options.sqlx_logging(false);
            let db = Database::connect(options).await?;
            setup_schema(&db).await?;
            Arc::new(DatabaseStore::new(Arc::new(db)))
        }
    };

    if config.seed_sample_data {
        seed_catalog(store.as_ref()).await?;
    }

    Ok(store)
}

pub async fn build_app(config: &Config) -> Result<Router, StartupError> {
    let store = build_store(config).await?;
    let images = Arc::new(ImageStore::new(
        config.upload_dir.clone(),
        config.file_size_limit,
    ));
    info!(
        dir = %images.dir().display(),
        max_bytes = images.max_bytes(),
        "Serving uploads"
    );

    Ok(api_router(store, images))
}

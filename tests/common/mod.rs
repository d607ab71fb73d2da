#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use agri_store::config::DEFAULT_FILE_SIZE_LIMIT;
use agri_store::routes::api_router;
use agri_store::seed::seed_catalog;
use agri_store::storage::MemoryStore;
use agri_store::uploads::ImageStore;
use reqwest::Client;

static NEXT_UPLOAD_DIR: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub base_url: String,
    pub client: Client,
    pub upload_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serves the full router on an ephemeral port over an empty memory store.
pub async fn spawn_app() -> TestApp {
    spawn(false, DEFAULT_FILE_SIZE_LIMIT).await
}

pub async fn spawn_seeded_app() -> TestApp {
    spawn(true, DEFAULT_FILE_SIZE_LIMIT).await
}

pub async fn spawn_app_with_upload_limit(limit: usize) -> TestApp {
    spawn(false, limit).await
}

async fn spawn(seed: bool, upload_limit: usize) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    if seed {
        seed_catalog(store.as_ref())
            .await
            .expect("Failed to seed catalog");
    }

    let upload_dir = std::env::temp_dir().join(format!(
        "agri-store-it-{}-{}",
        std::process::id(),
        NEXT_UPLOAD_DIR.fetch_add(1, Ordering::SeqCst)
    ));
    let images = Arc::new(ImageStore::new(upload_dir.clone(), upload_limit));
    let app = api_router(store, images);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: Client::new(),
        upload_dir,
    }
}

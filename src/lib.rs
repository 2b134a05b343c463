pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use catalog::Catalog;
use config::AppConfig;
use error::AppError;
use storage::MediaStorage;
use store::PropertyStore;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<PropertyStore>,
    pub media: Arc<MediaStorage>,
}

impl AppState {
    /// Prepares the data directory: media directories created idempotently,
    /// addons.csv seeded when missing. properties.csv stays untouched until
    /// the first append.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let media = MediaStorage::new(config.data_dir.clone())?;
        let catalog = Catalog::load(&config.data_dir.join("addons.csv"))?;
        let store = PropertyStore::new(config.data_dir.join("properties.csv"));
        Ok(Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
            media: Arc::new(media),
        })
    }
}

pub fn router(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/api/addons", get(handlers::get_addons))
        .route("/api/submit-property", post(handlers::submit_property))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .route_service(
            "/",
            ServeFile::new(config.static_dir.join("landingpage.html")),
        )
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state)
}

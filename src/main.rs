use std::net::SocketAddr;

use serenia_backend::config::AppConfig;
use serenia_backend::{router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let state = AppState::new(&config)?;
    log::info!(
        "Catalog loaded: {} property types, {} categories",
        state.catalog.property_types.len(),
        state.catalog.categories.len()
    );

    // 0.0.0.0 so phones on the same network can reach the form.
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("Starting server on {}", addr);

    let app = router(state, &config);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}

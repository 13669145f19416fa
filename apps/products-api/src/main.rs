//! Products API - REST server for the product catalogue

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Invalid validation rules abort startup here
    let state = AppState::new(config)?;

    info!(
        seeded = state.config.catalog.seed,
        sku_policy = %state.config.catalog.sku_policy,
        locale = %state.config.catalog.locale,
        "Product catalogue initialized"
    );

    let api_routes = api::routes(&state);
    let app = create_router::<openapi::ApiDoc>(
        api_routes,
        &state.config.server,
        &state.config.environment,
    )?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let service = state.service.clone();
    create_production_app(app, &state.config.server, async move {
        match service.count_products().await {
            Ok(count) => info!(products = count, "Discarding in-memory catalogue"),
            Err(e) => warn!("Could not read catalogue during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

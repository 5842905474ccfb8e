use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use storefront_cart::adapters::file::json_snapshot_store::JsonFileSnapshotStore;
use storefront_cart::adapters::http::storefront_api::HttpStorefrontApi;
use storefront_cart::adapters::tracing_notifier::TracingNotifier;
use storefront_cart::application::cart_store::DynCartStore;
use storefront_cart::shell::config::Config;
use storefront_cart::shell::http::router;
use storefront_cart::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let storefront = Arc::new(HttpStorefrontApi::new(
        config.api_base_url.clone(),
        config.api_timeout,
    )?);
    let snapshots = Arc::new(JsonFileSnapshotStore::new(
        &config.data_dir,
        &config.snapshot_key,
    ));
    tracing::info!(path = %snapshots.path().display(), "cart snapshot location");

    let store = DynCartStore::load(storefront.clone(), storefront, snapshots).await?;
    let state = AppState::new(store, Arc::new(TracingNotifier));

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("cart endpoint: http://{}/cart", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

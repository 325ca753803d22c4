use std::net::SocketAddr;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use trip_server::dataset::DealSet;
use trip_server::web::{AppState, create_router};

/// Default dataset location, relative to the working directory.
const DEFAULT_DEALS_PATH: &str = "data/deals.json";

/// Default static assets location.
const DEFAULT_STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let deals_path =
        std::env::var("TRIP_DEALS_PATH").unwrap_or_else(|_| DEFAULT_DEALS_PATH.to_string());
    let static_dir =
        std::env::var("TRIP_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let port: u16 = std::env::var("TRIP_SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // Fail fast on a missing or malformed dataset
    let deals = match DealSet::load(Path::new(&deals_path)) {
        Ok(deals) => deals,
        Err(e) => {
            eprintln!("Failed to load deals from {deals_path}: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(deals);
    info!(
        deals = state.deals.deals().len(),
        cities = state.graph.city_count(),
        edges = state.graph.edge_count(),
        currency = state.deals.currency(),
        "deal graph built"
    );

    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Trip sorter listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::api::handlers::{calculate_cost, root, AppState};
use crate::config::Settings;
use crate::error::Result;
use crate::network::NetworkModel;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/calculate-cost", post(calculate_cost))
        .with_state(state)
}

/// Serve the estimator until the process is stopped.
pub async fn run(settings: &Settings) -> Result<()> {
    let state = AppState::new(
        NetworkModel::standard(),
        settings.search,
        settings.strict_orders,
    );

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    info!("Delivery cost estimator listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

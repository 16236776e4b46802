use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::types::Order;
use crate::network::NetworkModel;
use crate::simulation::{RouteSimulator, SearchStrategy};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub network: Arc<NetworkModel>,
    pub search: SearchStrategy,
    pub strict_orders: bool,
}

impl AppState {
    pub fn new(network: NetworkModel, search: SearchStrategy, strict_orders: bool) -> Self {
        Self {
            network: Arc::new(network),
            search,
            strict_orders,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    /// `null` on the wire when no finite route exists.
    pub minimum_cost: f64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

const LANDING_PAGE: &str = r#"
    <h2> Delivery Cost Estimator is Running </h2>
    <p>Use <code>POST /calculate-cost</code> with product quantities in the request body to calculate delivery cost.</p>
"#;

/// GET /
pub async fn root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// POST /calculate-cost
pub async fn calculate_cost(State(state): State<AppState>, Json(order): Json<Order>) -> Response {
    debug!("Received order [{}]", order);

    if let Err(err) = order.validate() {
        if state.strict_orders {
            warn!("Rejecting order: {}", err);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
        warn!("Accepting order with ignored quantities: {}", err);
    }

    let simulator = RouteSimulator::with_strategy(&state.network, state.search);
    let minimum_cost = simulator.calculate_min_cost(&order);

    Json(CostResponse { minimum_cost }).into_response()
}

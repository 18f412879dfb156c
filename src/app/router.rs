use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::handlers;
use crate::app::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", get(handlers::recommend))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

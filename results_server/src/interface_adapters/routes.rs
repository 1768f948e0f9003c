use crate::interface_adapters::handlers::{clear_history, list_history, save_result};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

pub fn app(state: AppState) -> Router {
    // The browser front end is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/save-result", post(save_result))
        .route("/api/history", get(list_history).delete(clear_history))
        .layer(cors)
        .with_state(state)
}

use axum::{routing::get, Router};

use shared_store::AppState;

use crate::handlers::*;

pub fn create_realtime_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(realtime_info))
        .route("/ws", get(handle_ws))
        .with_state(state)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::AppState;

use crate::handlers::{get_health_status, get_system_stats, MonitoringHandlers};

pub fn create_monitoring_router(state: AppState) -> Router {
    let handlers = Arc::new(MonitoringHandlers::new(state));

    Router::new()
        .route("/health", get(get_health_status))
        .route("/stats", get(get_system_stats))
        .with_state(handlers)
}

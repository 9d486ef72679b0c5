use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::AppState;

use crate::services::{HealthService, StatsService};

/// Long-lived handler bundle; health checks report uptime from the moment
/// the router was built.
pub struct MonitoringHandlers {
    health: HealthService,
    stats: StatsService,
}

impl MonitoringHandlers {
    pub fn new(state: AppState) -> Self {
        Self {
            health: HealthService::new(state.clone()),
            stats: StatsService::new(state),
        }
    }
}

#[axum::debug_handler]
pub async fn get_health_status(
    State(handlers): State<Arc<MonitoringHandlers>>,
) -> Result<Json<Value>, AppError> {
    let health = handlers.health.check().await;

    Ok(Json(json!(health)))
}

#[axum::debug_handler]
pub async fn get_system_stats(
    State(handlers): State<Arc<MonitoringHandlers>>,
) -> Result<Json<Value>, AppError> {
    let stats = handlers.stats.system_stats().await;

    Ok(Json(json!(stats)))
}

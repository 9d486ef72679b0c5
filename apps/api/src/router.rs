use axum::{routing::get, Router};

use doctor_cell::router::create_doctor_router;
use monitoring_cell::router::create_monitoring_router;
use patient_cell::router::create_patient_router;
use query_cell::router::create_query_router;
use realtime_cell::router::create_realtime_router;
use shared_store::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "TrustCareConnect API is running!" }))
        .nest("/patients", create_patient_router(state.clone()))
        .nest("/doctors", create_doctor_router(state.clone()))
        .nest("/queries", create_query_router(state.clone()))
        .nest("/realtime", create_realtime_router(state.clone()))
        .nest("/monitoring", create_monitoring_router(state))
}

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers::*;

pub fn create_query_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(submit_query))
        .route("/", get(list_queries))
        .route("/pending", get(pending_queries))
        .route("/patient/{id}", get(patient_queries))
        .route("/doctor/{id}", get(doctor_queries))
        .route("/{id}", get(get_query))
        .route("/{id}/take", post(take_query))
        .route("/{id}/respond", post(respond_to_query))
        .route("/{id}/sections", get(query_sections))
        .with_state(state)
}

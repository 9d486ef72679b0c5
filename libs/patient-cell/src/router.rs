use axum::{
    routing::{get, post, put},
    Router,
};

use shared_store::AppState;

use crate::handlers::*;

pub fn create_patient_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(register_patient))
        .route("/", get(list_patients))
        .route("/unassigned", get(unassigned_patients))
        .route("/{id}", get(get_patient))
        .route("/{id}", put(update_patient))
        .with_state(state)
}

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers::*;

pub fn create_doctor_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(register_doctor))
        .route("/", get(list_doctors))
        .route("/{id}", get(get_doctor))
        .route("/{id}/patients", get(doctor_patients))
        .route("/{id}/patients/{patient_id}", post(assign_patient))
        .route("/{id}/patients/{patient_id}", delete(unassign_patient))
        .with_state(state)
}

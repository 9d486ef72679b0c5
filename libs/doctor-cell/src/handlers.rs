use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::RegisterDoctorRequest;
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn register_doctor(
    State(state): State<AppState>,
    Json(request): Json<RegisterDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.register_doctor(request).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctor = service.get_doctor(doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let doctors = service.list_doctors().await;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn doctor_patients(
    State(state): State<AppState>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let patients = service.doctor_patients(doctor_id).await?;

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn assign_patient(
    State(state): State<AppState>,
    Path((doctor_id, patient_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let patient = service.assign_patient(doctor_id, patient_id).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn unassign_patient(
    State(state): State<AppState>,
    Path((doctor_id, patient_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(&state);

    let patient = service.unassign_patient(doctor_id, patient_id).await?;

    Ok(Json(json!(patient)))
}

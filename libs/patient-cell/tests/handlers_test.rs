use axum::{
    extract::{Path, State},
    Json,
};
use assert_matches::assert_matches;
use uuid::Uuid;

use patient_cell::handlers::*;
use patient_cell::models::{RegisterPatientRequest, UpdatePatientRequest};
use shared_models::error::AppError;
use shared_store::test_support::{seed_doctor, seed_patient, test_state};

fn register_request(name: &str, email: &str) -> RegisterPatientRequest {
    RegisterPatientRequest {
        name: name.to_string(),
        condition: "Type 2 Diabetes".to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn register_patient_returns_record_with_id() {
    let state = test_state();

    let Json(body) = register_patient(
        State(state.clone()),
        Json(register_request("Sarah Johnson", "sarah@example.com")),
    )
    .await
    .unwrap();

    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["name"], "Sarah Johnson");
    assert_eq!(body["email"], "sarah@example.com");
    assert_eq!(body["condition"], "Type 2 Diabetes");
    assert_eq!(body["is_active"], true);
    assert!(body["assigned_doctor_id"].is_null());

    // A subsequent get returns the same record.
    let patient_id: Uuid = id.parse().unwrap();
    let Json(fetched) = get_patient(State(state), Path(patient_id)).await.unwrap();
    assert_eq!(fetched["id"], body["id"]);
    assert_eq!(fetched["name"], "Sarah Johnson");
}

#[tokio::test]
async fn register_patient_rejects_invalid_email() {
    let state = test_state();

    let result = register_patient(
        State(state),
        Json(register_request("Sarah Johnson", "not-an-email")),
    )
    .await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn register_patient_rejects_blank_name() {
    let state = test_state();

    let result = register_patient(
        State(state),
        Json(register_request("   ", "sarah@example.com")),
    )
    .await;

    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn get_patient_unknown_id_is_not_found() {
    let state = test_state();

    let result = get_patient(State(state), Path(Uuid::new_v4())).await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[tokio::test]
async fn list_patients_returns_all_registered() {
    let state = test_state();
    seed_patient(&state, "Sarah Johnson").await;
    seed_patient(&state, "James Okafor").await;

    let Json(body) = list_patients(State(state)).await.unwrap();

    assert_eq!(body["total"], 2);
    assert_eq!(body["patients"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unassigned_excludes_assigned_and_inactive_patients() {
    let state = test_state();
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;

    let assigned = seed_patient(&state, "Assigned Patient").await;
    state
        .store
        .update_patient(assigned.id, |p| p.assigned_doctor_id = Some(doctor.id))
        .await
        .unwrap();

    let inactive = seed_patient(&state, "Inactive Patient").await;
    state
        .store
        .update_patient(inactive.id, |p| p.is_active = false)
        .await
        .unwrap();

    let open = seed_patient(&state, "Waiting Patient").await;

    let Json(body) = unassigned_patients(State(state)).await.unwrap();

    assert_eq!(body["total"], 1);
    assert_eq!(body["patients"][0]["id"], open.id.to_string());
}

#[tokio::test]
async fn update_patient_applies_partial_fields() {
    let state = test_state();
    let patient = seed_patient(&state, "Sarah Johnson").await;

    let Json(body) = update_patient(
        State(state.clone()),
        Path(patient.id),
        Json(UpdatePatientRequest {
            condition: Some("Gestational Diabetes".to_string()),
            is_active: Some(false),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(body["condition"], "Gestational Diabetes");
    assert_eq!(body["is_active"], false);
    // Untouched fields survive.
    assert_eq!(body["name"], "Sarah Johnson");

    let stored = state.store.get_patient(patient.id).await.unwrap();
    assert!(!stored.is_active);
    assert!(stored.updated_at >= patient.updated_at);
}

#[tokio::test]
async fn update_unknown_patient_is_not_found() {
    let state = test_state();

    let result = update_patient(
        State(state),
        Path(Uuid::new_v4()),
        Json(UpdatePatientRequest::default()),
    )
    .await;

    assert_matches!(result, Err(AppError::NotFound(_)));
}

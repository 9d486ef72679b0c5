//! Seed helpers shared by the cell test suites.

use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::records::{Doctor, MedicalQuery, Patient};

use crate::state::AppState;

pub fn test_state() -> AppState {
    AppState::new(AppConfig::default())
}

/// Test state with the AI bridge pointed at `bridge_url` (a wiremock server).
pub fn test_state_with_bridge(bridge_url: &str) -> AppState {
    AppState::new(AppConfig {
        ai_bridge_url: bridge_url.to_string(),
        ai_bridge_api_key: "test-bridge-key".to_string(),
        ..AppConfig::default()
    })
}

pub async fn seed_patient(state: &AppState, name: &str) -> Patient {
    state
        .store
        .insert_patient(Patient::new(
            name.to_string(),
            "Type 2 Diabetes".to_string(),
            format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        ))
        .await
}

pub async fn seed_doctor(state: &AppState, name: &str) -> Doctor {
    state
        .store
        .insert_doctor(Doctor::new(name.to_string(), "Endocrinology".to_string()))
        .await
}

/// Patient already assigned to a doctor - the precondition for submitting
/// queries.
pub async fn seed_assigned_patient(state: &AppState) -> (Patient, Doctor) {
    let doctor = seed_doctor(state, "Dr Maria Santos").await;
    let patient = seed_patient(state, "Sarah Johnson").await;
    let patient = state
        .store
        .update_patient(patient.id, |p| p.assigned_doctor_id = Some(doctor.id))
        .await
        .expect("seeded patient exists");
    (patient, doctor)
}

pub async fn seed_query(state: &AppState, patient_id: Uuid) -> MedicalQuery {
    state
        .store
        .insert_query(MedicalQuery::new(
            patient_id,
            "Blood sugar spikes after breakfast".to_string(),
            "My morning readings are 180-200 mg/dL even though I take my medication.".to_string(),
        ))
        .await
}

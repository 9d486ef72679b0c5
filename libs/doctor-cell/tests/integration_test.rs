use assert_matches::assert_matches;
use uuid::Uuid;

use doctor_cell::models::{DoctorError, RegisterDoctorRequest};
use doctor_cell::services::DoctorService;
use shared_models::events::RealtimeEvent;
use shared_store::test_support::{seed_doctor, seed_patient, test_state};

#[tokio::test]
async fn register_doctor_returns_record_with_id() {
    let state = test_state();
    let service = DoctorService::new(&state);

    let doctor = service
        .register_doctor(RegisterDoctorRequest {
            name: "Dr Maria Santos".to_string(),
            specialization: "Endocrinology".to_string(),
        })
        .await
        .unwrap();

    let fetched = service.get_doctor(doctor.id).await.unwrap();
    assert_eq!(fetched.name, "Dr Maria Santos");
    assert_eq!(fetched.specialization, "Endocrinology");
}

#[tokio::test]
async fn register_doctor_rejects_blank_specialization() {
    let state = test_state();
    let service = DoctorService::new(&state);

    let result = service
        .register_doctor(RegisterDoctorRequest {
            name: "Dr Maria Santos".to_string(),
            specialization: "  ".to_string(),
        })
        .await;

    assert_matches!(result, Err(DoctorError::Validation(_)));
}

#[tokio::test]
async fn assign_then_unassign_restores_unassigned_pool() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;
    let patient = seed_patient(&state, "Sarah Johnson").await;

    let assigned = service.assign_patient(doctor.id, patient.id).await.unwrap();
    assert_eq!(assigned.assigned_doctor_id, Some(doctor.id));

    let caseload = service.doctor_patients(doctor.id).await.unwrap();
    assert_eq!(caseload.len(), 1);

    let unassigned = service.unassign_patient(doctor.id, patient.id).await.unwrap();
    assert_eq!(unassigned.assigned_doctor_id, None);

    // Back in the unassigned pool.
    let pool = state.store.patients_where(|p| p.is_unassigned()).await;
    assert!(pool.iter().any(|p| p.id == patient.id));
    assert!(service.doctor_patients(doctor.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn assign_to_same_doctor_is_idempotent() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;
    let patient = seed_patient(&state, "Sarah Johnson").await;

    service.assign_patient(doctor.id, patient.id).await.unwrap();
    let again = service.assign_patient(doctor.id, patient.id).await.unwrap();

    assert_eq!(again.assigned_doctor_id, Some(doctor.id));
}

#[tokio::test]
async fn assign_to_second_doctor_conflicts() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let first = seed_doctor(&state, "Dr Maria Santos").await;
    let second = seed_doctor(&state, "Dr James Lee").await;
    let patient = seed_patient(&state, "Sarah Johnson").await;

    service.assign_patient(first.id, patient.id).await.unwrap();
    let result = service.assign_patient(second.id, patient.id).await;

    assert_matches!(result, Err(DoctorError::AlreadyAssigned));
}

#[tokio::test]
async fn unassign_requires_current_assignment() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;
    let patient = seed_patient(&state, "Sarah Johnson").await;

    let result = service.unassign_patient(doctor.id, patient.id).await;

    assert_matches!(result, Err(DoctorError::NotAssignedToDoctor));
}

#[tokio::test]
async fn assignment_operations_reference_existing_records() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;

    assert_matches!(
        service.assign_patient(Uuid::new_v4(), Uuid::new_v4()).await,
        Err(DoctorError::NotFound)
    );
    assert_matches!(
        service.assign_patient(doctor.id, Uuid::new_v4()).await,
        Err(DoctorError::PatientNotFound)
    );
}

#[tokio::test]
async fn assignment_publishes_realtime_events() {
    let state = test_state();
    let service = DoctorService::new(&state);
    let doctor = seed_doctor(&state, "Dr Maria Santos").await;
    let patient = seed_patient(&state, "Sarah Johnson").await;

    let mut rx = state.subscribe();

    service.assign_patient(doctor.id, patient.id).await.unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        RealtimeEvent::PatientAssigned {
            patient_id: patient.id,
            doctor_id: doctor.id
        }
    );

    service.unassign_patient(doctor.id, patient.id).await.unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        RealtimeEvent::PatientUnassigned {
            patient_id: patient.id
        }
    );
}

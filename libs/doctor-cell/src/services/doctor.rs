use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::events::RealtimeEvent;
use shared_models::records::{Doctor, Patient};
use shared_store::AppState;

use crate::models::{DoctorError, RegisterDoctorRequest};

pub struct DoctorService {
    state: AppState,
}

impl DoctorService {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    pub async fn register_doctor(
        &self,
        request: RegisterDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        debug!("Registering doctor: {}", request.name);

        if request.name.trim().is_empty() {
            return Err(DoctorError::Validation("Name must not be empty".to_string()));
        }
        if request.specialization.trim().is_empty() {
            return Err(DoctorError::Validation(
                "Specialization must not be empty".to_string(),
            ));
        }

        let doctor = Doctor::new(request.name, request.specialization);
        Ok(self.state.store.insert_doctor(doctor).await)
    }

    pub async fn get_doctor(&self, doctor_id: Uuid) -> Result<Doctor, DoctorError> {
        self.state
            .store
            .get_doctor(doctor_id)
            .await
            .ok_or(DoctorError::NotFound)
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.state.store.list_doctors().await
    }

    pub async fn doctor_patients(&self, doctor_id: Uuid) -> Result<Vec<Patient>, DoctorError> {
        if !self.state.store.doctor_exists(doctor_id).await {
            return Err(DoctorError::NotFound);
        }

        Ok(self
            .state
            .store
            .patients_where(|p| p.assigned_doctor_id == Some(doctor_id))
            .await)
    }

    /// Assign a patient to a doctor's care. Re-assigning to the same doctor
    /// is a no-op; moving an assigned patient requires unassigning first.
    pub async fn assign_patient(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Patient, DoctorError> {
        debug!("Assigning patient {} to doctor {}", patient_id, doctor_id);

        if !self.state.store.doctor_exists(doctor_id).await {
            return Err(DoctorError::NotFound);
        }

        let patient = self
            .state
            .store
            .get_patient(patient_id)
            .await
            .ok_or(DoctorError::PatientNotFound)?;

        match patient.assigned_doctor_id {
            Some(existing) if existing == doctor_id => return Ok(patient),
            Some(_) => return Err(DoctorError::AlreadyAssigned),
            None => {}
        }

        let patient = self
            .state
            .store
            .update_patient(patient_id, |p| {
                p.assigned_doctor_id = Some(doctor_id);
                p.updated_at = Utc::now();
            })
            .await
            .ok_or(DoctorError::PatientNotFound)?;

        self.state.publish(RealtimeEvent::PatientAssigned {
            patient_id,
            doctor_id,
        });

        Ok(patient)
    }

    /// Clear the assignment, returning the patient to the unassigned pool.
    pub async fn unassign_patient(
        &self,
        doctor_id: Uuid,
        patient_id: Uuid,
    ) -> Result<Patient, DoctorError> {
        debug!("Unassigning patient {} from doctor {}", patient_id, doctor_id);

        if !self.state.store.doctor_exists(doctor_id).await {
            return Err(DoctorError::NotFound);
        }

        let patient = self
            .state
            .store
            .get_patient(patient_id)
            .await
            .ok_or(DoctorError::PatientNotFound)?;

        if patient.assigned_doctor_id != Some(doctor_id) {
            return Err(DoctorError::NotAssignedToDoctor);
        }

        let patient = self
            .state
            .store
            .update_patient(patient_id, |p| {
                p.assigned_doctor_id = None;
                p.updated_at = Utc::now();
            })
            .await
            .ok_or(DoctorError::PatientNotFound)?;

        self.state
            .publish(RealtimeEvent::PatientUnassigned { patient_id });

        Ok(patient)
    }
}

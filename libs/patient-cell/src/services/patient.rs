use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::records::Patient;
use shared_store::{AppState, Store};

use crate::models::{PatientError, RegisterPatientRequest, UpdatePatientRequest};

pub struct PatientService {
    store: Arc<Store>,
}

impl PatientService {
    pub fn new(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }

    /// Register a new patient. New patients start active and unassigned.
    pub async fn register_patient(
        &self,
        request: RegisterPatientRequest,
    ) -> Result<Patient, PatientError> {
        debug!("Registering patient: {}", request.name);

        validate_name(&request.name)?;
        validate_condition(&request.condition)?;
        validate_email(&request.email)?;

        let patient = Patient::new(request.name, request.condition, request.email);
        Ok(self.store.insert_patient(patient).await)
    }

    pub async fn get_patient(&self, patient_id: Uuid) -> Result<Patient, PatientError> {
        self.store
            .get_patient(patient_id)
            .await
            .ok_or(PatientError::NotFound)
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.store.list_patients().await
    }

    /// Active patients with no assigned doctor, in registration order.
    pub async fn unassigned_patients(&self) -> Vec<Patient> {
        self.store.patients_where(|p| p.is_unassigned()).await
    }

    pub async fn update_patient(
        &self,
        patient_id: Uuid,
        request: UpdatePatientRequest,
    ) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", patient_id);

        if let Some(ref name) = request.name {
            validate_name(name)?;
        }
        if let Some(ref condition) = request.condition {
            validate_condition(condition)?;
        }
        if let Some(ref email) = request.email {
            validate_email(email)?;
        }

        self.store
            .update_patient(patient_id, |patient| {
                if let Some(name) = request.name {
                    patient.name = name;
                }
                if let Some(email) = request.email {
                    patient.email = email;
                }
                if let Some(condition) = request.condition {
                    patient.condition = condition;
                }
                if let Some(is_active) = request.is_active {
                    patient.is_active = is_active;
                }
                patient.updated_at = Utc::now();
            })
            .await
            .ok_or(PatientError::NotFound)
    }
}

fn validate_name(name: &str) -> Result<(), PatientError> {
    if name.trim().is_empty() {
        return Err(PatientError::Validation("Name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_condition(condition: &str) -> Result<(), PatientError> {
    if condition.trim().is_empty() {
        return Err(PatientError::Validation(
            "Condition must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), PatientError> {
    if !email.contains('@') {
        return Err(PatientError::Validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDoctorRequest {
    pub name: String,
    pub specialization: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Patient is already assigned to a different doctor")]
    AlreadyAssigned,

    #[error("Patient is not assigned to this doctor")]
    NotAssignedToDoctor,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound | DoctorError::PatientNotFound => {
                AppError::NotFound(err.to_string())
            }
            DoctorError::AlreadyAssigned | DoctorError::NotAssignedToDoctor => {
                AppError::Conflict(err.to_string())
            }
            DoctorError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}

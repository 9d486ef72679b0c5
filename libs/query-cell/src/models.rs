use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitQueryRequest {
    pub patient_id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeQueryRequest {
    pub doctor_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondToQueryRequest {
    pub doctor_id: Uuid,
    pub response: String,
}

/// One titled chunk of an AI draft, split out for the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalSection {
    pub heading: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    #[error("Query not found")]
    NotFound,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Patient account is inactive")]
    PatientInactive,

    #[error("Patient has no assigned doctor")]
    PatientUnassigned,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Invalid query status transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Query is under review by a different doctor")]
    WrongDoctor,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::NotFound => AppError::NotFound(err.to_string()),
            QueryError::PatientNotFound
            | QueryError::PatientInactive
            | QueryError::PatientUnassigned
            | QueryError::DoctorNotFound => AppError::BadRequest(err.to_string()),
            QueryError::InvalidTransition { .. } | QueryError::WrongDoctor => {
                AppError::Conflict(err.to_string())
            }
            QueryError::Validation(msg) => AppError::ValidationError(msg),
        }
    }
}

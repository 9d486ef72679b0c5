use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub condition: String,
    pub is_active: bool,
    pub assigned_doctor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    pub fn new(name: String, condition: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            condition,
            is_active: true,
            assigned_doctor_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.is_active && self.assigned_doctor_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialization: String,
    pub created_at: DateTime<Utc>,
}

impl Doctor {
    pub fn new(name: String, specialization: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            specialization,
            created_at: Utc::now(),
        }
    }
}

/// Review lifecycle of a medical query. Transitions only move forward:
/// pending -> doctor_review (takeQuery) -> completed (respondToQuery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Pending,
    DoctorReview,
    Completed,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Pending => "pending",
            QueryStatus::DoctorReview => "doctor_review",
            QueryStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalQuery {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub status: QueryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ai_draft_response: Option<String>,
    pub response: Option<String>,
}

impl MedicalQuery {
    pub fn new(patient_id: Uuid, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            doctor_id: None,
            title,
            description,
            status: QueryStatus::Pending,
            created_at: now,
            updated_at: now,
            ai_draft_response: None,
            response: None,
        }
    }
}

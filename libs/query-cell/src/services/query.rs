use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::events::RealtimeEvent;
use shared_models::records::{MedicalQuery, Patient, QueryStatus};
use shared_store::AppState;

use crate::models::{
    ClinicalSection, QueryError, RespondToQueryRequest, SubmitQueryRequest, TakeQueryRequest,
};
use crate::services::ai::DraftClient;
use crate::services::clinical_text::parse_draft_sections;

pub struct QueryService {
    state: AppState,
}

impl QueryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Submit a new medical query. The patient must exist, be active and
    /// have an assigned doctor. When the AI bridge is configured a draft is
    /// generated in the background; the submission never waits on it.
    pub async fn submit_query(
        &self,
        request: SubmitQueryRequest,
    ) -> Result<MedicalQuery, QueryError> {
        debug!("Submitting query for patient: {}", request.patient_id);

        if request.title.trim().is_empty() {
            return Err(QueryError::Validation("Title must not be empty".to_string()));
        }
        if request.description.trim().is_empty() {
            return Err(QueryError::Validation(
                "Description must not be empty".to_string(),
            ));
        }

        let patient = self
            .state
            .store
            .get_patient(request.patient_id)
            .await
            .ok_or(QueryError::PatientNotFound)?;

        if !patient.is_active {
            return Err(QueryError::PatientInactive);
        }
        if patient.assigned_doctor_id.is_none() {
            return Err(QueryError::PatientUnassigned);
        }

        let query = MedicalQuery::new(patient.id, request.title, request.description);
        let query = self.state.store.insert_query(query).await;

        self.state.publish(RealtimeEvent::QuerySubmitted {
            query_id: query.id,
            patient_id: patient.id,
        });

        if self.state.config.is_ai_configured() {
            let state = self.state.clone();
            let snapshot = query.clone();
            tokio::spawn(async move {
                generate_draft(state, patient, snapshot).await;
            });
        }

        Ok(query)
    }

    pub async fn get_query(&self, query_id: Uuid) -> Result<MedicalQuery, QueryError> {
        self.state
            .store
            .get_query(query_id)
            .await
            .ok_or(QueryError::NotFound)
    }

    pub async fn list_queries(&self) -> Vec<MedicalQuery> {
        self.state.store.list_queries().await
    }

    pub async fn pending_queries(&self) -> Vec<MedicalQuery> {
        self.state
            .store
            .queries_where(|q| q.status == QueryStatus::Pending)
            .await
    }

    pub async fn patient_queries(&self, patient_id: Uuid) -> Vec<MedicalQuery> {
        self.state
            .store
            .queries_where(|q| q.patient_id == patient_id)
            .await
    }

    pub async fn doctor_queries(&self, doctor_id: Uuid) -> Vec<MedicalQuery> {
        self.state
            .store
            .queries_where(|q| q.doctor_id == Some(doctor_id))
            .await
    }

    /// Claim a pending query for review. Only pending queries can be taken.
    pub async fn take_query(
        &self,
        query_id: Uuid,
        request: TakeQueryRequest,
    ) -> Result<MedicalQuery, QueryError> {
        debug!("Doctor {} taking query {}", request.doctor_id, query_id);

        if !self.state.store.doctor_exists(request.doctor_id).await {
            return Err(QueryError::DoctorNotFound);
        }

        let query = self.get_query(query_id).await?;
        if query.status != QueryStatus::Pending {
            return Err(QueryError::InvalidTransition {
                from: query.status.as_str(),
                to: QueryStatus::DoctorReview.as_str(),
            });
        }

        let query = self
            .state
            .store
            .update_query(query_id, |q| {
                q.doctor_id = Some(request.doctor_id);
                q.status = QueryStatus::DoctorReview;
                q.updated_at = Utc::now();
            })
            .await
            .ok_or(QueryError::NotFound)?;

        self.state.publish(RealtimeEvent::QueryClaimed {
            query_id,
            doctor_id: request.doctor_id,
        });

        Ok(query)
    }

    /// Record the doctor's final response and complete the query. The
    /// responding doctor must be the one who took the query.
    pub async fn respond_to_query(
        &self,
        query_id: Uuid,
        request: RespondToQueryRequest,
    ) -> Result<MedicalQuery, QueryError> {
        debug!("Doctor {} responding to query {}", request.doctor_id, query_id);

        if request.response.trim().is_empty() {
            return Err(QueryError::Validation(
                "Response must not be empty".to_string(),
            ));
        }

        let query = self.get_query(query_id).await?;
        if query.status != QueryStatus::DoctorReview {
            return Err(QueryError::InvalidTransition {
                from: query.status.as_str(),
                to: QueryStatus::Completed.as_str(),
            });
        }
        if query.doctor_id != Some(request.doctor_id) {
            return Err(QueryError::WrongDoctor);
        }

        let query = self
            .state
            .store
            .update_query(query_id, |q| {
                q.response = Some(request.response);
                q.status = QueryStatus::Completed;
                q.updated_at = Utc::now();
            })
            .await
            .ok_or(QueryError::NotFound)?;

        self.state
            .publish(RealtimeEvent::QueryCompleted { query_id });

        Ok(query)
    }

    /// The query's AI draft split into titled sections. Empty when no draft
    /// has been generated.
    pub async fn draft_sections(&self, query_id: Uuid) -> Result<Vec<ClinicalSection>, QueryError> {
        let query = self.get_query(query_id).await?;

        Ok(query
            .ai_draft_response
            .as_deref()
            .map(parse_draft_sections)
            .unwrap_or_default())
    }
}

/// Background draft generation. Failures are logged and swallowed; the
/// query stays answerable without a draft. A draft is never attached to a
/// query that completed while the bridge was thinking.
async fn generate_draft(state: AppState, patient: Patient, query: MedicalQuery) {
    let client = DraftClient::new(&state.config);

    match client.generate_draft(&patient, &query).await {
        Ok(draft) => {
            let mut stored = false;
            let updated = state
                .store
                .update_query(query.id, |q| {
                    if q.status != QueryStatus::Completed {
                        q.ai_draft_response = Some(draft);
                        stored = true;
                    }
                })
                .await;

            if updated.is_some() && stored {
                debug!("AI draft stored for query {}", query.id);
                state.publish(RealtimeEvent::DraftReady { query_id: query.id });
            }
        }
        Err(e) => {
            warn!("AI draft generation failed for query {}: {}", query.id, e);
        }
    }
}

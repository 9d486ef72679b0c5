use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Update pushed to connected portals over the realtime channel. Clients
/// treat these as refresh triggers, so payloads carry ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RealtimeEvent {
    QuerySubmitted { query_id: Uuid, patient_id: Uuid },
    DraftReady { query_id: Uuid },
    QueryClaimed { query_id: Uuid, doctor_id: Uuid },
    QueryCompleted { query_id: Uuid },
    PatientAssigned { patient_id: Uuid, doctor_id: Uuid },
    PatientUnassigned { patient_id: Uuid },
}

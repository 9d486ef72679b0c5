use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use shared_models::records::{Doctor, MedicalQuery, Patient, QueryStatus};

/// Aggregate counts reported by the monitoring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub patients: usize,
    pub doctors: usize,
    pub queries: usize,
    pub pending_queries: usize,
    pub completed_queries: usize,
}

/// In-memory record directory. All backend state lives here; the cells own
/// the referential rules, the store is just keyed tables.
pub struct Store {
    patients: RwLock<HashMap<Uuid, Patient>>,
    doctors: RwLock<HashMap<Uuid, Doctor>>,
    queries: RwLock<HashMap<Uuid, MedicalQuery>>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(HashMap::new()),
            doctors: RwLock::new(HashMap::new()),
            queries: RwLock::new(HashMap::new()),
        }
    }

    // Patients

    pub async fn insert_patient(&self, patient: Patient) -> Patient {
        let mut patients = self.patients.write().await;
        patients.insert(patient.id, patient.clone());
        patient
    }

    pub async fn get_patient(&self, id: Uuid) -> Option<Patient> {
        let patients = self.patients.read().await;
        patients.get(&id).cloned()
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        let patients = self.patients.read().await;
        let mut all: Vec<Patient> = patients.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    pub async fn patients_where<F>(&self, pred: F) -> Vec<Patient>
    where
        F: Fn(&Patient) -> bool,
    {
        let patients = self.patients.read().await;
        let mut matched: Vec<Patient> = patients.values().filter(|p| pred(p)).cloned().collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        matched
    }

    /// Apply `update` to the patient under the write lock. Returns the
    /// updated record, or None when the id is unknown.
    pub async fn update_patient<F>(&self, id: Uuid, update: F) -> Option<Patient>
    where
        F: FnOnce(&mut Patient),
    {
        let mut patients = self.patients.write().await;
        let patient = patients.get_mut(&id)?;
        update(patient);
        Some(patient.clone())
    }

    // Doctors

    pub async fn insert_doctor(&self, doctor: Doctor) -> Doctor {
        let mut doctors = self.doctors.write().await;
        doctors.insert(doctor.id, doctor.clone());
        doctor
    }

    pub async fn get_doctor(&self, id: Uuid) -> Option<Doctor> {
        let doctors = self.doctors.read().await;
        doctors.get(&id).cloned()
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        let doctors = self.doctors.read().await;
        let mut all: Vec<Doctor> = doctors.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    pub async fn doctor_exists(&self, id: Uuid) -> bool {
        let doctors = self.doctors.read().await;
        doctors.contains_key(&id)
    }

    // Queries

    pub async fn insert_query(&self, query: MedicalQuery) -> MedicalQuery {
        let mut queries = self.queries.write().await;
        queries.insert(query.id, query.clone());
        query
    }

    pub async fn get_query(&self, id: Uuid) -> Option<MedicalQuery> {
        let queries = self.queries.read().await;
        queries.get(&id).cloned()
    }

    pub async fn list_queries(&self) -> Vec<MedicalQuery> {
        self.queries_where(|_| true).await
    }

    pub async fn queries_where<F>(&self, pred: F) -> Vec<MedicalQuery>
    where
        F: Fn(&MedicalQuery) -> bool,
    {
        let queries = self.queries.read().await;
        let mut matched: Vec<MedicalQuery> =
            queries.values().filter(|q| pred(q)).cloned().collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        matched
    }

    pub async fn update_query<F>(&self, id: Uuid, update: F) -> Option<MedicalQuery>
    where
        F: FnOnce(&mut MedicalQuery),
    {
        let mut queries = self.queries.write().await;
        let query = queries.get_mut(&id)?;
        update(query);
        Some(query.clone())
    }

    pub async fn counts(&self) -> StoreCounts {
        let patients = self.patients.read().await;
        let doctors = self.doctors.read().await;
        let queries = self.queries.read().await;

        let pending = queries
            .values()
            .filter(|q| q.status == QueryStatus::Pending)
            .count();
        let completed = queries
            .values()
            .filter(|q| q.status == QueryStatus::Completed)
            .count();

        StoreCounts {
            patients: patients.len(),
            doctors: doctors.len(),
            queries: queries.len(),
            pending_queries: pending,
            completed_queries: completed,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

use shared_store::AppState;

use crate::models::SystemStats;

pub struct StatsService {
    state: AppState,
}

impl StatsService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn system_stats(&self) -> SystemStats {
        let counts = self.state.store.counts().await;

        SystemStats {
            total_patients: counts.patients,
            total_doctors: counts.doctors,
            total_queries: counts.queries,
            pending_queries: counts.pending_queries,
            completed_queries: counts.completed_queries,
        }
    }
}

use std::collections::HashMap;
use std::time::Instant;

use tracing::instrument;

use shared_store::AppState;

use crate::models::{ComponentHealth, HealthStatus, SystemHealth};

pub struct HealthService {
    start_time: Instant,
    state: AppState,
}

impl HealthService {
    pub fn new(state: AppState) -> Self {
        Self {
            start_time: Instant::now(),
            state,
        }
    }

    #[instrument(skip(self))]
    pub async fn check(&self) -> SystemHealth {
        let checks = vec![self.check_store().await, self.check_ai_bridge()];

        let overall_status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        SystemHealth {
            overall_status,
            system_uptime_seconds: self.start_time.elapsed().as_secs(),
            components: checks,
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();
        let counts = self.state.store.counts().await;
        let total_records = counts.patients + counts.doctors + counts.queries;

        ComponentHealth {
            component: "store".to_string(),
            status: HealthStatus::Healthy,
            response_time_ms: start.elapsed().as_millis() as u64,
            error_message: None,
            details: HashMap::from([(
                "total_records".to_string(),
                serde_json::Value::Number(total_records.into()),
            )]),
        }
    }

    fn check_ai_bridge(&self) -> ComponentHealth {
        if self.state.config.is_ai_configured() {
            ComponentHealth {
                component: "ai_bridge".to_string(),
                status: HealthStatus::Healthy,
                response_time_ms: 0,
                error_message: None,
                details: HashMap::from([(
                    "model".to_string(),
                    serde_json::Value::String(self.state.config.ai_model.clone()),
                )]),
            }
        } else {
            ComponentHealth {
                component: "ai_bridge".to_string(),
                status: HealthStatus::Degraded,
                response_time_ms: 0,
                error_message: Some("AI bridge not configured".to_string()),
                details: HashMap::new(),
            }
        }
    }
}

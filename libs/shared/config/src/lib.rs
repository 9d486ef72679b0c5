use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ai_bridge_url: String,
    pub ai_bridge_api_key: String,
    pub ai_model: String,
    pub heartbeat_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            ai_bridge_url: env::var("AI_BRIDGE_URL")
                .unwrap_or_else(|_| {
                    warn!("AI_BRIDGE_URL not set, AI drafting disabled");
                    String::new()
                }),
            ai_bridge_api_key: env::var("AI_BRIDGE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("AI_BRIDGE_API_KEY not set, using empty value");
                    String::new()
                }),
            ai_model: env::var("AI_MODEL")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            heartbeat_interval_secs: env::var("HEARTBEAT_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        };

        if !config.is_ai_configured() {
            warn!("AI bridge not configured - queries will carry no draft response");
        }

        config
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.ai_bridge_url.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_bridge_url: String::new(),
            ai_bridge_api_key: String::new(),
            ai_model: "gpt-4o".to_string(),
            heartbeat_interval_secs: 30,
        }
    }
}

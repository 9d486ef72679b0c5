use anyhow::{anyhow, Result};
use reqwest::{header, Client};
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::records::{MedicalQuery, Patient};

const DRAFT_SYSTEM_PROMPT: &str = "You are a clinical assistant drafting a preliminary \
response to a patient's medical question. The draft will be reviewed, edited and approved \
by the patient's physician before anything reaches the patient. Be specific to the \
patient's condition, flag anything that needs urgent in-person attention, and structure \
the answer with short titled sections.";

/// Client for the OpenAI-compatible chat-completions bridge that drafts
/// preliminary responses for doctor review.
pub struct DraftClient {
    base_url: String,
    api_key: String,
    model: String,
    http_client: Client,
}

impl DraftClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.ai_bridge_url.clone(),
            api_key: config.ai_bridge_api_key.clone(),
            model: config.ai_model.clone(),
            http_client: Client::new(),
        }
    }

    pub async fn generate_draft(
        &self,
        patient: &Patient,
        query: &MedicalQuery,
    ) -> Result<String> {
        debug!("Requesting AI draft for query: {}", query.id);

        let prompt = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": DRAFT_SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": format!(
                        "Patient condition: {}\n\nQuestion title: {}\n\nQuestion: {}",
                        patient.condition, query.title, query.description
                    )
                }
            ],
            "temperature": 0.3
        });

        let response = self
            .http_client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&prompt)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow!("AI bridge error: {}", error_text));
        }

        let ai_response: Value = response.json().await?;
        let draft = ai_response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Invalid AI bridge response format"))?
            .to_string();

        Ok(draft)
    }
}

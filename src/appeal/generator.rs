use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::appeal::templates::AppealReason;
use crate::config::Config;
use crate::error::{ClaimError, Result};

/// Whether the external text-generation capability is configured.
///
/// Built from the explicit configuration object, never from ambient
/// process state, so the core stays testable without environment setup.
#[derive(Debug, Clone)]
pub enum GeneratorCapability {
    Available {
        endpoint: String,
        model: String,
        api_key: Option<String>,
    },
    Unavailable,
}

impl GeneratorCapability {
    pub fn from_config(config: &Config) -> Self {
        match &config.generator {
            Some(generator) => GeneratorCapability::Available {
                endpoint: generator.endpoint.clone(),
                model: generator.model.clone(),
                api_key: generator.api_key.clone(),
            },
            None => GeneratorCapability::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, GeneratorCapability::Available { .. })
    }
}

/// Seam for appeal-text generation so callers and tests never need the
/// network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DraftSource {
    async fn generate(&self, reason: AppealReason, order_id: &str) -> Result<String>;
}

#[derive(Serialize)]
struct DraftRequest<'a> {
    model: &'a str,
    prompt: String,
}

#[derive(Deserialize)]
struct DraftResponse {
    text: String,
}

/// HTTP-backed draft generator. Every failure comes back as a classified
/// error value; nothing here panics or aborts the caller.
pub struct DraftGenerator {
    capability: GeneratorCapability,
    client: reqwest::Client,
}

impl DraftGenerator {
    pub fn new(capability: GeneratorCapability) -> Self {
        Self {
            capability,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(GeneratorCapability::from_config(config))
    }
}

#[async_trait]
impl DraftSource for DraftGenerator {
    async fn generate(&self, reason: AppealReason, order_id: &str) -> Result<String> {
        let (endpoint, model, api_key) = match &self.capability {
            GeneratorCapability::Available {
                endpoint,
                model,
                api_key,
            } => (endpoint, model, api_key),
            GeneratorCapability::Unavailable => return Err(ClaimError::GeneratorUnavailable),
        };

        let api_key = api_key.as_deref().ok_or_else(|| {
            ClaimError::GeneratorAuth("SAFET_GENERATOR__API_KEY is not set".to_string())
        })?;

        let prompt = build_prompt(reason, order_id);
        debug!(%reason, order_id, %endpoint, "requesting appeal draft from generator");

        let response = self
            .client
            .post(endpoint.as_str())
            .bearer_auth(api_key)
            .json(&DraftRequest { model, prompt })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClaimError::GeneratorCall(format!(
                "upstream returned {}: {}",
                status, body
            )));
        }

        let draft: DraftResponse = response.json().await?;
        Ok(draft.text)
    }
}

fn build_prompt(reason: AppealReason, order_id: &str) -> String {
    format!(
        "Write a concise, professional SAFE-T appeal letter for marketplace order {}. \
        Dispute reason code: {}. Cite the evidence a seller would attach for this reason \
        and request reinstatement of the reimbursement.",
        order_id, reason
    )
}

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};

use crate::constants::*;
use crate::models::{DateIdea, Profile};

/// Client for the generative text API used for icebreakers and date ideas.
/// Every public operation succeeds: with no API key configured the service
/// answers from deterministic local fallbacks, and any transport error,
/// timeout, or malformed body resolves to a fixed fallback as well. Callers
/// never see a generation failure.
#[derive(Debug, Clone)]
pub struct GenerationService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GenerationService {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            tracing::warn!("no generation API key configured, AI features will be simulated");
        }
        Self {
            client: Client::new(),
            api_key,
            base_url: GENERATION_API_BASE.to_string(),
        }
    }

    /// Short, warm conversation starter for a fresh match.
    pub async fn icebreaker(&self, actor: &Profile, target: &Profile) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return local_icebreaker(actor, target);
        };

        let prompt = format!(
            "Generate a single, short, warm, and cozy conversation starter (icebreaker) \
             for two people who matched on a dating app called HYGGE.\n\n\
             User 1 (Sender):\nName: {}\nInterests: {}\nCozy Thing: {}\n\n\
             User 2 (Receiver):\nName: {}\nInterests: {}\nCozy Thing: {}\n\n\
             The tone should be gentle, safe, and inviting. Keep it under 2 sentences.",
            actor.name,
            actor.interests.join(", "),
            actor.cozy_things.join(", "),
            target.name,
            target.interests.join(", "),
            target.cozy_things.join(", "),
        );

        match self.generate(key, &prompt, false).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("icebreaker generation failed: {e:#}");
                FALLBACK_ICEBREAKER.to_string()
            }
        }
    }

    /// Cozy date suggestion for an existing match.
    pub async fn date_idea(&self, actor: &Profile, target: &Profile) -> DateIdea {
        let Some(key) = self.api_key.as_deref() else {
            let (title, description) = FALLBACK_DATE_IDEA_LOCAL;
            return DateIdea {
                title: title.to_string(),
                description: description.to_string(),
            };
        };

        let prompt = format!(
            "Suggest a \"Hygge\" (cozy, safe, warm) date idea for these two people.\n\n\
             User 1: {}\nUser 2: {}\n\n\
             Return JSON with \"title\" and \"description\".",
            serde_json::to_string(actor).unwrap_or_default(),
            serde_json::to_string(target).unwrap_or_default(),
        );

        let idea = match self.generate(key, &prompt, true).await {
            Ok(text) => serde_json::from_str::<DateIdea>(text.trim())
                .map_err(|e| anyhow!("malformed date idea payload: {e}")),
            Err(e) => Err(e),
        };

        idea.unwrap_or_else(|e| {
            tracing::warn!("date idea generation failed: {e:#}");
            let (title, description) = FALLBACK_DATE_IDEA_ERROR;
            DateIdea {
                title: title.to_string(),
                description: description.to_string(),
            }
        })
    }

    /// Single attempt against the generateContent endpoint, hard-capped by
    /// the request timeout. No retries; the caller falls back instead.
    async fn generate(&self, key: &str, prompt: &str, want_json: bool) -> Result<String> {
        let url = format!("{}/{}:generateContent", self.base_url, GENERATION_MODEL);
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if want_json {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let request = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send();

        let response = timeout(Duration::from_secs(GENERATION_TIMEOUT_SECS), request)
            .await
            .map_err(|_| anyhow!("generation request timed out"))??
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("no text candidate in response"))?;
        Ok(text.trim().to_string())
    }
}

/// Deterministic icebreaker derived from the pair's first shared interest,
/// or a generic cozy one when they share none.
pub fn local_icebreaker(actor: &Profile, target: &Profile) -> String {
    let shared = actor
        .shared_interest(target)
        .unwrap_or(FALLBACK_SHARED_INTEREST);
    format!("I noticed we both like {shared}. What's your favorite way to unwind?")
}

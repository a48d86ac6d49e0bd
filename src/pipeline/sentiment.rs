//! Client for the single-text sentiment classification endpoint.

use url::Url;

use super::wire::LabelScore;
use crate::config::SentimentApiConfig;
use crate::models::Sentiment;

/// Fallback returned whenever classification cannot complete.
const NEUTRAL_FALLBACK: (Sentiment, f64) = (Sentiment::Neutral, 0.5);

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("empty classification result")]
    EmptyResult,
}

/// Sentiment inference client. One best-effort call per text, no retries.
#[derive(Clone)]
pub struct SentimentClient {
    http: reqwest::Client,
    endpoint: Url,
    api_token: String,
}

impl SentimentClient {
    pub fn new(config: &SentimentApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Classify one text.
    ///
    /// Failures of any kind degrade to the neutral default; enrichment
    /// must never abort the pipeline.
    pub async fn classify(&self, text: &str) -> (Sentiment, f64) {
        match self.try_classify(text).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%err, "sentiment classification failed, using neutral default");
                NEUTRAL_FALLBACK
            }
        }
    }

    async fn try_classify(&self, text: &str) -> Result<(Sentiment, f64), ClassifyError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClassifyError::Status(response.status().as_u16()));
        }

        // The provider ranks classes per input; we sent one input and take
        // its highest-scoring pair.
        let ranked: Vec<Vec<LabelScore>> = response.json().await?;
        let best = ranked
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(ClassifyError::EmptyResult)?;

        Ok((Sentiment::from_provider_label(&best.label), best.score))
    }
}

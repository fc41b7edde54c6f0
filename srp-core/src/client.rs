//! HTTP client for the prediction service.

use crate::config::ClientConfig;
use crate::prediction::{PredictRequest, PredictResponse, PredictionResult};
use crate::query::Query;
use anyhow::{bail, Context};
use log::{info, warn};
use reqwest::Client;

/// Sends queries to `POST <base_url>/predict`.
///
/// One request per call. No retries, timeout, or cancellation: a hanging
/// request stays pending, and overlapping calls are independent.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    config: ClientConfig,
    http: Client,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit `query` and map the outcome into a [`PredictionResult`].
    /// Failures of any kind become the generic failure; the cause is logged.
    pub async fn submit(&self, query: &Query) -> PredictionResult {
        info!("Requesting prediction for {}", query);
        match self.request(query).await {
            Ok(value) => {
                info!("Prediction for {}: {}", query, value);
                PredictionResult::Success { value }
            }
            Err(e) => {
                warn!("Prediction request for {} failed: {:#}", query, e);
                PredictionResult::failure()
            }
        }
    }

    async fn request(&self, query: &Query) -> anyhow::Result<f64> {
        let url = self.config.predict_url();
        let response = self
            .http
            .post(&url)
            .json(&PredictRequest::from(query))
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("failed to read response body")?;
        if !status.is_success() {
            let detail = serde_json::from_str::<PredictResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            bail!("bad response status {}: {}", status, detail);
        }
        let parsed: PredictResponse =
            serde_json::from_str(&body).context("response body is not valid JSON")?;
        parsed.value()
    }
}

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::{PulseError, Result};
use crate::intelligence::registry::palette_for;
use crate::models::EmotionResult;

use super::labels::translate_label;
use super::provider::EmotionClassifier;

/// HTTP emotion classifier.
///
/// Posts the base64-encoded image to `{base_url}/classify` and expects
/// `{"label": "...", "confidence": 0.93}` back. 429 and 5xx responses are
/// retried with exponential backoff.
#[derive(Clone, Debug)]
pub struct ApiClassifier {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_retries: u32,
}

const BACKOFF_BASE_MS: u64 = 100;
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// `100ms * 2^retries`, capped at [`MAX_BACKOFF`].
fn backoff_delay(retries: u32) -> Duration {
    let ms = 2_u64
        .checked_pow(retries)
        .and_then(|factor| factor.checked_mul(BACKOFF_BASE_MS))
        .unwrap_or(u64::MAX);
    Duration::from_millis(ms).min(MAX_BACKOFF)
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    model: &'a str,
    image: String,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: String,
    confidence: f32,
}

impl ApiClassifier {
    pub fn new(config: &ClassifierConfig, model: &str) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| {
                PulseError::Classifier("CLASSIFIER_BASE_URL is required for api models".to_string())
            })?
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url,
            model: model.to_string(),
            max_retries: config.max_retries.max(1),
        })
    }

    async fn make_request(&self, request: &ClassifyRequest<'_>) -> Result<ClassifyResponse> {
        let mut retries = 0;

        loop {
            let mut builder = self
                .client
                .post(format!("{}/classify", self.base_url))
                .json(request);
            if let Some(key) = &self.api_key {
                builder = builder.bearer_auth(key);
            }

            match builder.send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return Ok(resp.json::<ClassifyResponse>().await?);
                    } else if status.as_u16() == 429 || status.is_server_error() {
                        retries += 1;
                        if retries >= self.max_retries {
                            return Err(PulseError::Classifier(format!(
                                "Classifier request failed after {} retries: {status}",
                                self.max_retries
                            )));
                        }
                        tracing::debug!(%status, retries, "Retrying classifier request");
                    } else {
                        let body = resp.text().await.unwrap_or_default();
                        return Err(PulseError::Classifier(format!(
                            "Classifier request failed: {status} - {body}"
                        )));
                    }
                }
                Err(e) => {
                    retries += 1;
                    if retries >= self.max_retries {
                        return Err(PulseError::Classifier(format!(
                            "Classifier request failed after {} retries: {e}",
                            self.max_retries
                        )));
                    }
                }
            }

            tokio::time::sleep(backoff_delay(retries)).await;
        }
    }
}

#[async_trait]
impl EmotionClassifier for ApiClassifier {
    async fn classify(&self, image: &[u8]) -> Result<EmotionResult> {
        let request = ClassifyRequest {
            model: &self.model,
            image: STANDARD.encode(image),
        };

        let response = self.make_request(&request).await?;
        let emotion = translate_label(&response.label);
        let palette = palette_for(emotion);

        Ok(EmotionResult::new(
            emotion,
            response.confidence.clamp(0.0, 1.0),
            palette.primary,
            palette.intensity,
        ))
    }

    fn name(&self) -> &str {
        &self.model
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::{parse_classifier_model, ClassifierConfig};
use crate::error::{PulseError, Result};
use crate::models::EmotionResult;

use super::api::ApiClassifier;
use super::mock::MockClassifier;

/// Anything that can turn image bytes into an [`EmotionResult`].
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<EmotionResult>;

    fn name(&self) -> &str;
}

#[derive(Clone)]
enum ClassifierBackend {
    Ready(Arc<dyn EmotionClassifier>),
    Unavailable { reason: String },
}

/// Front door for image classification.
///
/// [`ClassifierProvider::analyze`] never fails: empty or non-image payloads,
/// backend errors, timeouts and an unavailable backend all resolve to
/// [`EmotionResult::fallback`].
#[derive(Clone)]
pub struct ClassifierProvider {
    backend: ClassifierBackend,
    timeout: Duration,
}

impl ClassifierProvider {
    pub fn new(config: &ClassifierConfig) -> Self {
        let (provider, model) = parse_classifier_model(&config.model);

        let backend = match provider.to_lowercase().as_str() {
            "api" => match ApiClassifier::new(config, model) {
                Ok(client) => {
                    info!(model, "API emotion classifier initialized");
                    ClassifierBackend::Ready(Arc::new(client))
                }
                Err(e) => {
                    let reason = format!("API classifier unavailable: {e}");
                    warn!("{}", reason);
                    ClassifierBackend::Unavailable { reason }
                }
            },
            _ if model.eq_ignore_ascii_case("mock") => {
                info!(
                    delay_ms = config.simulated_delay_ms,
                    "Mock emotion classifier initialized"
                );
                ClassifierBackend::Ready(Arc::new(MockClassifier::new(Duration::from_millis(
                    config.simulated_delay_ms,
                ))))
            }
            _ => {
                let reason = format!("Unknown classifier model: {}", config.model);
                warn!("{}", reason);
                ClassifierBackend::Unavailable { reason }
            }
        };

        Self {
            backend,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Wrap an already-built classifier.
    pub fn with_classifier(classifier: Arc<dyn EmotionClassifier>, timeout: Duration) -> Self {
        Self {
            backend: ClassifierBackend::Ready(classifier),
            timeout,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, ClassifierBackend::Ready(_))
    }

    pub fn backend_name(&self) -> &str {
        match &self.backend {
            ClassifierBackend::Ready(classifier) => classifier.name(),
            ClassifierBackend::Unavailable { .. } => "unavailable",
        }
    }

    pub async fn analyze(&self, image: &[u8]) -> EmotionResult {
        match self.try_analyze(image).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Emotion analysis failed, using fallback result");
                EmotionResult::fallback()
            }
        }
    }

    /// Same as [`Self::analyze`] but surfaces the failure instead of
    /// substituting the fallback.
    pub async fn try_analyze(&self, image: &[u8]) -> Result<EmotionResult> {
        if image.is_empty() {
            return Err(PulseError::Validation("Image payload is empty".to_string()));
        }
        if !infer::is_image(image) {
            return Err(PulseError::Validation(
                "Payload is not a recognized image format".to_string(),
            ));
        }

        let classifier = match &self.backend {
            ClassifierBackend::Ready(classifier) => classifier,
            ClassifierBackend::Unavailable { reason } => {
                return Err(PulseError::ClassifierUnavailable(reason.clone()))
            }
        };

        match tokio::time::timeout(self.timeout, classifier.classify(image)).await {
            Ok(result) => result,
            Err(_) => Err(PulseError::Classifier(format!(
                "Classification timed out after {} ms",
                self.timeout.as_millis()
            ))),
        }
    }
}

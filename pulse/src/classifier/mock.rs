use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PulseError, Result};
use crate::intelligence::registry::palette_for;
use crate::models::EmotionResult;

use super::labels::{translate_label, MOCK_LABELS};
use super::provider::EmotionClassifier;

/// Stand-in for a real model: waits, then picks one of [`MOCK_LABELS`].
#[derive(Debug, Clone)]
pub struct MockClassifier {
    delay: Duration,
}

impl MockClassifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl EmotionClassifier for MockClassifier {
    async fn classify(&self, _image: &[u8]) -> Result<EmotionResult> {
        tokio::time::sleep(self.delay).await;

        let mut rng = rand::thread_rng();
        let label = MOCK_LABELS
            .choose(&mut rng)
            .ok_or_else(|| PulseError::Classifier("No mock labels configured".to_string()))?;
        let emotion = translate_label(label);
        let palette = palette_for(emotion);

        Ok(EmotionResult::new(
            emotion,
            rng.gen_range(0.85..1.0),
            palette.primary,
            palette.intensity,
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

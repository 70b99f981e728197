//! Image-to-emotion classification.
//!
//! The core depends only on [`EmotionClassifier`]. Backends are selected by
//! `CLASSIFIER_MODEL` (see `config.rs`):
//! - `local/mock`: [`MockClassifier`], a simulated model with a fixed delay
//! - `api/<name>`: [`ApiClassifier`], an HTTP service at `CLASSIFIER_BASE_URL`
//!
//! ```rust,ignore
//! let classifier = ClassifierProvider::new(&config.classifier);
//! let result = classifier.analyze(&image_bytes).await;
//! ```

mod api;
mod labels;
mod mock;
mod provider;

pub use api::ApiClassifier;
pub use labels::{translate_label, MOCK_LABELS};
pub use mock::MockClassifier;
pub use provider::{ClassifierProvider, EmotionClassifier};

use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
    pub session: SessionConfig,
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for uploaded image bodies, in bytes.
    pub max_image_bytes: usize,
}

/// Emotion classifier configuration.
///
/// `model` selects the backend: `local/mock` simulates a model with a fixed
/// delay, `api/<name>` calls an HTTP classifier at `base_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub simulated_delay_ms: u64,
    pub max_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    pub refresh_delay_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: "local/mock".to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: 10,
            simulated_delay_ms: 2000,
            max_retries: 3,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("PULSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PULSE_PORT", 3000),
                max_image_bytes: parse_env_or("MAX_IMAGE_BYTES", 10 * 1024 * 1024),
            },
            classifier: ClassifierConfig {
                model: env::var("CLASSIFIER_MODEL").unwrap_or_else(|_| "local/mock".to_string()),
                api_key: env::var("CLASSIFIER_API_KEY").ok(),
                base_url: env::var("CLASSIFIER_BASE_URL").ok(),
                timeout_secs: parse_env_or("CLASSIFIER_TIMEOUT", 10),
                simulated_delay_ms: parse_env_or("CLASSIFIER_DELAY_MS", 2000),
                max_retries: parse_env_or("CLASSIFIER_MAX_RETRIES", 3),
            },
            session: SessionConfig {
                idle_timeout_secs: parse_env_or("SESSION_IDLE_TIMEOUT_SECS", 86400),
                sweep_interval_secs: parse_env_or("SESSION_SWEEP_INTERVAL_SECS", 300),
            },
            suggestions: SuggestionsConfig {
                refresh_delay_ms: parse_env_or("PLAN_REFRESH_DELAY_MS", 1000),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Known classifier backends.
pub const KNOWN_CLASSIFIER_PROVIDERS: &[&str] = &["local", "api"];

/// Parse a classifier model name into (provider, model) tuple.
pub fn parse_classifier_model(model: &str) -> (&str, &str) {
    if let Some((prefix, rest)) = model.split_once('/') {
        let prefix_lower = prefix.to_lowercase();
        if KNOWN_CLASSIFIER_PROVIDERS.contains(&prefix_lower.as_str()) {
            return (prefix, rest);
        }
    }
    ("local", model)
}

//! Translator configuration

use serde::{Deserialize, Serialize};
use signbridge_core::{SignBridgeError, SignBridgeResult};
use signbridge_gesture::{ClassifierConfig, DEFAULT_STREAM_CAPACITY};
use signbridge_history::HistoryConfig;
use signbridge_text::AnimationConfig;

/// Everything a `Translator` is tuned by
///
/// Every section is optional in JSON; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub classifier: ClassifierConfig,
    pub animation: AnimationConfig,
    pub history: HistoryConfig,
    /// Frames a gesture stream buffers before dropping the oldest
    pub stream_capacity: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            animation: AnimationConfig::default(),
            history: HistoryConfig::default(),
            stream_capacity: DEFAULT_STREAM_CAPACITY,
        }
    }
}

impl TranslatorConfig {
    /// Parse and validate
    pub fn from_json(json: &str) -> SignBridgeResult<Self> {
        let config: TranslatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SignBridgeResult<()> {
        self.classifier.validate()?;
        self.animation.validate()?;
        self.history
            .validate()
            .map_err(|e| SignBridgeError::InvalidConfig(e.to_string()))?;
        if self.stream_capacity == 0 {
            return Err(SignBridgeError::InvalidConfig(
                "stream_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

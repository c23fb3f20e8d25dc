//! Animation timing
//!
//! Each sign unit becomes one playback step. Step indices are zero-based
//! and follow the sign order; the duration depends only on whether the
//! unit is a pause.

use serde::{Deserialize, Serialize};
use signbridge_core::{AnimationStep, SignBridgeError, SignBridgeResult, SignUnit};

/// Display durations per unit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Phrase, word and letter units
    pub content_ms: u32,
    /// Pause units between spelled words
    pub pause_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            content_ms: 500,
            pause_ms: 500,
        }
    }
}

impl AnimationConfig {
    pub fn duration_for(&self, unit: &SignUnit) -> u32 {
        if unit.is_pause() {
            self.pause_ms
        } else {
            self.content_ms
        }
    }

    /// Content units must be visible for some time; pauses may be zero
    pub fn validate(&self) -> SignBridgeResult<()> {
        if self.content_ms == 0 {
            return Err(SignBridgeError::InvalidConfig(
                "content_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Playback length of a whole sequence
    pub fn total_ms(&self, signs: &[SignUnit]) -> u64 {
        signs.iter().map(|s| self.duration_for(s) as u64).sum()
    }
}

/// Pair each unit with its step index and duration
pub fn build_animation(signs: &[SignUnit], config: &AnimationConfig) -> Vec<AnimationStep> {
    signs
        .iter()
        .enumerate()
        .map(|(step, unit)| AnimationStep {
            step,
            duration_ms: config.duration_for(unit),
            glyph: unit.glyph.clone(),
            description: unit.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signs() -> Vec<SignUnit> {
        vec![
            SignUnit::letter('Z', "⚡"),
            SignUnit::pause(),
            SignUnit::word("HELLO", "👋"),
        ]
    }

    #[test]
    fn test_steps_follow_sign_order() {
        let steps = build_animation(&signs(), &AnimationConfig::default());
        assert_eq!(steps.len(), 3);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step, i);
            assert_eq!(step.duration_ms, 500);
        }
        assert_eq!(steps[0].glyph, "⚡");
        assert_eq!(steps[2].description, "Sign for HELLO");
    }

    #[test]
    fn test_shorter_pauses() {
        let config = AnimationConfig {
            content_ms: 600,
            pause_ms: 200,
        };
        let steps = build_animation(&signs(), &config);
        let durations: Vec<u32> = steps.iter().map(|s| s.duration_ms).collect();
        assert_eq!(durations, vec![600, 200, 600]);
        assert_eq!(config.total_ms(&signs()), 1400);
    }

    #[test]
    fn test_empty_signs() {
        assert!(build_animation(&[], &AnimationConfig::default()).is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(AnimationConfig::default().validate().is_ok());
        let bad = AnimationConfig {
            content_ms: 0,
            pause_ms: 0,
        };
        assert!(bad.validate().is_err());

        let partial: AnimationConfig = serde_json::from_str(r#"{"pause_ms": 250}"#).unwrap();
        assert_eq!(partial.content_ms, 500);
        assert_eq!(partial.pause_ms, 250);
    }
}

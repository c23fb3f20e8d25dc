//! Translation results and inputs for the public operations

use serde::{Deserialize, Deserializer, Serialize};

use crate::{AnimationStep, GestureLabel, Handedness, Landmark, SignUnit};

/// Confidence reported for any rule-based recognition
///
/// Rule matches are not graded; every recognized input reports this value.
pub const RULE_CONFIDENCE: f32 = 0.8;

/// Input for sign → text: landmarks to classify, or a label hint that
/// bypasses classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInput {
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    /// A blank name on the wire counts as no hint
    #[serde(default, rename = "gesture", deserialize_with = "deserialize_hint")]
    pub hint: Option<GestureLabel>,
    #[serde(default)]
    pub handedness: Handedness,
}

fn deserialize_hint<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GestureLabel>, D::Error> {
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name
        .filter(|n| !n.trim().is_empty())
        .map(|n| GestureLabel::parse(&n)))
}

impl SignInput {
    pub fn from_landmarks(landmarks: Vec<Landmark>, handedness: Handedness) -> Self {
        Self {
            landmarks,
            hint: None,
            handedness,
        }
    }

    pub fn from_hint(hint: GestureLabel) -> Self {
        Self {
            landmarks: Vec::new(),
            hint: Some(hint),
            handedness: Handedness::Right,
        }
    }

    /// Neither landmarks nor a hint were supplied
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty() && self.hint.is_none()
    }
}

/// Result of sign → text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignTranslation {
    pub text: String,
    pub confidence: f32,
    pub gesture: GestureLabel,
}

impl SignTranslation {
    /// Result for a request with no landmarks and no hint
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            confidence: 0.0,
            gesture: GestureLabel::Unknown,
        }
    }
}

/// Result of gesture sequence → text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceTranslation {
    /// Labels in input order, before cleaning
    ///
    /// Names are normalized on the way in: `rock` reads back as `ily` and
    /// unrecognized names as `unknown`.
    pub input_gestures: Vec<GestureLabel>,
    /// Labels after dropping `unknown` and collapsing consecutive repeats
    pub cleaned_gestures: Vec<GestureLabel>,
    pub text: String,
}

/// Result of text → sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTranslation {
    /// Caller's text, unmodified
    pub text: String,
    pub signs: Vec<SignUnit>,
    pub animation: Vec<AnimationStep>,
}

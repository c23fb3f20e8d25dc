//! Gesture → display text
//!
//! A hint names the gesture directly and skips classification. Without a
//! hint the landmarks are classified. Any recognized input reports the
//! fixed rule confidence, including an `unknown` result.

use signbridge_core::{GestureLabel, Lexicon, SignInput, SignTranslation, RULE_CONFIDENCE};
use signbridge_gesture::GestureClassifier;

/// Text shown for labels the lexicon has no entry for
pub const UNKNOWN_GESTURE_TEXT: &str = "Unknown gesture";

/// Display text for a label, falling back to [`UNKNOWN_GESTURE_TEXT`]
pub fn gesture_text(label: GestureLabel, lexicon: &Lexicon) -> &str {
    lexicon.gesture_text(label).unwrap_or(UNKNOWN_GESTURE_TEXT)
}

/// Sign → text for one frame or hint
pub fn sign_to_text(
    input: &SignInput,
    lexicon: &Lexicon,
    classifier: &GestureClassifier,
) -> SignTranslation {
    if input.is_empty() {
        return SignTranslation::empty();
    }

    let gesture = match input.hint {
        Some(hint) => hint,
        None => classifier.classify(&input.landmarks, input.handedness),
    };

    SignTranslation {
        text: gesture_text(gesture, lexicon).to_string(),
        confidence: RULE_CONFIDENCE,
        gesture,
    }
}

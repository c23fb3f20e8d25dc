//! Gesture sequence → sentence
//!
//! A captured stream repeats the same label for many frames and is sprinkled
//! with `unknown` noise. Cleaning drops the noise and collapses runs, so
//! `[open_palm, open_palm, fist, open_palm]` becomes
//! `[open_palm, fist, open_palm]` (non-adjacent repeats survive).
//!
//! Matching tries, in order:
//! 1. a pattern equal to the whole cleaned sequence
//! 2. a pattern of two or more labels appearing as a contiguous run inside it
//! 3. the per-label display texts joined with spaces
//!
//! Single-label patterns only match exactly. Otherwise any sequence that
//! merely contains `fist` would collapse to "Stop".
//!
//! Both searches walk patterns longest first; equal lengths keep table
//! order, so the first-listed pattern wins a tie.

use signbridge_core::{GestureLabel, Lexicon, SequencePattern, SequenceTranslation};
use tracing::debug;

/// Drop `unknown` and collapse consecutive duplicates
pub fn compress(labels: &[GestureLabel]) -> Vec<GestureLabel> {
    let mut cleaned: Vec<GestureLabel> = labels.iter().copied().filter(|l| !l.is_unknown()).collect();
    cleaned.dedup();
    cleaned
}

/// Shortest pattern eligible for the containment search
pub const MIN_CONTAINED_PATTERN: usize = 2;

/// Does `pattern` occur as a contiguous run of `labels`?
fn contains_run(labels: &[GestureLabel], pattern: &[GestureLabel]) -> bool {
    pattern.len() >= MIN_CONTAINED_PATTERN && labels.windows(pattern.len()).any(|w| w == pattern)
}

/// Matches cleaned sequences against the lexicon's pattern table
#[derive(Debug, Clone, Copy)]
pub struct SequenceMatcher<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Best pattern for an already cleaned sequence, if any
    pub fn find(&self, cleaned: &[GestureLabel]) -> Option<&'a SequencePattern> {
        if cleaned.is_empty() {
            return None;
        }

        let exact = self
            .lexicon
            .ranked_patterns()
            .find(|p| p.pattern.as_slice() == cleaned);
        if let Some(pattern) = exact {
            debug!("Sequence matched exactly: {:?}", pattern.text);
            return Some(pattern);
        }

        let partial = self
            .lexicon
            .ranked_patterns()
            .find(|p| contains_run(cleaned, &p.pattern));
        if let Some(pattern) = partial {
            debug!("Sequence matched by containment: {:?}", pattern.text);
        }
        partial
    }

    /// Per-label display texts joined with spaces
    pub fn fallback_text(&self, cleaned: &[GestureLabel]) -> String {
        cleaned
            .iter()
            .map(|label| self.lexicon.gesture_text(*label).unwrap_or(label.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Clean, match and resolve a raw label stream
    pub fn translate(&self, labels: &[GestureLabel]) -> SequenceTranslation {
        let cleaned = compress(labels);
        let text = match self.find(&cleaned) {
            Some(pattern) => pattern.text.clone(),
            None => {
                debug!("No sequence pattern for {} labels, using fallback", cleaned.len());
                self.fallback_text(&cleaned)
            }
        };

        SequenceTranslation {
            input_gestures: labels.to_vec(),
            cleaned_gestures: cleaned,
            text,
        }
    }
}

/// Translate a label stream with the given lexicon
pub fn sequence_to_text(labels: &[GestureLabel], lexicon: &Lexicon) -> SequenceTranslation {
    SequenceMatcher::new(lexicon).translate(labels)
}

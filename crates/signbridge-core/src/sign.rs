//! Sign units and animation steps
//!
//! A sign sequence is ordered: position is reading order and playback order.

use serde::{Deserialize, Serialize};

/// Glyph emitted between letter-spelled words
pub const PAUSE_GLYPH: &str = "⏸️";
/// Character slot of a pause unit
pub const PAUSE_CHARACTER: &str = " ";
pub const PAUSE_DESCRIPTION: &str = "Pause";

/// One glyph + description pair for a phrase, word, letter or pause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUnit {
    /// Phrase, word, letter or the pause marker
    pub character: String,
    /// Symbolic representation
    pub glyph: String,
    /// Human-readable label
    pub description: String,
}

impl SignUnit {
    pub fn new(
        character: impl Into<String>,
        glyph: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            character: character.into(),
            glyph: glyph.into(),
            description: description.into(),
        }
    }

    /// Unit for a whole known phrase
    pub fn phrase(phrase: &str, glyph: &str) -> Self {
        Self::new(phrase, glyph, phrase)
    }

    /// Unit for a known word inside a longer sentence
    pub fn word(word: &str, glyph: &str) -> Self {
        Self::new(word, glyph, format!("Sign for {}", word))
    }

    /// Unit for a finger-spelled letter
    pub fn letter(letter: char, glyph: &str) -> Self {
        Self::new(letter.to_string(), glyph, format!("Letter {}", letter))
    }

    pub fn pause() -> Self {
        Self::new(PAUSE_CHARACTER, PAUSE_GLYPH, PAUSE_DESCRIPTION)
    }

    pub fn is_pause(&self) -> bool {
        self.glyph == PAUSE_GLYPH
    }
}

/// One timed playback step derived from a sign unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStep {
    /// Zero-based position in the sequence
    pub step: usize,
    /// Display time in milliseconds
    pub duration_ms: u32,
    pub glyph: String,
    pub description: String,
}

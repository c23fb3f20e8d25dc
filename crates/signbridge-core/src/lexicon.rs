//! Lexicon - the static tables every translation reads
//!
//! Four tables:
//! - gesture texts: label → display text
//! - words: upper-case word or phrase → glyph
//! - alphabet: upper-case letter → glyph (finger-spelling fallback)
//! - sequence patterns: ordered labels → sentence
//!
//! A `Lexicon` is validated once and then only read. Share it by reference
//! or behind an `Arc`; nothing mutates it after construction.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{GestureLabel, SignBridgeError, SignBridgeResult};

// ============================================================================
// BUILT-IN TABLES
// ============================================================================

const GESTURE_TEXTS: [(GestureLabel, &str); 17] = [
    (GestureLabel::ThumbsUp, "Good / Yes"),
    (GestureLabel::ThumbsDown, "Bad / No"),
    (GestureLabel::OpenPalm, "Hello"),
    (GestureLabel::Wave, "Bye"),
    (GestureLabel::PointingUp, "One"),
    (GestureLabel::Peace, "Peace"),
    (GestureLabel::Two, "Two"),
    (GestureLabel::Three, "Three"),
    (GestureLabel::Four, "Four"),
    (GestureLabel::Ily, "ILY / Love"),
    (GestureLabel::Fist, "Stop"),
    (GestureLabel::OpenPalmHold, "Wait"),
    (GestureLabel::PointForward, "You"),
    (GestureLabel::PointSelf, "Me"),
    (GestureLabel::Ok, "Okay"),
    (GestureLabel::Call, "Call"),
    (GestureLabel::Unknown, "Unknown gesture"),
];

const WORD_GLYPHS: [(&str, &str); 27] = [
    ("HELLO", "👋"),
    ("HI", "👋"),
    ("BYE", "👋"),
    ("GOOD", "👍"),
    ("YES", "👍"),
    ("BAD", "👎"),
    ("NO", "👎"),
    ("STOP", "✊"),
    ("WAIT", "🤚"),
    ("OK", "👌"),
    ("OKAY", "👌"),
    ("LOVE", "❤️"),
    ("I LOVE YOU", "🤟"),
    ("PLEASE", "🙏"),
    ("THANK YOU", "🙏"),
    ("YOU", "👉"),
    ("ME", "👈"),
    ("I", "👈"),
    ("ONE", "☝️"),
    ("TWO", "✌️"),
    ("PEACE", "✌️"),
    ("GOOD MORNING", "🌅"),
    ("GOOD NIGHT", "🌙"),
    ("SEE YOU", "👋👉"),
    ("HOW ARE YOU", "🖐👉❓"),
    ("WHAT IS YOUR NAME", "🤔👉💬"),
    ("NICE TO MEET YOU", "😊🤝👉"),
];

const ALPHABET_GLYPHS: [(char, &str); 26] = [
    ('A', "👊"),
    ('B', "✋"),
    ('C', "🤏"),
    ('D', "☝️"),
    ('E', "🤚"),
    ('F', "👌"),
    ('G', "👉"),
    ('H', "✌️"),
    ('I', "🤙"),
    ('J', "🌙"),
    ('K', "🫰"),
    ('L', "👈"),
    ('M', "✊"),
    ('N', "🤞"),
    ('O', "⚪"),
    ('P', "🫱"),
    ('Q', "🫲"),
    ('R', "🤝"),
    ('S', "✂️"),
    ('T', "🙏"),
    ('U', "✌️"),
    ('V', "✌️"),
    ('W', "🖖"),
    ('X', "❌"),
    ('Y', "🤟"),
    ('Z', "⚡"),
];

fn builtin_patterns() -> Vec<SequencePattern> {
    use GestureLabel::*;

    vec![
        SequencePattern::new(&[OpenPalm], "Hello"),
        SequencePattern::new(&[OpenPalm, PointForward], "Hello"),
        SequencePattern::new(&[OpenPalm, PointForward, Ok], "How are you?"),
        SequencePattern::new(&[OpenPalm, PointForward, Peace], "How are you?"),
        SequencePattern::new(&[PointSelf, ThumbsUp], "I am good"),
        SequencePattern::new(&[PointSelf, Ok], "I am fine"),
        SequencePattern::new(&[PointSelf, ThumbsDown], "I am not fine"),
        SequencePattern::new(&[OpenPalm, PointSelf, OpenPalm], "Thank you"),
        SequencePattern::new(&[ThumbsUp], "Yes"),
        SequencePattern::new(&[ThumbsDown], "No"),
        SequencePattern::new(&[Fist], "Stop"),
        SequencePattern::new(&[PointForward, ThumbsUp], "You are good"),
        SequencePattern::new(&[PointSelf, PointForward], "Me and you"),
        SequencePattern::new(&[OpenPalm, OpenPalm], "Goodbye"),
        SequencePattern::new(&[OpenPalm, ThumbsUp], "Good morning"),
        SequencePattern::new(&[OpenPalm, Fist], "Good night"),
        SequencePattern::new(&[Peace, PointForward], "Peace to you"),
        SequencePattern::new(&[PointForward, PointSelf, Ok], "What is your name?"),
        SequencePattern::new(&[PointForward, PointSelf, Peace], "Nice to meet you"),
        SequencePattern::new(&[PointForward, Call], "Call me"),
        SequencePattern::new(&[OpenPalm, Peace, PointForward], "See you soon"),
        SequencePattern::new(&[OpenPalm, Ok, PointForward], "How are you today?"),
        SequencePattern::new(&[PointSelf, Ily], "I love you"),
        SequencePattern::new(&[Ily, PointForward], "Love you"),
    ]
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Multi-gesture sentence: the labels must appear in this order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePattern {
    pub pattern: Vec<GestureLabel>,
    pub text: String,
}

impl SequencePattern {
    pub fn new(pattern: &[GestureLabel], text: &str) -> Self {
        Self {
            pattern: pattern.to_vec(),
            text: text.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Raw, unvalidated lexicon tables as they appear in a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconTables {
    pub gestures: BTreeMap<GestureLabel, String>,
    pub words: BTreeMap<String, String>,
    pub alphabet: BTreeMap<String, String>,
    pub patterns: Vec<SequencePattern>,
}

/// Validated, read-only lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    gestures: BTreeMap<GestureLabel, String>,
    words: HashMap<String, String>,
    alphabet: HashMap<char, String>,
    /// Table order; used as the tie-break between equal-length patterns
    patterns: Vec<SequencePattern>,
    /// Indices into `patterns`, longest first, stable on table order
    ranked: Vec<usize>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The tables SignBridge ships with
    pub fn builtin() -> Self {
        let gestures = GESTURE_TEXTS
            .iter()
            .map(|(label, text)| (*label, text.to_string()))
            .collect();
        let words = WORD_GLYPHS
            .iter()
            .map(|(word, glyph)| (word.to_string(), glyph.to_string()))
            .collect();
        let alphabet = ALPHABET_GLYPHS
            .iter()
            .map(|(letter, glyph)| (*letter, glyph.to_string()))
            .collect();

        Self::assemble(gestures, words, alphabet, builtin_patterns())
    }

    /// Validate raw tables
    ///
    /// Words and letters are upper-cased so lookups match the upper-cased
    /// input. Every pattern must be non-empty and free of `unknown`, which
    /// the matcher strips before matching.
    pub fn from_tables(tables: LexiconTables) -> SignBridgeResult<Self> {
        let mut words = HashMap::with_capacity(tables.words.len());
        for (word, glyph) in tables.words {
            let key = word.trim().to_uppercase();
            if glyph.is_empty() {
                warn!("Rejecting lexicon: word {:?} has no glyph", key);
                return Err(SignBridgeError::EmptyGlyph(key));
            }
            words.insert(key, glyph);
        }

        let mut alphabet = HashMap::with_capacity(tables.alphabet.len());
        for (key, glyph) in tables.alphabet {
            let mut chars = key.trim().chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_alphabetic() => c.to_uppercase().next().unwrap_or(c),
                _ => {
                    warn!("Rejecting lexicon: alphabet key {:?}", key);
                    return Err(SignBridgeError::InvalidLetter(key));
                }
            };
            if glyph.is_empty() {
                return Err(SignBridgeError::EmptyGlyph(key));
            }
            alphabet.insert(letter, glyph);
        }

        for pattern in &tables.patterns {
            if pattern.is_empty() {
                warn!("Rejecting lexicon: empty pattern for {:?}", pattern.text);
                return Err(SignBridgeError::EmptyPattern(pattern.text.clone()));
            }
            if pattern.pattern.iter().any(GestureLabel::is_unknown) {
                return Err(SignBridgeError::UnknownInPattern {
                    text: pattern.text.clone(),
                });
            }
        }

        Ok(Self::assemble(tables.gestures, words, alphabet, tables.patterns))
    }

    /// Parse and validate tables from JSON
    pub fn from_json(json: &str) -> SignBridgeResult<Self> {
        let tables: LexiconTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    fn assemble(
        gestures: BTreeMap<GestureLabel, String>,
        words: HashMap<String, String>,
        alphabet: HashMap<char, String>,
        patterns: Vec<SequencePattern>,
    ) -> Self {
        let mut ranked: Vec<usize> = (0..patterns.len()).collect();
        // sort_by_key is stable: equal lengths keep table order
        ranked.sort_by_key(|&i| std::cmp::Reverse(patterns[i].len()));

        Self {
            gestures,
            words,
            alphabet,
            patterns,
            ranked,
        }
    }

    /// Export the tables, e.g. to write a starting point for a custom file
    pub fn to_tables(&self) -> LexiconTables {
        LexiconTables {
            gestures: self.gestures.clone(),
            words: self
                .words
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            alphabet: self
                .alphabet
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            patterns: self.patterns.clone(),
        }
    }

    /// Display text for a label, if the table has one
    pub fn gesture_text(&self, label: GestureLabel) -> Option<&str> {
        self.gestures.get(&label).map(String::as_str)
    }

    /// Glyph for an upper-case word or phrase
    pub fn word_glyph(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Glyph for an upper-case letter
    pub fn letter_glyph(&self, letter: char) -> Option<&str> {
        self.alphabet.get(&letter).map(String::as_str)
    }

    /// Patterns in table order
    pub fn patterns(&self) -> &[SequencePattern] {
        &self.patterns
    }

    /// Patterns longest first; equal lengths in table order
    pub fn ranked_patterns(&self) -> impl Iterator<Item = &SequencePattern> + '_ {
        self.ranked.iter().map(move |&i| &self.patterns[i])
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.gesture_text(GestureLabel::OpenPalm), Some("Hello"));
        assert_eq!(lexicon.gesture_text(GestureLabel::Unknown), Some("Unknown gesture"));
        assert_eq!(lexicon.word_glyph("HI"), Some("👋"));
        assert_eq!(lexicon.word_glyph("THANK YOU"), Some("🙏"));
        assert_eq!(lexicon.word_glyph("hi"), None);
        assert_eq!(lexicon.letter_glyph('Z'), Some("⚡"));
        assert_eq!(lexicon.letter_glyph('7'), None);
    }

    #[test]
    fn test_every_label_has_text() {
        let lexicon = Lexicon::builtin();
        for label in GestureLabel::ALL {
            assert!(lexicon.gesture_text(label).is_some(), "{} missing", label);
        }
    }

    #[test]
    fn test_ranked_patterns_longest_first_stable() {
        let lexicon = Lexicon::builtin();
        let ranked: Vec<&SequencePattern> = lexicon.ranked_patterns().collect();

        assert_eq!(ranked.len(), lexicon.patterns().len());
        assert!(ranked.windows(2).all(|w| w[0].len() >= w[1].len()));

        // First three-label pattern in table order comes first
        assert_eq!(ranked[0].text, "How are you?");
        assert_eq!(
            ranked[0].pattern,
            vec![GestureLabel::OpenPalm, GestureLabel::PointForward, GestureLabel::Ok]
        );
    }

    #[test]
    fn test_from_json_normalizes_keys() {
        let json = r#"{
            "gestures": {"open_palm": "Hi there"},
            "words": {"hola": "👋"},
            "alphabet": {"a": "👊"},
            "patterns": [{"pattern": ["open_palm", "rock"], "text": "Hi love"}]
        }"#;
        let lexicon = Lexicon::from_json(json).unwrap();

        assert_eq!(lexicon.gesture_text(GestureLabel::OpenPalm), Some("Hi there"));
        assert_eq!(lexicon.gesture_text(GestureLabel::Fist), None);
        assert_eq!(lexicon.word_glyph("HOLA"), Some("👋"));
        assert_eq!(lexicon.letter_glyph('A'), Some("👊"));
        assert_eq!(
            lexicon.patterns()[0].pattern,
            vec![GestureLabel::OpenPalm, GestureLabel::Ily]
        );
    }

    #[test]
    fn test_rejects_bad_tables() {
        let bad_letter = r#"{"alphabet": {"AB": "x"}}"#;
        assert!(matches!(
            Lexicon::from_json(bad_letter),
            Err(SignBridgeError::InvalidLetter(_))
        ));

        let empty_pattern = r#"{"patterns": [{"pattern": [], "text": "nothing"}]}"#;
        assert!(matches!(
            Lexicon::from_json(empty_pattern),
            Err(SignBridgeError::EmptyPattern(_))
        ));

        let unknown_pattern = r#"{"patterns": [{"pattern": ["wiggle"], "text": "?"}]}"#;
        assert!(matches!(
            Lexicon::from_json(unknown_pattern),
            Err(SignBridgeError::UnknownInPattern { .. })
        ));

        assert!(matches!(
            Lexicon::from_json("{not json"),
            Err(SignBridgeError::Json(_))
        ));
    }

    #[test]
    fn test_tables_roundtrip_through_json() {
        let lexicon = Lexicon::builtin();
        let json = serde_json::to_string(&lexicon.to_tables()).unwrap();
        let reloaded = Lexicon::from_json(&json).unwrap();

        assert_eq!(reloaded.patterns(), lexicon.patterns());
        assert_eq!(reloaded.word_count(), lexicon.word_count());
        assert_eq!(reloaded.letter_glyph('Q'), Some("🫲"));
    }
}

//! Text → sign units
//!
//! Lookup order for an upper-cased, trimmed input:
//! 1. the whole input as a known phrase → one unit
//! 2. per whitespace token: a known word → one unit
//! 3. otherwise finger-spell the token, one unit per known letter, then a
//!    pause unless it is the last token
//!
//! Characters outside the alphabet are skipped without a trace in the
//! output. The result echoes the caller's text as given.

use signbridge_core::{Lexicon, SignUnit, TextTranslation};
use tracing::debug;

use crate::{build_animation, AnimationConfig};

/// Sign units for `text`, without the animation
pub fn map_text(text: &str, lexicon: &Lexicon) -> Vec<SignUnit> {
    let upper = text.to_uppercase();
    let upper = upper.trim();
    if upper.is_empty() {
        return Vec::new();
    }

    if let Some(glyph) = lexicon.word_glyph(upper) {
        debug!("Text matched as a phrase: {:?}", upper);
        return vec![SignUnit::phrase(upper, glyph)];
    }

    let tokens: Vec<&str> = upper.split_whitespace().collect();
    let mut signs = Vec::with_capacity(upper.len());
    for (i, token) in tokens.iter().enumerate() {
        if let Some(glyph) = lexicon.word_glyph(token) {
            signs.push(SignUnit::word(token, glyph));
            continue;
        }

        signs.extend(spell(token, lexicon));
        if i + 1 < tokens.len() {
            signs.push(SignUnit::pause());
        }
    }
    signs
}

/// One unit per letter the alphabet knows
fn spell<'a>(token: &'a str, lexicon: &'a Lexicon) -> impl Iterator<Item = SignUnit> + 'a {
    token.chars().filter_map(move |c| {
        lexicon
            .letter_glyph(c)
            .map(|glyph| SignUnit::letter(c, glyph))
    })
}

/// Full text → sign translation with animation steps
pub fn text_to_signs(text: &str, lexicon: &Lexicon, animation: &AnimationConfig) -> TextTranslation {
    let signs = map_text(text, lexicon);
    let animation = build_animation(&signs, animation);
    TextTranslation {
        text: text.to_string(),
        signs,
        animation,
    }
}

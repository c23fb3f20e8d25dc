//! Translator - one entry point for every translation direction
//!
//! The lexicon sits behind an `Arc` and is never mutated, so a
//! `Translator` can be cloned cheaply and shared across threads.
//! Statistics are shared between clones.

use std::sync::Arc;

use signbridge_core::{
    GestureLabel, Handedness, Landmark, Lexicon, SequenceTranslation, SignBridgeResult,
    SignInput, SignTranslation, TextTranslation,
};
use signbridge_gesture::{Classification, GestureClassifier, GestureStream, SequenceMatcher};
use signbridge_history::{HistoryRecord, HistoryResult, HistoryStore, TranslationKind};
use signbridge_text::{sign_to_text, text_to_signs};
use tracing::{debug, info};

use crate::{StatsSnapshot, TranslatorConfig, TranslatorStats};

#[derive(Clone)]
pub struct Translator {
    config: TranslatorConfig,
    lexicon: Arc<Lexicon>,
    classifier: GestureClassifier,
    history: Option<Arc<dyn HistoryStore>>,
    stats: Arc<TranslatorStats>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .field("words", &self.lexicon.word_count())
            .field("patterns", &self.lexicon.patterns().len())
            .field("history", &self.history.is_some())
            .finish()
    }
}

impl Translator {
    /// Translator over the built-in lexicon
    pub fn new(config: TranslatorConfig) -> SignBridgeResult<Self> {
        Self::with_lexicon(config, Lexicon::builtin())
    }

    pub fn with_lexicon(config: TranslatorConfig, lexicon: Lexicon) -> SignBridgeResult<Self> {
        Self::with_shared_lexicon(config, Arc::new(lexicon))
    }

    pub fn with_shared_lexicon(
        config: TranslatorConfig,
        lexicon: Arc<Lexicon>,
    ) -> SignBridgeResult<Self> {
        config.validate()?;
        info!(
            "Translator ready: {} words, {} sequence patterns",
            lexicon.word_count(),
            lexicon.patterns().len()
        );

        Ok(Self {
            classifier: GestureClassifier::new(config.classifier.clone()),
            config,
            lexicon,
            history: None,
            stats: Arc::new(TranslatorStats::default()),
        })
    }

    /// Attach a store that `record` and `history` go to
    pub fn with_history(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.history = Some(store);
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // ========================================================================
    // TRANSLATION
    // ========================================================================

    pub fn classify_gesture(&self, landmarks: &[Landmark], handedness: Handedness) -> GestureLabel {
        let label = self.classifier.classify(landmarks, handedness);
        self.stats.record_classification(label);
        label
    }

    /// Classification with the deciding rule and finger states
    pub fn explain_gesture(&self, landmarks: &[Landmark], handedness: Handedness) -> Classification {
        let classification = self.classifier.explain(landmarks, handedness);
        self.stats.record_classification(classification.label);
        classification
    }

    pub fn gesture_to_text(&self, input: &SignInput) -> SignTranslation {
        self.stats.record_sign_to_text();
        let result = sign_to_text(input, &self.lexicon, &self.classifier);
        if input.hint.is_none() && !input.landmarks.is_empty() {
            self.stats.record_classification(result.gesture);
        }
        result
    }

    pub fn sequence_to_text(&self, labels: &[GestureLabel]) -> SequenceTranslation {
        self.stats.record_sequence();
        SequenceMatcher::new(&self.lexicon).translate(labels)
    }

    pub fn text_to_signs(&self, text: &str) -> TextTranslation {
        self.stats.record_text_to_signs();
        text_to_signs(text, &self.lexicon, &self.config.animation)
    }

    /// Empty stream sized by the configured capacity
    pub fn stream(&self) -> GestureStream {
        GestureStream::new(self.config.stream_capacity)
    }

    /// Translate and empty a stream
    pub fn finish_stream(&self, stream: &mut GestureStream) -> SequenceTranslation {
        self.stats.record_sequence();
        stream.finish(&self.lexicon)
    }

    // ========================================================================
    // HISTORY
    // ========================================================================

    /// Save a translation. `Ok(None)` when no store is attached.
    pub fn record(
        &self,
        user_id: &str,
        input: &str,
        output: &str,
        kind: TranslationKind,
    ) -> HistoryResult<Option<HistoryRecord>> {
        let Some(store) = &self.history else {
            debug!("No history store attached, {} translation not recorded", kind);
            return Ok(None);
        };
        let record = store.save(user_id, input, output, kind)?;
        self.stats.record_history();
        Ok(Some(record))
    }

    /// Text → signs, recorded for `user_id`
    ///
    /// The output stored is the concatenated glyphs. Nothing is recorded
    /// when the text maps to no signs.
    pub fn text_to_signs_for(
        &self,
        user_id: &str,
        text: &str,
    ) -> HistoryResult<TextTranslation> {
        let result = self.text_to_signs(text);
        if !result.signs.is_empty() {
            let glyphs: String = result.signs.iter().map(|s| s.glyph.as_str()).collect();
            self.record(user_id, text, &glyphs, TranslationKind::TextToSign)?;
        }
        Ok(result)
    }

    /// Sign → text, recorded for `user_id` with the gesture name as input
    ///
    /// Requests with no landmarks and no hint are not recorded.
    pub fn gesture_to_text_for(
        &self,
        user_id: &str,
        input: &SignInput,
    ) -> HistoryResult<SignTranslation> {
        let result = self.gesture_to_text(input);
        if !result.text.is_empty() {
            self.record(
                user_id,
                result.gesture.as_str(),
                &result.text,
                TranslationKind::SignToText,
            )?;
        }
        Ok(result)
    }

    /// Sequence → text, recorded for `user_id` with the cleaned labels as input
    pub fn sequence_to_text_for(
        &self,
        user_id: &str,
        labels: &[GestureLabel],
    ) -> HistoryResult<SequenceTranslation> {
        let result = self.sequence_to_text(labels);
        if !result.text.is_empty() {
            let input = result
                .cleaned_gestures
                .iter()
                .map(GestureLabel::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            self.record(
                user_id,
                &input,
                &result.text,
                TranslationKind::SignSequenceToText,
            )?;
        }
        Ok(result)
    }

    /// Newest first. Empty when no store is attached.
    pub fn history(&self, user_id: &str, limit: Option<usize>) -> HistoryResult<Vec<HistoryRecord>> {
        match &self.history {
            Some(store) => store.history(user_id, limit),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signbridge_core::SignBridgeError;
    use signbridge_history::{HistoryError, MemoryHistory};
    use std::thread;

    fn translator() -> Translator {
        Translator::new(TranslatorConfig::default()).unwrap()
    }

    #[test]
    fn test_four_operations() {
        let t = translator();

        assert_eq!(
            t.classify_gesture(&[Landmark::xy(0.5, 0.5); 4], Handedness::Right),
            GestureLabel::Unknown
        );

        let sign = t.gesture_to_text(&SignInput::from_hint(GestureLabel::OpenPalm));
        assert_eq!(sign.text, "Hello");

        let seq = t.sequence_to_text(&[GestureLabel::OpenPalm, GestureLabel::OpenPalm, GestureLabel::Fist]);
        assert_eq!(seq.cleaned_gestures, vec![GestureLabel::OpenPalm, GestureLabel::Fist]);
        assert_eq!(seq.text, "Good night");

        let text = t.text_to_signs("HI");
        assert_eq!(text.signs.len(), 1);
        assert_eq!(text.animation.len(), 1);

        let stats = t.stats();
        assert_eq!(stats.classifications, 1);
        assert_eq!(stats.sign_to_text, 1);
        assert_eq!(stats.sequences, 1);
        assert_eq!(stats.text_to_signs, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = TranslatorConfig::default();
        config.animation.content_ms = 0;
        assert!(matches!(
            Translator::new(config),
            Err(SignBridgeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::from_json(
            r#"{"words": {"hola": "👋"}, "patterns": [{"pattern": ["wave"], "text": "Adiós"}]}"#,
        )
        .unwrap();
        let t = Translator::with_lexicon(TranslatorConfig::default(), lexicon).unwrap();
        assert_eq!(t.text_to_signs("Hola").signs[0].character, "HOLA");
        assert_eq!(t.sequence_to_text(&[GestureLabel::Wave]).text, "Adiós");
        // No alphabet in this lexicon: nothing to spell
        assert!(t.text_to_signs("xyz").signs.is_empty());
    }

    #[test]
    fn test_animation_config_applies() {
        let mut config = TranslatorConfig::default();
        config.animation.pause_ms = 100;
        let t = Translator::new(config).unwrap();
        let result = t.text_to_signs("ZQ HELLO");
        let durations: Vec<u32> = result.animation.iter().map(|s| s.duration_ms).collect();
        assert_eq!(durations, vec![500, 500, 100, 500]);
    }

    #[test]
    fn test_stream_uses_configured_capacity() {
        let mut config = TranslatorConfig::default();
        config.stream_capacity = 3;
        let t = Translator::new(config).unwrap();

        let mut stream = t.stream();
        stream.extend([
            GestureLabel::Fist,
            GestureLabel::PointSelf,
            GestureLabel::Unknown,
            GestureLabel::ThumbsUp,
        ]);
        assert_eq!(stream.capacity(), 3);
        assert_eq!(t.finish_stream(&mut stream).text, "I am good");
        assert!(stream.is_empty());
        assert_eq!(t.stats().sequences, 1);
    }

    #[test]
    fn test_record_without_store() {
        let t = translator();
        assert_eq!(
            t.record("u1", "HI", "👋", TranslationKind::TextToSign),
            Ok(None)
        );
        assert!(t.history("u1", None).unwrap().is_empty());
    }

    #[test]
    fn test_history_through_translator() {
        let t = translator().with_history(Arc::new(MemoryHistory::default()));

        t.text_to_signs_for("u1", "HI").unwrap();
        t.sequence_to_text_for("u1", &[GestureLabel::PointSelf, GestureLabel::ThumbsUp])
            .unwrap();
        // Blank text maps to nothing and is not recorded
        t.text_to_signs_for("u1", "   ").unwrap();

        let records = t.history("u1", None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, TranslationKind::SignSequenceToText);
        assert_eq!(records[0].input, "point_self thumbs_up");
        assert_eq!(records[0].output, "I am good");
        assert_eq!(records[1].output, "👋");
        assert_eq!(t.stats().records, 2);

        assert_eq!(
            t.text_to_signs_for("", "HI").unwrap_err(),
            HistoryError::MissingField("user_id")
        );
    }

    #[test]
    fn test_gesture_to_text_recorded() {
        let t = translator().with_history(Arc::new(MemoryHistory::default()));

        let result = t
            .gesture_to_text_for("u1", &SignInput::from_hint(GestureLabel::Ily))
            .unwrap();
        assert_eq!(result.text, "ILY / Love");
        // An empty request yields no text and leaves no record
        t.gesture_to_text_for("u1", &SignInput::default()).unwrap();

        let records = t.history("u1", None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, TranslationKind::SignToText);
        assert_eq!(records[0].input, "ily");
        assert_eq!(records[0].output, "ILY / Love");
        assert_eq!(t.stats().sign_to_text, 2);
    }

    #[test]
    fn test_shared_across_threads() {
        let t = translator();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let t = t.clone();
                thread::spawn(move || t.text_to_signs("HELLO ZQ").signs.len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
        assert_eq!(t.stats().text_to_signs, 4);
    }
}

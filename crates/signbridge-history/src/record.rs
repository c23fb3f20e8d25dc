//! History record types

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Record identity, unique within one store
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    pub const ZERO: RecordId = RecordId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }

    #[inline]
    pub fn next(self) -> Self {
        RecordId(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a recorded translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationKind {
    #[serde(alias = "text-to-sign")]
    TextToSign,
    #[serde(alias = "sign-to-text")]
    SignToText,
    #[serde(alias = "sign-sequence-to-text")]
    SignSequenceToText,
    #[serde(alias = "speech-to-text")]
    SpeechToText,
}

impl TranslationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKind::TextToSign => "text_to_sign",
            TranslationKind::SignToText => "sign_to_text",
            TranslationKind::SignSequenceToText => "sign_sequence_to_text",
            TranslationKind::SpeechToText => "speech_to_text",
        }
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One saved translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: RecordId,
    pub user_id: String,
    pub input: String,
    pub output: String,
    pub kind: TranslationKind,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
}

/// Wall-clock time in milliseconds since the Unix epoch
///
/// A clock set before 1970 reads as zero.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

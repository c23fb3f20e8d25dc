//! Translator call statistics

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use signbridge_core::GestureLabel;

/// Live counters, updated through `&self` from any thread
#[derive(Debug)]
pub struct TranslatorStats {
    classifications: AtomicU64,
    sign_to_text: AtomicU64,
    sequences: AtomicU64,
    text_to_signs: AtomicU64,
    records: AtomicU64,
    per_label: [AtomicU64; GestureLabel::COUNT],
}

impl Default for TranslatorStats {
    fn default() -> Self {
        Self {
            classifications: AtomicU64::new(0),
            sign_to_text: AtomicU64::new(0),
            sequences: AtomicU64::new(0),
            text_to_signs: AtomicU64::new(0),
            records: AtomicU64::new(0),
            per_label: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub classifications: u64,
    pub sign_to_text: u64,
    pub sequences: u64,
    pub text_to_signs: u64,
    pub records: u64,
    /// Labels produced by classification, zero counts omitted
    pub labels: BTreeMap<GestureLabel, u64>,
}

impl TranslatorStats {
    pub fn record_classification(&self, label: GestureLabel) {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        self.per_label[label.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sign_to_text(&self) {
        self.sign_to_text.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sequence(&self) {
        self.sequences.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_text_to_signs(&self) {
        self.text_to_signs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_history(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    pub fn label_count(&self, label: GestureLabel) -> u64 {
        self.per_label[label.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let labels = GestureLabel::ALL
            .iter()
            .map(|label| (*label, self.label_count(*label)))
            .filter(|(_, count)| *count > 0)
            .collect();

        StatsSnapshot {
            classifications: self.classifications.load(Ordering::Relaxed),
            sign_to_text: self.sign_to_text.load(Ordering::Relaxed),
            sequences: self.sequences.load(Ordering::Relaxed),
            text_to_signs: self.text_to_signs.load(Ordering::Relaxed),
            records: self.records.load(Ordering::Relaxed),
            labels,
        }
    }

    pub fn reset(&self) {
        for counter in [
            &self.classifications,
            &self.sign_to_text,
            &self.sequences,
            &self.text_to_signs,
            &self.records,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        for counter in &self.per_label {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let stats = TranslatorStats::default();
        stats.record_classification(GestureLabel::Fist);
        stats.record_classification(GestureLabel::Fist);
        stats.record_classification(GestureLabel::Unknown);
        stats.record_text_to_signs();

        let snap = stats.snapshot();
        assert_eq!(snap.classifications, 3);
        assert_eq!(snap.text_to_signs, 1);
        assert_eq!(snap.labels.get(&GestureLabel::Fist), Some(&2));
        assert_eq!(snap.labels.get(&GestureLabel::Unknown), Some(&1));
        assert!(!snap.labels.contains_key(&GestureLabel::Peace));
    }

    #[test]
    fn test_reset() {
        let stats = TranslatorStats::default();
        stats.record_sequence();
        stats.record_classification(GestureLabel::Ok);
        stats.reset();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_snapshot_serializes_label_names() {
        let stats = TranslatorStats::default();
        stats.record_classification(GestureLabel::ThumbsUp);
        let json = serde_json::to_value(stats.snapshot()).unwrap();
        assert_eq!(json["labels"]["thumbs_up"], 1);
    }
}

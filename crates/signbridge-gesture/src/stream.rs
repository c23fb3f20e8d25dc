//! Gesture stream - bounded buffer of per-frame labels
//!
//! A capture loop pushes one label per frame; when the signer pauses, the
//! caller finishes the stream to get a sentence. The buffer keeps at most
//! `capacity` labels and drops the oldest beyond that.

use std::collections::VecDeque;

use signbridge_core::{GestureLabel, Lexicon, SequenceTranslation};
use tracing::debug;

use crate::SequenceMatcher;

/// Default buffer size: about ten seconds of frames at 30 fps
pub const DEFAULT_STREAM_CAPACITY: usize = 300;

#[derive(Debug, Clone)]
pub struct GestureStream {
    labels: VecDeque<GestureLabel>,
    capacity: usize,
    dropped: u64,
}

impl Default for GestureStream {
    fn default() -> Self {
        Self::new(DEFAULT_STREAM_CAPACITY)
    }
}

impl GestureStream {
    /// A capacity of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            labels: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub fn push(&mut self, label: GestureLabel) {
        if self.labels.len() == self.capacity {
            self.labels.pop_front();
            self.dropped += 1;
        }
        self.labels.push_back(label);
    }

    pub fn extend<I: IntoIterator<Item = GestureLabel>>(&mut self, labels: I) {
        for label in labels {
            self.push(label);
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Labels lost to the capacity cap since the last finish
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Most recent non-unknown label
    pub fn last_recognized(&self) -> Option<GestureLabel> {
        self.labels.iter().rev().copied().find(|l| !l.is_unknown())
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.dropped = 0;
    }

    /// Translate the buffered labels and empty the stream
    pub fn finish(&mut self, lexicon: &Lexicon) -> SequenceTranslation {
        if self.dropped > 0 {
            debug!("Gesture stream overflowed, {} oldest labels dropped", self.dropped);
        }
        let labels: Vec<GestureLabel> = self.labels.drain(..).collect();
        self.dropped = 0;
        SequenceMatcher::new(lexicon).translate(&labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GestureLabel::*;

    #[test]
    fn test_finish_translates_and_empties() {
        let mut stream = GestureStream::default();
        stream.extend([PointSelf, PointSelf, Unknown, ThumbsUp, ThumbsUp]);
        assert_eq!(stream.len(), 5);

        let result = stream.finish(&Lexicon::builtin());
        assert_eq!(result.text, "I am good");
        assert_eq!(result.cleaned_gestures, vec![PointSelf, ThumbsUp]);
        assert!(stream.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut stream = GestureStream::new(2);
        stream.extend([Fist, OpenPalm, ThumbsUp]);

        assert_eq!(stream.len(), 2);
        assert_eq!(stream.dropped(), 1);

        let result = stream.finish(&Lexicon::builtin());
        assert_eq!(result.input_gestures, vec![OpenPalm, ThumbsUp]);
        assert_eq!(result.text, "Good morning");
        assert_eq!(stream.dropped(), 0);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut stream = GestureStream::new(0);
        stream.extend([Fist, Peace]);
        assert_eq!(stream.capacity(), 1);
        assert_eq!(stream.last_recognized(), Some(Peace));
    }

    #[test]
    fn test_last_recognized_skips_unknown() {
        let mut stream = GestureStream::default();
        assert_eq!(stream.last_recognized(), None);
        stream.extend([Ok, Unknown, Unknown]);
        assert_eq!(stream.last_recognized(), Some(Ok));
        stream.clear();
        assert!(stream.is_empty());
    }
}

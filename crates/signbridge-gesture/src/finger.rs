//! Finger states - extended or curled, per finger
//!
//! Long fingers are judged vertically (tip clearly above its PIP joint).
//! The thumb is judged horizontally against its IP joint, and the direction
//! depends on handedness: a mirrored camera swaps left and right for the
//! thumb but leaves vertical tests untouched.

use serde::{Deserialize, Serialize};
use signbridge_core::{Finger, Handedness};

use crate::NormalizedHand;

/// Boolean extension state of each finger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Derive states from a normalized hand
    ///
    /// `extension_margin` applies to the four long fingers, `thumb_margin`
    /// to the horizontal thumb test.
    pub fn extract(
        hand: &NormalizedHand,
        handedness: Handedness,
        extension_margin: f32,
        thumb_margin: f32,
    ) -> Self {
        let raised = |finger: Finger| hand.tip(finger).y < hand.pip(finger).y - extension_margin;

        let tip_x = hand.tip(Finger::Thumb).x;
        let ip_x = hand.pip(Finger::Thumb).x;
        let thumb = match handedness {
            Handedness::Right => tip_x > ip_x + thumb_margin,
            Handedness::Left => tip_x < ip_x - thumb_margin,
        };

        Self {
            thumb,
            index: raised(Finger::Index),
            middle: raised(Finger::Middle),
            ring: raised(Finger::Ring),
            pinky: raised(Finger::Pinky),
        }
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn extended_count(&self) -> usize {
        Finger::ALL.iter().filter(|f| self.is_extended(**f)).count()
    }

    pub fn all_extended(&self) -> bool {
        self.extended_count() == 5
    }

    /// Index, middle, ring and pinky all curled
    pub fn long_fingers_curled(&self) -> bool {
        !self.index && !self.middle && !self.ring && !self.pinky
    }

    /// Index raised while middle, ring and pinky are curled (thumb ignored)
    pub fn only_index(&self) -> bool {
        self.index && !self.middle && !self.ring && !self.pinky
    }

    /// Any of middle, ring, pinky raised
    pub fn any_spread(&self) -> bool {
        self.middle || self.ring || self.pinky
    }
}

/// Count fingers whose tip is not clearly above its joint
///
/// Stricter than the extension test: `margin` is small, so a finger only
/// counts once its tip has dropped to about joint height or below.
pub fn tightly_curled_count(hand: &NormalizedHand, margin: f32) -> usize {
    Finger::ALL
        .iter()
        .filter(|f| hand.tip(**f).y > hand.pip(**f).y - margin)
        .count()
}

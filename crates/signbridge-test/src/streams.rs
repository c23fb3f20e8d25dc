//! Synthetic capture streams
//!
//! A camera loop reports one label per frame: each held sign repeats for a
//! run of frames, and transitions between signs produce `unknown` frames.

use rand::rngs::StdRng;
use rand::Rng;
use signbridge_core::{GestureLabel, Landmark};

use crate::PoseBuilder;

/// Shape of a synthetic stream
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    /// Frames each sign is held for
    pub frames_per_sign: usize,
    /// Chance of a frame being replaced by `unknown`
    pub noise_rate: f64,
    /// Unknown frames between consecutive signs
    pub transition_frames: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frames_per_sign: 12,
            noise_rate: 0.1,
            transition_frames: 3,
        }
    }
}

impl CaptureConfig {
    /// No noise, no transitions
    pub fn clean() -> Self {
        Self {
            frames_per_sign: 5,
            noise_rate: 0.0,
            transition_frames: 0,
        }
    }
}

/// Per-frame labels for holding each sign in turn
///
/// The first frame of every sign is never replaced by noise, so each sign
/// survives compression.
pub fn capture_labels(
    signs: &[GestureLabel],
    config: &CaptureConfig,
    rng: &mut StdRng,
) -> Vec<GestureLabel> {
    let mut frames = Vec::with_capacity(signs.len() * (config.frames_per_sign + config.transition_frames));
    for (i, sign) in signs.iter().enumerate() {
        if i > 0 {
            frames.extend(std::iter::repeat(GestureLabel::Unknown).take(config.transition_frames));
        }
        for frame in 0..config.frames_per_sign.max(1) {
            if frame > 0 && rng.gen_bool(config.noise_rate) {
                frames.push(GestureLabel::Unknown);
            } else {
                frames.push(*sign);
            }
        }
    }
    frames
}

/// Landmark frames for holding each sign in turn, slightly jittered
///
/// Signs without a fixture pose are skipped.
pub fn capture_frames(
    signs: &[GestureLabel],
    frames_per_sign: usize,
    rng: &mut StdRng,
) -> Vec<Vec<Landmark>> {
    let mut frames = Vec::new();
    for sign in signs {
        let Some(pose) = PoseBuilder::for_gesture(*sign) else {
            continue;
        };
        for _ in 0..frames_per_sign {
            frames.push(pose.clone().jittered(rng, 0.004).in_frame());
        }
    }
    frames
}

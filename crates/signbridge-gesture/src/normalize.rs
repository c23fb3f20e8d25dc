//! Landmark normalization - wrist-relative, scale-invariant frame
//!
//! The reference length is the planar wrist → middle-MCP distance. After
//! normalization that bone has length 1, so every downstream threshold is
//! independent of hand size and camera distance.

use signbridge_core::{Finger, Landmark, LANDMARK_COUNT, MIDDLE_MCP, WRIST};

/// 21 landmarks in the wrist-relative frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedHand {
    points: [Landmark; LANDMARK_COUNT],
}

impl NormalizedHand {
    pub fn point(&self, index: usize) -> Option<&Landmark> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }

    pub fn tip(&self, finger: Finger) -> &Landmark {
        &self.points[finger.tip()]
    }

    pub fn pip(&self, finger: Finger) -> &Landmark {
        &self.points[finger.pip()]
    }
}

/// Planar wrist → middle-MCP length, or 1 when it is zero
pub fn reference_scale(landmarks: &[Landmark]) -> f32 {
    match (landmarks.get(WRIST), landmarks.get(MIDDLE_MCP)) {
        (Some(wrist), Some(base)) => {
            let scale = wrist.distance_2d(base);
            if scale > 0.0 && scale.is_finite() {
                scale
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}

/// Move the wrist to the origin and divide by the reference scale
///
/// Depth is scaled but not translated: z stays relative to the camera plane.
/// Returns `None` for fewer than 21 points or any non-finite coordinate.
/// Points beyond the 21st are ignored.
pub fn normalize(landmarks: &[Landmark]) -> Option<NormalizedHand> {
    if landmarks.len() < LANDMARK_COUNT {
        return None;
    }
    let landmarks = &landmarks[..LANDMARK_COUNT];
    if !landmarks.iter().all(Landmark::is_finite) {
        return None;
    }

    let wrist = landmarks[WRIST];
    let scale = reference_scale(landmarks);

    let mut points = [Landmark::default(); LANDMARK_COUNT];
    for (out, p) in points.iter_mut().zip(landmarks) {
        *out = Landmark {
            x: (p.x - wrist.x) / scale,
            y: (p.y - wrist.y) / scale,
            z: p.z / scale,
        };
    }

    if !points.iter().all(Landmark::is_finite) {
        return None;
    }

    Some(NormalizedHand { points })
}

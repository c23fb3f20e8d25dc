//! Hand pose fixtures
//!
//! Poses are built in the normalized frame (wrist at the origin, middle
//! MCP one unit straight above it, y growing downwards) and then placed
//! anywhere in image space with `place`.

use rand::rngs::StdRng;
use rand::Rng;
use signbridge_core::{
    Finger, GestureLabel, Landmark, INDEX_DIP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP,
    THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP,
};

/// Tip offset from the PIP joint of an extended finger
pub const EXTENDED_OFFSET: f32 = -0.6;
/// Tip offset from the PIP joint of a curled finger
pub const CURLED_OFFSET: f32 = 0.3;

/// Labels the classifier can produce from a single pose
pub const GEOMETRIC_GESTURES: [GestureLabel; 9] = [
    GestureLabel::Ok,
    GestureLabel::ThumbsUp,
    GestureLabel::ThumbsDown,
    GestureLabel::OpenPalm,
    GestureLabel::Fist,
    GestureLabel::Peace,
    GestureLabel::PointingUp,
    GestureLabel::Ily,
    GestureLabel::PointForward,
];

#[derive(Debug, Clone, PartialEq)]
pub struct PoseBuilder {
    points: [Landmark; LANDMARK_COUNT],
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::fist()
    }
}

impl PoseBuilder {
    /// Closed hand: thumb tucked, all long fingers curled
    pub fn fist() -> Self {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[THUMB_CMC] = Landmark::xy(0.3, -0.2);
        points[THUMB_MCP] = Landmark::xy(0.5, -0.4);
        points[THUMB_IP] = Landmark::xy(0.6, -0.6);
        points[THUMB_TIP] = Landmark::xy(0.5, -0.7);

        let bases = [(5, 0.3, -1.0), (MIDDLE_MCP, 0.0, -1.0), (13, -0.25, -0.95), (17, -0.45, -0.85)];
        for (mcp, x, y) in bases {
            points[mcp] = Landmark::xy(x, y);
            points[mcp + 1] = Landmark::xy(x, y - 0.4);
        }

        let mut pose = Self { points };
        for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
            pose = pose.curl(finger);
        }
        pose
    }

    /// Pose for a label, `None` for labels no single pose produces
    pub fn for_gesture(label: GestureLabel) -> Option<Self> {
        let pose = match label {
            GestureLabel::Fist => Self::fist(),
            GestureLabel::ThumbsUp => Self::fist().thumb_out(-0.6),
            GestureLabel::ThumbsDown => Self::fist().thumb_out(0.5),
            GestureLabel::OpenPalm => Self::fist()
                .thumb_out(-0.6)
                .extend(Finger::Index)
                .extend(Finger::Middle)
                .extend(Finger::Ring)
                .extend(Finger::Pinky),
            GestureLabel::Peace => Self::fist().extend(Finger::Index).extend(Finger::Middle),
            GestureLabel::PointingUp => Self::fist().extend(Finger::Index),
            GestureLabel::PointForward => Self::fist()
                .set(INDEX_PIP, 0.3, 0.1)
                .set(INDEX_DIP, 0.6, 0.05)
                .set(INDEX_TIP, 0.9, 0.0),
            GestureLabel::Ily => Self::fist()
                .thumb_out(-0.6)
                .extend(Finger::Index)
                .extend(Finger::Pinky),
            GestureLabel::Ok => Self::fist()
                .set(THUMB_TIP, 0.48, -1.2)
                .set(INDEX_TIP, 0.45, -1.2)
                .extend(Finger::Middle)
                .extend(Finger::Ring)
                .extend(Finger::Pinky),
            _ => return None,
        };
        Some(pose)
    }

    pub fn extend(self, finger: Finger) -> Self {
        self.long_finger(finger, EXTENDED_OFFSET)
    }

    pub fn curl(self, finger: Finger) -> Self {
        self.long_finger(finger, CURLED_OFFSET)
    }

    fn long_finger(mut self, finger: Finger, offset: f32) -> Self {
        let pip = self.points[finger.pip()];
        self.points[finger.pip() + 1] = Landmark::xy(pip.x, pip.y + offset / 2.0);
        self.points[finger.tip()] = Landmark::xy(pip.x, pip.y + offset);
        self
    }

    /// Thumb pushed out to the right of its IP joint at height `tip_y`
    pub fn thumb_out(self, tip_y: f32) -> Self {
        self.set(THUMB_TIP, 1.0, tip_y)
    }

    pub fn set(mut self, index: usize, x: f32, y: f32) -> Self {
        self.points[index] = Landmark::xy(x, y);
        self
    }

    /// Swap left and right about the wrist
    pub fn mirrored(mut self) -> Self {
        for p in self.points.iter_mut() {
            p.x = -p.x;
        }
        self
    }

    /// Move every point by up to `amount` in each axis
    pub fn jittered(mut self, rng: &mut StdRng, amount: f32) -> Self {
        for p in self.points.iter_mut() {
            p.x += rng.gen_range(-amount..=amount);
            p.y += rng.gen_range(-amount..=amount);
        }
        self
    }

    /// Points in the normalized frame
    pub fn normalized(&self) -> Vec<Landmark> {
        self.points.to_vec()
    }

    /// Points in image space: wrist at `(x, y)`, wrist → middle MCP `scale` long
    pub fn place(&self, scale: f32, x: f32, y: f32) -> Vec<Landmark> {
        self.points
            .iter()
            .map(|p| Landmark::new(x + p.x * scale, y + p.y * scale, p.z * scale))
            .collect()
    }

    /// Typical camera framing: hand around the middle of a unit frame
    pub fn in_frame(&self) -> Vec<Landmark> {
        self.place(0.2, 0.5, 0.8)
    }
}

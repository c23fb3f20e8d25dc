//! Hand landmarks - 21-point hand pose in image coordinates
//!
//! Index layout follows MediaPipe Hands: wrist at 0, then four points per
//! finger from the base outwards. Image coordinates grow downwards, so a
//! smaller `y` means "higher" in the frame.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand pose
pub const LANDMARK_COUNT: usize = 21;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One tracked hand point. `z` is optional on the wire and defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn xy(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar distance, ignoring depth
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Multiply every coordinate by `factor`
    pub fn scaled(&self, factor: f32) -> Landmark {
        Landmark {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

/// Which hand is tracked. Mirrors the horizontal thumb test only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl Handedness {
    /// Lenient parse: anything other than "left" is treated as the right hand
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("left") {
            Handedness::Left
        } else {
            Handedness::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }

    pub fn mirrored(&self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }
}

impl<'de> Deserialize<'de> for Handedness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five fingers, each addressed by its tip and proximal joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn tip(&self) -> usize {
        match self {
            Finger::Thumb => THUMB_TIP,
            Finger::Index => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring => RING_TIP,
            Finger::Pinky => PINKY_TIP,
        }
    }

    /// Joint the tip is compared against. For the thumb this is the IP joint.
    pub fn pip(&self) -> usize {
        match self {
            Finger::Thumb => THUMB_IP,
            Finger::Index => INDEX_PIP,
            Finger::Middle => MIDDLE_PIP,
            Finger::Ring => RING_PIP,
            Finger::Pinky => PINKY_PIP,
        }
    }
}

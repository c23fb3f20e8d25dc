//! Gesture labels - the closed set of recognizable hand shapes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Discrete classification result for one hand pose
///
/// Serialized as its snake_case name. Deserializing an unrecognized name
/// yields [`GestureLabel::Unknown`] rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GestureLabel {
    ThumbsUp,
    ThumbsDown,
    OpenPalm,
    Wave,
    PointingUp,
    Peace,
    Two,
    Three,
    Four,
    /// "I love you" hand: thumb, index and pinky out. Also accepted as "rock".
    Ily,
    Fist,
    OpenPalmHold,
    PointForward,
    PointSelf,
    Ok,
    Call,
    #[default]
    Unknown,
}

impl GestureLabel {
    /// All labels in table order
    pub const ALL: [GestureLabel; 17] = [
        GestureLabel::ThumbsUp,
        GestureLabel::ThumbsDown,
        GestureLabel::OpenPalm,
        GestureLabel::Wave,
        GestureLabel::PointingUp,
        GestureLabel::Peace,
        GestureLabel::Two,
        GestureLabel::Three,
        GestureLabel::Four,
        GestureLabel::Ily,
        GestureLabel::Fist,
        GestureLabel::OpenPalmHold,
        GestureLabel::PointForward,
        GestureLabel::PointSelf,
        GestureLabel::Ok,
        GestureLabel::Call,
        GestureLabel::Unknown,
    ];

    /// Number of labels
    pub const COUNT: usize = 17;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThumbsUp => "thumbs_up",
            Self::ThumbsDown => "thumbs_down",
            Self::OpenPalm => "open_palm",
            Self::Wave => "wave",
            Self::PointingUp => "pointing_up",
            Self::Peace => "peace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Ily => "ily",
            Self::Fist => "fist",
            Self::OpenPalmHold => "open_palm_hold",
            Self::PointForward => "point_forward",
            Self::PointSelf => "point_self",
            Self::Ok => "ok",
            Self::Call => "call",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire name. Unrecognized names map to `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "thumbs_up" => Self::ThumbsUp,
            "thumbs_down" => Self::ThumbsDown,
            "open_palm" => Self::OpenPalm,
            "wave" => Self::Wave,
            "pointing_up" => Self::PointingUp,
            "peace" => Self::Peace,
            "two" => Self::Two,
            "three" => Self::Three,
            "four" => Self::Four,
            "ily" | "rock" => Self::Ily,
            "fist" => Self::Fist,
            "open_palm_hold" => Self::OpenPalmHold,
            "point_forward" => Self::PointForward,
            "point_self" => Self::PointSelf,
            "ok" => Self::Ok,
            "call" => Self::Call,
            _ => Self::Unknown,
        }
    }

    /// Position in [`GestureLabel::ALL`], usable as a counter index
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GestureLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for GestureLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GestureLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

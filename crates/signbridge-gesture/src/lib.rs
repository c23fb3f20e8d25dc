//! SignBridge Gesture - from landmarks to labels to sentences
//!
//! Pipeline per frame:
//! raw landmarks → [`normalize`] → [`FingerStates`] → [`GestureClassifier`] → label
//!
//! Pipeline per sentence:
//! labels → [`compress`] → [`SequenceMatcher`] → text
//!
//! Every step is a pure function of its input. The classifier is total:
//! a malformed frame yields `unknown`, never an error.

pub mod classifier;
pub mod finger;
pub mod normalize;
pub mod sequence;
pub mod stream;

pub use classifier::*;
pub use finger::*;
pub use normalize::*;
pub use sequence::*;
pub use stream::*;

//! SignBridge Core - Fundamental types and tables
//!
//! This crate defines the data shared by every SignBridge component:
//! - Hand landmarks and handedness (21-point MediaPipe layout)
//! - Gesture labels (closed set, snake_case wire names)
//! - Sign units and animation steps
//! - Translation results for the four public operations
//! - The lexicon: gesture texts, word/phrase glyphs, alphabet, sequence patterns

pub mod error;
pub mod label;
pub mod landmark;
pub mod lexicon;
pub mod sign;
pub mod translation;

pub use error::*;
pub use label::*;
pub use landmark::*;
pub use lexicon::*;
pub use sign::*;
pub use translation::*;

//! SignBridge Text - text ↔ sign mapping
//!
//! - Text → sign units, with a timed animation projection
//! - Gesture label (or landmarks) → display text

pub mod animation;
pub mod lookup;
pub mod mapper;

pub use animation::*;
pub use lookup::*;
pub use mapper::*;

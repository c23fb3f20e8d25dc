//! SignBridge Runtime - the translator facade
//!
//! Bundles a lexicon, a classifier and an optional history store behind
//! one shareable `Translator`, with call statistics and logging setup for
//! binaries.

pub mod config;
pub mod logging;
pub mod stats;
pub mod translator;

pub use config::*;
pub use logging::*;
pub use stats::*;
pub use translator::*;

//! SignBridge Test Harness
//!
//! This crate provides:
//! - Hand pose fixtures for every geometric gesture
//! - Synthetic capture streams with noise frames
//! - Property tests and end-to-end tests (`tests/`)
//! - Criterion benchmarks (`benches/`)

pub mod fixtures;
pub mod streams;

pub use fixtures::*;
pub use streams::*;

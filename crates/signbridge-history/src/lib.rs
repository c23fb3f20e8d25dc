//! SignBridge History - what each user translated, newest first
//!
//! Records are append-only. The store trait is synchronous and
//! `Send + Sync`; the in-memory backend is the only one shipped here.

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use error::*;
pub use memory::*;
pub use record::*;
pub use store::*;

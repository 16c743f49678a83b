//! Foundational low-level utilities shared across Squadlink crates.
//!
//! Provides the atomic file-write helper the durable stores persist through
//! and the time helpers used for unique temp-file names.

pub mod atomic_io;
pub mod time_utils;

pub use atomic_io::write_text_atomic;
pub use time_utils::{current_unix_timestamp, current_unix_timestamp_ms};

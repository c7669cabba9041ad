//! Raw TCP firmware streaming.
//!
//! This module provides:
//! - The transfer constants (default target, chunk sizing)
//! - The sequential push pipeline (connect, open, stream, close)
//! - Progress reporting helpers

pub mod constants;
pub mod sender;
pub mod utils;

// Re-export public API
pub use constants::{DEFAULT_CHUNK_SIZE, DEFAULT_HOST, DEFAULT_PORT};
pub use sender::send_file;

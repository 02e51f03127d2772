//! Boundary-scan text chunker, re-exported from `speech-relay-core`.
//!
//! # Example
//!
//! ```rust
//! use speech_relay::chunk::chunk_text;
//!
//! let chunks = chunk_text("abcdefghij", 5).unwrap();
//! assert_eq!(chunks, vec!["abcde", "fghij"]);
//! ```

pub use speech_relay_core::chunk::*;

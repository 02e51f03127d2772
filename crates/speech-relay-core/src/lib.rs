//! # Speech Relay Core
//!
//! Shared, I/O-free logic for speech-relay: the text chunker that bounds
//! every text-to-speech request, and the serde types exchanged with the
//! vendor's transcription and speech endpoints.
//!
//! This crate contains no tokio, reqwest, or filesystem access.

pub mod chunk;
pub mod models;

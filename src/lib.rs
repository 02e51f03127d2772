//! # Speech Relay
//!
//! Transcribe audio and synthesize speech through an OpenAI-compatible
//! audio API, optionally chaining the two.
//!
//! ## Architecture
//!
//! ```text
//!  audio file ──▶ ┌──────────────┐   transcript   ┌─────────┐   chunks   ┌────────────┐
//!                 │  transcribe  │ ──────────────▶│ chunker │ ─────────▶ │   speech   │ ──▶ part files
//!  .txt file ───────────────────────────────────▶ └─────────┘            └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! speech --file talk.m4a                       # transcribe (default mode)
//! speech --file notes.txt --op tts             # text → output_audio_part_<i>.mp3
//! speech --file talk.m4a --op both --lang de   # transcribe, then read it back
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | YAML / TOML configuration parsing |
//! | [`chunk`] | Text chunking (re-exported from `speech-relay-core`) |
//! | [`models`] | Vendor wire types |
//! | [`transcribe`] | Transcription client |
//! | [`speech`] | Text-to-speech client |
//! | [`http`] | Shared HTTP client and retry policy |
//! | [`pipeline`] | Operation modes and output files |
//! | [`progress`] | Progress reporting on stderr |
//! | [`telemetry`] | `tracing` subscriber setup |

pub mod chunk;
pub mod config;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod speech;
pub mod telemetry;
pub mod transcribe;

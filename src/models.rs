//! Vendor wire types, re-exported from `speech-relay-core`.

pub use speech_relay_core::models::*;

//! Wire types exchanged with the vendor's audio endpoints.
//!
//! Only `text` is guaranteed in a transcription response; the remaining
//! fields appear when the vendor returns its verbose format, so they all
//! default when missing.

use serde::{Deserialize, Serialize};

/// Response body of `POST /audio/transcriptions`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TranscribeResponse {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Audio duration in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    pub text: String,
}

/// One timed segment of a verbose transcription.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Segment {
    pub id: i64,
    pub seek: i64,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Vec<i64>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
}

/// JSON body of `POST /audio/speech`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeechRequest<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub voice: &'a str,
    pub response_format: &'a str,
}

/// Audio synthesized for one chunk of input text.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechPart {
    /// Zero-based position of the chunk in the input.
    pub index: usize,
    /// Raw audio as returned by the vendor.
    pub audio: Vec<u8>,
    /// Container format, e.g. `mp3`; doubles as the file extension.
    pub format: String,
}

impl SpeechPart {
    /// File name used when the part is written to disk.
    pub fn file_name(&self) -> String {
        format!("output_audio_part_{}.{}", self.index, self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_transcription_response() {
        let resp: TranscribeResponse =
            serde_json::from_str(r#"{"text": "sample transcribed text"}"#).unwrap();
        assert_eq!(resp.text, "sample transcribed text");
        assert!(resp.segments.is_empty());
        assert!(resp.language.is_none());
    }

    #[test]
    fn test_verbose_transcription_response() {
        let json = r#"{
            "task": "transcribe",
            "language": "english",
            "duration": 2.5,
            "text": "Hello there.",
            "segments": [
                {"id": 0, "seek": 0, "start": 0.0, "end": 2.5, "text": "Hello there.",
                 "tokens": [50364, 2425], "temperature": 0.0, "avg_logprob": -0.2,
                 "compression_ratio": 0.8, "no_speech_prob": 0.01}
            ]
        }"#;
        let resp: TranscribeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.task.as_deref(), Some("transcribe"));
        assert_eq!(resp.duration, Some(2.5));
        assert_eq!(resp.segments.len(), 1);
        assert_eq!(resp.segments[0].tokens, vec![50364, 2425]);
        assert_eq!(resp.segments[0].end, 2.5);
    }

    #[test]
    fn test_speech_request_shape() {
        let req = SpeechRequest {
            model: "tts-1-hd",
            input: "hi",
            voice: "nova",
            response_format: "mp3",
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "tts-1-hd",
                "input": "hi",
                "voice": "nova",
                "response_format": "mp3"
            })
        );
    }

    #[test]
    fn test_part_file_name() {
        let part = SpeechPart {
            index: 3,
            audio: vec![],
            format: "opus".to_string(),
        };
        assert_eq!(part.file_name(), "output_audio_part_3.opus");
    }
}

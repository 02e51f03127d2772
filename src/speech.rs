//! Text-to-speech client for `POST {baseUrl}/audio/speech`.
//!
//! Input text is split with the [`Chunker`] bounded by `tts.maxChars`, and
//! each chunk is synthesized by its own request. Requests are sent one at
//! a time, in text order.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::config::{Config, TtsConfig, API_KEY_ENV};
use crate::http;
use crate::models::{SpeechPart, SpeechRequest};
use speech_relay_core::chunk::Chunker;

/// Client for the vendor's speech endpoint.
pub struct SpeechClient {
    http: reqwest::Client,
    api_key: Option<String>,
    url: String,
    max_retries: u32,
    tts: TtsConfig,
    chunker: Chunker,
}

impl SpeechClient {
    /// # Errors
    ///
    /// Returns an error if `tts.maxChars` is zero or the HTTP client cannot
    /// be built.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: http::build_client(config.timeout)?,
            api_key: config.api_key.clone(),
            url: http::endpoint(&config.base_url, "/audio/speech"),
            max_retries: config.max_retries,
            tts: config.tts.clone(),
            chunker: config.chunker()?,
        })
    }

    /// Synthesize `text` and collect every part.
    pub async fn speak(&self, text: &str) -> Result<Vec<SpeechPart>> {
        let mut parts = Vec::new();
        self.speak_each(text, |part, _total| {
            parts.push(part);
            Ok(())
        })
        .await?;
        Ok(parts)
    }

    /// Synthesize `text`, handing each part to `on_part` together with the
    /// total part count as soon as it arrives.
    ///
    /// Returns the number of parts produced. Empty text produces none and
    /// sends no request. An error from `on_part` stops the run.
    pub async fn speak_each<F>(&self, text: &str, mut on_part: F) -> Result<usize>
    where
        F: FnMut(SpeechPart, usize) -> Result<()>,
    {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "API key is missing. Set apiKey in the config file or the {} environment variable",
                API_KEY_ENV
            )
        })?;

        let chunks: Vec<&str> = self.chunker.split(text).collect();
        let total = chunks.len();

        for (index, chunk) in chunks.into_iter().enumerate() {
            info!(part = index, total, chars = chunk.chars().count(), "synthesizing");
            let audio = self.synthesize(api_key, chunk).await?;
            debug!(part = index, bytes = audio.len(), "audio received");

            on_part(
                SpeechPart {
                    index,
                    audio,
                    format: self.tts.response_format.clone(),
                },
                total,
            )?;
        }

        Ok(total)
    }

    async fn synthesize(&self, api_key: &str, input: &str) -> Result<Vec<u8>> {
        let body = SpeechRequest {
            model: &self.tts.model,
            input,
            voice: &self.tts.voice,
            response_format: &self.tts.response_format,
        };

        let response = http::send_with_retry(self.max_retries, "speech synthesis", || {
            self.http.post(&self.url).bearer_auth(api_key).json(&body)
        })
        .await?;

        let audio = response.bytes().await?;
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key() {
        let client = SpeechClient::new(&Config::default()).unwrap();
        let err = client.speak("hello").await.unwrap_err();
        assert!(err.to_string().contains("API key is missing"));
    }

    #[test]
    fn test_zero_max_chars_rejected() {
        let mut config = Config::default();
        config.tts.max_chars = 0;
        assert!(SpeechClient::new(&config).is_err());
    }

    #[tokio::test]
    async fn test_empty_text_sends_nothing() {
        let config = Config {
            api_key: Some("k".to_string()),
            // Unroutable: any request would fail.
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let client = SpeechClient::new(&config).unwrap();
        assert!(client.speak("").await.unwrap().is_empty());
    }
}

//! Speech-to-text client for `POST {baseUrl}/audio/transcriptions`.
//!
//! Uploads a local audio file as `multipart/form-data` and returns the
//! parsed [`TranscribeResponse`]. Requires an API key, either from the
//! config file or the `OPENAI_API_KEY` environment variable.

use anyhow::{anyhow, Context, Result};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Config, API_KEY_ENV};
use crate::http;
use crate::models::TranscribeResponse;

/// Per-call transcription settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeOptions {
    pub model: String,
    /// ISO-639-1 language hint; `None` lets the vendor detect it.
    pub language: Option<String>,
}

impl TranscribeOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            language: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the language hint. An empty string clears it.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.language = if language.trim().is_empty() {
            None
        } else {
            Some(language)
        };
        self
    }
}

/// Client for the vendor's transcription endpoint.
pub struct TranscriptionClient {
    http: reqwest::Client,
    api_key: Option<String>,
    url: String,
    max_retries: u32,
}

impl TranscriptionClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: http::build_client(config.timeout)?,
            api_key: config.api_key.clone(),
            url: http::endpoint(&config.base_url, "/audio/transcriptions"),
            max_retries: config.max_retries,
        })
    }

    /// Transcribe the audio file at `path`.
    ///
    /// # Errors
    ///
    /// Fails before any I/O when no API key is configured; otherwise when
    /// the file cannot be read, the vendor returns a non-success status, or
    /// the response is not valid JSON.
    pub async fn transcribe_file(
        &self,
        path: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscribeResponse> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "API key is missing. Set apiKey in the config file or the {} environment variable",
                API_KEY_ENV
            )
        })?;

        let audio = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read audio file: {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        info!(file = %path.display(), bytes = audio.len(), model = %options.model, "uploading audio");

        let response = http::send_with_retry(self.max_retries, "transcription", || {
            let part = Part::bytes(audio.clone()).file_name(file_name.clone());
            let mut form = Form::new()
                .text("model", options.model.clone())
                .text("response_format", "json")
                .part("file", part);
            if let Some(language) = &options.language {
                form = form.text("language", language.clone());
            }
            self.http
                .post(&self.url)
                .bearer_auth(api_key)
                .multipart(form)
        })
        .await?;

        let transcription: TranscribeResponse = response
            .json()
            .await
            .context("Invalid transcription response")?;
        debug!(chars = transcription.text.chars().count(), "transcription received");

        Ok(transcription)
    }
}

//! The three operation modes and their file I/O.
//!
//! | Mode | Input | Output |
//! |------|-------|--------|
//! | `transcribe` | audio file | transcript on stdout (and optionally a file) |
//! | `tts` | `.txt` file | `output_audio_part_<i>.<format>` files |
//! | `both` | audio file | transcript, then audio parts synthesized from it |
//!
//! Results go to stdout; progress goes to the [`ProgressReporter`].

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::progress::{ProgressEvent, ProgressReporter};
use crate::speech::SpeechClient;
use crate::transcribe::{TranscribeOptions, TranscriptionClient};

/// Operation mode selected with `--op`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Operation {
    /// Transcribe an audio file.
    Transcribe,
    /// Synthesize speech from a text file.
    Tts,
    /// Transcribe an audio file, then synthesize the transcript.
    Both,
}

/// Everything a run needs besides the config file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: PathBuf,
    pub language: String,
    pub operation: Operation,
    pub out_dir: PathBuf,
    pub transcript: Option<PathBuf>,
}

/// Dispatch on [`RunOptions::operation`].
pub async fn run(
    config: &Config,
    options: &RunOptions,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    if !options.file.exists() {
        bail!("the file {} does not exist", options.file.display());
    }

    match options.operation {
        Operation::Transcribe => {
            run_transcribe(config, options, reporter).await?;
        }
        Operation::Tts => {
            let text = read_text_file(&options.file)?;
            run_tts(config, &text, &options.out_dir, reporter).await?;
        }
        Operation::Both => {
            let text = run_transcribe(config, options, reporter).await?;
            run_tts(config, &text, &options.out_dir, reporter).await?;
        }
    }

    Ok(())
}

/// Transcribe `options.file`, print the text, and return it.
pub async fn run_transcribe(
    config: &Config,
    options: &RunOptions,
    reporter: &dyn ProgressReporter,
) -> Result<String> {
    let client = TranscriptionClient::new(config)?;
    let transcribe_options =
        TranscribeOptions::new(&config.model).with_language(&options.language);

    reporter.report(ProgressEvent::Transcribing {
        file: options.file.display().to_string(),
    });

    let response = client
        .transcribe_file(&options.file, &transcribe_options)
        .await
        .context("Error transcribing file")?;

    println!("Transcription: {}", response.text);

    if let Some(path) = &options.transcript {
        std::fs::write(path, &response.text)
            .with_context(|| format!("Failed to write transcript {}", path.display()))?;
        println!("Transcript saved as '{}'.", path.display());
    }

    Ok(response.text)
}

/// Synthesize `text` into numbered audio files under `out_dir`.
///
/// Each part is written before the next request is sent. Returns the paths
/// written, in part order.
pub async fn run_tts(
    config: &Config,
    text: &str,
    out_dir: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<PathBuf>> {
    let client = SpeechClient::new(config)?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut saved = Vec::new();
    client
        .speak_each(text, |part, total| {
            let path = out_dir.join(part.file_name());
            std::fs::write(&path, &part.audio)
                .with_context(|| format!("Failed to write audio file {}", path.display()))?;

            reporter.report(ProgressEvent::Synthesizing {
                n: part.index as u64 + 1,
                total: total as u64,
            });
            info!(path = %path.display(), "audio part saved");
            println!("Audio part saved as '{}'.", path.display());

            saved.push(path);
            Ok(())
        })
        .await
        .context("Failed to convert text to speech")?;

    println!("All parts processed.");
    Ok(saved)
}

/// Read the input of `tts` mode. Only `.txt` files are accepted.
pub fn read_text_file(path: &Path) -> Result<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
        bail!(
            "file format not supported, expected a .txt file: {}",
            path.display()
        );
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Error reading text file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use clap::ValueEnum;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Hello. World.").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "Hello. World.");
    }

    #[test]
    fn test_read_text_file_rejects_other_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.md");
        std::fs::write(&path, "# nope").unwrap();
        let err = read_text_file(&path).unwrap_err();
        assert!(err.to_string().contains("file format not supported"));
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(
            Operation::from_str("transcribe", false).unwrap(),
            Operation::Transcribe
        );
        assert_eq!(Operation::from_str("tts", false).unwrap(), Operation::Tts);
        assert_eq!(Operation::from_str("both", false).unwrap(), Operation::Both);
        assert!(Operation::from_str("translate", false).is_err());
    }

    #[tokio::test]
    async fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let options = RunOptions {
            file: dir.path().join("missing.wav"),
            language: "en".to_string(),
            operation: Operation::Transcribe,
            out_dir: dir.path().to_path_buf(),
            transcript: None,
        };
        let err = run(&Config::default(), &options, &NoProgress)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}

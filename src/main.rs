//! # Speech Relay CLI (`speech`)
//!
//! Transcribes an audio file, synthesizes speech from a text file, or does
//! both in sequence, using the vendor credentials from a config file.
//!
//! ## Usage
//!
//! ```bash
//! speech --file <path> [--op transcribe|tts|both] [--lang en] [--config config.yaml]
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Print the transcript of a recording
//! speech --file interview.mp3
//!
//! # Read a text file aloud; parts land in ./audio
//! speech --file chapter1.txt --op tts --out-dir audio
//!
//! # Transcribe German audio, keep the transcript, and re-synthesize it
//! speech --file vortrag.m4a --lang de --op both --transcript vortrag.txt
//! ```

use clap::Parser;
use std::path::PathBuf;

use speech_relay::config;
use speech_relay::pipeline::{self, Operation, RunOptions};
use speech_relay::progress::ProgressMode;
use speech_relay::telemetry;

/// Speech Relay: transcription and text-to-speech through an
/// OpenAI-compatible audio API.
#[derive(Parser)]
#[command(
    name = "speech",
    about = "Transcribe audio and synthesize speech through an OpenAI-compatible audio API",
    version,
    long_about = "Speech Relay uploads audio for transcription, splits text into chunks the \
    speech endpoint accepts, and writes each synthesized chunk as a numbered audio file. \
    Credentials and model choices are read from a YAML (or TOML) config file."
)]
struct Cli {
    /// Audio file to transcribe, or `.txt` file to synthesize with `--op tts`.
    #[arg(long)]
    file: PathBuf,

    /// Language of the audio (ISO-639-1 code).
    #[arg(long, default_value = "en")]
    lang: String,

    /// Path to configuration file (YAML, or TOML when the extension is `.toml`).
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Operation mode.
    #[arg(long, value_enum, default_value_t = Operation::Transcribe)]
    op: Operation,

    /// Directory for synthesized audio parts (created if missing).
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the transcript to this file.
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Progress on stderr. Defaults to `human` on a terminal, `off` otherwise.
    #[arg(long, value_enum)]
    progress: Option<ProgressMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let cfg = config::load_config(&cli.config)?;

    let reporter = cli
        .progress
        .unwrap_or_else(ProgressMode::default_for_tty)
        .reporter();

    let options = RunOptions {
        file: cli.file,
        language: cli.lang,
        operation: cli.op,
        out_dir: cli.out_dir,
        transcript: cli.transcript,
    };

    pipeline::run(&cfg, &options, reporter.as_ref()).await
}

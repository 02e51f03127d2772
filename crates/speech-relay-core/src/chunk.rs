//! Boundary-scan text chunker.
//!
//! Splits text into chunks of at most `max_chars` Unicode characters so
//! every piece fits in a single text-to-speech request. Splits prefer a
//! space or a sentence-ending period; when neither occurs inside the
//! window the text is force-split at exactly `max_chars` characters.
//!
//! Lengths are counted in `char`s, never bytes, so a split can land
//! mid-word but never inside a multi-byte character.
//!
//! # Algorithm
//!
//! 1. While more than `max_chars` characters remain, look at the next
//!    `max_chars + 1` characters.
//! 2. Pick the last boundary in that window:
//!    - a space at index `p` (`1 ≤ p ≤ max_chars`) ends the chunk after `p`
//!      characters; the space itself is the separator and is dropped.
//!    - a period at index `q` (`q < max_chars`) ends the chunk after `q + 1`
//!      characters; the period stays with the chunk.
//! 3. With no boundary, split hard at `max_chars`.
//! 4. Whatever remains (at most `max_chars` characters) is the last chunk.
//!
//! Concatenating the chunks and re-inserting one space wherever a separator
//! was dropped reproduces the input exactly.
//!
//! # Example
//!
//! ```rust
//! use speech_relay_core::chunk::chunk_text;
//!
//! let chunks = chunk_text("aaaa bbbb cccc", 9).unwrap();
//! assert_eq!(chunks, vec!["aaaa bbbb", "cccc"]);
//! ```

use anyhow::{bail, Result};
use std::iter::FusedIterator;

/// Largest input accepted by the speech endpoint, in characters.
pub const DEFAULT_MAX_CHARS: usize = 4096;

/// A validated chunking bound.
///
/// Construction is the only fallible step: a zero bound is rejected up front
/// so [`Chunker::split`] is total over every input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    /// Create a chunker that emits chunks of at most `max_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns an invalid-configuration error when `max_chars` is zero.
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            bail!("chunk max_chars must be > 0");
        }
        Ok(Self { max_chars })
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Lazily split `text`. Chunks borrow from `text`.
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            rest: text,
            max_chars: self.max_chars,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Iterator returned by [`Chunker::split`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match find_split(self.rest, self.max_chars) {
            Some((end, resume)) => {
                let chunk = &self.rest[..end];
                self.rest = &self.rest[resume..];
                Some(chunk)
            }
            None => {
                let chunk = self.rest;
                self.rest = "";
                Some(chunk)
            }
        }
    }
}

impl FusedIterator for Chunks<'_> {}

/// Split `text` into owned chunks of at most `max_chars` characters.
///
/// Convenience wrapper over [`Chunker`] for call sites that need a `Vec`.
///
/// # Errors
///
/// Returns an error when `max_chars` is zero.
pub fn chunk_text(text: &str, max_chars: usize) -> Result<Vec<String>> {
    let chunker = Chunker::new(max_chars)?;
    Ok(chunker.split(text).map(str::to_string).collect())
}

/// Byte offsets `(chunk_end, resume_at)` of the next split, or `None` when
/// `text` already fits in one chunk.
fn find_split(text: &str, max_chars: usize) -> Option<(usize, usize)> {
    let mut boundary = None;

    for (count, (idx, ch)) in text.char_indices().enumerate() {
        if count == max_chars {
            // First character past the window: a space here still yields a
            // full-length chunk.
            if ch == ' ' {
                return Some((idx, idx + 1));
            }
            return Some(boundary.unwrap_or((idx, idx)));
        }
        match ch {
            ' ' if count > 0 => boundary = Some((idx, idx + 1)),
            '.' => boundary = Some((idx + 1, idx + 1)),
            _ => {}
        }
    }

    None
}

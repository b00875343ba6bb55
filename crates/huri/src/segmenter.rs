//! Splitting text into tokens with readings.

mod dictionary;
#[cfg(feature = "ichiran")]
mod ichiran;

pub use self::dictionary::{DictionaryEntry, DictionarySegmenter};
#[cfg(feature = "ichiran")]
pub use self::ichiran::IchiranSegmenter;
use thiserror::Error;

/// A word-boundary token and its hiragana reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Empty if no reading could be found for the token.
    pub reading: String,
}

impl Token {
    pub fn new(text: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reading: reading.into(),
        }
    }

    /// A token without a reading.
    pub fn unread(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }
}

/// Splits text into tokens in reading order.
///
/// Concatenating the tokens' text should reproduce the input.
/// Implementations are used read-only and may be shared between threads.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        (**self).segment(text)
    }
}

/// The segmentation backend failed.
#[derive(Debug, Error)]
#[error("Failed to segment '{text}'")]
pub struct SegmentError {
    pub text: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl SegmentError {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

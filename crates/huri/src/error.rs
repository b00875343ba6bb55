//! Huri's error type.

use crate::segmenter::SegmentError;
use huri_core::FormatError;
use thiserror::Error;

pub type HuriResult<T> = Result<T, HuriError>;

#[derive(Debug, Error)]
pub enum HuriError {
    /// An annotation string could not be parsed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The text to annotate contains a character of the annotation format.
    #[error("Cannot annotate '{text}', it contains the reserved character '{character}'")]
    ReservedCharacter { character: char, text: String },
    #[error(transparent)]
    Segmentation(#[from] SegmentError),
}

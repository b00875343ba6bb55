//! Errors for malformed annotation strings.

use thiserror::Error;

/// The annotation string or segment does not follow the annotation format.
///
/// Offsets are byte offsets into the string that was being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Empty segment at byte {offset}")]
    EmptySegment { offset: usize },
    #[error("Reading opened at byte {offset} is never closed")]
    UnclosedReading { offset: usize },
    #[error("Unexpected '⌟' at byte {offset}")]
    UnexpectedClose { offset: usize },
    #[error("Reserved character '{character}' inside a reading at byte {offset}")]
    ReservedInReading { character: char, offset: usize },
    #[error("Expected '`' after a reading at byte {offset}, found '{found}'")]
    MissingSeparator { offset: usize, found: char },
    #[error("Reserved character '{character}' in segment '{segment}'")]
    ReservedCharacter { character: char, segment: String },
    #[error("Annotated segment '{segment}' has no kanji stem")]
    EmptyStem { segment: String },
    #[error("Annotated segment '{segment}' has no reading")]
    EmptyReading { segment: String },
    #[error("Segment '{segment}' has no kanji to attach a reading to")]
    NotAnnotated { segment: String },
}

//! Converts text into annotation strings.

use crate::{
    classify::{classify, Classification},
    error::{HuriError, HuriResult},
    segmenter::Segmenter,
    trim::trim,
};
use huri_core::{is_reserved, parse_all, Huri, Segment, SEPARATOR};

/// Annotates text using the given segmenter.
///
/// The converter holds no state besides the segmenter, so a single converter
/// can serve any number of threads if the segmenter can.
#[derive(Debug, Clone)]
pub struct Converter<S> {
    segmenter: S,
}

impl<S: Segmenter> Converter<S> {
    pub fn new(segmenter: S) -> Self {
        Self { segmenter }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Converts the text into an annotation string.
    ///
    /// Surrounding whitespace is trimmed and whitespace-only text converts to an empty string.
    ///
    /// # Errors
    /// If the text contains a reserved character of the annotation format or the segmenter fails.
    pub fn convert(&self, text: &str) -> HuriResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(String::new());
        }
        if let Some(character) = text.chars().find(|c| is_reserved(*c)) {
            return Err(HuriError::ReservedCharacter {
                character,
                text: text.to_string(),
            });
        }

        tracing::debug!("Converting '{text}'");
        let tokens = self.segmenter.segment(text)?;
        let mut annotation = String::new();
        for token in tokens.iter().filter(|t| !t.text.is_empty()) {
            annotation.push_str(&build_segment(&token.text, &token.reading));
            annotation.push(SEPARATOR);
        }
        tracing::trace!("Converted '{text}' to '{annotation}'");
        Ok(annotation)
    }

    /// Converts the text and parses the result.
    pub fn convert_to_huri(&self, text: &str) -> HuriResult<Vec<Huri>> {
        let annotation = self.convert(text)?;
        Ok(parse_all(&annotation)?)
    }
}

/// Renders a single token without its terminating separator.
///
/// Tokens that cannot be split into a non-empty kanji stem and reading are rendered as is.
pub fn build_segment(token: &str, reading: &str) -> String {
    let classification = if reading.contains(is_reserved) {
        tracing::warn!("Ignoring reading '{reading}' for '{token}' as it contains a reserved character");
        Classification::PassThrough
    } else {
        classify(token, reading)
    };
    tracing::trace!("Classified '{token}' ({reading}) as {classification:?}");

    let segment = match classification {
        Classification::PassThrough => Segment::Plain(token),
        Classification::Annotate => {
            let trimmed = trim(token, reading);
            if trimmed.stem.is_empty() || trimmed.reading_stem.is_empty() {
                tracing::warn!(
                    "Failed to separate a kanji stem from '{token}' with reading '{reading}', passing it through"
                );
                Segment::Plain(token)
            } else {
                Segment::Annotated {
                    kanji_stem: trimmed.stem,
                    reading_stem: trimmed.reading_stem,
                    tail: trimmed.tail,
                }
            }
        }
    };
    segment.to_string()
}

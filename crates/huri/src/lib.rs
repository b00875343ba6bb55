//! Provides Huri's furigana annotation.
//!
//! Text is split into tokens by a [`Segmenter`], each token is classified, kanji tokens are
//! trimmed of their okurigana and the results are rendered into an annotation string
//! which can be parsed back into [`Huri`] segments with [`parse_all`].

pub mod classify;
pub mod convert;
pub mod error;
pub mod segmenter;
pub mod trim;

pub use classify::{classify, Classification};
pub use convert::{build_segment, Converter};
pub use error::{HuriError, HuriResult};
pub use huri_core::{
    extract_kanji_characters, is_kanji, parse_all, serialize_all, strip_to_plain_text,
    FormatError, Huri, Segment, CLOSE, OPEN, SEPARATOR, TAIL_SEPARATOR,
};
#[cfg(feature = "ichiran")]
pub use segmenter::IchiranSegmenter;
pub use segmenter::{DictionarySegmenter, SegmentError, Segmenter, Token};
pub use trim::{trim, Trimmed};

/// Normalises a reading to hiragana and removes the zero-width characters ichiran emits.
pub fn normalise_reading(reading: &str) -> String {
    use wana_kana::ConvertJapanese;
    reading
        .replace('\u{200b}', "")
        .replace('\u{200c}', "")
        .to_hiragana()
}

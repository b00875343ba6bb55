//! Contains Huri, a single segment of an annotation string.

use crate::{is_reserved, FormatError, CLOSE, OPEN, TAIL_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A segment of annotated text, either a kanji stem with its reading and okurigana,
/// or plain text that needs no reading.
///
/// The kanji stem and the reading stem are either both empty or both non-empty.
/// A plain segment keeps its whole text in the trailing text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HuriFields")]
pub struct Huri {
    id: String,
    kanji_stem: String,
    reading_stem: String,
    trailing_text: String,
}

impl Huri {
    /// Creates an annotated segment. The trailing text may be empty.
    pub fn annotated(
        id: impl Into<String>,
        kanji_stem: impl Into<String>,
        reading_stem: impl Into<String>,
        trailing_text: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let huri = Self {
            id: id.into(),
            kanji_stem: kanji_stem.into(),
            reading_stem: reading_stem.into(),
            trailing_text: trailing_text.into(),
        };
        if huri.kanji_stem.is_empty() {
            return Err(FormatError::EmptyStem {
                segment: huri.to_string(),
            });
        }
        if huri.reading_stem.is_empty() {
            return Err(FormatError::EmptyReading {
                segment: huri.to_string(),
            });
        }
        huri.check_reserved()?;
        Ok(huri)
    }

    /// Creates a plain segment.
    pub fn plain(id: impl Into<String>, text: impl Into<String>) -> Result<Self, FormatError> {
        let huri = Self {
            id: id.into(),
            kanji_stem: String::new(),
            reading_stem: String::new(),
            trailing_text: text.into(),
        };
        if huri.trailing_text.is_empty() {
            return Err(FormatError::EmptySegment { offset: 0 });
        }
        huri.check_reserved()?;
        Ok(huri)
    }

    /// Parses a single raw segment, without its terminating separator.
    pub fn parse(raw: &str, id: impl Into<String>) -> Result<Self, FormatError> {
        let Some((kanji_stem, rest)) = raw.split_once(OPEN) else {
            return Self::plain(id, raw);
        };
        let Some((reading_stem, after_close)) = rest.split_once(CLOSE) else {
            return Err(FormatError::UnclosedReading {
                offset: kanji_stem.len(),
            });
        };
        let trailing_text = match after_close.strip_prefix(TAIL_SEPARATOR) {
            Some(tail) => tail,
            None => match after_close.chars().next() {
                None => "",
                Some(found) => {
                    return Err(FormatError::MissingSeparator {
                        offset: raw.len() - after_close.len(),
                        found,
                    })
                }
            },
        };
        Self::annotated(id, kanji_stem, reading_stem, trailing_text)
    }

    /// Returns a copy of the segment with the reading replaced.
    ///
    /// Only annotated segments take a reading, and the reading cannot be empty.
    pub fn update_reading(&self, reading: &str) -> Result<Self, FormatError> {
        if !self.is_annotated() {
            return Err(FormatError::NotAnnotated {
                segment: self.trailing_text.clone(),
            });
        }
        Self::annotated(
            self.id.clone(),
            self.kanji_stem.clone(),
            reading,
            self.trailing_text.clone(),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kanji_stem(&self) -> &str {
        &self.kanji_stem
    }

    pub fn reading_stem(&self) -> &str {
        &self.reading_stem
    }

    pub fn trailing_text(&self) -> &str {
        &self.trailing_text
    }

    pub fn is_annotated(&self) -> bool {
        !self.kanji_stem.is_empty()
    }

    /// The text the reading is displayed over.
    pub fn display_kanji_text(&self) -> &str {
        if self.is_annotated() {
            &self.kanji_stem
        } else {
            &self.trailing_text
        }
    }

    /// The reading displayed over `display_kanji_text`.
    pub fn display_reading(&self) -> &str {
        if self.is_annotated() {
            &self.reading_stem
        } else {
            &self.trailing_text
        }
    }

    /// The segment's text as it appears in the source, okurigana included.
    pub fn plain_text(&self) -> String {
        format!("{}{}", self.kanji_stem, self.trailing_text)
    }

    /// Borrows the segment's structure.
    pub fn segment(&self) -> Segment<'_> {
        if self.is_annotated() {
            Segment::Annotated {
                kanji_stem: &self.kanji_stem,
                reading_stem: &self.reading_stem,
                tail: &self.trailing_text,
            }
        } else {
            Segment::Plain(&self.trailing_text)
        }
    }

    fn check_reserved(&self) -> Result<(), FormatError> {
        for part in [&self.kanji_stem, &self.reading_stem, &self.trailing_text] {
            if let Some(character) = part.chars().find(|c| is_reserved(*c)) {
                return Err(FormatError::ReservedCharacter {
                    character,
                    segment: part.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Serializes the segment to the annotation format, without the terminating separator.
impl fmt::Display for Huri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.segment(), f)
    }
}

/// A borrowed view of a segment, rendered in the annotation format by its `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that needs no reading.
    Plain(&'a str),
    Annotated {
        kanji_stem: &'a str,
        reading_stem: &'a str,
        /// Okurigana, may be empty.
        tail: &'a str,
    },
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Annotated {
                kanji_stem,
                reading_stem,
                tail,
            } => {
                write!(f, "{kanji_stem}{OPEN}{reading_stem}{CLOSE}")?;
                if !tail.is_empty() {
                    write!(f, "{TAIL_SEPARATOR}{tail}")?;
                }
                Ok(())
            }
        }
    }
}

// deserialized segments go through the same checks as parsed ones
#[derive(Deserialize)]
struct HuriFields {
    id: String,
    kanji_stem: String,
    reading_stem: String,
    trailing_text: String,
}

impl TryFrom<HuriFields> for Huri {
    type Error = FormatError;

    fn try_from(value: HuriFields) -> Result<Self, Self::Error> {
        if value.kanji_stem.is_empty() && value.reading_stem.is_empty() {
            Self::plain(value.id, value.trailing_text)
        } else {
            Self::annotated(
                value.id,
                value.kanji_stem,
                value.reading_stem,
                value.trailing_text,
            )
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_plain() {
        let huri = Huri::parse("です", "0").unwrap();
        assert!(!huri.is_annotated());
        assert_eq!(huri.kanji_stem(), "");
        assert_eq!(huri.reading_stem(), "");
        assert_eq!(huri.trailing_text(), "です");
        assert_eq!(huri.display_kanji_text(), "です");
        assert_eq!(huri.display_reading(), "です");
    }

    #[test]
    fn parses_annotated_with_tail() {
        let huri = Huri::parse("食⌜た⌟`べる", "0").unwrap();
        assert_eq!(huri.kanji_stem(), "食");
        assert_eq!(huri.reading_stem(), "た");
        assert_eq!(huri.trailing_text(), "べる");
        assert_eq!(huri.display_kanji_text(), "食");
        assert_eq!(huri.display_reading(), "た");
        assert_eq!(huri.plain_text(), "食べる");
        assert_eq!(huri.to_string(), "食⌜た⌟`べる");
    }

    #[test]
    fn parse_and_display_are_inverse() {
        for raw in ["猫⌜ねこ⌟", "動⌜どう⌟`く", "、", " ", "カタカナ", "abc"] {
            let huri = Huri::parse(raw, "id").unwrap();
            assert_eq!(huri.to_string(), raw);
            assert_eq!(Huri::parse(&huri.to_string(), "id").unwrap(), huri);
        }
    }

    #[test]
    fn rejects_malformed_segments() {
        assert_eq!(
            Huri::parse("猫⌜ねこ", "0"),
            Err(FormatError::UnclosedReading { offset: 3 })
        );
        assert_eq!(
            Huri::parse("猫⌜ねこ⌟く", "0"),
            Err(FormatError::MissingSeparator {
                offset: 15,
                found: 'く'
            })
        );
        assert_eq!(
            Huri::parse("猫⌟", "0"),
            Err(FormatError::ReservedCharacter {
                character: '⌟',
                segment: "猫⌟".to_string()
            })
        );
        assert_eq!(
            Huri::parse("", "0"),
            Err(FormatError::EmptySegment { offset: 0 })
        );
        assert!(matches!(
            Huri::parse("猫⌜ね⌜こ⌟", "0"),
            Err(FormatError::ReservedCharacter { character: '⌜', .. })
        ));
    }

    #[test]
    fn updates_reading() {
        let huri = Huri::parse("動⌜どう⌟`く", "1:動⌜どう⌟`く").unwrap();
        let updated = huri.update_reading("うご").unwrap();
        assert_eq!(updated.id(), huri.id());
        assert_eq!(updated.kanji_stem(), "動");
        assert_eq!(updated.reading_stem(), "うご");
        assert_eq!(updated.trailing_text(), "く");
        assert_eq!(huri.reading_stem(), "どう");
    }

    #[test]
    fn rejects_invalid_reading_updates() {
        let plain = Huri::parse("です", "0").unwrap();
        assert!(matches!(
            plain.update_reading("です"),
            Err(FormatError::NotAnnotated { .. })
        ));

        let annotated = Huri::parse("猫⌜ねこ⌟", "0").unwrap();
        assert!(matches!(
            annotated.update_reading(""),
            Err(FormatError::EmptyReading { .. })
        ));
        assert!(matches!(
            annotated.update_reading("ね`こ"),
            Err(FormatError::ReservedCharacter { character: '`', .. })
        ));
    }

    #[test]
    fn serializes_to_json() {
        let huri = Huri::parse("動⌜どう⌟`く", "0").unwrap();
        let json = serde_json::to_string(&huri).unwrap();
        assert_eq!(
            json,
            r#"{"id":"0","kanji_stem":"動","reading_stem":"どう","trailing_text":"く"}"#
        );
        let deserialized: Huri = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, huri);
    }

    #[test]
    fn rejects_invalid_json() {
        let json = r#"{"id":"0","kanji_stem":"動","reading_stem":"","trailing_text":"く"}"#;
        assert!(serde_json::from_str::<Huri>(json).is_err());
    }
}

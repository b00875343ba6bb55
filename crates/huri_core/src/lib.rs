//! Huri core types and functions.
//!
//! An annotation string is a sequence of segments, each terminated by [`SEPARATOR`].
//! A plain segment is the literal text. An annotated segment is the kanji stem followed by its
//! reading between [`OPEN`] and [`CLOSE`], optionally followed by [`TAIL_SEPARATOR`] and the
//! okurigana that is rendered without annotation:
//!
//! ```text
//! 猫⌜ねこ⌟`です`動⌜どう⌟`く`
//! ```

mod error;
mod huri;

pub use error::FormatError;
pub use huri::{Huri, Segment};

/// Terminates every segment, including the last one.
pub const SEPARATOR: char = '`';
/// Begins the reading of an annotated segment.
pub const OPEN: char = '⌜';
/// Ends the reading of an annotated segment.
pub const CLOSE: char = '⌟';
/// Introduces the okurigana after [`CLOSE`]. Shares its character with [`SEPARATOR`].
pub const TAIL_SEPARATOR: char = SEPARATOR;

/// Checks whether the character has a structural meaning in the annotation format.
pub fn is_reserved(c: char) -> bool {
    matches!(c, SEPARATOR | OPEN | CLOSE)
}

pub fn is_kanji(c: char) -> bool {
    matches!(
        c as u32,
        // CJK Unified Ideographs Extension A
        0x3400..=0x4DBF
            // CJK Unified Ideographs
            | 0x4E00..=0x9FFF
            // CJK Compatibility Ideographs
            | 0xF900..=0xFAFF
            // Extensions B to F
            | 0x20000..=0x2EBEF
            // Extensions G and H
            | 0x30000..=0x323AF
    )
}

/// Parses an annotation string into its segments.
///
/// Every segment gets an id derived from its position and raw text,
/// so re-parsing unchanged content yields the same ids.
pub fn parse_all(annotation: &str) -> Result<Vec<Huri>, FormatError> {
    split_segments(annotation)?
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| Huri::parse(raw, segment_id(idx, raw)))
        .collect()
}

/// Serializes the segments into an annotation string, terminating each with [`SEPARATOR`].
pub fn serialize_all(huri: &[Huri]) -> String {
    let mut annotation = String::new();
    for h in huri {
        annotation.push_str(&h.to_string());
        annotation.push(SEPARATOR);
    }
    annotation
}

/// Reconstructs the surface text by discarding the readings.
pub fn strip_to_plain_text(annotation: &str) -> Result<String, FormatError> {
    let plain = parse_all(annotation)?
        .iter()
        .map(Huri::plain_text)
        .collect::<String>();
    Ok(plain)
}

/// Returns every kanji of the annotated text in order of appearance, duplicates included.
pub fn extract_kanji_characters(annotation: &str) -> Result<Vec<String>, FormatError> {
    let kanji = parse_all(annotation)?
        .iter()
        .flat_map(|h| {
            h.display_kanji_text()
                .chars()
                .filter(|c| is_kanji(*c))
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect();
    Ok(kanji)
}

fn is_kana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}')
}

fn segment_id(idx: usize, raw: &str) -> String {
    format!("{idx}:{raw}")
}

// splits the annotation into raw segments without their terminating separators
// the separator after CLOSE is followed by a tail if the text up to the next separator
// is non-empty kana, otherwise the next segment starts there
fn split_segments(annotation: &str) -> Result<Vec<&str>, FormatError> {
    let mut segments = Vec::new();
    let mut start = 0;
    while start < annotation.len() {
        let rest = &annotation[start..];
        let Some((idx, c)) = rest.char_indices().find(|(_, c)| is_reserved(*c)) else {
            // final segment without a separator
            segments.push(rest);
            break;
        };

        match c {
            SEPARATOR => {
                if idx == 0 {
                    return Err(FormatError::EmptySegment { offset: start });
                }
                segments.push(&rest[..idx]);
                start += idx + SEPARATOR.len_utf8();
            }
            CLOSE => return Err(FormatError::UnexpectedClose { offset: start + idx }),
            _ => {
                let reading_start = idx + OPEN.len_utf8();
                let close_idx = match rest[reading_start..]
                    .char_indices()
                    .find(|(_, c)| is_reserved(*c))
                {
                    Some((i, CLOSE)) => reading_start + i,
                    Some((i, character)) => {
                        return Err(FormatError::ReservedInReading {
                            character,
                            offset: start + reading_start + i,
                        })
                    }
                    None => return Err(FormatError::UnclosedReading { offset: start + idx }),
                };

                let after_close = close_idx + CLOSE.len_utf8();
                match rest[after_close..].chars().next() {
                    None => {
                        segments.push(rest);
                        break;
                    }
                    Some(SEPARATOR) => {}
                    Some(found) => {
                        return Err(FormatError::MissingSeparator {
                            offset: start + after_close,
                            found,
                        })
                    }
                }

                let tail_start = after_close + TAIL_SEPARATOR.len_utf8();
                let tail_region = &rest[tail_start..];
                let tail_len = tail_region.find(SEPARATOR).unwrap_or(tail_region.len());
                let tail = &tail_region[..tail_len];
                if !tail.is_empty() && tail.chars().all(is_kana) {
                    segments.push(&rest[..tail_start + tail_len]);
                    start += tail_start + tail_len;
                    if tail_len < tail_region.len() {
                        start += SEPARATOR.len_utf8();
                    }
                } else {
                    segments.push(&rest[..after_close]);
                    start += tail_start;
                }
            }
        }
    }
    Ok(segments)
}

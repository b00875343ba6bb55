//! Segmentation with ichiran.

use super::{SegmentError, Segmenter, Token};
use crate::normalise_reading;
use ::ichiran::{Alternative, IchiranCli, IchiranError, Segment};
use std::{ops::RangeInclusive, path::PathBuf};

/// Segments text with the best segmentation of an ichiran-cli binary.
pub struct IchiranSegmenter {
    cli: IchiranCli,
}

impl IchiranSegmenter {
    pub fn new(cli_path: PathBuf) -> Self {
        Self {
            cli: IchiranCli::new(cli_path),
        }
    }
}

impl Segmenter for IchiranSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        tracing::debug!("Segmenting '{text}' with ichiran");
        let segments = match self.cli.segment(text, Some(1)) {
            Ok(segments) => segments,
            Err(err) => {
                if let IchiranError::IchiranError { stdout, stderr } = &err {
                    tracing::error!("Ichiran error:\n    stdout:\n{stdout}\n    stderr:\n{stderr}");
                }
                return Err(SegmentError::new(text, err));
            }
        };
        Ok(align_words(text, best_words(segments)))
    }
}

// flattens the best segmentation into (word, kana) pairs
// compound words are split into their components
fn best_words(segments: Vec<Segment>) -> Vec<(String, String)> {
    let mut words = Vec::new();
    for segment in segments {
        match segment {
            Segment::Segmentations(segmentations) => {
                let Some(best) = segmentations.into_iter().next() else {
                    continue;
                };
                for word in best.words {
                    match word.alternatives.into_iter().next() {
                        Some(Alternative::WordInfo(wi)) => words.push((wi.text, wi.kana)),
                        Some(Alternative::CompoundWordInfo(cwi)) => words.extend(
                            cwi.components
                                .into_iter()
                                .map(|component| (component.text, component.kana)),
                        ),
                        None => {}
                    }
                }
            }
            Segment::Other(other) => words.push((other, String::new())),
        }
    }
    words
}

// locates each word in the text so that the tokens carry the text's own characters
// text that is not covered by any word becomes a token without a reading
fn align_words(text: &str, words: Vec<(String, String)>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut idx = 0;
    for (word, kana) in words {
        let remaining = &text[idx..];
        let Some((start, len)) = find_equivalent(remaining, &word) else {
            tracing::warn!("Failed to find '{word}' in '{remaining}'");
            continue;
        };
        if start > 0 {
            tokens.push(Token::unread(&remaining[..start]));
        }
        tokens.push(Token::new(
            &remaining[start..start + len],
            normalise_reading(&kana),
        ));
        idx += start + len;
    }
    if idx < text.len() {
        tokens.push(Token::unread(&text[idx..]));
    }
    tokens
}

// ichiran sometimes returns characters in a different but equivalent form,
// katakana for hiragana or ascii digits for full width ones and vice versa
// returns the byte index and byte length of the target in the text
fn find_equivalent(text: &str, target: &str) -> Option<(usize, usize)> {
    if target.is_empty() {
        return None;
    }
    text.char_indices().find_map(|(start, _)| {
        let mut len = 0;
        let mut target_chars = target.chars();
        for left in text[start..].chars() {
            let Some(right) = target_chars.next() else {
                break;
            };
            if !equivalent(left, right) {
                return None;
            }
            len += left.len_utf8();
        }
        // the whole target must have been matched
        target_chars.next().is_none().then_some((start, len))
    })
}

fn equivalent(left: char, right: char) -> bool {
    const KANA_DISTANCE: u32 = 'ア' as u32 - 'あ' as u32;
    const FULL_WIDTH_DISTANCE: u32 = '０' as u32 - '0' as u32;
    const HIRAGANA: RangeInclusive<char> = '\u{3041}'..='\u{3096}';
    const KATAKANA: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';
    const DIGITS: RangeInclusive<char> = '0'..='9';
    const FULL_WIDTH_DIGITS: RangeInclusive<char> = '０'..='９';

    let (left_code, right_code) = (left as u32, right as u32);
    left == right
        || (HIRAGANA.contains(&left) && left_code + KANA_DISTANCE == right_code)
        || (KATAKANA.contains(&left) && left_code == right_code + KANA_DISTANCE)
        || (DIGITS.contains(&left) && left_code + FULL_WIDTH_DISTANCE == right_code)
        || (FULL_WIDTH_DIGITS.contains(&left) && left_code == right_code + FULL_WIDTH_DISTANCE)
}

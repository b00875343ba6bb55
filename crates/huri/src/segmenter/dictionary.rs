//! A segmenter that works off a word to reading dictionary.

use super::{SegmentError, Segmenter, Token};
use crate::{classify::is_katakana, normalise_reading};
use huri_core::is_kanji;
use serde::Deserialize;
use std::{collections::HashMap, io::Read};

/// An entry of a JmdictFurigana-style dictionary file. Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub text: String,
    pub reading: String,
}

/// Segments text by greedily matching the longest dictionary word.
///
/// Text that matches no word is split into runs of the same script.
/// Hiragana and katakana runs are read as hiragana, other runs get no reading.
#[derive(Debug, Clone, Default)]
pub struct DictionarySegmenter {
    words: HashMap<String, String>,
    // in characters
    longest_word: usize,
}

impl DictionarySegmenter {
    pub fn new(words: HashMap<String, String>) -> Self {
        let longest_word = words.keys().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            words,
            longest_word,
        }
    }

    pub fn from_entries<I, W, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, R)>,
        W: Into<String>,
        R: Into<String>,
    {
        let mut segmenter = Self::default();
        for (word, reading) in entries {
            segmenter.insert(word, reading);
        }
        segmenter
    }

    /// Loads a JSON array of `{"text": ..., "reading": ...}` objects, such as JmdictFurigana.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        let entries: Vec<DictionaryEntry> = serde_json::from_reader(reader)?;
        tracing::info!("Loaded {} dictionary entries", entries.len());
        Ok(Self::from_entries(
            entries.into_iter().map(|e| (e.text, e.reading)),
        ))
    }

    /// Adds a word, replacing its previous reading if any.
    pub fn insert(&mut self, word: impl Into<String>, reading: impl Into<String>) {
        let word = word.into();
        if word.is_empty() {
            return;
        }
        self.longest_word = self.longest_word.max(word.chars().count());
        self.words.insert(word, reading.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // returns the length in characters and the reading of the longest word starting at char_idx
    fn longest_match(
        &self,
        text: &str,
        char_starts: &[usize],
        char_idx: usize,
    ) -> Option<(usize, &str)> {
        let remaining = char_starts.len() - 1 - char_idx;
        (1..=self.longest_word.min(remaining)).rev().find_map(|len| {
            let word = &text[char_starts[char_idx]..char_starts[char_idx + len]];
            self.words.get(word).map(|reading| (len, reading.as_str()))
        })
    }
}

impl Segmenter for DictionarySegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>, SegmentError> {
        // byte offsets of every char, and of the end of the text
        let char_starts = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect::<Vec<_>>();
        let chars = text.chars().collect::<Vec<_>>();

        let mut tokens = Vec::new();
        let mut idx = 0;
        while idx < chars.len() {
            if let Some((len, reading)) = self.longest_match(text, &char_starts, idx) {
                let word = &text[char_starts[idx]..char_starts[idx + len]];
                tracing::trace!("Matched '{word}' as '{reading}'");
                tokens.push(Token::new(word, reading));
                idx += len;
                continue;
            }

            let script = Script::of(chars[idx]);
            let mut end = idx + 1;
            if script != Script::Other {
                while end < chars.len()
                    && Script::of(chars[end]) == script
                    && self.longest_match(text, &char_starts, end).is_none()
                {
                    end += 1;
                }
            }
            let run = &text[char_starts[idx]..char_starts[end]];
            let reading = match script {
                Script::Hiragana | Script::Katakana => normalise_reading(run),
                _ => String::new(),
            };
            if script == Script::Kanji {
                tracing::debug!("No reading for '{run}'");
            }
            tokens.push(Token::new(run, reading));
            idx = end;
        }
        Ok(tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Alphanumeric,
    Whitespace,
    Other,
}

impl Script {
    fn of(c: char) -> Self {
        if is_kanji(c) || c == '々' {
            Self::Kanji
        } else if ('\u{3041}'..='\u{309F}').contains(&c) {
            Self::Hiragana
        } else if is_katakana(c) && c != '・' {
            Self::Katakana
        } else if c.is_ascii_alphanumeric() {
            Self::Alphanumeric
        } else if c.is_whitespace() {
            Self::Whitespace
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn segment(segmenter: &DictionarySegmenter, text: &str) -> Vec<(String, String)> {
        segmenter
            .segment(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.reading))
            .collect()
    }

    fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(t, r)| (t.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn prefers_longest_word() {
        let segmenter =
            DictionarySegmenter::from_entries([("日本", "にほん"), ("日本語", "にほんご")]);
        assert_eq!(
            segment(&segmenter, "日本語です"),
            pairs(&[("日本語", "にほんご"), ("です", "です")])
        );
    }

    #[test]
    fn splits_unknown_text_by_script() {
        let segmenter = DictionarySegmenter::default();
        assert_eq!(
            segment(&segmenter, "猫とテレビ、abc 1"),
            pairs(&[
                ("猫", ""),
                ("と", "と"),
                ("テレビ", "てれび"),
                ("、", ""),
                ("abc", ""),
                (" ", ""),
                ("1", ""),
            ])
        );
    }

    #[test]
    fn stops_runs_at_dictionary_words() {
        let segmenter = DictionarySegmenter::from_entries([("猫", "ねこ"), ("です", "です")]);
        assert_eq!(
            segment(&segmenter, "犬猫ですね"),
            pairs(&[("犬", ""), ("猫", "ねこ"), ("です", "です"), ("ね", "ね")])
        );
    }

    #[test]
    fn reproduces_input() {
        let segmenter = DictionarySegmenter::from_entries([("動く", "うごく")]);
        let text = "「動く」のは　猫々だ！";
        let tokens = segmenter.segment(text).unwrap();
        assert_eq!(tokens.iter().map(|t| t.text.as_str()).collect::<String>(), text);
    }

    #[test]
    fn segments_empty_text() {
        let segmenter = DictionarySegmenter::from_entries([("猫", "ねこ")]);
        assert!(segmenter.segment("").unwrap().is_empty());
    }

    #[test]
    fn loads_jmdict_furigana_json() {
        let json = r#"[
            {"text": "猫", "reading": "ねこ", "furigana": [{"ruby": "猫", "rt": "ねこ"}]},
            {"text": "動く", "reading": "うごく", "furigana": [{"ruby": "動", "rt": "うご"}, {"ruby": "く"}]}
        ]"#;
        let segmenter = DictionarySegmenter::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(segmenter.len(), 2);
        assert_eq!(
            segment(&segmenter, "猫が動く"),
            pairs(&[("猫", "ねこ"), ("が", "が"), ("動く", "うごく")])
        );
    }

    #[test]
    fn fails_on_invalid_json() {
        assert!(DictionarySegmenter::from_json_reader("{".as_bytes()).is_err());
    }
}

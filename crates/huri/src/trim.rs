//! Separates okurigana from a kanji token.

/// A token split into the part that needs a reading and the kana shared with its reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a> {
    pub stem: &'a str,
    pub reading_stem: &'a str,
    /// The longest common suffix of the token and its reading.
    pub tail: &'a str,
}

/// Moves the longest common suffix of the token and its reading into the tail.
///
/// Either stem may end up empty if one string is a suffix of the other.
pub fn trim<'a>(token: &'a str, reading: &'a str) -> Trimmed<'a> {
    let mut token_end = token.len();
    let mut reading_end = reading.len();
    for (t, r) in token.chars().rev().zip(reading.chars().rev()) {
        if t != r {
            break;
        }
        token_end -= t.len_utf8();
        reading_end -= r.len_utf8();
    }
    Trimmed {
        stem: &token[..token_end],
        reading_stem: &reading[..reading_end],
        tail: &token[token_end..],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn check_invariants(token: &str, reading: &str) {
        let trimmed = trim(token, reading);
        assert!(token.starts_with(trimmed.stem));
        assert!(reading.starts_with(trimmed.reading_stem));
        assert!(token.ends_with(trimmed.tail));
        assert!(reading.ends_with(trimmed.tail));
        assert_eq!(format!("{}{}", trimmed.stem, trimmed.tail), token);
        assert_eq!(format!("{}{}", trimmed.reading_stem, trimmed.tail), reading);
        // the tail is maximal
        if let (Some(t), Some(r)) = (
            trimmed.stem.chars().next_back(),
            trimmed.reading_stem.chars().next_back(),
        ) {
            assert_ne!(t, r);
        }
    }

    #[test]
    fn trims_okurigana() {
        let trimmed = trim("動く", "どうく");
        assert_eq!(
            trimmed,
            Trimmed {
                stem: "動",
                reading_stem: "どう",
                tail: "く",
            }
        );
    }

    #[test]
    fn trims_longer_okurigana() {
        let trimmed = trim("食べられる", "たべられる");
        assert_eq!(trimmed.stem, "食");
        assert_eq!(trimmed.reading_stem, "た");
        assert_eq!(trimmed.tail, "べられる");
    }

    #[test]
    fn keeps_token_without_common_suffix() {
        let trimmed = trim("猫", "ねこ");
        assert_eq!(trimmed.stem, "猫");
        assert_eq!(trimmed.reading_stem, "ねこ");
        assert_eq!(trimmed.tail, "");
    }

    #[test]
    fn only_trims_the_end() {
        // お is shared but at the start
        let trimmed = trim("お茶", "おちゃ");
        assert_eq!(trimmed.stem, "お茶");
        assert_eq!(trimmed.reading_stem, "おちゃ");
        assert_eq!(trimmed.tail, "");
    }

    #[test]
    fn consumes_token_fully() {
        let trimmed = trim("く", "どうく");
        assert_eq!(trimmed.stem, "");
        assert_eq!(trimmed.reading_stem, "どう");
        assert_eq!(trimmed.tail, "く");
    }

    #[test]
    fn holds_invariants() {
        for (token, reading) in [
            ("動く", "どうく"),
            ("猫", "ねこ"),
            ("お茶", "おちゃ"),
            ("", "ねこ"),
            ("猫", ""),
            ("です", "です"),
            ("取り扱い", "とりあつかい"),
            ("く", "どうく"),
            ("猫ねこ", "ねこ"),
        ] {
            check_invariants(token, reading);
        }
    }
}

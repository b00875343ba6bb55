//! Decides whether a token needs a reading.

/// How a token is rendered in the annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Rendered as is.
    PassThrough,
    /// Rendered with its reading.
    Annotate,
}

/// Classifies a token with its hiragana reading.
///
/// Tokens that are already kana, punctuation, a single space, katakana, romaji
/// or that have no reading are passed through, everything else is annotated.
pub fn classify(token: &str, reading: &str) -> Classification {
    let pass_through = token == reading
        || reading.is_empty()
        || token == " "
        || is_single_punctuation(token)
        || consists_of(token, is_katakana)
        || consists_of(token, |c| c.is_ascii_alphabetic());
    if pass_through {
        Classification::PassThrough
    } else {
        Classification::Annotate
    }
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c as u32,
            // Latin-1
            0xA1 | 0xA7 | 0xAB | 0xB6 | 0xB7 | 0xBB | 0xBF
            // General Punctuation
            | 0x2010..=0x2027
            | 0x2030..=0x2043
            | 0x2045..=0x2051
            | 0x2053..=0x205E
            // CJK Symbols and Punctuation
            | 0x3001..=0x3003
            | 0x3008..=0x3011
            | 0x3014..=0x301F
            | 0x3030
            | 0x303D
            | 0x30FB
            // Halfwidth and Fullwidth Forms
            | 0xFF01..=0xFF03
            | 0xFF05..=0xFF0A
            | 0xFF0C..=0xFF0F
            | 0xFF1A..=0xFF1B
            | 0xFF1F..=0xFF20
            | 0xFF3B..=0xFF3D
            | 0xFF3F
            | 0xFF5B
            | 0xFF5D
            | 0xFF5F..=0xFF65
        )
}

fn is_single_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_punctuation(c))
}

fn consists_of(token: &str, predicate: impl Fn(char) -> bool) -> bool {
    !token.is_empty() && token.chars().all(predicate)
}

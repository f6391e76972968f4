//! Script classification helpers for Japanese text.

/// Hiragana block (U+3040..U+309F), including the voicing marks.
pub fn is_hiragana(ch: char) -> bool {
    ('\u{3040}'..='\u{309f}').contains(&ch)
}

/// Katakana block (U+30A0..U+30FF), including the prolonged sound mark.
pub fn is_katakana(ch: char) -> bool {
    ('\u{30a0}'..='\u{30ff}').contains(&ch)
}

/// CJK unified ideographs, extension A included.
pub fn is_kanji(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch) || ('\u{3400}'..='\u{4dbf}').contains(&ch)
}

/// Characters that group with Japanese runs: kanji, kana, and the
/// iteration/closing marks 々 and 〆 that behave like ideographs.
pub fn is_japanese(ch: char) -> bool {
    is_kanji(ch) || is_hiragana(ch) || is_katakana(ch) || matches!(ch, '\u{3005}' | '\u{3006}')
}

/// Characters allowed in dictionary entry text after the key: ideographs,
/// kana, and the marks 々 and 〆.
pub fn is_entry_text(ch: char) -> bool {
    is_japanese(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('ん'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_kanji('言'));
        assert!(!is_kanji('あ'));
        assert!(!is_japanese('A'));
        assert!(is_japanese('々'));
    }
}

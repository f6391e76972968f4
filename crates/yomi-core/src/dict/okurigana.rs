//! Okurigana inflection classes.
//!
//! Each entry maps a kana character to the consonant/vowel class letters it
//! satisfies when it appears as the first okurigana after a dictionary match.
//! 言う matches the entry (言, い, class `u`) because the class list of う
//! contains `u`.

use std::collections::HashMap;
use std::sync::OnceLock;

const TABLE: &[(char, &str)] = &[
    ('ぁ', "aiueow"),
    ('あ', "aiueow"),
    ('ぃ', "aiueow"),
    ('い', "aiueow"),
    ('ぅ', "aiueow"),
    ('う', "aiueow"),
    ('ぇ', "aiueow"),
    ('え', "aiueow"),
    ('ぉ', "aiueow"),
    ('お', "aiueow"),
    ('か', "k"),
    ('き', "k"),
    ('く', "k"),
    ('け', "k"),
    ('こ', "k"),
    ('が', "g"),
    ('ぎ', "g"),
    ('ぐ', "g"),
    ('げ', "g"),
    ('ご', "g"),
    ('さ', "s"),
    ('し', "s"),
    ('す', "s"),
    ('せ', "s"),
    ('そ', "s"),
    ('ざ', "zj"),
    ('じ', "zj"),
    ('ず', "zj"),
    ('ぜ', "zj"),
    ('ぞ', "zj"),
    ('た', "t"),
    ('ち', "tc"),
    ('っ', "aiueokstchgzjfdbpw"),
    ('つ', "t"),
    ('て', "t"),
    ('と', "t"),
    ('だ', "d"),
    ('ぢ', "d"),
    ('づ', "d"),
    ('で', "d"),
    ('ど', "d"),
    ('な', "n"),
    ('に', "n"),
    ('ぬ', "n"),
    ('ね', "n"),
    ('の', "n"),
    ('は', "h"),
    ('ひ', "h"),
    ('ふ', "hf"),
    ('へ', "h"),
    ('ほ', "h"),
    ('ば', "b"),
    ('び', "b"),
    ('ぶ', "b"),
    ('べ', "b"),
    ('ぼ', "b"),
    ('ぱ', "p"),
    ('ぴ', "p"),
    ('ぷ', "p"),
    ('ぺ', "p"),
    ('ぽ', "p"),
    ('ま', "m"),
    ('み', "m"),
    ('む', "m"),
    ('め', "m"),
    ('も', "m"),
    ('ゃ', "y"),
    ('や', "y"),
    ('ゅ', "y"),
    ('ゆ', "y"),
    ('ょ', "y"),
    ('よ', "y"),
    ('ら', "rl"),
    ('り', "rl"),
    ('る', "rl"),
    ('れ', "rl"),
    ('ろ', "rl"),
    ('ゎ', "wiueo"),
    ('わ', "wiueo"),
    ('ゐ', "wiueo"),
    ('ゑ', "wiueo"),
    ('を', "w"),
    ('ん', "n"),
    ('ヵ', "k"),
    ('ヶ', "k"),
];

fn table() -> &'static HashMap<char, &'static str> {
    static MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| TABLE.iter().copied().collect())
}

/// Class letters the kana `ch` satisfies, if any.
pub fn classes(ch: char) -> Option<&'static str> {
    table().get(&ch).copied()
}

/// Whether the kana `ch` is an acceptable okurigana for the given class.
pub fn accepts(ch: char, class: char) -> bool {
    classes(ch).is_some_and(|list| list.contains(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_kana_accept_vowel_classes() {
        assert!(accepts('う', 'u'));
        assert!(accepts('い', 'i'));
        assert!(!accepts('う', 'k'));
    }

    #[test]
    fn sokuon_accepts_most_consonants() {
        assert!(accepts('っ', 't'));
        assert!(accepts('っ', 'k'));
        assert!(!accepts('っ', 'y'));
    }

    #[test]
    fn unmapped_kana_accept_nothing() {
        assert!(!accepts('ー', 'a'));
        assert!(!accepts('A', 'a'));
    }
}

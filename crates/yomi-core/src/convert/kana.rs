//! Hiragana and katakana word converters.
//!
//! The two scripts differ by a fixed 0x60 code point offset, with two
//! irregularities: ヴ folds to う plus the voice sound mark (hiragana has no
//! single vu character), and the prolonged sound mark ー belongs to both
//! scripts.

use super::{Convert, Target};
use crate::dict::DictError;
use crate::input::KanjiInput;
use crate::output::KanjiOutput;
use crate::unicode;

const WO: char = '\u{3092}';
const VOICE_MARK: char = '\u{309b}';
const SEMI_VOICE_MARK: char = '\u{309c}';
const PROLONGED_MARK: char = '\u{30fc}';

/// Converts a run of hiragana, either to katakana or to itself (the
/// identity pass used for wakachigaki word grouping).
pub struct HiraganaConverter {
    target: Target,
}

impl HiraganaConverter {
    pub fn to_katakana() -> Self {
        HiraganaConverter { target: Target::Katakana }
    }

    pub fn to_hiragana() -> Self {
        HiraganaConverter { target: Target::Hiragana }
    }
}

impl Convert for HiraganaConverter {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        match self.target {
            Target::Katakana => Ok(hiragana_to_katakana(input, output)),
            _ => Ok(hiragana_word(input, output)),
        }
    }
}

/// Converts a run of katakana, either to hiragana or to itself.
pub struct KatakanaConverter {
    target: Target,
}

impl KatakanaConverter {
    pub fn to_hiragana() -> Self {
        KatakanaConverter { target: Target::Hiragana }
    }

    pub fn to_katakana() -> Self {
        KatakanaConverter { target: Target::Katakana }
    }
}

impl Convert for KatakanaConverter {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        match self.target {
            Target::Hiragana => Ok(katakana_to_hiragana(input, output)),
            _ => Ok(katakana_word(input, output)),
        }
    }
}

fn is_hiragana_text(ch: char) -> bool {
    ch == PROLONGED_MARK || unicode::is_hiragana(ch)
}

fn is_katakana_text(ch: char) -> bool {
    matches!(ch, VOICE_MARK | SEMI_VOICE_MARK) || unicode::is_katakana(ch)
}

fn hiragana_to_katakana(input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> bool {
    match input.current() {
        Some(ch) if is_hiragana_text(ch) => {}
        _ => return false,
    }
    while let Some(ch) = input.current() {
        if ch == 'う' {
            input.consume(1);
            if input.current() == Some(VOICE_MARK) {
                input.consume(1);
                output.push('ヴ');
            } else {
                output.push('ウ');
            }
        } else if ('\u{3041}'..='\u{3093}').contains(&ch) || matches!(ch, 'ゝ' | 'ゞ') {
            input.consume(1);
            output.push(char::from_u32(ch as u32 + 0x60).unwrap_or(ch));
        } else if is_hiragana_text(ch) {
            input.consume(1);
            output.push(ch);
        } else {
            break;
        }
    }
    true
}

fn katakana_to_hiragana(input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> bool {
    match input.current() {
        Some(ch) if is_katakana_text(ch) => {}
        _ => return false,
    }
    while let Some(ch) = input.current() {
        if ch == 'ヴ' {
            input.consume(1);
            output.push('う');
            output.push(VOICE_MARK);
        } else if ('\u{30a1}'..='\u{30f3}').contains(&ch) || matches!(ch, 'ヽ' | 'ヾ') {
            input.consume(1);
            output.push(char::from_u32(ch as u32 - 0x60).unwrap_or(ch));
        } else if is_katakana_text(ch) {
            input.consume(1);
            output.push(ch);
        } else {
            break;
        }
    }
    true
}

/// Writes a hiragana word unchanged. を ends a word (it only appears as the
/// object particle), so wakachigaki can split around it.
fn hiragana_word(input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> bool {
    let Some(ch) = input.current() else { return false };
    if !is_hiragana_text(ch) {
        return false;
    }
    output.push(ch);
    let mut length = 1;
    if ch != WO {
        while let Some(next) = input.more_one() {
            if next == WO || !is_hiragana_text(next) {
                break;
            }
            output.push(next);
            length += 1;
        }
    }
    input.consume(length);
    true
}

fn katakana_word(input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> bool {
    let Some(ch) = input.current() else { return false };
    if !is_katakana_text(ch) {
        return false;
    }
    output.push(ch);
    let mut length = 1;
    while let Some(next) = input.more_one() {
        if !is_katakana_text(next) {
            break;
        }
        output.push(next);
        length += 1;
    }
    input.consume(length);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(conv: &mut dyn Convert, text: &str) -> (bool, String) {
        let mut input = KanjiInput::from_str(text);
        let mut output = KanjiOutput::new();
        let ok = conv.convert(&mut input, &mut output).unwrap();
        (ok, output.into_string())
    }

    #[test]
    fn hiragana_becomes_katakana() {
        let (ok, out) = run(&mut HiraganaConverter::to_katakana(), "かなもじ");
        assert!(ok);
        assert_eq!(out, "カナモジ");
    }

    #[test]
    fn vu_digraph_becomes_single_katakana() {
        let (ok, out) = run(&mut HiraganaConverter::to_katakana(), "う゛ぁいおりん");
        assert!(ok);
        assert_eq!(out, "ヴァイオリン");
    }

    #[test]
    fn katakana_becomes_hiragana() {
        let (ok, out) = run(&mut KatakanaConverter::to_hiragana(), "カナモジ");
        assert!(ok);
        assert_eq!(out, "かなもじ");
    }

    #[test]
    fn vu_expands_to_voice_marked_u() {
        let (ok, out) = run(&mut KatakanaConverter::to_hiragana(), "ヴ");
        assert!(ok);
        assert_eq!(out, "う\u{309b}");
    }

    #[test]
    fn prolonged_mark_passes_through() {
        let (ok, out) = run(&mut KatakanaConverter::to_hiragana(), "ラーメン");
        assert!(ok);
        assert_eq!(out, "らーめん");
    }

    #[test]
    fn conversion_stops_at_other_scripts() {
        let mut input = KanjiInput::from_str("かなXYZ");
        let mut output = KanjiOutput::new();
        assert!(HiraganaConverter::to_katakana().convert(&mut input, &mut output).unwrap());
        assert_eq!(output.as_str(), "カナ");
        assert_eq!(input.current(), Some('X'));
    }

    #[test]
    fn wrong_script_is_rejected() {
        let (ok, out) = run(&mut HiraganaConverter::to_katakana(), "カナ");
        assert!(!ok);
        assert_eq!(out, "");
    }

    #[test]
    fn hiragana_word_splits_before_wo() {
        let mut input = KanjiInput::from_str("ほんをよむ");
        let mut output = KanjiOutput::new();
        assert!(HiraganaConverter::to_hiragana().convert(&mut input, &mut output).unwrap());
        assert_eq!(output.as_str(), "ほん");
        assert_eq!(input.current(), Some('を'));
        assert!(HiraganaConverter::to_hiragana().convert(&mut input, &mut output).unwrap());
        assert_eq!(output.as_str(), "ほんを");
    }
}

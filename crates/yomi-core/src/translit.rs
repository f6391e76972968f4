//! The transliteration driver.
//!
//! Dispatches on the script of the current input character to a converter
//! chosen per script, falling back to the passthrough run grouper. This is
//! the piece the CLI drives; library users can also call the converters
//! directly.

use std::sync::Arc;

use crate::convert::{
    CompoundConverter, Convert, DefaultConverter, HiraganaConverter, KanaRomaConverter,
    KanjiConverter, KanjiStage, KatakanaConverter, RomajiSystem, Target,
};
use crate::dict::{DictError, KanwaDict};
use crate::input::KanjiInput;
use crate::itaiji::ItaijiTable;
use crate::output::KanjiOutput;
use crate::unicode;

#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error(transparent)]
    Dict(#[from] DictError),
    #[error("unsupported {script} conversion target: {target:?}")]
    UnsupportedTarget { script: &'static str, target: Target },
}

/// Configured conversion pipeline over a shared dictionary.
///
/// Each script (kanji, hiragana, katakana) gets an optional [`Target`];
/// unset scripts pass through untouched. Wakachigaki mode overrides all
/// three with identity converters and turns on the output separator, so the
/// result is the input text split into words.
pub struct Transliterator {
    dict: Arc<KanwaDict>,
    itaiji: Arc<ItaijiTable>,
    kanji_target: Option<Target>,
    hiragana_target: Option<Target>,
    katakana_target: Option<Target>,
    romaji_system: RomajiSystem,
    heiki: bool,
    furigana: bool,
    capitalize: bool,
    upper_case: bool,
    wakachigaki: bool,
    space_eat: bool,
}

impl Transliterator {
    pub fn new(dict: Arc<KanwaDict>, itaiji: Arc<ItaijiTable>) -> Self {
        Transliterator {
            dict,
            itaiji,
            kanji_target: None,
            hiragana_target: None,
            katakana_target: None,
            romaji_system: RomajiSystem::default(),
            heiki: false,
            furigana: false,
            capitalize: false,
            upper_case: false,
            wakachigaki: false,
            space_eat: false,
        }
    }

    pub fn set_kanji_target(&mut self, target: Option<Target>) {
        self.kanji_target = target;
    }

    /// Kanji is not a valid destination for kana scripts.
    pub fn set_hiragana_target(&mut self, target: Option<Target>) -> Result<(), TranslitError> {
        if target == Some(Target::Kanji) {
            return Err(TranslitError::UnsupportedTarget {
                script: "hiragana",
                target: Target::Kanji,
            });
        }
        self.hiragana_target = target;
        Ok(())
    }

    pub fn set_katakana_target(&mut self, target: Option<Target>) -> Result<(), TranslitError> {
        if target == Some(Target::Kanji) {
            return Err(TranslitError::UnsupportedTarget {
                script: "katakana",
                target: Target::Kanji,
            });
        }
        self.katakana_target = target;
        Ok(())
    }

    pub fn set_romaji_system(&mut self, system: RomajiSystem) {
        self.romaji_system = system;
    }

    pub fn set_heiki_mode(&mut self, on: bool) {
        self.heiki = on;
    }

    pub fn set_furigana_mode(&mut self, on: bool) {
        self.furigana = on;
    }

    pub fn set_capitalize_mode(&mut self, on: bool) {
        self.capitalize = on;
    }

    pub fn set_upper_case_mode(&mut self, on: bool) {
        self.upper_case = on;
    }

    pub fn set_space_eat_mode(&mut self, on: bool) {
        self.space_eat = on;
    }

    /// Word splitting: every script keeps its own characters and the output
    /// gains a space between words.
    pub fn set_wakachigaki_mode(&mut self, on: bool) {
        self.wakachigaki = on;
        if on {
            self.kanji_target = Some(Target::Kanji);
            self.hiragana_target = Some(Target::Hiragana);
            self.katakana_target = Some(Target::Katakana);
        } else {
            self.kanji_target = None;
            self.hiragana_target = None;
            self.katakana_target = None;
        }
    }

    pub fn wakachigaki_mode(&self) -> bool {
        self.wakachigaki
    }

    fn kanji_converter(&self) -> KanjiConverter {
        let mut converter = KanjiConverter::new(self.dict.clone(), self.itaiji.clone());
        converter.set_heiki_mode(self.heiki);
        converter.set_furigana_mode(self.furigana);
        converter
    }

    fn kana_roma(&self, table: fn(RomajiSystem) -> KanaRomaConverter) -> Box<dyn Convert> {
        let mut converter = table(self.romaji_system);
        converter.set_capitalize_mode(self.capitalize);
        converter.set_upper_case_mode(self.upper_case);
        Box::new(converter)
    }

    fn build_kanji(&self, target: Target) -> Box<dyn Convert> {
        match target {
            Target::Kanji => Box::new(KanjiStage::kanji(self.kanji_converter())),
            Target::Hiragana => Box::new(KanjiStage::hiragana(self.kanji_converter())),
            Target::Katakana => Box::new(CompoundConverter::new(
                self.build_kanji(Target::Hiragana),
                self.build_hiragana(Target::Katakana),
            )),
            Target::Ascii => Box::new(CompoundConverter::new(
                self.build_kanji(Target::Hiragana),
                self.build_hiragana(Target::Ascii),
            )),
        }
    }

    // target validation happened in the setters; Kanji cannot reach here
    fn build_hiragana(&self, target: Target) -> Box<dyn Convert> {
        match target {
            Target::Ascii => self.kana_roma(KanaRomaConverter::hiragana),
            Target::Katakana => Box::new(HiraganaConverter::to_katakana()),
            _ => Box::new(HiraganaConverter::to_hiragana()),
        }
    }

    fn build_katakana(&self, target: Target) -> Box<dyn Convert> {
        match target {
            Target::Ascii => self.kana_roma(KanaRomaConverter::katakana),
            Target::Hiragana => Box::new(KatakanaConverter::to_hiragana()),
            _ => Box::new(KatakanaConverter::to_katakana()),
        }
    }

    /// Drives the conversion until the input is exhausted.
    pub fn convert(&self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<(), TranslitError> {
        let mut kanji = self.kanji_target.map(|t| self.build_kanji(t));
        let mut hiragana = self.hiragana_target.map(|t| self.build_hiragana(t));
        let mut katakana = self.katakana_target.map(|t| self.build_katakana(t));
        let mut fallback = DefaultConverter;

        while let Some(ch) = input.current() {
            let stage: Option<&mut Box<dyn Convert>> = if unicode::is_kanji(ch) {
                kanji.as_mut()
            } else if unicode::is_hiragana(ch) {
                hiragana.as_mut()
            } else if unicode::is_katakana(ch) {
                katakana.as_mut()
            } else {
                None
            };
            output.put_separator();
            let converted = match stage {
                Some(converter) => converter.convert(input, output)?,
                None => fallback.convert(input, output)?,
            };
            if !converted {
                input.consume(1);
                if self.wakachigaki {
                    output.push(ch);
                }
            }
        }
        Ok(())
    }

    /// Convenience wrapper: converts a string to a string, wiring up the
    /// input and output modes.
    pub fn convert_string(&self, text: &str) -> Result<String, TranslitError> {
        let mut input = KanjiInput::from_str(text);
        input.set_space_eat(self.space_eat);
        let mut output = KanjiOutput::new();
        output.set_split_mode(self.wakachigaki);
        self.convert(&mut input, &mut output)?;
        Ok(output.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transliterator(entries: &[(&str, &str, Option<char>)]) -> Transliterator {
        let itaiji = Arc::new(ItaijiTable::new());
        let dict = Arc::new(KanwaDict::new(itaiji.clone()));
        for (kanji, reading, okurigana) in entries {
            dict.add_entry(kanji, reading, *okurigana);
        }
        Transliterator::new(dict, itaiji)
    }

    fn base_entries() -> Vec<(&'static str, &'static str, Option<char>)> {
        vec![
            ("言", "い", Some('u')),
            ("言", "げん", None),
            ("買い物", "かいもの", None),
            ("東京", "とうきょう", None),
        ]
    }

    #[test]
    fn kanji_to_hiragana() {
        let mut tl = transliterator(&base_entries());
        tl.set_kanji_target(Some(Target::Hiragana));
        assert_eq!(tl.convert_string("言う").unwrap(), "いう");
    }

    #[test]
    fn kanji_to_katakana_goes_through_hiragana() {
        let mut tl = transliterator(&base_entries());
        tl.set_kanji_target(Some(Target::Katakana));
        assert_eq!(tl.convert_string("東京").unwrap(), "トウキョウ");
    }

    #[test]
    fn kanji_to_ascii() {
        let mut tl = transliterator(&base_entries());
        tl.set_kanji_target(Some(Target::Ascii));
        assert_eq!(tl.convert_string("東京").unwrap(), "toukyou");
    }

    #[test]
    fn unconfigured_scripts_pass_through() {
        let mut tl = transliterator(&base_entries());
        tl.set_kanji_target(Some(Target::Hiragana));
        assert_eq!(tl.convert_string("abc 言う!").unwrap(), "abc いう!");
    }

    #[test]
    fn hiragana_to_ascii() {
        let mut tl = transliterator(&[]);
        tl.set_hiragana_target(Some(Target::Ascii)).unwrap();
        assert_eq!(tl.convert_string("かな").unwrap(), "kana");
    }

    #[test]
    fn katakana_to_hiragana_target() {
        let mut tl = transliterator(&[]);
        tl.set_katakana_target(Some(Target::Hiragana)).unwrap();
        assert_eq!(tl.convert_string("カナ").unwrap(), "かな");
    }

    #[test]
    fn kana_targets_reject_kanji() {
        let mut tl = transliterator(&[]);
        assert!(tl.set_hiragana_target(Some(Target::Kanji)).is_err());
        assert!(tl.set_katakana_target(Some(Target::Kanji)).is_err());
    }

    #[test]
    fn wakachigaki_splits_words() {
        let mut tl = transliterator(&base_entries());
        tl.set_wakachigaki_mode(true);
        assert_eq!(tl.convert_string("買い物する").unwrap(), "買い物 する");
    }

    #[test]
    fn wakachigaki_passes_unknown_kanji_through() {
        let mut tl = transliterator(&base_entries());
        tl.set_wakachigaki_mode(true);
        assert_eq!(tl.convert_string("鰻").unwrap(), "鰻");
    }

    #[test]
    fn heiki_lists_alternatives() {
        let mut tl = transliterator(&[("言", "げん", None), ("言", "こと", None)]);
        tl.set_kanji_target(Some(Target::Hiragana));
        tl.set_heiki_mode(true);
        assert_eq!(tl.convert_string("言").unwrap(), "{げん|こと}");
    }

    #[test]
    fn furigana_annotates_the_surface() {
        let mut tl = transliterator(&base_entries());
        tl.set_kanji_target(Some(Target::Hiragana));
        tl.set_furigana_mode(true);
        assert_eq!(tl.convert_string("言う").unwrap(), "言う[いう]");
    }

    #[test]
    fn space_eat_spans_whitespace() {
        let mut tl = transliterator(&[("買い物", "かいもの", None)]);
        tl.set_kanji_target(Some(Target::Hiragana));
        tl.set_space_eat_mode(true);
        assert_eq!(tl.convert_string("買い物").unwrap(), "かいもの");
        assert_eq!(tl.convert_string("買い 物").unwrap(), "かいもの");
    }

    #[test]
    fn romaji_system_is_respected() {
        let mut tl = transliterator(&[]);
        tl.set_hiragana_target(Some(Target::Ascii)).unwrap();
        tl.set_romaji_system(RomajiSystem::Kunrei);
        assert_eq!(tl.convert_string("しゃしん").unwrap(), "syasin");
    }
}

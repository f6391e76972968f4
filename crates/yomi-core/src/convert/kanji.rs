//! Longest-match kanji resolution against the kanwa dictionary.

use std::sync::Arc;

use super::Convert;
use crate::dict::{DictError, KanwaDict};
use crate::input::KanjiInput;
use crate::itaiji::ItaijiTable;
use crate::output::KanjiOutput;
use crate::unicode;

const SOKUON: char = 'っ';

/// One successful resolution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The normalized key character plus the matched span.
    pub surface: String,
    /// Distinct readings accepted at the maximal matched length, in
    /// candidate order.
    pub readings: Vec<String>,
}

/// Resolves kanji spans to readings by longest match.
///
/// Heiki mode collects every distinct reading of the longest match instead
/// of stopping at the first; furigana mode changes the rendering of
/// [`to_hiragana`](Self::to_hiragana) to `surface[reading]`.
pub struct KanjiConverter {
    dict: Arc<KanwaDict>,
    itaiji: Arc<ItaijiTable>,
    heiki: bool,
    furigana: bool,
}

impl KanjiConverter {
    pub fn new(dict: Arc<KanwaDict>, itaiji: Arc<ItaijiTable>) -> Self {
        KanjiConverter {
            dict,
            itaiji,
            heiki: false,
            furigana: false,
        }
    }

    pub fn set_heiki_mode(&mut self, on: bool) {
        self.heiki = on;
    }

    pub fn heiki_mode(&self) -> bool {
        self.heiki
    }

    pub fn set_furigana_mode(&mut self, on: bool) {
        self.furigana = on;
    }

    pub fn furigana_mode(&self) -> bool {
        self.furigana
    }

    /// One longest-match step. On success the matched span (key included)
    /// has been consumed from the input; on `None` nothing was consumed.
    ///
    /// Candidates are tried in priority order, so the first accepted match
    /// fixes the span length; the walk then either stops (first-match mode)
    /// or continues collecting readings until the candidates get shorter
    /// (heiki mode). A span ending in っ extends over one following
    /// hiragana, pulling the doubled-consonant okurigana into the result.
    pub fn resolve(&self, input: &mut KanjiInput<'_>) -> Result<Option<Resolved>, DictError> {
        let Some(raw) = input.current() else {
            return Ok(None);
        };
        let key = self.itaiji.get(raw);
        let candidates = self.dict.lookup(key)?;

        let mut readings: Vec<String> = Vec::new();
        let mut rest: Vec<char> = Vec::new();
        let mut materialized = false;
        let mut matched = 0usize;
        for candidate in &candidates {
            let length = candidate.required_len();
            if !materialized {
                // the first candidate is the longest, so one lookahead
                // serves the whole walk (one extra char for the sokuon rule)
                rest = input.more(length + 1);
                for ch in &mut rest {
                    *ch = self.itaiji.get(*ch);
                }
                materialized = true;
            }
            if length < matched {
                break;
            }
            if length > rest.len() {
                continue;
            }
            let Some(reading) = candidate.reading_for(&rest) else {
                continue;
            };
            if !readings.contains(&reading) {
                readings.push(reading);
            }
            matched = length;
            if !self.heiki {
                break;
            }
        }
        if readings.is_empty() {
            return Ok(None);
        }

        if matched > 0 && rest.len() > matched && rest[matched - 1] == SOKUON {
            let next = rest[matched];
            if unicode::is_hiragana(next) {
                matched += 1;
                for reading in &mut readings {
                    reading.push(next);
                }
            }
        }

        input.consume(matched + 1);
        let mut surface = String::new();
        surface.push(key);
        surface.extend(rest[..matched].iter());
        Ok(Some(Resolved { surface, readings }))
    }

    /// Resolves and renders to hiragana. Multiple heiki readings render as
    /// `{a|b}`; furigana mode renders `surface[readings]`.
    pub fn to_hiragana(&self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        let Some(resolved) = self.resolve(input)? else {
            return Ok(false);
        };
        if self.furigana {
            output.push_str(&resolved.surface);
            output.push('[');
        }
        match resolved.readings.as_slice() {
            [reading] => output.push_str(reading),
            readings => {
                output.push('{');
                for (i, reading) in readings.iter().enumerate() {
                    if i > 0 {
                        output.push('|');
                    }
                    output.push_str(reading);
                }
                output.push('}');
            }
        }
        if self.furigana {
            output.push(']');
        }
        Ok(true)
    }

    /// Resolves a dictionary word and emits its surface form unchanged.
    /// Used for wakachigaki, where only the word boundary matters.
    pub fn to_kanji(&self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        let Some(resolved) = self.resolve(input)? else {
            return Ok(false);
        };
        output.push_str(&resolved.surface);
        Ok(true)
    }
}

/// [`KanjiConverter`] as a pipeline stage with a fixed rendering.
pub(crate) struct KanjiStage {
    converter: KanjiConverter,
    emit_surface: bool,
}

impl KanjiStage {
    pub(crate) fn hiragana(converter: KanjiConverter) -> Self {
        KanjiStage { converter, emit_surface: false }
    }

    pub(crate) fn kanji(converter: KanjiConverter) -> Self {
        KanjiStage { converter, emit_surface: true }
    }
}

impl Convert for KanjiStage {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        if self.emit_surface {
            self.converter.to_kanji(input, output)
        } else {
            self.converter.to_hiragana(input, output)
        }
    }
}

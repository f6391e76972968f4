//! Converters and converter composition.

mod kana;
mod kanji;
mod romaji;

pub use kana::{HiraganaConverter, KatakanaConverter};
pub(crate) use kanji::KanjiStage;
pub use kanji::{KanjiConverter, Resolved};
pub use romaji::{KanaRomaConverter, RomajiSystem};

use crate::dict::DictError;
use crate::input::KanjiInput;
use crate::output::KanjiOutput;
use crate::unicode;

/// Destination script of a conversion stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ascii,
    Kanji,
    Hiragana,
    Katakana,
}

/// One conversion stage: reads characters from the input and writes their
/// converted form. Returns `Ok(false)` when the current character cannot be
/// converted, leaving the input untouched so the driver can apply its
/// passthrough policy.
pub trait Convert {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError>;
}

/// Passes through a run of characters of the same class (Japanese versus
/// everything else) unchanged.
pub struct DefaultConverter;

impl Convert for DefaultConverter {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        let Some(mut ch) = input.current() else {
            return Ok(false);
        };
        let class = unicode::is_japanese(ch);
        loop {
            input.consume(1);
            output.push(ch);
            match input.current() {
                Some(next) if unicode::is_japanese(next) == class => ch = next,
                _ => break,
            }
        }
        Ok(true)
    }
}

/// Chains two converters: the front converter's output is replayed through
/// an internal pipe into the back converter. Characters the back converter
/// rejects pass through unchanged.
pub struct CompoundConverter {
    front: Box<dyn Convert>,
    back: Box<dyn Convert>,
    pipe: KanjiInput<'static>,
    staging: KanjiOutput,
}

impl CompoundConverter {
    pub fn new(front: Box<dyn Convert>, back: Box<dyn Convert>) -> Self {
        CompoundConverter {
            front,
            back,
            pipe: KanjiInput::sink(),
            staging: KanjiOutput::new(),
        }
    }
}

impl Convert for CompoundConverter {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        if !self.front.convert(input, &mut self.staging)? {
            return Ok(false);
        }
        self.pipe.feed(&self.staging.take());
        while let Some(ch) = self.pipe.current() {
            if !self.back.convert(&mut self.pipe, output)? {
                self.pipe.consume(1);
                output.push(ch);
            }
        }
        Ok(true)
    }
}

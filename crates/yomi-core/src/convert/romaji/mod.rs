//! Kana to romaji conversion.

mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Convert;
use crate::dict::DictError;
use crate::input::KanjiInput;
use crate::output::KanjiOutput;

/// Romanization system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RomajiSystem {
    #[default]
    Hepburn,
    Kunrei,
}

struct RomaEntry {
    rest: &'static str,
    rest_len: usize,
    romaji: &'static str,
}

/// Per-key substitution lists, longest kana sequence first, so the scan in
/// [`next`](Self::next) is a longest-match walk like the dictionary one.
struct RomaTable {
    groups: HashMap<char, Vec<RomaEntry>>,
}

impl RomaTable {
    fn build(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut groups: HashMap<char, Vec<RomaEntry>> = HashMap::new();
        for (kana, romaji) in pairs {
            let mut chars = kana.chars();
            let key = chars.next().expect("table rows are never empty");
            let rest = chars.as_str();
            groups.entry(key).or_default().push(RomaEntry {
                rest,
                rest_len: rest.chars().count(),
                romaji,
            });
        }
        for list in groups.values_mut() {
            list.sort_by(|a, b| b.rest_len.cmp(&a.rest_len));
        }
        RomaTable { groups }
    }

    /// Matches one syllable at the head of the input, consuming it and
    /// returning its romaji, or `None` without consuming anything.
    fn next(&self, input: &mut KanjiInput<'_>) -> Option<&'static str> {
        let head = input.current()?;
        let group = self.groups.get(&head)?;
        let mut rest: Vec<char> = Vec::new();
        let mut materialized = false;
        for entry in group {
            if entry.rest_len > 0 && !materialized {
                rest = input.more(entry.rest_len);
                materialized = true;
            }
            if entry.rest_len > rest.len() {
                continue;
            }
            let hit = entry.rest_len == 0
                || entry.rest.chars().eq(rest[..entry.rest_len].iter().copied());
            if hit {
                input.consume(entry.rest_len + 1);
                return Some(entry.romaji);
            }
        }
        None
    }
}

fn hiragana_table(system: RomajiSystem) -> &'static RomaTable {
    static HEPBURN: OnceLock<RomaTable> = OnceLock::new();
    static KUNREI: OnceLock<RomaTable> = OnceLock::new();
    match system {
        RomajiSystem::Hepburn => HEPBURN.get_or_init(|| RomaTable::build(table::HIRAGANA_HEPBURN)),
        RomajiSystem::Kunrei => KUNREI.get_or_init(|| RomaTable::build(table::HIRAGANA_KUNREI)),
    }
}

fn katakana_table(system: RomajiSystem) -> &'static RomaTable {
    static HEPBURN: OnceLock<RomaTable> = OnceLock::new();
    static KUNREI: OnceLock<RomaTable> = OnceLock::new();
    match system {
        RomajiSystem::Hepburn => HEPBURN.get_or_init(|| RomaTable::build(table::KATAKANA_HEPBURN)),
        RomajiSystem::Kunrei => KUNREI.get_or_init(|| RomaTable::build(table::KATAKANA_KUNREI)),
    }
}

/// Converts a kana word to romaji, one script per instance.
///
/// Capitalize mode upper-cases the first letter of each word; upper-case
/// mode upper-cases everything.
pub struct KanaRomaConverter {
    table: &'static RomaTable,
    capitalize: bool,
    upper_case: bool,
}

impl KanaRomaConverter {
    pub fn hiragana(system: RomajiSystem) -> Self {
        KanaRomaConverter {
            table: hiragana_table(system),
            capitalize: false,
            upper_case: false,
        }
    }

    pub fn katakana(system: RomajiSystem) -> Self {
        KanaRomaConverter {
            table: katakana_table(system),
            capitalize: false,
            upper_case: false,
        }
    }

    pub fn set_capitalize_mode(&mut self, on: bool) {
        self.capitalize = on;
    }

    pub fn set_upper_case_mode(&mut self, on: bool) {
        self.upper_case = on;
    }

    fn push(&self, output: &mut KanjiOutput, romaji: &str) {
        if self.upper_case {
            for ch in romaji.chars() {
                output.push(ch.to_ascii_uppercase());
            }
        } else {
            output.push_str(romaji);
        }
    }
}

impl Convert for KanaRomaConverter {
    fn convert(&mut self, input: &mut KanjiInput<'_>, output: &mut KanjiOutput) -> Result<bool, DictError> {
        let Some(first) = self.table.next(input) else {
            return Ok(false);
        };
        if self.capitalize {
            let mut chars = first.chars();
            if let Some(head) = chars.next() {
                output.push(head.to_ascii_uppercase());
            }
            self.push(output, chars.as_str());
        } else {
            self.push(output, first);
        }
        while let Some(romaji) = self.table.next(input) {
            self.push(output, romaji);
        }
        Ok(true)
    }
}

//! Plain-text lexicon loading.
//!
//! Two line formats are accepted, and may be mixed in one file:
//!
//! ```text
//! かいもの 買い物            (kanwa: reading, separators, surface form)
//! かu /買/飼/;comment        (SKK: reading with okurigana letter, /candidates/)
//! ```
//!
//! A trailing `a`..`z` on the reading is the okurigana class letter. Lines
//! whose first character is not kana are skipped, which also drops SKK
//! header comments. Files must be UTF-8; other encodings are the caller's
//! problem to transcode.

use std::fs;
use std::path::Path;

use tracing::warn;

use super::KanwaDict;
use crate::unicode;

const SEPARATORS: &[char] = &[' ', ',', '\t'];

impl KanwaDict {
    /// Loads a lexicon file, feeding every parsed item through
    /// [`add_entry`](Self::add_entry).
    pub fn load_lexicon_path(&self, path: &Path) -> std::io::Result<()> {
        let text = fs::read_to_string(path)?;
        self.load_lexicon(&text);
        Ok(())
    }

    /// Parses lexicon text. Unparseable lines are logged and skipped.
    pub fn load_lexicon(&self, text: &str) {
        for line in text.lines() {
            self.load_line(line);
        }
    }

    fn load_line(&self, line: &str) {
        let chars: Vec<char> = line.chars().collect();
        let Some(&first) = chars.first() else { return };
        if !unicode::is_hiragana(first) && !unicode::is_katakana(first) {
            return;
        }
        let mut index = 1;
        while index < chars.len() && !SEPARATORS.contains(&chars[index]) {
            index += 1;
        }
        if index >= chars.len() {
            warn!(line, "ignored lexicon line without a surface form");
            return;
        }
        let mut reading: Vec<char> = chars[..index].to_vec();
        let mut okurigana = None;
        if let Some(&last) = reading.last() {
            if last.is_ascii_lowercase() {
                okurigana = Some(last);
                reading.pop();
            }
        }
        let reading: String = reading.into_iter().collect();
        while index < chars.len() && SEPARATORS.contains(&chars[index]) {
            index += 1;
        }
        if index >= chars.len() {
            warn!(line, "ignored lexicon line without a surface form");
            return;
        }
        if chars[index] == '/' {
            self.load_skk_candidates(&chars[index..], &reading, okurigana);
        } else {
            let mut end = index + 1;
            while end < chars.len() && !SEPARATORS.contains(&chars[end]) {
                end += 1;
            }
            let kanji: String = chars[index..end].iter().collect();
            self.add_entry(&kanji, &reading, okurigana);
        }
    }

    /// `candidates` starts at the leading `/`. A `;` ends the line, a `[`
    /// begins an okurigana section and ends candidate processing.
    fn load_skk_candidates(&self, candidates: &[char], reading: &str, okurigana: Option<char>) {
        let mut kanji = String::new();
        for &ch in &candidates[1..] {
            match ch {
                '/' => {
                    if !kanji.is_empty() {
                        self.add_entry(&kanji, reading, okurigana);
                    }
                    kanji.clear();
                }
                ';' => {
                    if !kanji.is_empty() {
                        self.add_entry(&kanji, reading, okurigana);
                    }
                    return;
                }
                '[' => return,
                _ => kanji.push(ch),
            }
        }
    }
}

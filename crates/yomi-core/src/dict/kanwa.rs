//! Kanwa dictionary store with a lazily loaded binary backing file.
//!
//! Binary layout, all integers big-endian:
//!
//! ```text
//! i32  key count
//! per key:
//!   u16  key character (BMP code unit)
//!   i32  absolute offset of the key's entry region
//!   i16  entry count
//! per entry:
//!   u16-length-prefixed UTF-8 suffix
//!   u16-length-prefixed UTF-8 reading
//!   i8   okurigana class letter, 0 for none
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use super::{DictError, YomiEntry};
use crate::itaiji::ItaijiTable;
use crate::unicode;

const INDEX_HEADER_LEN: usize = 4;
const INDEX_RECORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy)]
struct IndexRecord {
    offset: u32,
    count: u16,
}

struct Ranked {
    entry: YomiEntry,
    seq: u64,
}

/// Entries for one key, kept sorted by candidate priority. Ties between
/// entries of equal priority keep insertion order, tracked by a per-group
/// sequence number.
#[derive(Default)]
struct EntryGroup {
    entries: Vec<Ranked>,
    next_seq: u64,
    loaded: bool,
}

impl EntryGroup {
    fn insert(&mut self, entry: YomiEntry) {
        if self.entries.iter().any(|r| r.entry == entry) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        // the new entry has the highest seq, so it goes after every
        // equal-priority entry already present
        let at = self
            .entries
            .partition_point(|r| r.entry.priority_cmp(&entry) != Ordering::Greater);
        self.entries.insert(at, Ranked { entry, seq });
        debug_assert!(self.entries.windows(2).all(|w| {
            match w[0].entry.priority_cmp(&w[1].entry) {
                Ordering::Less => true,
                Ordering::Equal => w[0].seq < w[1].seq,
                Ordering::Greater => false,
            }
        }));
    }

    fn snapshot(&self) -> Vec<YomiEntry> {
        self.entries.iter().map(|r| r.entry.clone()).collect()
    }
}

#[derive(Default)]
struct Inner {
    table: HashMap<char, EntryGroup>,
    index: HashMap<char, IndexRecord>,
    file: Option<File>,
}

/// The kanji-to-reading dictionary.
///
/// Entries added through [`add_entry`](Self::add_entry) live in memory;
/// opening a backing file with [`open_backing`](Self::open_backing) adds a
/// disk layer whose per-key segments are read on first lookup of the key and
/// merged into the in-memory group. All state sits behind one mutex, so a
/// shared `KanwaDict` can be used from multiple threads.
pub struct KanwaDict {
    itaiji: Arc<ItaijiTable>,
    inner: Mutex<Inner>,
}

impl KanwaDict {
    pub fn new(itaiji: Arc<ItaijiTable>) -> Self {
        KanwaDict {
            itaiji,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn itaiji(&self) -> &Arc<ItaijiTable> {
        &self.itaiji
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    /// Opens a binary dictionary file and parses its index eagerly. The
    /// entry regions stay on disk until a key is first looked up.
    pub fn open_backing(&self, path: &Path) -> Result<(), DictError> {
        let mut file = File::open(path)?;
        let index = read_index(&mut file)?;
        debug!(path = %path.display(), keys = index.len(), "opened dictionary backing file");
        let mut inner = self.lock();
        inner.index = index;
        inner.file = Some(file);
        Ok(())
    }

    /// Drops the backing file handle. Segments already materialized stay
    /// available; unread keys fall back to the in-memory layer only.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.file = None;
        inner.index.clear();
    }

    /// Adds one entry. The surface form and the reading are validated and
    /// normalized first: every character runs through the variant table, the
    /// leading character must be a BMP ideograph, the remainder must be
    /// ideographs or kana, and katakana readings are folded to hiragana.
    /// Invalid input is logged and dropped, never an error.
    pub fn add_entry(&self, kanji: &str, reading: &str, okurigana: Option<char>) {
        let normalized = self.itaiji.normalize(kanji);
        let mut chars = normalized.chars();
        let Some(key) = chars.next() else {
            warn!(reading, "ignored entry with empty surface form");
            return;
        };
        if !unicode::is_kanji(key) || (key as u32) > 0xffff {
            warn!(kanji, reading, "ignored entry: leading character is not a BMP ideograph");
            return;
        }
        let suffix: String = chars.collect();
        if !suffix.chars().all(unicode::is_entry_text) {
            warn!(kanji, reading, "ignored entry: surface form contains non-Japanese text");
            return;
        }
        let Some(reading) = fold_reading(reading) else {
            warn!(kanji, reading, "ignored entry: reading is not kana");
            return;
        };
        if okurigana.is_some_and(|ch| !ch.is_ascii_lowercase()) {
            warn!(kanji, %reading, "ignored entry: okurigana class is not a letter");
            return;
        }
        let mut inner = self.lock();
        inner
            .table
            .entry(key)
            .or_default()
            .insert(YomiEntry::new(suffix, reading, okurigana));
    }

    /// Returns the candidate entries for `key` in priority order. When a
    /// backing file is open and the key has not been materialized yet, its
    /// entry region is read from disk first; that happens at most once per
    /// key, even across a later [`close`](Self::close).
    pub fn lookup(&self, key: char) -> Result<Vec<YomiEntry>, DictError> {
        let mut inner = self.lock();
        let inner = &mut *inner;
        let group = inner.table.entry(key).or_default();
        if let Some(file) = inner.file.as_mut() {
            if !group.loaded {
                if let Some(record) = inner.index.get(&key) {
                    debug!(%key, count = record.count, "materializing dictionary segment");
                    read_segment(file, *record, group)?;
                }
                group.loaded = true;
            }
        }
        Ok(group.snapshot())
    }

    /// Writes every key's entries in the binary layout. Keys are emitted in
    /// code point order so the output is deterministic.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), DictError> {
        let inner = self.lock();
        let mut keys: Vec<char> = inner
            .table
            .iter()
            .filter(|(_, group)| !group.entries.is_empty())
            .map(|(key, _)| *key)
            .collect();
        keys.sort_unstable();

        let header_len = INDEX_HEADER_LEN + INDEX_RECORD_LEN * keys.len();
        let mut body: Vec<u8> = Vec::new();
        let mut index: Vec<(char, u32, u16)> = Vec::with_capacity(keys.len());
        for key in &keys {
            let group = &inner.table[key];
            let offset = u32::try_from(header_len + body.len())
                .map_err(|_| DictError::Malformed("dictionary exceeds the offset range"))?;
            let count = u16::try_from(group.entries.len())
                .map_err(|_| DictError::Malformed("too many entries for one key"))?;
            for ranked in &group.entries {
                write_text(&mut body, ranked.entry.suffix())?;
                write_text(&mut body, ranked.entry.reading())?;
                body.push(ranked.entry.okurigana().map_or(0, |ch| ch as u8));
            }
            index.push((*key, offset, count));
        }

        let key_count = i32::try_from(keys.len())
            .map_err(|_| DictError::Malformed("too many keys"))?;
        writer.write_all(&key_count.to_be_bytes())?;
        for (key, offset, count) in index {
            writer.write_all(&(key as u16).to_be_bytes())?;
            writer.write_all(&(offset as i32).to_be_bytes())?;
            writer.write_all(&(count as i16).to_be_bytes())?;
        }
        writer.write_all(&body)?;
        Ok(())
    }

    /// Keys listed in the open backing file's index, in code point order,
    /// each with the entry count its record declares.
    pub fn backing_keys(&self) -> Vec<(char, u16)> {
        let inner = self.lock();
        let mut keys: Vec<(char, u16)> = inner
            .index
            .iter()
            .map(|(key, record)| (*key, record.count))
            .collect();
        keys.sort_unstable_by_key(|&(key, _)| key);
        keys
    }

    /// [`save`](Self::save) into a freshly created file.
    pub fn save_to_path(&self, path: &Path) -> Result<(), DictError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for KanwaDict {
    fn default() -> Self {
        Self::new(Arc::new(ItaijiTable::new()))
    }
}

/// Validates a reading and folds katakana to hiragana. ヴ has no hiragana
/// counterpart and expands to う plus the voice sound mark.
fn fold_reading(reading: &str) -> Option<String> {
    let mut folded = String::with_capacity(reading.len());
    for ch in reading.chars() {
        if unicode::is_hiragana(ch) {
            folded.push(ch);
        } else if ch == '\u{30f4}' {
            folded.push('\u{3046}');
            folded.push('\u{309b}');
        } else if ('\u{30a1}'..='\u{30f3}').contains(&ch) || matches!(ch, '\u{30fd}' | '\u{30fe}') {
            folded.push(char::from_u32(ch as u32 - 0x60).unwrap_or(ch));
        } else if unicode::is_katakana(ch) {
            folded.push(ch);
        } else {
            return None;
        }
    }
    if folded.is_empty() {
        None
    } else {
        Some(folded)
    }
}

fn read_index(file: &mut File) -> Result<HashMap<char, IndexRecord>, DictError> {
    file.seek(SeekFrom::Start(0))?;
    let count = read_i32(file)?;
    if count < 0 {
        return Err(DictError::Malformed("negative key count"));
    }
    let mut index = HashMap::with_capacity(count as usize);
    for _ in 0..count {
        let code = read_u16(file)?;
        let offset = read_i32(file)?;
        let entries = read_i16(file)?;
        let key = char::from_u32(u32::from(code))
            .ok_or(DictError::Malformed("index key is not a scalar value"))?;
        if offset < 0 || entries < 0 {
            return Err(DictError::Malformed("negative index field"));
        }
        index.insert(
            key,
            IndexRecord {
                offset: offset as u32,
                count: entries as u16,
            },
        );
    }
    Ok(index)
}

fn read_segment(file: &mut File, record: IndexRecord, group: &mut EntryGroup) -> Result<(), DictError> {
    file.seek(SeekFrom::Start(u64::from(record.offset)))?;
    for _ in 0..record.count {
        let suffix = read_text(file)?;
        let reading = read_text(file)?;
        let code = read_u8(file)?;
        let okurigana = (code != 0).then_some(char::from(code));
        group.insert(YomiEntry::new(suffix, reading, okurigana));
    }
    Ok(())
}

fn write_text(out: &mut Vec<u8>, text: &str) -> Result<(), DictError> {
    let len = u16::try_from(text.len())
        .map_err(|_| DictError::Malformed("entry text too long"))?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(text.as_bytes());
    Ok(())
}

fn read_text(file: &mut File) -> Result<String, DictError> {
    let len = read_u16(file)? as usize;
    let mut buf = vec![0u8; len];
    file.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| DictError::Malformed("entry text is not UTF-8"))
}

fn read_u8(file: &mut File) -> Result<u8, DictError> {
    let mut buf = [0u8; 1];
    file.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16(file: &mut File) -> Result<u16, DictError> {
    let mut buf = [0u8; 2];
    file.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn read_i16(file: &mut File) -> Result<i16, DictError> {
    let mut buf = [0u8; 2];
    file.read_exact(&mut buf)?;
    Ok(i16::from_be_bytes(buf))
}

fn read_i32(file: &mut File) -> Result<i32, DictError> {
    let mut buf = [0u8; 4];
    file.read_exact(&mut buf)?;
    Ok(i32::from_be_bytes(buf))
}

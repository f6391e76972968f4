use std::fs;
use std::io::Write;
use std::sync::Arc;

use crate::dict::{DictError, KanwaDict};
use crate::itaiji::ItaijiTable;

fn dict() -> KanwaDict {
    KanwaDict::new(Arc::new(ItaijiTable::new()))
}

#[test]
fn lookup_unknown_key_is_empty() {
    let d = dict();
    assert!(d.lookup('言').unwrap().is_empty());
}

#[test]
fn candidates_come_longest_first() {
    let d = dict();
    d.add_entry("買", "か", Some('u'));
    d.add_entry("買い物", "かいもの", None);
    d.add_entry("買", "ばい", None);
    let entries = d.lookup('買').unwrap();
    let lengths: Vec<usize> = entries.iter().map(|e| e.required_len()).collect();
    assert_eq!(lengths, vec![2, 1, 0]);
    assert_eq!(entries[0].reading(), "かいもの");
    assert_eq!(entries[1].reading(), "か");
    assert_eq!(entries[2].reading(), "ばい");
}

#[test]
fn okurigana_entries_come_before_bare_at_equal_length() {
    let d = dict();
    d.add_entry("言葉", "ことば", None);
    d.add_entry("言", "い", Some('u'));
    let entries = d.lookup('言').unwrap();
    assert_eq!(entries[0].reading(), "い");
    assert_eq!(entries[1].reading(), "ことば");
}

#[test]
fn duplicate_entries_are_dropped() {
    let d = dict();
    d.add_entry("言", "げん", None);
    d.add_entry("言", "げん", None);
    assert_eq!(d.lookup('言').unwrap().len(), 1);
}

#[test]
fn invalid_entries_are_ignored() {
    let d = dict();
    d.add_entry("あいう", "あいう", None); // key is not an ideograph
    d.add_entry("言x", "げん", None); // non-Japanese suffix
    d.add_entry("言", "gen", None); // reading is not kana
    d.add_entry("", "げん", None);
    assert!(d.lookup('言').unwrap().is_empty());
    assert!(d.lookup('あ').unwrap().is_empty());
}

#[test]
fn katakana_readings_fold_to_hiragana() {
    let d = dict();
    d.add_entry("瓦", "ガラス", None);
    let entries = d.lookup('瓦').unwrap();
    assert_eq!(entries[0].reading(), "がらす");
}

#[test]
fn vu_reading_expands() {
    let d = dict();
    d.add_entry("某", "ヴ", None);
    let entries = d.lookup('某').unwrap();
    assert_eq!(entries[0].reading(), "う\u{309b}");
}

#[test]
fn variant_characters_normalize_on_insert() {
    let d = dict();
    d.add_entry("國", "くに", None);
    assert_eq!(d.lookup('国').unwrap().len(), 1);
    assert!(d.lookup('國').unwrap().is_empty());
}

#[test]
fn save_and_reopen_round_trip() {
    let d = dict();
    d.add_entry("言", "い", Some('u'));
    d.add_entry("言", "げん", None);
    d.add_entry("言葉", "ことば", None);
    d.add_entry("買い物", "かいもの", None);

    let file = tempfile::NamedTempFile::new().unwrap();
    d.save_to_path(file.path()).unwrap();

    let reopened = dict();
    reopened.open_backing(file.path()).unwrap();
    let entries = reopened.lookup('言').unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].reading(), "い");
    assert_eq!(entries[0].okurigana(), Some('u'));
    assert_eq!(entries[1].suffix(), "葉");
    assert_eq!(entries[1].reading(), "ことば");
    assert_eq!(entries[2].reading(), "げん");
    assert_eq!(entries[2].okurigana(), None);

    let entries = reopened.lookup('買').unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].suffix(), "い物");
}

#[test]
fn segments_load_once_and_survive_close() {
    let d = dict();
    d.add_entry("言", "げん", None);
    let file = tempfile::NamedTempFile::new().unwrap();
    d.save_to_path(file.path()).unwrap();

    let reopened = dict();
    reopened.open_backing(file.path()).unwrap();
    assert_eq!(reopened.lookup('言').unwrap().len(), 1);
    reopened.close();
    // the materialized segment stays; no disk access happens here
    assert_eq!(reopened.lookup('言').unwrap().len(), 1);
    // a key never looked up while the file was open has nothing
    assert!(reopened.lookup('買').unwrap().is_empty());
}

#[test]
fn disk_and_overlay_entries_merge() {
    let d = dict();
    d.add_entry("言", "げん", None);
    let file = tempfile::NamedTempFile::new().unwrap();
    d.save_to_path(file.path()).unwrap();

    let merged = dict();
    merged.add_entry("言葉", "ことば", None);
    merged.open_backing(file.path()).unwrap();
    let entries = merged.lookup('言').unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].reading(), "ことば");
    assert_eq!(entries[1].reading(), "げん");
}

#[test]
fn truncated_index_fails_to_open() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x00, 0x00]).unwrap();
    file.flush().unwrap();
    let d = dict();
    assert!(matches!(d.open_backing(file.path()), Err(DictError::Io(_))));
}

#[test]
fn negative_key_count_is_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&(-1i32).to_be_bytes()).unwrap();
    file.flush().unwrap();
    let d = dict();
    assert!(matches!(
        d.open_backing(file.path()),
        Err(DictError::Malformed(_))
    ));
}

#[test]
fn empty_dictionary_round_trips() {
    let d = dict();
    let file = tempfile::NamedTempFile::new().unwrap();
    d.save_to_path(file.path()).unwrap();
    assert_eq!(fs::metadata(file.path()).unwrap().len(), 4);
    let reopened = dict();
    reopened.open_backing(file.path()).unwrap();
    assert!(reopened.lookup('言').unwrap().is_empty());
}

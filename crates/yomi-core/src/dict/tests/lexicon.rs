use std::sync::Arc;

use crate::dict::KanwaDict;
use crate::itaiji::ItaijiTable;

fn dict() -> KanwaDict {
    KanwaDict::new(Arc::new(ItaijiTable::new()))
}

#[test]
fn kanwa_lines_with_separators() {
    let d = dict();
    d.load_lexicon("かいもの 買い物\nことば,言葉\nげん\t言\n");
    assert_eq!(d.lookup('買').unwrap().len(), 1);
    assert_eq!(d.lookup('言').unwrap().len(), 2);
}

#[test]
fn trailing_letter_is_the_okurigana_class() {
    let d = dict();
    d.load_lexicon("いu 言\n");
    let entries = d.lookup('言').unwrap();
    assert_eq!(entries[0].okurigana(), Some('u'));
    assert_eq!(entries[0].reading(), "い");
}

#[test]
fn skk_candidate_lists() {
    let d = dict();
    d.load_lexicon("かu /買/飼/\n");
    assert_eq!(d.lookup('買').unwrap().len(), 1);
    assert_eq!(d.lookup('飼').unwrap().len(), 1);
    assert_eq!(d.lookup('買').unwrap()[0].okurigana(), Some('u'));
}

#[test]
fn skk_annotation_ends_the_line() {
    let d = dict();
    d.load_lexicon("ことば /言葉;annotation/unreachable/\n");
    assert_eq!(d.lookup('言').unwrap().len(), 1);
}

#[test]
fn skk_okurigana_section_stops_candidates() {
    let d = dict();
    d.load_lexicon("かu /買/[う/買う/]/\n");
    assert_eq!(d.lookup('買').unwrap().len(), 1);
}

#[test]
fn comment_and_malformed_lines_are_skipped() {
    let d = dict();
    d.load_lexicon(";; comment\n\nかいもの\n漢字 よみ\nかいもの 買い物\n");
    assert_eq!(d.lookup('買').unwrap().len(), 1);
    assert!(d.lookup('漢').unwrap().is_empty());
}

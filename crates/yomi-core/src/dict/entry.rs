//! Dictionary entry model.

use std::cmp::Ordering;

use super::okurigana;

/// One reading of a dictionary key.
///
/// The key character itself is not stored here; entries live in per-key
/// groups inside the store. `suffix` is the remainder of the surface form
/// after the key, and `okurigana` is the inflection class letter the entry
/// requires immediately after the suffix, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YomiEntry {
    suffix: String,
    reading: String,
    okurigana: Option<char>,
    suffix_len: usize,
}

impl YomiEntry {
    pub fn new(suffix: impl Into<String>, reading: impl Into<String>, okurigana: Option<char>) -> Self {
        let suffix = suffix.into();
        let suffix_len = suffix.chars().count();
        YomiEntry {
            suffix,
            reading: reading.into(),
            okurigana,
            suffix_len,
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn okurigana(&self) -> Option<char> {
        self.okurigana
    }

    /// Number of characters after the key this entry needs to match:
    /// the suffix length plus one for the okurigana, when declared.
    pub fn required_len(&self) -> usize {
        self.suffix_len + usize::from(self.okurigana.is_some())
    }

    /// Tests this entry against the normalized characters following the key.
    /// On a match returns the reading, with the accepted okurigana kana
    /// appended when the entry declares an inflection class.
    pub fn reading_for(&self, lookahead: &[char]) -> Option<String> {
        if self.suffix_len > 0 {
            if lookahead.len() < self.suffix_len {
                return None;
            }
            if !self
                .suffix
                .chars()
                .eq(lookahead[..self.suffix_len].iter().copied())
            {
                return None;
            }
        }
        let Some(class) = self.okurigana else {
            return Some(self.reading.clone());
        };
        let next = *lookahead.get(self.suffix_len)?;
        if okurigana::accepts(next, class) {
            let mut reading = self.reading.clone();
            reading.push(next);
            Some(reading)
        } else {
            None
        }
    }

    /// Candidate priority: longer required length first; at equal length an
    /// entry with an inflection class comes before a bare one. `Equal` means
    /// the group breaks the tie by insertion sequence.
    pub(crate) fn priority_cmp(&self, other: &Self) -> Ordering {
        other
            .required_len()
            .cmp(&self.required_len())
            .then_with(|| bare_rank(self).cmp(&bare_rank(other)))
    }
}

fn bare_rank(entry: &YomiEntry) -> u8 {
    u8::from(entry.okurigana.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_len_counts_okurigana() {
        assert_eq!(YomiEntry::new("", "い", None).required_len(), 0);
        assert_eq!(YomiEntry::new("", "い", Some('u')).required_len(), 1);
        assert_eq!(YomiEntry::new("葉", "ことば", None).required_len(), 1);
        assert_eq!(YomiEntry::new("い物", "かいもの", Some('t')).required_len(), 3);
    }

    #[test]
    fn bare_entry_matches_regardless_of_lookahead() {
        let entry = YomiEntry::new("", "げん", None);
        assert_eq!(entry.reading_for(&[]), Some("げん".to_string()));
        assert_eq!(entry.reading_for(&['う']), Some("げん".to_string()));
    }

    #[test]
    fn suffix_must_prefix_the_lookahead() {
        let entry = YomiEntry::new("葉", "ことば", None);
        assert_eq!(entry.reading_for(&['葉']), Some("ことば".to_string()));
        assert_eq!(entry.reading_for(&['草']), None);
        assert_eq!(entry.reading_for(&[]), None);
    }

    #[test]
    fn okurigana_class_gates_the_match() {
        let entry = YomiEntry::new("", "い", Some('u'));
        assert_eq!(entry.reading_for(&['う']), Some("いう".to_string()));
        assert_eq!(entry.reading_for(&['わ']), None);
        assert_eq!(entry.reading_for(&[]), None);
    }

    #[test]
    fn longer_entries_sort_first() {
        let long = YomiEntry::new("い物", "かいもの", None);
        let short = YomiEntry::new("", "か", Some('u'));
        assert_eq!(long.priority_cmp(&short), Ordering::Less);
        assert_eq!(short.priority_cmp(&long), Ordering::Greater);
    }

    #[test]
    fn okurigana_outranks_bare_at_equal_len() {
        let inflected = YomiEntry::new("", "い", Some('u'));
        let bare = YomiEntry::new("葉", "ことば", None);
        assert_eq!(inflected.required_len(), bare.required_len());
        assert_eq!(inflected.priority_cmp(&bare), Ordering::Less);
    }

    #[test]
    fn identical_priority_is_equal() {
        let a = YomiEntry::new("", "い", Some('u'));
        let b = YomiEntry::new("", "ゆ", Some('u'));
        assert_eq!(a.priority_cmp(&b), Ordering::Equal);
    }
}

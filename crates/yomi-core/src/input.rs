//! Pull-based character input with lookahead.

use std::collections::VecDeque;

/// A character stream the converters read through a small lookahead queue.
///
/// `current` returns the head without consuming it, `more` extends the
/// lookahead beyond the head, and `consume` discards a prefix. With
/// whitespace elision on (`set_space_eat`), whitespace inside the lookahead
/// is kept in the queue but does not count toward the requested or consumed
/// lengths, so a dictionary match can span a line break in the source text.
pub struct KanjiInput<'a> {
    source: Box<dyn Iterator<Item = char> + 'a>,
    queue: VecDeque<char>,
    next_index: usize,
    space_eat: bool,
}

impl<'a> KanjiInput<'a> {
    pub fn new(source: impl Iterator<Item = char> + 'a) -> Self {
        KanjiInput {
            source: Box::new(source),
            queue: VecDeque::new(),
            next_index: 0,
            space_eat: false,
        }
    }

    pub fn from_str(text: &'a str) -> Self {
        Self::new(text.chars())
    }

    /// An input with no source, filled through [`feed`](Self::feed). Used
    /// as the pipe between composed converters.
    pub(crate) fn sink() -> KanjiInput<'static> {
        KanjiInput::new(std::iter::empty())
    }

    pub fn set_space_eat(&mut self, on: bool) {
        self.space_eat = on;
    }

    pub fn space_eat(&self) -> bool {
        self.space_eat
    }

    /// Appends characters behind everything already queued.
    pub(crate) fn feed(&mut self, text: &str) {
        self.queue.extend(text.chars());
    }

    /// The head character, pulled from the source if the queue is empty.
    /// Resets the lookahead cursor to just past the head.
    pub fn current(&mut self) -> Option<char> {
        if self.queue.is_empty() {
            let ch = self.source.next()?;
            self.queue.push_back(ch);
        }
        self.next_index = 1;
        self.queue.front().copied()
    }

    /// Materializes up to `n` further logical characters past the current
    /// lookahead position. Whitespace ends the scan unless elision is on, in
    /// which case it is queued but not counted.
    pub fn more(&mut self, n: usize) -> Vec<char> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            if self.next_index >= self.queue.len() {
                match self.source.next() {
                    Some(ch) => self.queue.push_back(ch),
                    None => break,
                }
            }
            let ch = self.queue[self.next_index];
            if ch.is_whitespace() {
                if !self.space_eat {
                    break;
                }
            } else {
                out.push(ch);
            }
            self.next_index += 1;
        }
        out
    }

    /// The next single lookahead character, advancing the cursor.
    pub fn more_one(&mut self) -> Option<char> {
        self.more(1).into_iter().next()
    }

    /// Discards `n` logical characters from the head. Under elision,
    /// whitespace interleaved within the discarded span is removed with it;
    /// a whitespace head always counts as one logical character.
    pub fn consume(&mut self, n: usize) {
        if self.space_eat {
            let mut remaining = n;
            let mut first = true;
            while remaining > 0 {
                let Some(ch) = self.queue.pop_front() else { break };
                if first || !ch.is_whitespace() {
                    remaining -= 1;
                }
                first = false;
            }
        } else {
            let len = n.min(self.queue.len());
            self.queue.drain(..len);
        }
        self.next_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_idempotent() {
        let mut input = KanjiInput::from_str("abc");
        assert_eq!(input.current(), Some('a'));
        assert_eq!(input.current(), Some('a'));
        input.consume(1);
        assert_eq!(input.current(), Some('b'));
    }

    #[test]
    fn empty_input_yields_none() {
        let mut input = KanjiInput::from_str("");
        assert_eq!(input.current(), None);
        assert_eq!(input.more(3), Vec::<char>::new());
    }

    #[test]
    fn more_extends_past_the_head() {
        let mut input = KanjiInput::from_str("abcd");
        assert_eq!(input.current(), Some('a'));
        assert_eq!(input.more(2), vec!['b', 'c']);
        // cursor persists: the next call continues where more() stopped
        assert_eq!(input.more_one(), Some('d'));
        assert_eq!(input.more_one(), None);
    }

    #[test]
    fn whitespace_stops_more_without_elision() {
        let mut input = KanjiInput::from_str("A B C");
        assert_eq!(input.current(), Some('A'));
        assert_eq!(input.more(3), Vec::<char>::new());
    }

    #[test]
    fn elision_skips_whitespace_in_more() {
        let mut input = KanjiInput::from_str("A B C");
        input.set_space_eat(true);
        assert_eq!(input.current(), Some('A'));
        assert_eq!(input.more(2), vec!['B', 'C']);
    }

    #[test]
    fn elision_consume_removes_interleaved_whitespace() {
        let mut input = KanjiInput::from_str("A B CD");
        input.set_space_eat(true);
        input.current();
        input.consume(3);
        // three logical characters plus the two interleaved spaces are gone
        assert_eq!(input.current(), Some('D'));
    }

    #[test]
    fn consume_without_elision_counts_whitespace() {
        let mut input = KanjiInput::from_str("A B");
        input.current();
        input.consume(2);
        assert_eq!(input.current(), Some('B'));
    }

    #[test]
    fn whitespace_head_consumes_as_one() {
        let mut input = KanjiInput::from_str(" AB");
        input.set_space_eat(true);
        assert_eq!(input.current(), Some(' '));
        input.consume(1);
        assert_eq!(input.current(), Some('A'));
    }

    #[test]
    fn feed_appends_to_the_queue() {
        let mut input = KanjiInput::sink();
        assert_eq!(input.current(), None);
        input.feed("あい");
        assert_eq!(input.current(), Some('あ'));
        input.consume(2);
        assert_eq!(input.current(), None);
    }
}

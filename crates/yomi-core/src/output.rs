//! Conversion output buffer.

/// Accumulates converted text.
///
/// In split mode (wakachigaki) the driver calls
/// [`put_separator`](Self::put_separator) between conversion steps; a single
/// space is then emitted before the next non-space character, unless the
/// text around the boundary already contains whitespace.
#[derive(Default)]
pub struct KanjiOutput {
    buf: String,
    split: bool,
    last_was_space: bool,
    pending_separator: bool,
}

impl KanjiOutput {
    pub fn new() -> Self {
        KanjiOutput {
            buf: String::new(),
            split: false,
            last_was_space: true,
            pending_separator: false,
        }
    }

    pub fn set_split_mode(&mut self, on: bool) {
        self.split = on;
        self.pending_separator = false;
    }

    pub fn split_mode(&self) -> bool {
        self.split
    }

    /// Requests a word separator before whatever is written next. No-op
    /// outside split mode.
    pub fn put_separator(&mut self) {
        if self.split {
            self.pending_separator = true;
        }
    }

    pub fn push(&mut self, ch: char) {
        if self.split {
            if ch.is_whitespace() {
                self.last_was_space = true;
                self.pending_separator = false;
            } else {
                if self.pending_separator {
                    self.pending_separator = false;
                    if !self.last_was_space {
                        self.buf.push(' ');
                    }
                }
                self.last_was_space = false;
            }
        }
        self.buf.push(ch);
    }

    pub fn push_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.push(ch);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Takes the accumulated text, leaving the buffer empty but keeping the
    /// mode flags.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_ignores_separators() {
        let mut out = KanjiOutput::new();
        out.push_str("abc");
        out.put_separator();
        out.push_str("def");
        assert_eq!(out.as_str(), "abcdef");
    }

    #[test]
    fn split_mode_inserts_single_space() {
        let mut out = KanjiOutput::new();
        out.set_split_mode(true);
        out.push_str("かれ");
        out.put_separator();
        out.push_str("は");
        assert_eq!(out.as_str(), "かれ は");
    }

    #[test]
    fn no_leading_separator() {
        let mut out = KanjiOutput::new();
        out.set_split_mode(true);
        out.put_separator();
        out.push_str("かれ");
        assert_eq!(out.as_str(), "かれ");
    }

    #[test]
    fn no_double_space_around_existing_whitespace() {
        let mut out = KanjiOutput::new();
        out.set_split_mode(true);
        out.push_str("a ");
        out.put_separator();
        out.push_str("b");
        assert_eq!(out.as_str(), "a b");
    }

    #[test]
    fn take_keeps_the_mode() {
        let mut out = KanjiOutput::new();
        out.set_split_mode(true);
        out.push_str("x");
        assert_eq!(out.take(), "x");
        assert!(out.split_mode());
        assert_eq!(out.as_str(), "");
    }
}

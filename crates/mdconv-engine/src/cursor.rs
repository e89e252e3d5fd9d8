/// A cursor for byte-by-byte marker scanning.
///
/// Every marker is ASCII, and ASCII bytes never occur inside a multi-byte
/// UTF-8 sequence, so any position where the cursor sees a marker is a char
/// boundary and safe to slice at.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_nth(0)
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_nth(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Everything before the cursor.
    pub fn consumed(&self) -> &'a str {
        &self.s[..self.i]
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.consumed(), "h");
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.peek_nth(1), None);
        assert_eq!(cur.consumed(), "");
    }

    #[test]
    fn peek_nth_looks_ahead_without_moving() {
        let cur = Cursor::new("**x");
        assert_eq!(cur.peek_nth(1), Some(b'*'));
        assert_eq!(cur.peek_nth(2), Some(b'x'));
        assert_eq!(cur.peek_nth(3), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
        assert!(cur.eof());
    }

    #[test]
    fn walks_multibyte_text_bytewise() {
        let mut cur = Cursor::new("é_");
        assert_eq!(cur.bump(), Some(0xC3));
        assert_eq!(cur.bump(), Some(0xA9));
        assert_eq!(cur.peek(), Some(b'_'));
        assert_eq!(cur.consumed(), "é");
    }
}

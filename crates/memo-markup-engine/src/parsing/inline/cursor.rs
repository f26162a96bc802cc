/// A cursor for scanning one region of a block's content.
///
/// Operates over a string slice while tracking the byte position in the whole
/// content (via `base`). Looking behind the start or ahead of the end of the slice
/// sees nothing, which is what lets a pass treat claimed text as absent.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The region being scanned.
    pub s: &'a str,
    /// Offset of the region within the block content.
    pub base: usize,
    /// Current local index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current position in the block content (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of the region.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Byte at local index `at`, if inside the region.
    pub fn byte_at(&self, at: usize) -> Option<u8> {
        self.s.as_bytes().get(at).copied()
    }

    /// Byte just before local index `at`, if inside the region.
    pub fn byte_before(&self, at: usize) -> Option<u8> {
        at.checked_sub(1).and_then(|p| self.byte_at(p))
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    /// Byte length of the char at local index `at`, or `None` at the end.
    pub fn char_len_at(&self, at: usize) -> Option<usize> {
        self.s.get(at..)?.chars().next().map(char::len_utf8)
    }

    /// Advances by one char.
    pub fn bump(&mut self) {
        if let Some(n) = self.char_len_at(self.i) {
            self.i += n;
        }
    }

    /// Moves to local index `i`.
    pub fn jump_to(&mut self, i: usize) {
        self.i = i.min(self.s.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        assert_eq!(cur.byte_at(0), Some(b'h'));
        cur.bump();
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn bump_is_char_aware() {
        let mut cur = Cursor::new("日x", 0);
        cur.bump();
        assert_eq!(cur.i, 3);
        cur.bump();
        assert!(cur.eof());
        cur.bump();
        assert_eq!(cur.i, 4);
    }

    #[test]
    fn lookaround_stops_at_region_edges() {
        let cur = Cursor::new("*a*", 5);
        assert_eq!(cur.byte_before(0), None);
        assert_eq!(cur.byte_at(3), None);
        assert_eq!(cur.byte_before(3), Some(b'*'));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.char_len_at(0), None);
        assert!(cur.starts_with(""));
    }

    #[test]
    fn jump_clamps_to_end() {
        let mut cur = Cursor::new("ab", 0);
        cur.jump_to(10);
        assert!(cur.eof());
        assert_eq!(cur.i, 2);
    }
}

/// A cursor over a span's text, tracking how much has been consumed.
///
/// Bracket splitting consumes the text strictly left to right; the cursor's
/// index is the start of the not-yet-processed tail.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being split.
    pub s: &'a str,
    /// Current byte index into `s`. Always on a char boundary.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if the whole string has been consumed.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed tail.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances by `n` bytes.
    ///
    /// Caller must keep the index on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Finds the first occurrence of `pat` in the tail, returns the text
    /// before it and advances past `pat`.
    ///
    /// Returns `None` without moving if `pat` does not occur.
    pub fn take_through(&mut self, pat: &str) -> Option<&'a str> {
        let rest = self.rest();
        let at = rest.find(pat)?;
        self.bump_n(at + pat.len());
        Some(&rest[..at])
    }

    /// Consumes and returns the entire tail.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.i = self.s.len();
        rest
    }
}

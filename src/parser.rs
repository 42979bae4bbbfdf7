// src/parser.rs

/// Minimal cursor over one directive line.
pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Consume up to the next whitespace (or end of input).
    pub fn parse_word(&mut self) -> &'a str {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }

    /// Everything not yet consumed, trimmed.
    pub fn rest(&mut self) -> &'a str {
        let out = self.s[self.i..].trim();
        self.i = self.s.len();
        out
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn skip_ws(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.i += c.len_utf8();
            } else {
                break;
            }
        }
    }
}

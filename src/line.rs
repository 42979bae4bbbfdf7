// src/line.rs
//! Line classification for the input grammar.

const BOM: char = '\u{feff}';

/// What one raw line of input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    /// Trimmed directive text, including the leading `@`.
    Directive(&'a str),
    /// Data token with any inline comment removed; never empty.
    Data(&'a str),
}

/// Drop one leading UTF-8 byte-order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Split on `\n`, `\r\n` or a lone `\r`. A final newline does not yield an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(i) => {
                out.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                out.push(rest);
                break;
            }
        }
    }
    out
}

/// Cut `s` at the first `#` that directly follows a whitespace character.
/// A `#` glued to a token stays part of it.
pub fn strip_inline_comment(s: &str) -> &str {
    let mut prev: Option<char> = None;
    for (i, c) in s.char_indices() {
        if c == '#' && prev.is_some_and(char::is_whitespace) {
            return &s[..i];
        }
        prev = Some(c);
    }
    s
}

pub fn classify(raw: &str) -> Line<'_> {
    let stripped = raw.trim();
    if stripped.is_empty() {
        return Line::Blank;
    }
    if stripped.starts_with('#') {
        return Line::Comment;
    }
    if stripped.starts_with('@') {
        return Line::Directive(stripped);
    }
    match strip_inline_comment(stripped).trim() {
        "" => Line::Blank,
        token => Line::Data(token),
    }
}

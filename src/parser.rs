// src/parser.rs
use crate::errors::{Result, SuggestError};

/// Maximum number of simultaneously open `(`, `[` or `{` scopes the tokenizer tracks.
/// Deeper input is rejected with [`SuggestError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// Split `input` on `separator`, ignoring separators that sit inside an open
/// bracket/paren/curly scope, inside a quoted string, or right after a backslash.
///
/// The trailing part is always emitted, so the result is never empty and
/// re-joining the parts with `separator` gives back `input`.
///
/// Mismatched closers are kept as plain characters; an unterminated quote or
/// bracket simply leaves the rest of the string unsplit.
pub fn segment(input: &str, separator: char) -> Result<Vec<&str>> {
    Segmenter::new(input, separator).run()
}

struct Segmenter<'a> {
    s: &'a str,
    i: usize,
    separator: char,
    // Expected closers, innermost last. Fresh per call.
    closers: Vec<char>,
}

impl<'a> Segmenter<'a> {
    fn new(s: &'a str, separator: char) -> Self {
        Self {
            s,
            i: 0,
            separator,
            closers: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<&'a str>> {
        let mut parts = Vec::new();
        let mut last = 0;
        while let Some(c) = self.peek_char() {
            if self.closers.is_empty() && c == self.separator {
                parts.push(&self.s[last..self.i]);
                self.i += c.len_utf8();
                last = self.i;
                continue;
            }
            self.i += c.len_utf8();
            match c {
                '\\' => self.skip_char(),
                '\'' | '"' => self.skip_quoted(c),
                '(' => self.open(')')?,
                '[' => self.open(']')?,
                '{' => self.open('}')?,
                ')' | ']' | '}' => {
                    if self.closers.last() == Some(&c) {
                        self.closers.pop();
                    }
                }
                _ => {}
            }
        }
        parts.push(&self.s[last..]);
        Ok(parts)
    }

    fn open(&mut self, closer: char) -> Result<()> {
        if self.closers.len() == MAX_NESTING_DEPTH {
            return Err(SuggestError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }
        self.closers.push(closer);
        Ok(())
    }

    // Consume up to and including the matching unescaped quote, or to the end.
    fn skip_quoted(&mut self, quote: char) {
        while let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
            if c == '\\' {
                self.skip_char();
            } else if c == quote {
                return;
            }
        }
    }

    fn skip_char(&mut self) {
        if let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }
}

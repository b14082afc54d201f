//! Replay position in the input token stream.
//!
//! The cursor records where the last reprinted token ended in the *source*
//! grammar, not where the output buffer currently is. Padding is computed
//! from the gap between that position and the next token's begin position.

use gramc_common::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCursor {
    pub line: u32,
    pub column: u32,
}

impl Default for TokenCursor {
    fn default() -> Self {
        TokenCursor { line: 1, column: 1 }
    }
}

impl TokenCursor {
    pub fn new(line: u32, column: u32) -> Self {
        TokenCursor { line, column }
    }

    /// Move to an explicit source position.
    pub fn reset(&mut self, line: u32, column: u32) {
        self.line = line;
        self.column = column;
    }

    /// Append the newlines and spaces that take the cursor to the begin
    /// position of `token`, updating the cursor as it goes.
    ///
    /// A token that starts before the cursor gets no padding.
    pub fn pad_to(&mut self, token: &Token, out: &mut String) {
        while self.line < token.begin_line {
            out.push('\n');
            self.column = 1;
            self.line += 1;
        }
        while self.column < token.begin_column {
            out.push(' ');
            self.column += 1;
        }
    }

    /// Place the cursor just past `token`.
    pub fn advance_past(&mut self, token: &Token) {
        self.line = token.end_line;
        self.column = token.end_column.saturating_add(1);
        if token.ends_with_line_terminator() {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        }
    }

    /// Force a line break when the cursor is mid-line and `begin_line`
    /// differs from the cursor line. Returns whether a break was needed.
    pub fn break_dangling_line(&mut self, begin_line: u32) -> bool {
        if self.column != 1 && self.line != begin_line {
            self.line = self.line.saturating_add(1);
            self.column = 1;
            return true;
        }
        false
    }
}

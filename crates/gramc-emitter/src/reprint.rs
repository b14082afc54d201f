//! Token-faithful reprinting.
//!
//! Tokens are written back with the line breaks and column alignment they had
//! in the grammar file, so action code keeps its shape and its line numbers
//! relative to the rest of the output. Attached comments (special tokens) are
//! written in source order in front of their owner.
//!
//! The `string_*` / `*_comments` forms return text and advance the cursor;
//! the `print_*` forms append that text to the active buffer.

use gramc_common::{Token, TokenArena, TokenId, escape_literal};

use crate::session::GenerationSession;

impl GenerationSession {
    /// Position the cursor at the start of `id`'s earliest attached token,
    /// or of the token itself, so the first rendered token gets no padding.
    pub fn print_token_setup(&mut self, arena: &TokenArena, id: TokenId) {
        let start = arena.earliest_special(id).unwrap_or(id);
        if let Some(token) = arena.get(start) {
            self.cursor.reset(token.begin_line, token.begin_column);
        }
    }

    /// Render a token without its attached comments.
    pub fn string_for_token_only(&mut self, token: &Token) -> String {
        let mut out = String::new();
        self.cursor.pad_to(token, &mut out);
        if token.kind.is_literal() {
            out.push_str(&escape_literal(&token.image, self.profile().escape_style));
        } else {
            out.push_str(&token.image);
        }
        self.cursor.advance_past(token);
        out
    }

    pub fn print_token_only(&mut self, token: &Token) {
        let text = self.string_for_token_only(token);
        self.append(&text);
    }

    /// Render a token preceded by its attached comments.
    pub fn string_to_print(&mut self, arena: &TokenArena, id: TokenId) -> String {
        let Some(token) = arena.get(id) else {
            return String::new();
        };
        let mut out = self.render_special_chain(arena, id);
        out.push_str(&self.string_for_token_only(token));
        out
    }

    pub fn print_token(&mut self, arena: &TokenArena, id: TokenId) {
        let text = self.string_to_print(arena, id);
        self.append(&text);
    }

    /// Render a sequence of tokens, then the comments trailing the last one.
    pub fn print_token_list(&mut self, arena: &TokenArena, ids: &[TokenId]) {
        for &id in ids {
            self.print_token(arena, id);
        }
        if let Some(&last) = ids.last() {
            self.print_trailing_comments(arena, last);
        }
    }

    /// Render only the comments attached in front of `id`.
    ///
    /// If that leaves the cursor mid-line while `id` starts on another line,
    /// one newline is added so the next construct starts on a fresh line.
    pub fn leading_comments(&mut self, arena: &TokenArena, id: TokenId) -> String {
        let Some(token) = arena.get(id) else {
            return String::new();
        };
        if token.special_token.is_none() {
            return String::new();
        }
        let mut out = self.render_special_chain(arena, id);
        if self.cursor.break_dangling_line(token.begin_line) {
            out.push('\n');
        }
        out
    }

    pub fn print_leading_comments(&mut self, arena: &TokenArena, id: TokenId) {
        let text = self.leading_comments(arena, id);
        self.append(&text);
    }

    /// Render the comments that follow `id`, which are the comments attached
    /// in front of the token after it.
    pub fn trailing_comments(&mut self, arena: &TokenArena, id: TokenId) -> String {
        match arena.get(id).and_then(|t| t.next) {
            Some(next) => self.leading_comments(arena, next),
            None => String::new(),
        }
    }

    pub fn print_trailing_comments(&mut self, arena: &TokenArena, id: TokenId) {
        let text = self.trailing_comments(arena, id);
        self.append(&text);
    }

    fn render_special_chain(&mut self, arena: &TokenArena, id: TokenId) -> String {
        let mut out = String::new();
        for special in arena.special_chain(id) {
            if let Some(token) = arena.get(special) {
                out.push_str(&self.string_for_token_only(token));
            }
        }
        out
    }
}

//! Token Model
//!
//! Tokens are produced by the grammar front end and handed to the emitter
//! already classified and linked. A `TokenArena` owns every token of one
//! input file; links between tokens (`special_token`, `next`) are plain
//! `TokenId` indices into the same arena, so no token owns another.
//!
//! Special tokens (comments and other trivia attached to a real token) form
//! a backwards chain through `special_token`, and a forwards chain through
//! `next`. The forward chain of special tokens ends with `None`; it never
//! reaches the real token the comments are attached to.

use serde::{Deserialize, Serialize};

/// Index of a token inside a [`TokenArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u32);

impl TokenId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Lexical category of a token, as far as the emitter cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    StringLiteral,
    CharacterLiteral,
    SingleLineComment,
    MultiLineComment,
    #[default]
    Other,
}

impl TokenKind {
    /// Literal tokens get their image escaped before emission.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::StringLiteral | TokenKind::CharacterLiteral)
    }
}

/// A lexical unit with its 1-based source position.
///
/// `end_column` is inclusive: it is the column of the last character of
/// `image`, not one past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub kind: TokenKind,
    pub image: String,
    pub begin_line: u32,
    pub begin_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    /// Preceding attached token (usually a comment).
    #[serde(default)]
    pub special_token: Option<TokenId>,
    /// Next token in sequence.
    #[serde(default)]
    pub next: Option<TokenId>,
}

impl Token {
    /// Create an unlinked token.
    pub fn new(
        kind: TokenKind,
        image: impl Into<String>,
        begin_line: u32,
        begin_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Token {
            kind,
            image: image.into(),
            begin_line,
            begin_column,
            end_line,
            end_column,
            special_token: None,
            next: None,
        }
    }

    /// Whether the image ends with a line terminator (line comments do).
    pub fn ends_with_line_terminator(&self) -> bool {
        self.image.ends_with('\n') || self.image.ends_with('\r')
    }
}

/// Owning storage for the tokens of one input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenArena {
    tokens: Vec<Token>,
}

impl TokenArena {
    pub fn new() -> Self {
        TokenArena { tokens: Vec::new() }
    }

    /// Add a token and return its id.
    pub fn push(&mut self, token: Token) -> TokenId {
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(token);
        id
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.index())
    }

    pub fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (TokenId(i as u32), t))
    }

    /// Set `next` on `from`.
    pub fn link_next(&mut self, from: TokenId, to: TokenId) {
        if let Some(token) = self.get_mut(from) {
            token.next = Some(to);
        }
    }

    /// Attach `special` as the nearest special token of `owner`.
    ///
    /// The previous nearest special (if any) becomes the predecessor of
    /// `special`, and its `next` is pointed at `special`, mirroring how a
    /// lexer accumulates comments in front of a real token.
    pub fn attach_special(&mut self, owner: TokenId, special: TokenId) {
        let previous = self.get(owner).and_then(|t| t.special_token);
        if let Some(prev) = previous {
            self.link_next(prev, special);
        }
        if let Some(token) = self.get_mut(special) {
            token.special_token = previous;
        }
        if let Some(token) = self.get_mut(owner) {
            token.special_token = Some(special);
        }
    }

    /// Walk `special_token` links back to the earliest attached token.
    ///
    /// Returns `None` when `id` has no attached tokens. The walk is bounded
    /// by the arena size, so a malformed cyclic chain still terminates.
    pub fn earliest_special(&self, id: TokenId) -> Option<TokenId> {
        let mut current = self.get(id)?.special_token?;
        for _ in 0..self.tokens.len() {
            match self.get(current).and_then(|t| t.special_token) {
                Some(prev) => current = prev,
                None => break,
            }
        }
        Some(current)
    }

    /// Attached tokens of `id` in source order, earliest first.
    pub fn special_chain(&self, id: TokenId) -> Vec<TokenId> {
        let mut chain = Vec::new();
        let mut cursor = self.earliest_special(id);
        while let Some(current) = cursor {
            if chain.len() >= self.tokens.len() {
                break;
            }
            chain.push(current);
            cursor = self.get(current).and_then(|t| t.next);
        }
        chain
    }
}

use crate::cursor::TokenCursor;
use gramc_common::{Token, TokenKind};

fn token(image: &str, line: u32, column: u32) -> Token {
    let end = column + image.chars().count() as u32 - 1;
    Token::new(TokenKind::Other, image, line, column, line, end)
}

#[test]
fn pad_to_emits_newlines_then_spaces() {
    let mut cursor = TokenCursor::new(2, 7);
    let mut out = String::new();
    cursor.pad_to(&token("x", 4, 3), &mut out);

    assert_eq!(out, "\n\n  ");
    assert_eq!(cursor, TokenCursor::new(4, 3));
}

#[test]
fn pad_to_emits_nothing_for_token_behind_cursor() {
    let mut cursor = TokenCursor::new(5, 10);
    let mut out = String::new();
    cursor.pad_to(&token("x", 3, 1), &mut out);

    assert!(out.is_empty());
    assert_eq!(cursor, TokenCursor::new(5, 10));
}

#[test]
fn advance_past_moves_one_column_beyond_end() {
    let mut cursor = TokenCursor::default();
    cursor.advance_past(&token("return", 3, 5));
    assert_eq!(cursor, TokenCursor::new(3, 11));
}

#[test]
fn advance_past_line_terminated_token_starts_next_line() {
    let mut cursor = TokenCursor::default();
    let comment = Token::new(TokenKind::SingleLineComment, "// c\n", 2, 4, 2, 8);
    cursor.advance_past(&comment);
    assert_eq!(cursor, TokenCursor::new(3, 1));

    let crlf = Token::new(TokenKind::SingleLineComment, "// c\r", 6, 1, 6, 5);
    cursor.advance_past(&crlf);
    assert_eq!(cursor, TokenCursor::new(7, 1));
}

#[test]
fn break_dangling_line_only_mid_line_on_other_line() {
    let mut cursor = TokenCursor::new(1, 8);
    assert!(!cursor.break_dangling_line(1));
    assert!(cursor.break_dangling_line(2));
    assert_eq!(cursor, TokenCursor::new(2, 1));
    assert!(!cursor.break_dangling_line(5));
}

#[test]
fn advance_past_saturates_at_maximum_position() {
    let mut cursor = TokenCursor::default();
    cursor.advance_past(&Token::new(TokenKind::Other, "x", 1, 1, 1, u32::MAX));
    assert_eq!(cursor, TokenCursor::new(1, u32::MAX));

    let comment = Token::new(TokenKind::SingleLineComment, "//\n", u32::MAX, 1, u32::MAX, 3);
    cursor.advance_past(&comment);
    assert_eq!(cursor, TokenCursor::new(u32::MAX, 1));
}

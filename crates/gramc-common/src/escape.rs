//! Literal escaping.
//!
//! String and character literals copied from a grammar file may contain any
//! character the grammar's encoding allows. Before they are spliced into
//! generated source, everything outside printable ASCII is rewritten as a
//! numeric escape so the output compiles regardless of source encoding.

/// How characters outside the Basic Multilingual Plane are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeEscapeStyle {
    /// Two `\uXXXX` escapes, one per UTF-16 surrogate.
    Utf16Surrogates,
    /// One `\UXXXXXXXX` universal character name.
    LongUniversal,
}

/// Characters that are written unchanged.
fn is_passthrough(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\x0c') || (' '..='~').contains(&ch)
}

/// Escape every non-printable or non-ASCII character of `image`.
pub fn escape_literal(image: &str, style: UnicodeEscapeStyle) -> String {
    if image.chars().all(is_passthrough) {
        return image.to_string();
    }

    let mut out = String::with_capacity(image.len() + 8);
    for ch in image.chars() {
        if is_passthrough(ch) {
            out.push(ch);
            continue;
        }
        let code = ch as u32;
        if code <= 0xFFFF {
            out.push_str(&format!("\\u{code:04x}"));
            continue;
        }
        match style {
            UnicodeEscapeStyle::Utf16Surrogates => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            UnicodeEscapeStyle::LongUniversal => {
                out.push_str(&format!("\\U{code:08x}"));
            }
        }
    }
    out
}

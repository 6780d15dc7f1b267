//! JavaScript string literal helpers
//!
//! `cook_*` turn the raw source text of a literal into the string value the
//! engine would see. They return `None` when the value cannot be represented
//! as a Rust `String` (lone surrogates) or uses legacy octal escapes; callers
//! treat such literals as not statically known.

use std::iter::Peekable;
use std::str::Chars;

/// Cook a `'…'` or `"…"` literal (quotes included)
pub fn cook_string_literal(raw: &str) -> Option<String> {
    let quote = raw.chars().next()?;
    if !matches!(quote, '"' | '\'') || raw.len() < 2 || !raw.ends_with(quote) {
        return None;
    }
    cook_body(&raw[1..raw.len() - 1], false)
}

/// Cook a substitution-free template literal (backticks included); `None`
/// if an unescaped `${` opens a substitution
pub fn cook_template_literal(raw: &str) -> Option<String> {
    if raw.len() < 2 || !raw.starts_with('`') || !raw.ends_with('`') {
        return None;
    }
    cook_body(&raw[1..raw.len() - 1], true)
}

/// Render a Rust string as a double-quoted JavaScript string literal
pub fn to_js_string_literal(value: &str) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""));
    // Valid JSON, but older engines reject raw line/paragraph separators
    json.replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn cook_body(body: &str, template: bool) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let esc = chars.next()?;
                match esc {
                    'n' => units.push(0x0a),
                    't' => units.push(0x09),
                    'r' => units.push(0x0d),
                    'b' => units.push(0x08),
                    'f' => units.push(0x0c),
                    'v' => units.push(0x0b),
                    '0' if !chars.peek().is_some_and(|d| d.is_ascii_digit()) => units.push(0),
                    '0'..='9' => return None,
                    'x' => units.push(take_hex(&mut chars, 2)? as u16),
                    'u' => push_unicode_escape(&mut chars, &mut units)?,
                    '\r' => {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                    }
                    '\n' | '\u{2028}' | '\u{2029}' => {}
                    other => push_char(&mut units, other),
                }
            }
            '$' if template && chars.peek() == Some(&'{') => return None,
            // Template literals normalize CR and CRLF to LF
            '\r' if template => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                units.push(0x0a);
            }
            other => push_char(&mut units, other),
        }
    }

    String::from_utf16(&units).ok()
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}

fn push_unicode_escape(chars: &mut Peekable<Chars>, units: &mut Vec<u16>) -> Option<()> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut cp: u32 = 0;
        let mut digits = 0;
        loop {
            let c = chars.next()?;
            if c == '}' {
                break;
            }
            cp = cp.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
            digits += 1;
        }
        if digits == 0 || cp > 0x10FFFF {
            return None;
        }
        if cp >= 0x10000 {
            let v = cp - 0x10000;
            units.push(0xD800 + (v >> 10) as u16);
            units.push(0xDC00 + (v & 0x3FF) as u16);
        } else {
            units.push(cp as u16);
        }
    } else {
        units.push(take_hex(chars, 4)? as u16);
    }
    Some(())
}

fn take_hex(chars: &mut Peekable<Chars>, count: usize) -> Option<u32> {
    let mut value = 0;
    for _ in 0..count {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

//! Character references in attribute values.
//!
//! Only a narrow, stable subset is decoded: the five XML entities, `&nbsp;`,
//! and semicolon-terminated decimal/hex numeric references that name a valid
//! scalar value. Anything else passes through untouched.

use std::borrow::Cow;

const MAX_HEX_DIGITS: usize = 6;
const MAX_DEC_DIGITS: usize = 7;

fn named(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

fn numeric(body: &str) -> Option<char> {
    let (digits, radix, max) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, MAX_HEX_DIGITS),
        None => (body, 10, MAX_DEC_DIGITS),
    };
    if digits.is_empty() || digits.len() > max || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
}

/// Decode character references in `raw`.
///
/// Returns the input unchanged (borrowed) when it contains no `&`.
///
/// # Examples
///
/// ```
/// use casefix::html::decode_entities;
///
/// assert_eq!(decode_entities("a&amp;b.png"), "a&b.png");
/// assert_eq!(decode_entities("&#x41;&#66;"), "AB");
/// assert_eq!(decode_entities("&bogus;"), "&bogus;");
/// ```
#[must_use]
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after.find(';').and_then(|semi| {
            let body = &after[..semi];
            let ch = match body.strip_prefix('#') {
                Some(num) => numeric(num),
                None => named(body),
            }?;
            Some((ch, semi + 1))
        });

        match decoded {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Whether `value` cannot be written as an unquoted attribute value.
fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| {
            ch.is_ascii_whitespace() || matches!(ch, '"' | '\'' | '=' | '<' | '>' | '`')
        })
}

/// Escape `value` for an attribute delimited by `quote` (or unquoted).
///
/// `&` is escaped only when `escape_amp` is set, so values authored with a
/// bare `&` keep it. An unquoted value that would end the attribute early
/// (whitespace, quotes, `=`, `<`, `>`, backtick) is wrapped in double quotes.
#[must_use]
pub fn encode_attribute_value(value: &str, quote: Option<char>, escape_amp: bool) -> String {
    if quote.is_none() && needs_quotes(value) {
        return format!("\"{}\"", encode_attribute_value(value, Some('"'), escape_amp));
    }

    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' if escape_amp => out.push_str("&amp;"),
            '"' if quote == Some('"') => out.push_str("&quot;"),
            '\'' if quote == Some('\'') => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

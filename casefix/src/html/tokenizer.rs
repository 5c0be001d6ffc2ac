//! A permissive, lossless HTML tokenizer.
//!
//! The tokenizer never fails. Anything that does not form a complete tag is
//! kept as text, and every token records the exact slice it was read from, so
//! `tokens.iter().map(Token::raw).collect::<String>()` is always the input.
//!
//! `script` and `style` bodies are raw text: markup inside them is not
//! tokenized.

use memchr::{memchr, memmem};

use super::token::{Attribute, StartTag, Token};

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

const fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace()
}

fn skip_space(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    i
}

fn starts_with_ignore_ascii_case(hay: &[u8], at: usize, needle: &[u8]) -> bool {
    hay.get(at..at + needle.len())
        .is_some_and(|window| window.eq_ignore_ascii_case(needle))
}

/// Split `input` into tokens.
///
/// # Examples
///
/// ```
/// use casefix::html::{tokenize, Token};
///
/// let tokens = tokenize(r#"<p>Hi <img SRC="a.png"></p>"#);
/// assert_eq!(tokens.len(), 4);
/// match &tokens[2] {
///     Token::StartTag(tag) => {
///         assert_eq!(tag.name(), "img");
///         assert_eq!(tag.attribute("src").and_then(|a| a.raw_value()), Some("a.png"));
///     }
///     other => panic!("unexpected token {other:?}"),
/// }
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(rel) = memchr(b'<', &bytes[pos..]) {
        let lt = pos + rel;
        let Some((token, end)) = scan_markup(input, lt) else {
            pos = lt + 1;
            continue;
        };

        if text_start < lt {
            tokens.push(Token::Text(&input[text_start..lt]));
        }

        let raw_text = match &token {
            Token::StartTag(tag) if !tag.is_self_closing() => RAW_TEXT_ELEMENTS
                .iter()
                .find(|name| tag.name().eq_ignore_ascii_case(name))
                .copied(),
            _ => None,
        };
        tokens.push(token);
        pos = end;
        text_start = end;

        if let Some(element) = raw_text {
            match find_raw_text_end(bytes, end, element) {
                Some((close_start, close_end)) => {
                    if end < close_start {
                        tokens.push(Token::Text(&input[end..close_start]));
                    }
                    tokens.push(Token::EndTag(&input[close_start..close_end]));
                    pos = close_end;
                    text_start = close_end;
                }
                None => break,
            }
        }
    }

    if text_start < bytes.len() {
        tokens.push(Token::Text(&input[text_start..]));
    }
    tokens
}

/// Recognize the construct starting at `lt` (which holds `<`).
///
/// Returns the token and the offset just past it, or `None` when the `<`
/// is plain text.
fn scan_markup(input: &str, lt: usize) -> Option<(Token<'_>, usize)> {
    let bytes = input.as_bytes();
    let next = *bytes.get(lt + 1)?;

    match next {
        b'!' if bytes[lt..].starts_with(b"<!--") => {
            let end = memmem::find(&bytes[lt + 4..], b"-->")
                .map_or(bytes.len(), |rel| lt + 4 + rel + 3);
            Some((Token::Comment(&input[lt..end]), end))
        }
        b'!' | b'?' => {
            let end = lt + memchr(b'>', &bytes[lt..])? + 1;
            Some((Token::Markup(&input[lt..end]), end))
        }
        b'/' => {
            let end = lt + memchr(b'>', &bytes[lt..])? + 1;
            let raw = &input[lt..end];
            if bytes.get(lt + 2).is_some_and(u8::is_ascii_alphabetic) {
                Some((Token::EndTag(raw), end))
            } else {
                Some((Token::Markup(raw), end))
            }
        }
        b if b.is_ascii_alphabetic() => scan_start_tag(input, lt),
        _ => None,
    }
}

fn scan_start_tag(input: &str, lt: usize) -> Option<(Token<'_>, usize)> {
    let bytes = input.as_bytes();
    let mut i = lt + 1;
    while i < bytes.len() && !is_space(bytes[i]) && bytes[i] != b'/' && bytes[i] != b'>' {
        i += 1;
    }
    let name = &input[lt + 1..i];
    let mut attributes = Vec::new();

    loop {
        let space_start = i;
        i = skip_space(bytes, i);
        match *bytes.get(i)? {
            b'>' => {
                let end = i + 1;
                let tag = StartTag::new(&input[lt..end], name, attributes, false, end - lt);
                return Some((Token::StartTag(tag), end));
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                let end = i + 2;
                let tag =
                    StartTag::new(&input[lt..end], name, attributes, true, space_start - lt);
                return Some((Token::StartTag(tag), end));
            }
            b'/' => i += 1,
            _ => {
                let (attr, next) = scan_attribute(input, lt, i)?;
                attributes.push(attr);
                i = next;
            }
        }
    }
}

/// Read one attribute starting at `start`. Value spans are stored relative
/// to `lt`, the start of the enclosing tag.
fn scan_attribute(input: &str, lt: usize, start: usize) -> Option<(Attribute<'_>, usize)> {
    let bytes = input.as_bytes();

    // The first character is always part of the name, even if it is `=`.
    let first_len = input[start..].chars().next()?.len_utf8();
    let mut i = start + first_len;
    while i < bytes.len() && !is_space(bytes[i]) && !matches!(bytes[i], b'/' | b'=' | b'>') {
        i += 1;
    }
    let name = &input[start..i];
    let name_end = i;

    let mut j = skip_space(bytes, i);
    if bytes.get(j) != Some(&b'=') {
        return Some((Attribute::new(name, None, None, None), name_end));
    }
    j = skip_space(bytes, j + 1);

    match *bytes.get(j)? {
        quote @ (b'"' | b'\'') => {
            let close = j + 1 + memchr(quote, &bytes[j + 1..])?;
            let span = (j + 1 - lt)..(close - lt);
            let attr = Attribute::new(
                name,
                Some(&input[j + 1..close]),
                Some(char::from(quote)),
                Some(span),
            );
            Some((attr, close + 1))
        }
        _ => {
            let mut k = j;
            while k < bytes.len() && !is_space(bytes[k]) && bytes[k] != b'>' {
                k += 1;
            }
            let attr = Attribute::new(name, Some(&input[j..k]), None, Some((j - lt)..(k - lt)));
            Some((attr, k))
        }
    }
}

/// Find `</element` followed by optional whitespace and `>`, starting at
/// `from`. Returns the start and end offsets of the closing tag.
fn find_raw_text_end(bytes: &[u8], from: usize, element: &str) -> Option<(usize, usize)> {
    let mut i = from;
    while i < bytes.len() {
        let lt = i + memchr(b'<', &bytes[i..])?;
        if bytes.get(lt + 1) == Some(&b'/')
            && starts_with_ignore_ascii_case(bytes, lt + 2, element.as_bytes())
        {
            let k = skip_space(bytes, lt + 2 + element.len());
            if bytes.get(k) == Some(&b'>') {
                return Some((lt, k + 1));
            }
        }
        i = lt + 1;
    }
    None
}

//! Token types produced by the tokenizer.
//!
//! Every token borrows its exact source text, so serializing an untouched
//! token reproduces the input byte-for-byte. Start tags additionally expose
//! their attributes, whose values can be replaced in place.

use std::borrow::Cow;
use std::ops::Range;

use super::entities::{decode_entities, encode_attribute_value};

/// A single lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Character data, including raw `script`/`style` bodies.
    Text(&'a str),
    /// `<!-- ... -->`, delimiters included.
    Comment(&'a str),
    /// Doctype, CDATA, processing instructions and bogus comments.
    Markup(&'a str),
    /// An opening (or self-closing) tag.
    StartTag(StartTag<'a>),
    /// A closing tag such as `</a>`.
    EndTag(&'a str),
}

impl<'a> Token<'a> {
    /// The source text this token was read from.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        match self {
            Self::Text(raw) | Self::Comment(raw) | Self::Markup(raw) | Self::EndTag(raw) => *raw,
            Self::StartTag(tag) => tag.raw,
        }
    }

    /// Append this token's serialized form to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(raw) | Self::Comment(raw) | Self::Markup(raw) | Self::EndTag(raw) => {
                out.push_str(raw);
            }
            Self::StartTag(tag) => tag.write_to(out),
        }
    }
}

/// One attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    name: &'a str,
    raw_value: Option<&'a str>,
    quote: Option<char>,
    value_span: Option<Range<usize>>,
    replacement: Option<String>,
}

impl<'a> Attribute<'a> {
    pub(crate) fn new(
        name: &'a str,
        raw_value: Option<&'a str>,
        quote: Option<char>,
        value_span: Option<Range<usize>>,
    ) -> Self {
        Self {
            name,
            raw_value,
            quote,
            value_span,
            replacement: None,
        }
    }

    /// The attribute name exactly as authored (`SRC`, `Href`, ...).
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The quote character delimiting the value, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<char> {
        self.quote
    }

    /// The value as written in the source, character references intact.
    ///
    /// `None` for bare attributes such as `<input disabled>`.
    #[must_use]
    pub const fn raw_value(&self) -> Option<&'a str> {
        self.raw_value
    }

    /// The current value with character references decoded.
    #[must_use]
    pub fn value(&self) -> Option<Cow<'_, str>> {
        match &self.replacement {
            Some(value) => Some(Cow::Borrowed(value.as_str())),
            None => self.raw_value.map(decode_entities),
        }
    }

    /// Replace the (decoded) value. Bare attributes cannot be given a value.
    ///
    /// Returns whether the value was stored.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.value_span.is_none() {
            return false;
        }
        self.replacement = Some(value.into());
        true
    }

    /// Whether [`Attribute::set_value`] has been called.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.replacement.is_some()
    }

    fn encoded_replacement(&self) -> Option<String> {
        let value = self.replacement.as_deref()?;
        let escape_amp = self.raw_value.is_some_and(|raw| raw.contains('&'));
        Some(encode_attribute_value(value, self.quote, escape_amp))
    }
}

/// An opening tag together with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag<'a> {
    raw: &'a str,
    name: &'a str,
    attributes: Vec<Attribute<'a>>,
    self_closing: bool,
    /// Offset of the `/>` terminator, with any whitespace before it.
    close_start: usize,
}

impl<'a> StartTag<'a> {
    pub(crate) fn new(
        raw: &'a str,
        name: &'a str,
        attributes: Vec<Attribute<'a>>,
        self_closing: bool,
        close_start: usize,
    ) -> Self {
        Self {
            raw,
            name,
            attributes,
            self_closing,
            close_start,
        }
    }

    /// Tag name as authored.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Source text of the whole tag.
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Whether the tag was written as `<tag/>`.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Attributes in source order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute<'a>] {
        &self.attributes
    }

    /// Mutable attributes in source order.
    pub fn attributes_mut(&mut self) -> &mut [Attribute<'a>] {
        &mut self.attributes
    }

    /// First attribute whose name matches `name` ASCII case-insensitively.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Serialize, splicing in replaced values and dropping the self-closing
    /// slash (`<br/>` and `<br />` both become `<br>`).
    pub fn write_to(&self, out: &mut String) {
        if !self.self_closing && !self.attributes.iter().any(Attribute::is_modified) {
            out.push_str(self.raw);
            return;
        }

        let mut cursor = 0;
        for attr in &self.attributes {
            let (Some(span), Some(encoded)) = (&attr.value_span, attr.encoded_replacement())
            else {
                continue;
            };
            out.push_str(&self.raw[cursor..span.start]);
            out.push_str(&encoded);
            cursor = span.end;
        }

        if self.self_closing {
            out.push_str(&self.raw[cursor..self.close_start]);
            out.push('>');
        } else {
            out.push_str(&self.raw[cursor..]);
        }
    }
}

impl std::fmt::Display for StartTag<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.raw.len());
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

/// Serialize a token stream.
#[must_use]
pub fn serialize(tokens: &[Token<'_>]) -> String {
    let capacity = tokens.iter().map(|t| t.raw().len()).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        token.write_to(&mut out);
    }
    out
}

/// Render a short, human-readable description of a tag for reports.
#[must_use]
pub fn describe_tag(tag: &StartTag<'_>) -> String {
    format!("<{}>", tag.name.to_ascii_lowercase())
}

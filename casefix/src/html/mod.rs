//! Minimal HTML handling for attribute rewriting.
//!
//! Documents are split into [`Token`]s that borrow the source text. Start
//! tags expose their attributes, and replacing an attribute value splices the
//! new value into the original tag text, so everything else in the document
//! (whitespace, attribute order, quoting, name casing, comments) is written
//! back exactly as it was read.
//!
//! The one normalization applied on output is that self-closing start tags
//! lose their slash: `<br/>` and `<img src="a.png" />` are written as `<br>`
//! and `<img src="a.png">`.

pub mod entities;
pub mod token;
pub mod tokenizer;

pub use entities::{decode_entities, encode_attribute_value};
pub use token::{describe_tag, serialize, Attribute, StartTag, Token};
pub use tokenizer::tokenize;

//! Lexer for SVG fragment markup using logos
//!
//! Only the markup structure is tokenized. Text content between tags is
//! recovered by the parser from token spans. Characters that form no token
//! (punctuation in text, digits) come back as `Err` so the parser can reject
//! them outside of text content.

use logos::Logos;

pub use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Tag delimiters (longer first)
    #[token("</")]
    CloseOpen,
    #[token("/>")]
    SelfClose,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Equals,

    // Element and attribute names
    #[regex(r"[a-zA-Z_:][a-zA-Z0-9_:.\-]*", |lex| lex.slice().to_string())]
    Name(String),

    // Quoted attribute values; never span a tag opener
    #[regex(r#""[^"<]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    #[regex(r#"'[^'<]*'"#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Str(String),

    // Markup that carries no icon data
    #[regex(r"<!--([^-]|-[^-])*-->")]
    Comment,
    #[regex(r"<\?[^?]*\?>")]
    Declaration,
    #[regex(r"<![a-zA-Z][^>]*>")]
    Doctype,
}

impl Token {
    /// Comments, declarations and doctypes
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Token::Comment | Token::Declaration | Token::Doctype)
    }
}

/// Lex input string into tokens with spans
///
/// Input that matches no token is yielded as `Err(())` with its span.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

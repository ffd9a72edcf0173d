//! Recursive-descent parser from SVG fragment markup to icon descriptors

use crate::descriptor::{Children, IconNode};
use crate::error::ParseError;

use super::lexer::{lex, Span, Token};

/// Parse SVG markup into a descriptor list
///
/// The input is a sequence of elements such as
/// `<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>`. A lone root
/// `<svg>` element is unwrapped, so complete icon files parse to their inner
/// elements.
///
/// ```rust
/// use iconkit::parse_fragment;
///
/// let nodes = parse_fragment(r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#).unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes[0].tag, "path");
/// ```
pub fn parse_fragment(input: &str) -> Result<Vec<IconNode>, Vec<ParseError>> {
    let mut parser = FragmentParser::new(input);
    let nodes = parser.parse_document().map_err(|e| vec![e])?;

    if nodes.len() == 1 && nodes[0].tag == "svg" {
        return match nodes.into_iter().next().and_then(|n| n.children) {
            Some(Children::Nodes(children)) if !children.is_empty() => Ok(children),
            _ => Err(vec![parser.no_elements()]),
        };
    }
    Ok(nodes)
}

type Lexed = (Result<Token, ()>, Span);

struct FragmentParser<'a> {
    input: &'a str,
    tokens: Vec<Lexed>,
    pos: usize,
    /// End offset of the last consumed token
    last_end: usize,
}

impl<'a> FragmentParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: lex(input).collect(),
            pos: 0,
            last_end: 0,
        }
    }

    fn peek(&self) -> Option<&Lexed> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Lexed> {
        let item = self.tokens.get(self.pos).cloned();
        if let Some((_, span)) = &item {
            self.pos += 1;
            self.last_end = span.end;
        }
        item
    }

    fn eof_span(&self) -> Span {
        self.input.len()..self.input.len()
    }

    fn no_elements(&self) -> ParseError {
        ParseError::syntax(
            self.eof_span(),
            "Icon fragment contains no elements",
            &["element"],
        )
    }

    /// Next token, rejecting stray input and end of input
    fn next_token(&mut self, expected: &[&str]) -> Result<(Token, Span), ParseError> {
        match self.next() {
            Some((Ok(tok), span)) => Ok((tok, span)),
            Some((Err(()), span)) => Err(ParseError::stray(
                &self.input[span.clone()],
                span,
                expected,
            )),
            None => Err(ParseError::unexpected(None, self.eof_span(), expected)),
        }
    }

    fn expect(&mut self, expected: Token, label: &str) -> Result<Span, ParseError> {
        match self.next_token(&[label])? {
            (tok, span) if tok == expected => Ok(span),
            (tok, span) => Err(ParseError::unexpected(Some(&tok), span, &[label])),
        }
    }

    fn expect_name(&mut self, label: &str) -> Result<(String, Span), ParseError> {
        match self.next_token(&[label])? {
            (Token::Name(name), span) => Ok((name, span)),
            (tok, span) => Err(ParseError::unexpected(Some(&tok), span, &[label])),
        }
    }

    fn unescape(&self, s: &str, span: &Span) -> Result<String, ParseError> {
        unescape_xml(s).map_err(|message| ParseError::syntax(span.clone(), message, &[]))
    }

    fn parse_document(&mut self) -> Result<Vec<IconNode>, ParseError> {
        let mut nodes = vec![];
        while let Some((tok, span)) = self.peek().cloned() {
            match tok {
                Ok(Token::Lt) => nodes.push(self.parse_element()?),
                Ok(tok) if tok.is_ignorable() => {
                    self.next();
                }
                Ok(other) => return Err(ParseError::unexpected(Some(&other), span, &["'<'"])),
                Err(()) => {
                    return Err(ParseError::stray(&self.input[span.clone()], span, &["'<'"]))
                }
            }
        }
        if nodes.is_empty() {
            return Err(self.no_elements());
        }
        Ok(nodes)
    }

    fn parse_element(&mut self) -> Result<IconNode, ParseError> {
        let open_span = self.expect(Token::Lt, "'<'")?;
        let (tag, _) = self.expect_name("element name")?;
        let mut node = IconNode::new(tag.clone());

        // Attributes until the tag ends
        let content_start = loop {
            match self.next_token(&["attribute", "'>'", "'/>'"])? {
                (Token::Name(name), _) => {
                    self.expect(Token::Equals, "'='")?;
                    match self.next() {
                        Some((Ok(Token::Str(value)), span)) => {
                            let value = self.unescape(&value, &span)?;
                            node.attrs.set(name, value);
                        }
                        Some((_, span)) => {
                            return Err(ParseError::syntax(
                                span,
                                format!("Unquoted value for attribute '{}'", name),
                                &["quoted string"],
                            ))
                        }
                        None => {
                            return Err(ParseError::unexpected(
                                None,
                                self.eof_span(),
                                &["quoted string"],
                            ))
                        }
                    }
                }
                (Token::SelfClose, _) => return Ok(node),
                (Token::Gt, span) => break span.end,
                (tok, span) => {
                    return Err(ParseError::unexpected(
                        Some(&tok),
                        span,
                        &["attribute", "'>'", "'/>'"],
                    ))
                }
            }
        };

        // Content: child elements and text until the matching close tag.
        // Text is the source between tags, minus comments.
        let mut children = vec![];
        let mut text = String::new();
        let mut segment_start = content_start;
        let content_end = loop {
            match self.peek().cloned() {
                Some((Ok(Token::Lt), span)) => {
                    text.push_str(&self.input[segment_start..span.start]);
                    children.push(self.parse_element()?);
                    segment_start = self.last_end;
                }
                Some((Ok(Token::CloseOpen), span)) => {
                    text.push_str(&self.input[segment_start..span.start]);
                    self.next();
                    let (closing, closing_span) = self.expect_name("closing tag name")?;
                    if closing != tag {
                        return Err(ParseError::syntax(
                            closing_span,
                            format!("Mismatched closing tag </{}>, expected </{}>", closing, tag),
                            &[],
                        ));
                    }
                    self.expect(Token::Gt, "'>'")?;
                    break span.start;
                }
                Some((Ok(tok), span)) if tok.is_ignorable() => {
                    text.push_str(&self.input[segment_start..span.start]);
                    self.next();
                    segment_start = span.end;
                }
                Some(_) => {
                    // part of text content
                    self.next();
                }
                None => {
                    return Err(ParseError::syntax(
                        open_span.start..content_start,
                        format!("Unclosed element <{}>", tag),
                        &[],
                    ))
                }
            }
        };

        let text = text.trim();
        if !children.is_empty() {
            if !text.is_empty() {
                log::warn!(
                    "dropping text {:?} mixed with child elements in <{}>",
                    text,
                    tag
                );
            }
            node.children = Some(Children::Nodes(children));
        } else if !text.is_empty() {
            let text = self.unescape(text, &(content_start..content_end))?;
            node.children = Some(Children::Text(text));
        }
        Ok(node)
    }
}

/// Resolve predefined entities and numeric character references
///
/// Unknown named entities are kept as written.
fn unescape_xml(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let Some(semi) = after.find(';') else {
            out.push_str(&rest[amp..]);
            return Ok(out);
        };
        let entity = &after[..semi];
        match decode_entity(entity) {
            Some(c) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None if entity.starts_with('#') => {
                return Err(format!("Invalid character reference '&{};'", entity))
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let reference = entity.strip_prefix('#')?;
            let code = match reference.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => reference.parse().ok()?,
            };
            char::from_u32(code).filter(|&c| c != '\0')
        }
    }
}

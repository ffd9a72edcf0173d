//! Error types for fragment parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    pub(crate) fn syntax(span: Span, message: impl Into<String>, expected: &[&str]) -> Self {
        ParseError::Syntax {
            span,
            message: message.into(),
            expected: expected.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Error for a token that doesn't fit the grammar here
    pub(crate) fn unexpected(found: Option<&Token>, span: Span, expected: &[&str]) -> Self {
        let found_str = match found {
            Some(tok) => format_token(tok),
            None => "end of input".to_string(),
        };
        Self::syntax(span, format!("Unexpected {}", found_str), expected)
    }

    /// Error for input that forms no token
    pub(crate) fn stray(text: &str, span: Span, expected: &[&str]) -> Self {
        Self::syntax(span, format!("Unexpected input '{}'", text), expected)
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return format!("{}: {}", filename, self);
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Format a token for human-readable error messages
pub(crate) fn format_token(tok: &Token) -> String {
    match tok {
        Token::Name(s) => format!("name '{}'", s),
        Token::Str(s) => format!("string \"{}\"", s),
        Token::Lt => "'<'".to_string(),
        Token::CloseOpen => "'</'".to_string(),
        Token::SelfClose => "'/>'".to_string(),
        Token::Gt => "'>'".to_string(),
        Token::Equals => "'='".to_string(),
        Token::Comment => "comment".to_string(),
        Token::Declaration => "XML declaration".to_string(),
        Token::Doctype => "doctype".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_message() {
        let err = ParseError::unexpected(Some(&Token::Gt), 3..4, &["attribute"]);
        assert_eq!(
            err,
            ParseError::Syntax {
                span: 3..4,
                message: "Unexpected '>'".to_string(),
                expected: vec!["attribute".to_string()],
            }
        );

        let err = ParseError::unexpected(None, 9..9, &[]);
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_stray_message() {
        let err = ParseError::stray(";", 15..16, &["attribute"]);
        assert_eq!(err.span(), &(15..16));
        assert!(err.to_string().contains("Unexpected input ';'"));
    }

    #[test]
    fn test_format_includes_source_context() {
        let source = r#"<path d=M0/>"#;
        let err = ParseError::syntax(8..10, "Unquoted attribute value", &["quoted string"]);
        let report = err.format(source, "icon.svg");
        assert!(report.contains("Unquoted attribute value"));
        assert!(report.contains("icon.svg"));
        assert!(report.contains("quoted string"));
    }
}

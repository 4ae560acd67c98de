//! Error types for parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
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

                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::parser::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::parser::lexer::Token>) -> Self {
        use crate::parser::lexer::Token;
        use chumsky::error::RichReason;

        // Check if we found a reserved direction keyword where a name was expected
        let found_token = err.found().cloned();
        let reserved_direction = match found_token {
            Some(Token::North) => Some("north"),
            Some(Token::Northeast) => Some("northeast"),
            Some(Token::East) => Some("east"),
            Some(Token::Southeast) => Some("southeast"),
            Some(Token::South) => Some("south"),
            Some(Token::Southwest) => Some("southwest"),
            Some(Token::West) => Some("west"),
            Some(Token::Northwest) => Some("northwest"),
            _ => None,
        };

        // Format the message based on the reason
        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                if let Some(keyword) = reserved_direction {
                    format!(
                        "Cannot use '{}' as a name - it's a reserved compass direction",
                        keyword
                    )
                } else {
                    let found_str = match found {
                        Some(tok) => format_token(tok),
                        None => "end of input".to_string(),
                    };
                    format!("Unexpected {}", found_str)
                }
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        // Format expected tokens nicely
        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| {
                match e {
                    chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                    chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                    chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                    chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                    chumsky::error::RichPattern::Any => Some("any token".to_string()),
                    chumsky::error::RichPattern::SomethingElse => None, // Skip "something else"
                }
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::parser::lexer::Token) -> String {
    use crate::parser::lexer::Token;
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::String(s) => format!("string \"{}\"", s),
        Token::Number(n) => format!("number {}", n),
        Token::BracketOpen => "'['".to_string(),
        Token::BracketClose => "']'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Colon => "':'".to_string(),
        Token::Minus => "'-'".to_string(),
        // Placement keywords
        Token::Room => "keyword 'room'".to_string(),
        Token::Facility => "keyword 'facility'".to_string(),
        Token::Bedroom => "keyword 'bedroom'".to_string(),
        Token::Person => "keyword 'person'".to_string(),
        // Gesture keywords
        Token::Move => "keyword 'move'".to_string(),
        Token::Resize => "keyword 'resize'".to_string(),
        Token::Rotate => "keyword 'rotate'".to_string(),
        Token::Drag => "keyword 'drag'".to_string(),
        Token::Delete => "keyword 'delete'".to_string(),
        Token::Compass => "keyword 'compass'".to_string(),
        Token::Clear => "keyword 'clear'".to_string(),
        // Grid keywords
        Token::Assign => "keyword 'assign'".to_string(),
        Token::Member => "keyword 'member'".to_string(),
        Token::Office => "keyword 'office'".to_string(),
        // Directions
        Token::North => "direction 'north'".to_string(),
        Token::Northeast => "direction 'northeast'".to_string(),
        Token::East => "direction 'east'".to_string(),
        Token::Southeast => "direction 'southeast'".to_string(),
        Token::South => "direction 'south'".to_string(),
        Token::Southwest => "direction 'southwest'".to_string(),
        Token::West => "direction 'west'".to_string(),
        Token::Northwest => "direction 'northwest'".to_string(),
        // Other
        _ => format!("{:?}", tok),
    }
}

//! Lexer for the floor-plan session script using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Placement keywords
    #[token("room")]
    Room,
    #[token("facility")]
    Facility,
    #[token("bedroom")]
    Bedroom,
    #[token("person")]
    Person,

    // Gesture keywords
    #[token("move")]
    Move,
    #[token("resize")]
    Resize,
    #[token("rotate")]
    Rotate,
    #[token("drag")]
    Drag,
    #[token("delete")]
    Delete,
    #[token("compass")]
    Compass,
    #[token("clear")]
    Clear,

    // Grid variant keywords
    #[token("assign")]
    Assign,
    #[token("member")]
    Member,
    #[token("office")]
    Office,

    // Compass direction keywords (longer patterns first)
    #[token("northeast")]
    Northeast,
    #[token("northwest")]
    Northwest,
    #[token("southeast")]
    Southeast,
    #[token("southwest")]
    Southwest,
    #[token("north")]
    North,
    #[token("south")]
    South,
    #[token("east")]
    East,
    #[token("west")]
    West,

    // Delimiters
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Single minus sign (for negative numbers like [x: -40])
    #[token("-")]
    Minus,

    // Literals - identifiers must come after keywords. Hyphens are
    // allowed inside names (master-bedroom); a leading '-' still lexes
    // as Minus so negative numbers work.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

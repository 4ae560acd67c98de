//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse session script source code into an AST
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Basic token parsers
    let identifier = select! {
        Token::Ident(s) => Identifier::new(s),
    }
    .map_with(|id, e| Spanned::new(id, span_range(&e.span())));

    let string_literal = select! {
        Token::String(s) => s,
    }
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    let number = select! {
        Token::Number(n) => n,
    }
    .map_with(|n, e| Spanned::new(n, span_range(&e.span())));

    // Signed number: optional leading minus
    let signed_number = just(Token::Minus)
        .or_not()
        .then(number)
        .map_with(|(neg, n), e| {
            let value = if neg.is_some() { -n.node } else { n.node };
            Spanned::new(value, span_range(&e.span()))
        });

    // Modifier key/value parsers
    let modifier_key = identifier.map(|id| {
        let key = match id.node.as_str() {
            "label" => ModifierKey::Label,
            "icon" => ModifierKey::Icon,
            "x" => ModifierKey::X,
            "y" => ModifierKey::Y,
            "width" => ModifierKey::Width,
            "height" => ModifierKey::Height,
            "angle" => ModifierKey::Angle,
            other => ModifierKey::Custom(other.to_string()),
        };
        Spanned::new(key, id.span)
    });

    let modifier_value = choice((
        signed_number
            .clone()
            .map(|n| Spanned::new(ModifierValue::Number(n.node), n.span)),
        string_literal
            .clone()
            .map(|s| Spanned::new(ModifierValue::String(s.node), s.span)),
    ));

    let modifier = modifier_key
        .then_ignore(just(Token::Colon))
        .then(modifier_value)
        .map_with(|(key, value), e| {
            Spanned::new(Modifier { key, value }, span_range(&e.span()))
        });

    let modifier_block = modifier
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose));

    // Region kind keywords
    let region_kind = choice((
        just(Token::Room).to(RegionKindWord::Room),
        just(Token::Facility).to(RegionKindWord::Facility),
        just(Token::Bedroom).to(RegionKindWord::Bedroom),
    ))
    .map_with(|k, e| Spanned::new(k, span_range(&e.span())));

    // Compass direction keywords
    let direction_word = choice((
        just(Token::Northeast).to(DirectionWord::Northeast),
        just(Token::Northwest).to(DirectionWord::Northwest),
        just(Token::Southeast).to(DirectionWord::Southeast),
        just(Token::Southwest).to(DirectionWord::Southwest),
        just(Token::North).to(DirectionWord::North),
        just(Token::South).to(DirectionWord::South),
        just(Token::East).to(DirectionWord::East),
        just(Token::West).to(DirectionWord::West),
    ))
    .map_with(|d, e| Spanned::new(d, span_range(&e.span())));

    // Grid cell kind keywords
    let cell_kind = choice((
        just(Token::Member).to(CellKindWord::Member),
        just(Token::Room).to(CellKindWord::Room),
        just(Token::Office).to(CellKindWord::Office),
    ))
    .map_with(|k, e| Spanned::new(k, span_range(&e.span())));

    // Region placement: `room kitchen [mods]`
    let region_decl = region_kind
        .then(identifier)
        .then(modifier_block.clone().or_not())
        .map(|((kind, name), modifiers)| {
            Statement::PlaceRegion(RegionDecl {
                kind,
                name,
                modifiers: modifiers.unwrap_or_default(),
            })
        });

    // Person placement: `person dad [mods]`
    let person_decl = just(Token::Person)
        .ignore_then(identifier)
        .then(modifier_block.clone().or_not())
        .map(|(name, modifiers)| {
            Statement::PlacePerson(PersonDecl {
                name,
                modifiers: modifiers.unwrap_or_default(),
            })
        });

    // Gestures: `move name [mods]`, `resize name [mods]`, ...
    let gesture = |keyword: Token| {
        just(keyword)
            .ignore_then(identifier)
            .then(modifier_block.clone().or_not())
            .map(|(name, modifiers)| GestureDecl {
                name,
                modifiers: modifiers.unwrap_or_default(),
            })
    };

    let move_decl = gesture(Token::Move).map(Statement::Move);
    let resize_decl = gesture(Token::Resize).map(Statement::Resize);
    let rotate_decl = gesture(Token::Rotate).map(Statement::Rotate);
    let drag_decl = gesture(Token::Drag).map(Statement::Drag);

    // `delete name`
    let delete_decl = just(Token::Delete)
        .ignore_then(identifier)
        .map(Statement::Delete);

    // `compass 45` / `compass -30`
    let compass_decl = just(Token::Compass)
        .ignore_then(signed_number)
        .map(Statement::Compass);

    // `clear` resets the layout; `clear north` empties one grid cell
    let clear_decl = just(Token::Clear)
        .ignore_then(direction_word.clone().or_not())
        .map(|dir| match dir {
            Some(d) => Statement::ClearCell(d),
            None => Statement::ClearAll,
        });

    // Grid assignment: `assign north member "父親" [icon: "👨"]`
    let assign_decl = just(Token::Assign)
        .ignore_then(direction_word)
        .then(cell_kind)
        .then(string_literal)
        .then(modifier_block.or_not())
        .map(|(((direction, kind), label), modifiers)| {
            Statement::Assign(AssignDecl {
                direction,
                kind,
                label,
                modifiers: modifiers.unwrap_or_default(),
            })
        });

    // All statements start with a distinct keyword, so ordering is free of
    // ambiguity; keep placement first for error-message quality.
    let statement = choice((
        region_decl,
        person_decl,
        move_decl,
        resize_decl,
        rotate_decl,
        drag_decl,
        delete_decl,
        compass_decl,
        clear_decl,
        assign_decl,
    ))
    .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

    // Document is a list of statements
    statement
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|statements| Document { statements })
}

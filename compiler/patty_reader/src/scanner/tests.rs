use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

#[test]
fn scans_every_token_kind() {
    assert_eq!(
        kinds(r#"(def x "hi" -12 7)"#),
        vec![
            (TokenKind::LParen, "("),
            (TokenKind::Symbol, "def"),
            (TokenKind::Symbol, "x"),
            (TokenKind::Str, "hi"),
            (TokenKind::Int, "-12"),
            (TokenKind::Int, "7"),
            (TokenKind::RParen, ")"),
        ]
    );
}

#[test]
fn minus_alone_is_a_symbol() {
    assert_eq!(
        kinds("(- 3 -x)"),
        vec![
            (TokenKind::LParen, "("),
            (TokenKind::Symbol, "-"),
            (TokenKind::Int, "3"),
            (TokenKind::Symbol, "-x"),
            (TokenKind::RParen, ")"),
        ]
    );
}

#[test]
fn punctuation_symbols() {
    assert_eq!(
        kinds("<= != ++ zip-with seq!"),
        vec![
            (TokenKind::Symbol, "<="),
            (TokenKind::Symbol, "!="),
            (TokenKind::Symbol, "++"),
            (TokenKind::Symbol, "zip-with"),
            (TokenKind::Symbol, "seq!"),
        ]
    );
}

#[test]
fn digits_then_letters_split() {
    assert_eq!(
        kinds("12ab"),
        vec![(TokenKind::Int, "12"), (TokenKind::Symbol, "ab")]
    );
}

#[test]
fn skips_comments_and_whitespace() {
    assert_eq!(
        kinds("# header\n  1 # trailing\n\t\x0b2 # no newline"),
        vec![(TokenKind::Int, "1"), (TokenKind::Int, "2")]
    );
    assert_eq!(kinds("   # only a comment"), vec![]);
}

#[test]
fn string_keeps_escapes_verbatim() {
    let tokens = tokenize(r#""say \"hi\"" x"#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, r#"say \"hi\""#);
    assert_eq!(tokens[0].span, Span::new(0, 12));
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn empty_string() {
    assert_eq!(kinds(r#""" 1"#), vec![(TokenKind::Str, ""), (TokenKind::Int, "1")]);
}

#[test]
fn string_may_span_lines_and_hold_unicode() {
    assert_eq!(kinds("\"a\nb é\""), vec![(TokenKind::Str, "a\nb é")]);
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(
        tokenize(r#"(print "oops)"#),
        Err(ReadError::UnterminatedString { offset: 7 })
    );
}

#[test]
fn unexpected_character_is_an_error() {
    assert_eq!(
        tokenize("(a ~ b)"),
        Err(ReadError::UnexpectedChar { ch: '~', offset: 3 })
    );
    assert_eq!(
        tokenize("λ"),
        Err(ReadError::UnexpectedChar { ch: 'λ', offset: 0 })
    );
}

#[test]
fn spans_cover_lexemes() {
    let spans: Vec<Span> = tokenize("(ab 10)")
        .unwrap()
        .into_iter()
        .map(|token| token.span)
        .collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(1, 3),
            Span::new(4, 6),
            Span::new(6, 7)
        ]
    );
}

#[test]
fn token_display_lines_up_columns() {
    let tokens = tokenize("(x").unwrap();
    assert_eq!(tokens[1].to_string(), "1..2       symbol  x");
}

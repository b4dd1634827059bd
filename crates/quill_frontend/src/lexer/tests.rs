use quill_diagnostic::span::Span;

use super::Lexer;
use crate::token::{Keyword, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|t| t.kind).collect()
}

fn lexemes(source: &str) -> Vec<&str> {
    Lexer::new(source).map(|t| t.lexeme).collect()
}

#[test]
fn statement() {
    insta::assert_debug_snapshot!(kinds("print (1 + 2.5) * -x;"), @r###"
    [
        Keyword(
            Print,
        ),
        LParen,
        Number,
        Add,
        Number,
        RParen,
        Mul,
        Sub,
        Identifier,
        Semicolon,
    ]
    "###);
}

#[test]
fn invalid_char() {
    insta::assert_debug_snapshot!(Lexer::new("#").collect::<Vec<_>>(), @r###"
    [
        Token {
            kind: Invalid,
            lexeme: "#",
            span: Span {
                start: 0,
                end: 1,
            },
        },
    ]
    "###);
}

#[test]
fn invalid_multibyte_char() {
    let tokens: Vec<Token> = Lexer::new(" é;").collect();

    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[0].lexeme, "é");
    assert_eq!(tokens[0].span, Span::new(1, 3));
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("5");

    assert_eq!(lexer.next_token().kind, TokenKind::Number);

    for _ in 0..3 {
        let eof = lexer.next_token();
        assert_eq!(eof.kind, TokenKind::EndOfInput);
        assert_eq!(eof.lexeme, "");
        assert_eq!(eof.span, Span::empty(1));
    }
}

#[test]
fn empty() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().span, Span::empty(0));
    assert_eq!(lexer.next(), None);
}

#[test]
fn whitespace_and_comments() {
    assert_eq!(lexemes("  1\t// one\n\n2 // two"), ["1", "2"]);
    assert_eq!(kinds("6 / 2"), [TokenKind::Number, TokenKind::Div, TokenKind::Number]);
}

#[test]
fn numbers() {
    assert_eq!(lexemes("3.25 10"), ["3.25", "10"]);
    assert_eq!(lexemes("3."), ["3", "."]);
    assert_eq!(kinds("3."), [TokenKind::Number, TokenKind::Invalid]);
    assert_eq!(kinds(".5"), [TokenKind::Invalid, TokenKind::Number]);
    assert_eq!(lexemes("1.2.3"), ["1.2", ".", "3"]);
}

#[test]
fn strings() {
    assert_eq!(lexemes(r#""Hello World";"#), [r#""Hello World""#, ";"]);
    assert_eq!(lexemes(r#""a\"b""#), [r#""a\""#, "b", r#"""#]);
    assert_eq!(kinds(r#""unclosed"#), [TokenKind::UnterminatedString]);
}

#[test]
fn keywords() {
    assert_eq!(
        kinds("print printer true false_ false"),
        [
            TokenKind::Keyword(Keyword::Print),
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::True),
            TokenKind::Identifier,
            TokenKind::Keyword(Keyword::False),
        ]
    );
}

#[test]
fn starting_at() {
    let mut lexer = Lexer::starting_at("1; 2;", 3);

    let token = lexer.next_token();
    assert_eq!(token.lexeme, "2");
    assert_eq!(token.span, Span::new(3, 4));
    assert_eq!(lexer.position(), 4);
}

use quill_diagnostic::span::Span;

use crate::NodeCopy;

#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub lexeme: &'src str,
    pub span: Span,
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    Number,
    String,
    UnterminatedString,

    LParen,
    RParen,
    Semicolon,

    Add,
    Sub,
    Mul,
    Div,

    /// A character no other rule matches.
    Invalid,
    EndOfInput,
}

#[derive(NodeCopy!)]
pub enum Keyword {
    Print,
    True,
    False,
}

impl Keyword {
    pub fn from_ident(s: &str) -> Option<Self> {
        match s {
            "print" => Some(Keyword::Print),
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            _ => None,
        }
    }
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => match kw {
                Keyword::Print => "keyword 'print'",
                Keyword::True => "keyword 'true'",
                Keyword::False => "keyword 'false'",
            },
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::UnterminatedString => "unterminated string",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Semicolon => "';'",
            TokenKind::Add => "'+'",
            TokenKind::Sub => "'-'",
            TokenKind::Mul => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::Invalid => "character",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl Token<'_> {
    /// Describe the token for "found ..." messages, including its text
    /// where the kind alone is ambiguous.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::Invalid => {
                format!("{} '{}'", self.kind.token_name(), self.lexeme)
            }
            TokenKind::String => format!("string {}", self.lexeme),
            _ => self.kind.token_name().to_owned(),
        }
    }
}

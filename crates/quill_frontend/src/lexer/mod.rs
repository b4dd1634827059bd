#[cfg(test)]
mod tests;

use std::str::Chars;

use quill_diagnostic::span::Span;
use quill_utils::peek::Peek;

use crate::token::*;

/// Produces tokens on demand, advancing monotonically through the source.
///
/// Once the source is exhausted every call to [`Lexer::next_token`]
/// returns an [`TokenKind::EndOfInput`] token.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::starting_at(source, 0)
    }

    /// Start lexing `source` from byte `offset`. Spans stay relative to the
    /// start of `source`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds or not on a char boundary.
    pub fn starting_at(source: &'src str, offset: usize) -> Self {
        Self {
            all: source,
            chars: source[offset..].chars(),

            token_start: offset,
        }
    }

    pub fn source(&self) -> &'src str {
        self.all
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.byte_pos()
    }

    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.token_start = self.byte_pos();

            let Some(ch) = self.chars.next() else {
                return self.token(TokenKind::EndOfInput);
            };

            let kind = match ch {
                // comment
                '/' if self.chars.eat('/') => {
                    while !matches!(self.chars.next(), Some('\n') | None) {}
                    continue;
                }

                ch if ch.is_whitespace() => continue,

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                ';' => TokenKind::Semicolon,

                '+' => TokenKind::Add,
                '-' => TokenKind::Sub,
                '*' => TokenKind::Mul,
                '/' => TokenKind::Div,

                '"' => self.lex_string(),

                '0'..='9' => self.lex_number(),

                ch if is_ident_start(ch) => self.lex_alpha(),

                _ => TokenKind::Invalid,
            };

            return self.token(kind);
        }
    }

    fn lex_number(&mut self) -> TokenKind {
        self.chars.eat_while(char::is_ascii_digit);

        // only take the dot if a fractional part follows it
        let mut ahead = self.chars.clone();
        if ahead.next() == Some('.') && ahead.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.chars.next();
            self.chars.eat_while(char::is_ascii_digit);
        }

        TokenKind::Number
    }

    // no escapes: the string ends at the next quote
    fn lex_string(&mut self) -> TokenKind {
        loop {
            match self.chars.next() {
                Some('"') => return TokenKind::String,
                Some(_) => {}
                None => return TokenKind::UnterminatedString,
            }
        }
    }

    fn lex_alpha(&mut self) -> TokenKind {
        self.chars.eat_while(|&ch| is_ident(ch));

        let s = &self.all[self.token_start..self.byte_pos()];
        Keyword::from_ident(s).map_or(TokenKind::Identifier, TokenKind::Keyword)
    }

    fn token(&self, kind: TokenKind) -> Token<'src> {
        let span = Span::new(self.token_start, self.byte_pos());

        Token {
            kind,
            lexeme: &self.all[span.as_range()],
            span,
        }
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Yields every token before the end of input.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

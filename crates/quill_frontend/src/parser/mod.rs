
mod expr;

use quill_diagnostic::span::Span;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::reporter::{Issue, PrettyReporter, Reporter};
use crate::token::{Keyword, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Unexpected character '{0}'.")]
    UnexpectedChar(String),

    #[error("Unterminated string.")]
    UnterminatedString,

    #[error("Expected an expression, found {found}.")]
    ExpectedExpression { found: String },

    #[error("Expected {expected} after {after}, found {found}.")]
    ExpectedAfter {
        expected: &'static str,
        after: &'static str,
        found: String,
    },

    #[error("Invalid number literal '{0}'.")]
    InvalidNumber(String),

    #[error("Expression nested too deeply.")]
    TooDeep,
}

impl From<ParseError> for Issue {
    fn from(error: ParseError) -> Self {
        Issue::new(error.kind.to_string(), error.span)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds a [`Module`] from a token stream, reporting problems to `R`
/// instead of stopping at the first one.
pub struct Parser<'src, R: Reporter = PrettyReporter> {
    lexer: Lexer<'src>,
    reporter: R,

    current: Token<'src>,
    prev_span: Span,
    depth: usize,

    had_errors: bool,
}

impl<'src> Parser<'src> {
    /// A parser that prints issues to stderr.
    pub fn new(lexer: Lexer<'src>) -> Self {
        let reporter = PrettyReporter::stderr("<source>", lexer.source());
        Self::with_reporter(lexer, reporter)
    }
}

impl<'src, R: Reporter> Parser<'src, R> {
    pub fn with_reporter(mut lexer: Lexer<'src>, reporter: R) -> Self {
        let current = lexer.next_token();

        Self {
            lexer,
            reporter,

            current,
            prev_span: Span::empty(current.span.start),
            depth: 0,

            had_errors: false,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Parse statements until the end of input. Statements that fail to parse
    /// are reported and left out of the module.
    pub fn parse_module(&mut self) -> (bool, Module) {
        let mut statements = vec![];

        while !self.at_end() {
            let stmt = self.parse_or_recover(
                |parser| parser.parse_statement().map(Some),
                |parser| {
                    parser.synchronize();
                    None
                },
            );

            statements.extend(stmt);
        }

        (self.had_errors, Module { statements })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current.span;

        let kind = if self.eat_kind(TokenKind::Keyword(Keyword::Print)) {
            StmtKind::Print(self.parse_expr()?)
        } else {
            StmtKind::Expr(self.parse_expr()?)
        };

        self.expect_or_recover(TokenKind::Semicolon, "expression");

        Ok(Stmt::new(kind, start.union(self.prev_span)))
    }

    fn parse_or_recover<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
        recover: impl FnOnce(&mut Self) -> T,
    ) -> T {
        match parse(self) {
            Ok(node) => node,
            Err(err) => {
                self.report(err);
                recover(self)
            }
        }
    }

    /// Skip to just past the next `;`, or to the end of input. Consumes at
    /// least one token unless already at the end.
    fn synchronize(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::EndOfInput => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) -> Token<'src> {
        let token = self.current;
        self.prev_span = token.span;
        self.current = self.lexer.next_token();
        token
    }

    fn at_end(&self) -> bool {
        self.current.kind == TokenKind::EndOfInput
    }

    fn expect(&mut self, kind: TokenKind, after: &'static str) -> ParseResult<Token<'src>> {
        if self.current.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.error(ParseErrorKind::ExpectedAfter {
                expected: kind.token_name(),
                after,
                found: self.current.describe(),
            }))
        }
    }

    fn expect_or_recover(&mut self, kind: TokenKind, after: &'static str) {
        if let Err(error) = self.expect(kind, after) {
            self.report(error);
        }
    }

    fn eat_kind(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn report(&mut self, error: ParseError) {
        self.had_errors = true;
        self.reporter.report(error.into());
    }

    /// An error at the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            span: self.current.span,
        }
    }
}

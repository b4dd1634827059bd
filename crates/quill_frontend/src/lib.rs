#[macro_use]
extern crate macro_rules_attribute;

mod lexer;
mod parser;

pub mod ast;
pub mod reporter;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use quill_diagnostic::span::Span;
pub use reporter::{CollectReporter, Issue, PrettyReporter, Reporter};

use ast::Module;
use token::Token;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, serde::Serialize)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)];
}

/// Lex `source` up to, but not including, the end of input.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Parse `source`, collecting issues instead of printing them.
pub fn parse(source: &str) -> (Module, Vec<Issue>) {
    let mut parser = Parser::with_reporter(Lexer::new(source), CollectReporter::default());
    let (_, module) = parser.parse_module();

    (module, parser.into_reporter().into_issues())
}

use super::{ParseError, ParseErrorKind, ParseResult, Parser};
use crate::ast::*;
use crate::reporter::Reporter;
use crate::token::*;

/// Nesting allowed within one expression before giving up, counting both
/// prefix operands and folded binary operators.
const MAX_DEPTH: usize = 256;

/// Binding strength, weakest first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(super) enum Prec {
    Lowest,

    Term,
    Factor,

    Unary,
}

fn binop_prec(binop: BinOp) -> Prec {
    match binop {
        BinOp::Add | BinOp::Sub => Prec::Term,
        BinOp::Mul | BinOp::Div => Prec::Factor,
    }
}

impl<R: Reporter> Parser<'_, R> {
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.parse_prec(Prec::Lowest)
    }

    fn parse_prec(&mut self, prec: Prec) -> ParseResult<Expr> {
        let depth = self.depth;
        let expr = self.parse_prec_at(prec);
        self.depth = depth;
        expr
    }

    // every operator is left-associative, so only strictly tighter
    // operators are taken into the right-hand side
    fn parse_prec_at(&mut self, prec: Prec) -> ParseResult<Expr> {
        self.enter()?;
        let mut expr = self.parse_prefix()?;

        while let Some(op) = self.peek_bin_op(prec) {
            self.advance();
            self.enter()?;

            let rhs = self.parse_prec(binop_prec(op))?;

            let span = expr.span.union(rhs.span);
            expr = Expr::new(
                ExprKind::BinOp {
                    op,
                    lhs: Box::new(expr),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }

        Ok(expr)
    }

    fn parse_prefix(&mut self) -> ParseResult<Expr> {
        let token = self.current;

        match token.kind {
            TokenKind::Number => {
                self.advance();

                match token.lexeme.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Expr::new(ExprKind::Number(n), token.span)),
                    _ => Err(ParseError {
                        kind: ParseErrorKind::InvalidNumber(token.lexeme.to_owned()),
                        span: token.span,
                    }),
                }
            }

            TokenKind::String => {
                self.advance();
                Ok(Expr::new(
                    ExprKind::String(token.lexeme.to_owned()),
                    token.span,
                ))
            }

            TokenKind::Keyword(kw @ (Keyword::True | Keyword::False)) => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(kw == Keyword::True), token.span))
            }

            TokenKind::Sub => {
                self.advance();

                let expr = self.parse_prec(Prec::Unary)?;
                let span = token.span.union(expr.span);
                Ok(Expr::new(
                    ExprKind::UnOp {
                        op: UnOp::Negate,
                        expr: Box::new(expr),
                    },
                    span,
                ))
            }

            TokenKind::LParen => {
                self.advance();

                let expr = self.parse_expr()?;
                let rparen = self.expect(TokenKind::RParen, "expression")?;

                Ok(Expr {
                    span: token.span.union(rparen.span),
                    ..expr
                })
            }

            TokenKind::Invalid => Err(self.error(ParseErrorKind::UnexpectedChar(
                token.lexeme.to_owned(),
            ))),

            TokenKind::UnterminatedString => Err(self.error(ParseErrorKind::UnterminatedString)),

            _ => Err(self.error(ParseErrorKind::ExpectedExpression {
                found: token.describe(),
            })),
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;

        if self.depth > MAX_DEPTH {
            return Err(self.error(ParseErrorKind::TooDeep));
        }

        Ok(())
    }

    fn peek_bin_op(&self, prec: Prec) -> Option<BinOp> {
        let op = match self.current.kind {
            TokenKind::Add => BinOp::Add,
            TokenKind::Sub => BinOp::Sub,
            TokenKind::Mul => BinOp::Mul,
            TokenKind::Div => BinOp::Div,

            _ => return None,
        };

        (binop_prec(op) > prec).then_some(op)
    }
}

use lexers::{PlotToken, PlotTokenizer};
use std::ops::Deref;

/// Binding strength of a token on the operator stack.
///
/// An incoming operator pops everything of greater *or equal* strength,
/// which makes every operator left associative, `^` included:
/// `2^3^2` is `(2^3)^2`. Negation binds tighter than `^` (`-2^2` is 4)
/// and functions tighter than negation.
pub fn precedence(token: &PlotToken) -> usize {
    match *token {
        PlotToken::OParen => 0, // keep at bottom
        PlotToken::Add | PlotToken::Sub => 1,
        PlotToken::Mul | PlotToken::Div => 2,
        PlotToken::Pow => 3,
        PlotToken::Neg => 4,
        PlotToken::Function(_) => 5,
        // '%' never got a rank of its own, it binds looser than anything:
        // '7 % 3 * 2' is '7 % (3 * 2)'
        PlotToken::Mod => 0,
        _ => 99,
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Closing paren at this token offset has no opening match.
    #[error("missing opening paren for ')' at token {0}")]
    MissingOParen(usize),
    /// Opening paren at this token offset is never closed.
    #[error("missing closing paren for '(' at token {0}")]
    MissingCParen(usize),
}

/// An expression in postfix order, ready for evaluation.
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<PlotToken>);

impl Deref for RPNExpr {
    type Target = [PlotToken];
    fn deref(&self) -> &[PlotToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        let rpn = Self::parse(&mut PlotTokenizer::new(expr.chars()))?;
        tracing::debug!(expr, postfix_len = rpn.len(), "parsed expression");
        Ok(rpn)
    }

    /// Operand counts are not checked here, a postfix sequence that
    /// doesn't saturate its operators fails at evaluation.
    pub fn parse(lex: &mut impl Iterator<Item = PlotToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut open = Vec::<usize>::new(); // offsets of unmatched '('

        for (pos, token) in lex.enumerate() {
            match token {
                PlotToken::Number(_) | PlotToken::InputX | PlotToken::Variable(_) => {
                    out.push(token)
                }
                PlotToken::OParen => {
                    open.push(pos);
                    stack.push(token);
                }
                PlotToken::CParen => {
                    if open.pop().is_none() {
                        return Err(ParseError::MissingOParen(pos));
                    }
                    while let Some(top) = stack.pop() {
                        if top == PlotToken::OParen {
                            break; // peel matching OParen
                        }
                        out.push(top);
                    }
                }
                _ => {
                    let prec_rhs = precedence(&token);
                    while let Some(top) = stack.pop() {
                        if top == PlotToken::OParen || precedence(&top) < prec_rhs {
                            stack.push(top);
                            break;
                        }
                        out.push(top);
                    }
                    stack.push(token);
                }
            }
        }
        if let Some(pos) = open.pop() {
            return Err(ParseError::MissingCParen(pos));
        }
        while let Some(top) = stack.pop() {
            out.push(top);
        }
        Ok(RPNExpr(out))
    }
}

use crate::parser::{precedence, RPNExpr};
use lexers::PlotToken;
use std::fmt;

// Only used to lay out infix text, never handed out.
#[derive(Debug, Clone)]
enum Tree<'a> {
    Leaf(&'a PlotToken),
    Node(&'a PlotToken, Vec<Tree<'a>>),
}

impl RPNExpr {
    // None if the postfix sequence doesn't reduce to a single tree
    fn build_tree(&self) -> Option<Tree> {
        let mut ops = Vec::new();
        for token in self.iter() {
            let arity = match *token {
                PlotToken::Number(_) | PlotToken::InputX | PlotToken::Variable(_) => 0,
                PlotToken::Neg | PlotToken::Function(_) => 1,
                PlotToken::OParen | PlotToken::CParen => return None,
                _ => 2,
            };
            if arity == 0 {
                ops.push(Tree::Leaf(token));
                continue;
            }
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(Tree::Node(token, operands));
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &Tree) -> (String, usize) {
            match root {
                Tree::Leaf(token) => (token.to_string(), precedence(token)),
                Tree::Node(token, args) => {
                    let prec = precedence(token);
                    match (*token, args.as_slice()) {
                        (PlotToken::Function(_), [arg]) => {
                            (format!("{}({})", token, printer(arg).0), prec)
                        }
                        (_, [arg]) => {
                            let subtree = printer(arg);
                            // '--x' would scan as a '-' with no operand
                            if prec >= subtree.1 {
                                (format!("{}({})", token, subtree.0), prec)
                            } else {
                                (format!("{}{}", token, subtree.0), prec)
                            }
                        }
                        (_, [lhs, rhs]) => {
                            let (lhs, rhs) = (printer(lhs), printer(rhs));
                            // a '-' right after an identifier scans as negation
                            let ends_in_name = lhs.0.ends_with(|c: char| c.is_ascii_alphabetic());
                            // everything is left associative, so only the
                            // rhs needs parens at equal precedence
                            let lh = if prec > lhs.1 || (**token == PlotToken::Sub && ends_in_name) {
                                format!("({})", lhs.0)
                            } else {
                                lhs.0
                            };
                            let rh = if prec >= rhs.1 {
                                format!("({})", rhs.0)
                            } else {
                                rhs.0
                            };
                            (format!("{} {} {}", lh, token, rh), prec)
                        }
                        _ => (token.to_string(), prec),
                    }
                }
            }
        }

        match self.build_tree() {
            Some(tree) => write!(f, "{}", printer(&tree).0),
            // malformed, fall back to the raw postfix sequence
            None => {
                let tokens: Vec<String> = self.iter().map(|t| t.to_string()).collect();
                write!(f, "[{}]", tokens.join(" "))
            }
        }
    }
}

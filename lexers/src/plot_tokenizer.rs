#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

/// The unary functions an expression may call. The set is closed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Function {
    Sin, Cos, Tan,
    Asin, Acos, Atan,
    Log, Exp, Sqrt, Abs,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "asin" => Some(Function::Asin),
            "acos" => Some(Function::Acos),
            "atan" => Some(Function::Atan),
            "log" => Some(Function::Log),
            "exp" => Some(Function::Exp),
            "sqrt" => Some(Function::Sqrt),
            "abs" => Some(Function::Abs),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PlotToken {
    InputX,
    Variable(String),
    Function(Function),
    Number(f32),
    Add, Sub, Mul, Div, Mod, Pow,
    Neg,
    OParen, CParen,
}

impl fmt::Display for PlotToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PlotToken::InputX => write!(f, "x"),
            PlotToken::Variable(ref name) => write!(f, "{}", name),
            PlotToken::Function(func) => write!(f, "{}", func.name()),
            PlotToken::Number(n) => write!(f, "{}", n),
            PlotToken::Add => write!(f, "+"),
            PlotToken::Sub | PlotToken::Neg => write!(f, "-"),
            PlotToken::Mul => write!(f, "*"),
            PlotToken::Div => write!(f, "/"),
            PlotToken::Mod => write!(f, "%"),
            PlotToken::Pow => write!(f, "^"),
            PlotToken::OParen => write!(f, "("),
            PlotToken::CParen => write!(f, ")"),
        }
    }
}

/// Lenient tokenizer: characters that start no token are dropped.
pub struct PlotTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<PlotToken>
}

impl<I: Iterator<Item=char>> PlotTokenizer<I> {
    pub fn new(source: I) -> Self {
        PlotTokenizer{src: Scanner::new(source), prev: None}
    }

    // a minus is only binary right after a number or a closing paren,
    // so 'x - 1' reads as 'x' followed by '-1'
    fn makes_unary(prev: &Option<PlotToken>) -> bool {
        !matches!(*prev, Some(PlotToken::Number(_)) | Some(PlotToken::CParen))
    }

    fn operator(c: char, prev: &Option<PlotToken>) -> Option<PlotToken> {
        match c {
            '+' => Some(PlotToken::Add),
            '-' if Self::makes_unary(prev) => Some(PlotToken::Neg),
            '-' => Some(PlotToken::Sub),
            '*' => Some(PlotToken::Mul),
            '/' => Some(PlotToken::Div),
            '%' => Some(PlotToken::Mod),
            '^' => Some(PlotToken::Pow),
            '(' => Some(PlotToken::OParen),
            ')' => Some(PlotToken::CParen),
            _ => None,
        }
    }

    fn get_token(&mut self) -> Option<PlotToken> {
        loop {
            self.src.skip_whitespace();
            if let Some(num) = self.src.scan_number() {
                match num.parse::<f32>() {
                    Ok(n) => return Some(PlotToken::Number(n)),
                    Err(_) => tracing::trace!(literal = %num, "dropping unparsable number"),
                }
            } else if let Some(id) = self.src.scan_identifier() {
                return Some(match id.as_str() {
                    "x" => PlotToken::InputX,
                    name => match Function::from_name(name) {
                        Some(func) => PlotToken::Function(func),
                        None => PlotToken::Variable(id),
                    },
                });
            } else if let Some(c) = self.src.next() {
                self.src.ignore();
                match Self::operator(c, &self.prev) {
                    Some(op) => return Some(op),
                    None => tracing::trace!(dropped = ?c, "skipping unrecognized character"),
                }
            } else {
                return None;
            }
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for PlotTokenizer<I> {
    type Item = PlotToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        self.prev = token.clone();
        token
    }
}

/// Scan a whole expression.
pub fn tokenize(source: &str) -> Vec<PlotToken> {
    PlotTokenizer::new(source.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////

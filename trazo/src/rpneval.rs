use std::collections::HashMap;
use lexers::{Function, PlotToken};
use crate::parser::RPNExpr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalErr {
    #[error("unknown variable '{0}'")]
    UnknownVar(String),
    #[error("missing operand for '{0}'")]
    MissingOperand(PlotToken),
    #[error("unexpected '{0}' in postfix expression")]
    BadToken(PlotToken),
    #[error("empty expression")]
    EmptyExpression,
    #[error("expression leaves {0} values, expected one")]
    TrailingOperands(usize),
}

// pop 'right' then 'left' and push the result of $body
macro_rules! binop {
    ($operands:ident, $token:expr, |$l:ident, $r:ident| $body:expr) => {{
        let $r = $operands.pop().ok_or_else(|| EvalErr::MissingOperand($token.clone()))?;
        let $l = $operands.pop().ok_or_else(|| EvalErr::MissingOperand($token.clone()))?;
        $operands.push($body);
    }}
}

/// Named constants visible to an expression. Names are case sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings(pub HashMap<String, f32>);

impl Bindings {
    pub fn new() -> Bindings {
        Bindings(HashMap::new())
    }

    /// Bindings preloaded with `pi` and `e`.
    pub fn with_constants() -> Bindings {
        use std::f32::consts;
        let mut vars = Bindings::new();
        vars.setvar("pi", consts::PI);
        vars.setvar("e", consts::E);
        vars
    }

    pub fn setvar(&mut self, var: &str, val: f32) {
        self.0.insert(var.to_string(), val);
    }

    pub fn getvar(&self, var: &str) -> Option<f32> {
        self.0.get(var).copied()
    }

    /// Run `rpn` as a stack machine with the input variable bound to `x`.
    ///
    /// Floating point edge cases (division by zero, logs of negative
    /// numbers, ...) are not errors, they come back as NaN or infinity.
    pub fn eval(&self, rpn: &RPNExpr, x: f32) -> Result<f32, EvalErr> {
        let mut operands = Vec::with_capacity(rpn.len());

        for token in rpn.iter() {
            match *token {
                PlotToken::Number(num) => operands.push(num),
                PlotToken::InputX => operands.push(x),
                PlotToken::Variable(ref var) => match self.0.get(var) {
                    Some(value) => operands.push(*value),
                    None => return Err(EvalErr::UnknownVar(var.to_string()))
                },
                PlotToken::Neg => {
                    let o = operands.pop().ok_or_else(|| EvalErr::MissingOperand(token.clone()))?;
                    operands.push(-o);
                },
                PlotToken::Function(func) => {
                    let o = operands.pop().ok_or_else(|| EvalErr::MissingOperand(token.clone()))?;
                    operands.push(eval_fn(func, o));
                },
                PlotToken::Add => binop!(operands, token, |l, r| l + r),
                PlotToken::Sub => binop!(operands, token, |l, r| l - r),
                PlotToken::Mul => binop!(operands, token, |l, r| l * r),
                PlotToken::Div => binop!(operands, token, |l, r| l / r),
                PlotToken::Mod => binop!(operands, token, |l, r| truncating_rem(l, r)),
                PlotToken::Pow => binop!(operands, token, |l, r| l.powf(r)),
                PlotToken::OParen | PlotToken::CParen => {
                    return Err(EvalErr::BadToken(token.clone()))
                }
            }
        }
        match operands.as_slice() {
            [] => Err(EvalErr::EmptyExpression),
            [result] => Ok(*result),
            rest => Err(EvalErr::TrailingOperands(rest.len())),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (S, f32)>>(iter: T) -> Self {
        Bindings(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<HashMap<String, f32>> for Bindings {
    fn from(vars: HashMap<String, f32>) -> Self {
        Bindings(vars)
    }
}

/// Evaluate `rpn` at `x` against `vars`.
pub fn evaluate(rpn: &RPNExpr, x: f32, vars: &Bindings) -> Result<f32, EvalErr> {
    vars.eval(rpn, x)
}

fn eval_fn(func: Function, arg: f32) -> f32 {
    match func {
        Function::Sin => arg.sin(),
        Function::Cos => arg.cos(),
        Function::Tan => arg.tan(),
        Function::Asin => arg.asin(),
        Function::Acos => arg.acos(),
        Function::Atan => arg.atan(),
        Function::Log => arg.ln(),
        Function::Exp => arg.exp(),
        Function::Sqrt => arg.sqrt(),
        Function::Abs => arg.abs(),
    }
}

// '%' works on integers: both sides are truncated toward zero first,
// so '-7.5 % 2' is -1. A zero divisor gives NaN.
fn truncating_rem(l: f32, r: f32) -> f32 {
    let (l, r) = (l as i64, r as i64);
    if r == 0 {
        return f32::NAN;
    }
    l.wrapping_rem(r) as f32
}

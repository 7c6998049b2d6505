use crate::parser::{ParseError, RPNExpr, ShuntingParser};
use crate::rpneval::{Bindings, EvalErr};

/// One point of a plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

impl Sample {
    pub fn new(x: f32, y: f32) -> Sample {
        Sample { x, y }
    }
}

impl From<Sample> for (f32, f32) {
    fn from(s: Sample) -> (f32, f32) {
        (s.x, s.y)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecError {
    #[error("can't parse '{expr}': {source}")]
    Parse { expr: String, source: ParseError },
    #[error("can't evaluate '{expr}' at x = {x}: {source}")]
    Eval { expr: String, x: f32, source: EvalErr },
}

/// Coordinates from `x_begin` towards `x_end`, accumulating `x_step`.
///
/// A positive step runs while `x <= x_end`, any other step while
/// `x >= x_end`. A zero step with `x_begin >= x_end`, or a step pointing
/// away from `x_end`, never ends.
pub fn coordinates(x_begin: f32, x_end: f32, x_step: f32) -> impl Iterator<Item = f32> {
    std::iter::successors(Some(x_begin), move |x| Some(x + x_step))
        .take_while(move |&x| if x_step > 0.0 { x <= x_end } else { x >= x_end })
}

/// Lazily evaluate an already parsed expression over a range.
pub fn samples<'a>(
    rpn: &'a RPNExpr,
    x_begin: f32,
    x_end: f32,
    x_step: f32,
    vars: &'a Bindings,
) -> impl Iterator<Item = Result<Sample, EvalErr>> + 'a {
    coordinates(x_begin, x_end, x_step).map(move |x| vars.eval(rpn, x).map(|y| Sample { x, y }))
}

/// Parse `expr` once and evaluate it at every coordinate of the range.
/// Stops at the first sample that fails.
#[tracing::instrument(level = "debug", skip(vars))]
pub fn exec(
    expr: &str,
    x_begin: f32,
    x_end: f32,
    x_step: f32,
    vars: &Bindings,
) -> Result<Vec<Sample>, ExecError> {
    let rpn = ShuntingParser::parse_str(expr)
        .map_err(|source| ExecError::Parse { expr: expr.to_string(), source })?;
    let mut out = Vec::new();
    for x in coordinates(x_begin, x_end, x_step) {
        let y = vars.eval(&rpn, x)
            .map_err(|source| ExecError::Eval { expr: expr.to_string(), x, source })?;
        out.push(Sample { x, y });
    }
    tracing::debug!(samples = out.len(), "sampled expression");
    Ok(out)
}

/// Same output as [`exec`], samples are evaluated on the rayon pool.
///
/// Coordinates are still generated sequentially so they match `exec`
/// exactly.
#[cfg(feature = "parallel")]
#[tracing::instrument(level = "debug", skip(vars))]
pub fn exec_par(
    expr: &str,
    x_begin: f32,
    x_end: f32,
    x_step: f32,
    vars: &Bindings,
) -> Result<Vec<Sample>, ExecError> {
    use rayon::prelude::*;

    let rpn = ShuntingParser::parse_str(expr)
        .map_err(|source| ExecError::Parse { expr: expr.to_string(), source })?;
    let xs: Vec<f32> = coordinates(x_begin, x_end, x_step).collect();
    let out = xs
        .into_par_iter()
        .map(|x| {
            vars.eval(&rpn, x)
                .map(|y| Sample { x, y })
                .map_err(|source| ExecError::Eval { expr: expr.to_string(), x, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(samples = out.len(), threads = rayon::current_num_threads(), "sampled expression");
    Ok(out)
}

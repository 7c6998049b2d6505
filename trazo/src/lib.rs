pub use lexers::{tokenize, Function, PlotToken};

pub use parser::precedence;
pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;
#[cfg(test)]
mod parser_test;

pub use self::rpneval::evaluate;
pub use self::rpneval::Bindings;
pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;

pub use self::sampler::{coordinates, exec, samples, ExecError, Sample};
#[cfg(feature = "parallel")]
pub use self::sampler::exec_par;

mod sampler;

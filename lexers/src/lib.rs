mod scanner;
mod char_scanner;
mod plot_tokenizer;

pub use scanner::Scanner;
pub use plot_tokenizer::{tokenize, Function, PlotToken, PlotTokenizer};

#[cfg(test)]
mod scanner_test;

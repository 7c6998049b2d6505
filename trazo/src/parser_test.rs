use crate::parser::{precedence, ParseError, RPNExpr, ShuntingParser};
use lexers::{tokenize, Function, PlotToken};
use pretty_assertions::assert_eq;

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/-(1-5)^2^3").unwrap();
    let expect = vec![
        PlotToken::Number(3.0),
        PlotToken::Number(4.0),
        PlotToken::Number(2.0),
        PlotToken::Mul,
        PlotToken::Number(1.0),
        PlotToken::Number(5.0),
        PlotToken::Sub,
        PlotToken::Neg,
        PlotToken::Number(2.0),
        PlotToken::Pow,
        PlotToken::Number(3.0),
        PlotToken::Pow,
        PlotToken::Div,
        PlotToken::Add,
    ];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2))").unwrap();
    let expect = vec![
        PlotToken::Number(1.0),
        PlotToken::InputX,
        PlotToken::Number(2.0),
        PlotToken::Pow,
        PlotToken::Sub,
        PlotToken::Neg,
        PlotToken::Number(1.0),
        PlotToken::InputX,
        PlotToken::Number(2.0),
        PlotToken::Pow,
        PlotToken::Add,
        PlotToken::Div,
        PlotToken::Function(Function::Sqrt),
    ];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn test_parse3() {
    let rpn = ShuntingParser::parse_str("sin(x / 10.0) * a + 100").unwrap();
    let expect = vec![
        PlotToken::InputX,
        PlotToken::Number(10.0),
        PlotToken::Div,
        PlotToken::Function(Function::Sin),
        PlotToken::Variable(format!("a")),
        PlotToken::Mul,
        PlotToken::Number(100.0),
        PlotToken::Add,
    ];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn power_is_left_associative() {
    let rpn = ShuntingParser::parse_str("2^3^2").unwrap();
    let expect = vec![
        PlotToken::Number(2.0),
        PlotToken::Number(3.0),
        PlotToken::Pow,
        PlotToken::Number(2.0),
        PlotToken::Pow,
    ];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn unary_precedence() {
    // functions bind tighter than negation
    let rpn = ShuntingParser::parse_str("-sin(0)").unwrap();
    let expect = vec![
        PlotToken::Number(0.0),
        PlotToken::Function(Function::Sin),
        PlotToken::Neg,
    ];
    assert_eq!(rpn, RPNExpr(expect));

    // negation binds tighter than power
    let rpn = ShuntingParser::parse_str("-2^2").unwrap();
    let expect = vec![
        PlotToken::Number(2.0),
        PlotToken::Neg,
        PlotToken::Number(2.0),
        PlotToken::Pow,
    ];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn modulo_binds_loosest() {
    let rpn = ShuntingParser::parse_str("7 % 3 * 2").unwrap();
    let expect = vec![
        PlotToken::Number(7.0),
        PlotToken::Number(3.0),
        PlotToken::Number(2.0),
        PlotToken::Mul,
        PlotToken::Mod,
    ];
    assert_eq!(rpn, RPNExpr(expect));

    let rpn = ShuntingParser::parse_str("(7 % 2)").unwrap();
    let expect = vec![PlotToken::Number(7.0), PlotToken::Number(2.0), PlotToken::Mod];
    assert_eq!(rpn, RPNExpr(expect));
}

#[test]
fn precedence_table() {
    assert_eq!(precedence(&PlotToken::OParen), 0);
    assert_eq!(precedence(&PlotToken::Mod), 0);
    assert_eq!(precedence(&PlotToken::Add), precedence(&PlotToken::Sub));
    assert_eq!(precedence(&PlotToken::Mul), precedence(&PlotToken::Div));
    assert!(precedence(&PlotToken::Add) < precedence(&PlotToken::Mul));
    assert!(precedence(&PlotToken::Mul) < precedence(&PlotToken::Pow));
    assert!(precedence(&PlotToken::Pow) < precedence(&PlotToken::Neg));
    assert!(precedence(&PlotToken::Neg) < precedence(&PlotToken::Function(Function::Abs)));
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2)");
    assert_eq!(rpn, Err(ParseError::MissingCParen(1)));

    let rpn = ShuntingParser::parse_str("-(1-x^2) / (1 + x^2))");
    assert_eq!(rpn, Err(ParseError::MissingOParen(16)));

    let rpn = ShuntingParser::parse_str(")");
    assert_eq!(rpn, Err(ParseError::MissingOParen(0)));

    let rpn = ShuntingParser::parse_str("((x)");
    assert_eq!(rpn, Err(ParseError::MissingCParen(0)));
}

#[test]
fn operand_errors_are_left_to_eval() {
    let rpn = ShuntingParser::parse_str("3 +").unwrap();
    assert_eq!(rpn, RPNExpr(vec![PlotToken::Number(3.0), PlotToken::Add]));
    assert!(ShuntingParser::parse_str("").unwrap().is_empty());
    assert!(ShuntingParser::parse_str("()").unwrap().is_empty());
}

#[test]
fn parse_from_tokens() {
    let mut tokens = tokenize("x * x").into_iter();
    let rpn = ShuntingParser::parse(&mut tokens).unwrap();
    assert_eq!(rpn, RPNExpr(vec![PlotToken::InputX, PlotToken::InputX, PlotToken::Mul]));
    assert_eq!(rpn.len(), 3);
}

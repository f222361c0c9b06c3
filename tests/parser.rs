use scical::{
    ast::{BinaryOperator, BoolOperator, CompareOperator, Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{DEFAULT_MAX_DEPTH, parse},
    },
};

fn parse_str(src: &str) -> Result<Expr, ParseError> {
    parse(&tokenize(src)?, DEFAULT_MAX_DEPTH)
}

fn ast(src: &str) -> Expr {
    parse_str(src).unwrap_or_else(|e| panic!("{src} failed to parse: {e}"))
}

fn int(n: i64) -> Expr {
    Expr::Literal(LiteralValue::Integer(n))
}

fn name(n: &str) -> Expr {
    Expr::Identifier(n.to_string())
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}

#[test]
fn lexes_numbers_and_keywords() {
    let tokens: Vec<Token> = tokenize("1.5 .5 5. 2e3 7 True false and or not x_1")
        .unwrap()
        .into_iter()
        .map(|(token, _)| token)
        .collect();

    assert_eq!(tokens,
               vec![Token::Real(1.5),
                    Token::Real(0.5),
                    Token::Real(5.0),
                    Token::Real(2000.0),
                    Token::Integer(7),
                    Token::Bool(true),
                    Token::Bool(false),
                    Token::And,
                    Token::Or,
                    Token::Not,
                    Token::Identifier("x_1".to_string()),
                    Token::Eof]);
}

#[test]
fn caret_and_double_star_are_the_same_token() {
    let caret = tokenize("2^3").unwrap();
    let stars = tokenize("2**3").unwrap();
    assert_eq!(caret[1].0, Token::Power);
    assert_eq!(stars[1].0, Token::Power);
    assert_eq!(ast("2^3"), ast("2**3"));
}

#[test]
fn lexer_errors_carry_positions() {
    assert_eq!(tokenize("1 + @"),
               Err(ParseError::UnexpectedCharacter { ch:       '@',
                                                     position: 4, }));
    assert_eq!(tokenize("x = 1"),
               Err(ParseError::UnexpectedCharacter { ch:       '=',
                                                     position: 2, }));
    assert_eq!(tokenize("1 + 123456789012345678901"),
               Err(ParseError::LiteralTooLarge { position: 4 }));
    assert_eq!(tokenize("1 + @").map_err(|e| e.position()), Err(4));
    assert_eq!(parse_str("(1 2)").map_err(|e| e.position()), Err(3));
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_signs() {
    assert_eq!(ast("2 ** 3 ** 2"),
               binary(int(2), BinaryOperator::Pow, binary(int(3), BinaryOperator::Pow, int(2))));

    assert_eq!(ast("-2 ** 2"),
               Expr::UnaryOp { op:      UnaryOperator::Negate,
                               operand: Box::new(binary(int(2), BinaryOperator::Pow, int(2))), });

    assert_eq!(ast("2 ** -1"),
               binary(int(2),
                      BinaryOperator::Pow,
                      Expr::UnaryOp { op:      UnaryOperator::Negate,
                                      operand: Box::new(int(1)), }));
}

#[test]
fn arithmetic_is_left_associative() {
    assert_eq!(ast("8 - 2 - 1"),
               binary(binary(int(8), BinaryOperator::Sub, int(2)), BinaryOperator::Sub, int(1)));
    assert_eq!(ast("8 // 2 % 3"),
               binary(binary(int(8), BinaryOperator::FloorDiv, int(2)),
                      BinaryOperator::Mod,
                      int(3)));
}

#[test]
fn boolean_chains_collect_all_operands() {
    assert_eq!(ast("a or b or c"),
               Expr::BoolOp { op:       BoolOperator::Or,
                              operands: vec![name("a"), name("b"), name("c")], });

    assert_eq!(ast("a and b or c"),
               Expr::BoolOp { op:       BoolOperator::Or,
                              operands: vec![Expr::BoolOp { op:       BoolOperator::And,
                                                            operands: vec![name("a"),
                                                                           name("b")], },
                                             name("c")], });
}

#[test]
fn comparisons_form_one_chain() {
    assert_eq!(ast("1 < x <= 3"),
               Expr::Compare { first: Box::new(int(1)),
                               rest:  vec![(CompareOperator::Less, name("x")),
                                           (CompareOperator::LessEqual, int(3))], });
}

#[test]
fn not_wraps_the_whole_comparison() {
    assert_eq!(ast("not 1 == 2"),
               Expr::UnaryOp { op:      UnaryOperator::Not,
                               operand: Box::new(Expr::Compare { first: Box::new(int(1)),
                                                                 rest:  vec![(CompareOperator::Equal,
                                                                              int(2))], }), });
}

#[test]
fn calls_lists_and_tuples() {
    assert_eq!(ast("max(1, x)"),
               Expr::Call { name:      "max".to_string(),
                            arguments: vec![int(1), name("x")], });
    assert_eq!(ast("rand()"),
               Expr::Call { name:      "rand".to_string(),
                            arguments: vec![], });
    assert_eq!(ast("[1, 2]"), Expr::ListLit(vec![int(1), int(2)]));
    assert_eq!(ast("[]"), Expr::ListLit(vec![]));
    assert_eq!(ast("(1, 2)"), Expr::TupleLit(vec![int(1), int(2)]));
    assert_eq!(ast("(1,)"), Expr::TupleLit(vec![int(1)]));
    assert_eq!(ast("(1)"), int(1));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(parse_str("1 2"),
               Err(ParseError::UnexpectedTrailingTokens { token:    "number 2".to_string(),
                                                          position: 2, }));
    assert_eq!(parse_str("1 +"),
               Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                      position: 3, }));
    assert_eq!(parse_str("(1 2)"),
               Err(ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                 found:    "number 2".to_string(),
                                                 position: 3, }));

    for src in ["", "()", "(1, 2,)", "[1,]", "f(,)", "1 +* 2", "(x)(1)", "1 < < 2"] {
        assert!(parse_str(src).is_err(), "{src} should not parse");
    }
}

#[test]
fn nesting_limit_applies_to_every_recursion() {
    let limit = 10;
    let cases = [format!("{}1{}", "(".repeat(20), ")".repeat(20)),
                 format!("{}1", "-".repeat(20)),
                 format!("{}1", "not ".repeat(20)),
                 vec!["2"; 20].join("**"),
                 vec!["1"; 20].join("+"),
                 format!("{}1{}", "[".repeat(20), "]".repeat(20))];

    for src in &cases {
        let tokens = tokenize(src).unwrap();
        assert!(matches!(parse(&tokens, limit),
                         Err(ParseError::NestingLimitExceeded { limit: 10, .. })),
                "{src} should exceed the limit");
    }

    let tokens = tokenize("((1 + 2) * 3)").unwrap();
    assert!(parse(&tokens, limit).is_ok());
}

use std::fs::{self};

use fal::{
    ErrorKind,
    ast::{BinaryOperator, LiteralValue, Node},
    frontend::{
        lexer::Lexer,
        parser::{MAX_NESTING, ParseOptions, Parser},
        token::{Token, TokenKind},
    },
    run, run_with_options, tokenize,
};
use ordered_float::OrderedFloat;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_fal_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run("book", &code) {
                panic!("FAL example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No FAL examples found in book/src");
}

/// Collects the bodies of ```fal blocks. Every example is a single line, so
/// the trailing newline is dropped.
fn extract_fal_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```fal") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.trim_end().to_string());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str, expected: &str) {
    match run("test", src) {
        Ok(ast) => assert_eq!(ast.to_string(), expected, "source: {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run("test", src) {
        Ok(ast) => panic!("Script succeeded with {ast} but was expected to fail"),
        Err(e) => assert_eq!(e.kind, kind, "source: {src:?}, error: {e}"),
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize("test", src).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
                         .into_iter()
                         .map(|t| t.kind)
                         .collect()
}

#[test]
fn integer_literal_is_one_token_and_one_node() {
    assert_eq!(kinds("12345"), [TokenKind::Int(12345)]);

    let ast = run("test", "12345").unwrap();
    assert!(matches!(ast, Node::Number { .. }));
    assert_eq!(ast.value(), Some(LiteralValue::Integer(12345)));
}

#[test]
fn float_and_int_classification() {
    assert_eq!(kinds("3"), [TokenKind::Int(3)]);
    assert_eq!(kinds("3.25"), [TokenKind::Float(OrderedFloat(3.25))]);
    assert_eq!(kinds("3."), [TokenKind::Float(OrderedFloat(3.0))]);
    assert_eq!(kinds("007"), [TokenKind::Int(7)]);
}

#[test]
fn second_decimal_point_ends_the_literal() {
    let err = tokenize("test", "3.14.15").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalCharacter);
    assert_eq!(err.details, "\n[.] on ");
    assert_eq!(err.pos_start.index, 4);
    assert_eq!(err.pos_end.index, 5);
}

#[test]
fn operators_and_parens_are_single_tokens() {
    let cases = [("+", TokenKind::Plus),
                 ("-", TokenKind::Minus),
                 ("*", TokenKind::Mul),
                 ("/", TokenKind::Div),
                 ("(", TokenKind::LParen),
                 (")", TokenKind::RParen)];

    for (src, kind) in cases {
        let tokens = tokenize("test", src).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, kind);
        assert_eq!(tokens[0].value(), None);
        assert_eq!(tokens[0].pos_end.index - tokens[0].pos_start.index, 1);
    }
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_eq!(kinds("1+2*(3)"), kinds(" 1 \t+  2\t*\t( 3 ) "));
    assert!(kinds(" \t ").is_empty());
    assert!(kinds("").is_empty());
}

#[test]
fn token_spans_track_columns() {
    let tokens = tokenize("test", "12 +\t4.5").unwrap();
    let spans: Vec<(usize, usize)> =
        tokens.iter().map(|t| (t.pos_start.col, t.pos_end.col)).collect();
    assert_eq!(spans, [(0, 2), (3, 4), (5, 8)]);
    assert!(tokens.iter().all(|t| t.pos_start.line == 0));
    assert_eq!(&*tokens[2].pos_start.fname, "test");
}

#[test]
fn lexer_cursor_ends_past_the_input() {
    let mut lexer = Lexer::new("test", "1 + 2  ");
    lexer.make_tokens().unwrap();
    assert_eq!(lexer.position().index, 7);
    assert_eq!(lexer.current_char(), None);
}

#[test]
fn lexing_twice_gives_the_same_spans() {
    let mut lexer = Lexer::new("test", "1 + 2");
    let first = lexer.make_tokens().unwrap();
    let second = lexer.make_tokens().unwrap();

    let starts = |tokens: &[Token]| -> Vec<usize> {
        tokens.iter().map(|t| t.pos_start.index).collect()
    };
    assert_eq!(starts(&first), [0, 2, 4]);
    assert_eq!(first, second);
    assert_eq!(lexer.position().index, 5);
}

#[test]
fn illegal_character_at_the_end_is_an_error() {
    let mut lexer = Lexer::new("test", "1 + 2 $");
    let err = lexer.make_tokens().unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalCharacter);
    assert_eq!(err.details, "\n[$] on ");
    assert_eq!((err.pos_start.index, err.pos_end.index), (6, 7));
}

#[test]
fn huge_float_literal_saturates() {
    let literal = format!("{}.5", "9".repeat(400));
    assert_eq!(kinds(&literal), [TokenKind::Float(OrderedFloat(f64::INFINITY))]);
}

#[test]
fn illegal_character_short_circuits() {
    let err = tokenize("test", "5 + & 6").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalCharacter);
    assert!(err.details.contains('&'));
    assert_eq!((err.pos_start.col, err.pos_end.col), (4, 5));
}

#[test]
fn illegal_character_renders_with_file_and_line() {
    let err = run("test", "5 + & ").unwrap_err();
    assert_eq!(err.as_string(),
               "Illegal Character, character not defined: \n[&] on File test, line 1");
    assert_eq!(err.to_string(), err.as_string());
}

#[test]
fn newline_is_illegal() {
    let err = run("test", "1 +\n2").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IllegalCharacter);
    assert_eq!(err.pos_start.line, 0);
    assert_eq!(err.pos_end.line, 1);
    assert_eq!(err.pos_end.col, 0);
    assert!(err.as_string().ends_with("line 1"));
}

#[test]
fn multibyte_illegal_character_is_reported_whole() {
    let err = run("test", "2 × 3").unwrap_err();
    assert_eq!(err.details, "\n[×] on ");
    assert_eq!(err.pos_start.index, 2);
    assert_eq!(err.pos_end.index, 2 + '×'.len_utf8());
    assert_eq!(err.excerpt(), "2 × 3\n  ^");
}

#[test]
fn oversized_integer_is_rejected() {
    let err = run("test", "1 + 99999999999999999999").unwrap_err();
    assert_eq!(err.kind, ErrorKind::LiteralTooLarge);
    assert_eq!(err.details, "\n[99999999999999999999] on ");
    assert_eq!(err.excerpt(), "1 + 99999999999999999999\n    ^^^^^^^^^^^^^^^^^^^^");
    assert!(err.kind.is_lexical());
}

#[test]
fn additive_operators_fold_left() {
    assert_success("2 + 3 - 1", "((INT:2, PLUS, INT:3), MINUS, INT:1)");
    assert_success("8 / 4 / 2", "((INT:8, DIV, INT:4), DIV, INT:2)");
}

#[test]
fn multiplication_binds_tighter() {
    assert_success("2 + 3 * 4", "(INT:2, PLUS, (INT:3, MUL, INT:4))");
    assert_success("2 * 3 + 4", "((INT:2, MUL, INT:3), PLUS, INT:4)");
    assert_success("1 - 6 / 2 * 3",
                   "(INT:1, MINUS, ((INT:6, DIV, INT:2), MUL, INT:3))");
}

#[test]
fn parentheses_group() {
    assert_success("(2 + 3) * 4", "((INT:2, PLUS, INT:3), MUL, INT:4)");
    assert_success("((7))", "INT:7");
    assert_success("2 * (3 - (4 / 1.5))",
                   "(INT:2, MUL, (INT:3, MINUS, (INT:4, DIV, FLOAT:1.5)))");
}

#[test]
fn nesting_is_bounded() {
    let depth = MAX_NESTING;
    let deepest = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_success(&deepest, "INT:1");

    let too_deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
    let err = run("test", &too_deep).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NestingTooDeep);
    assert_eq!(err.pos_start.index, depth);
    assert_eq!(err.details, format!("\n[more than {depth} nested '('] on "));
}

#[test]
fn very_deep_nesting_is_an_error_not_a_crash() {
    for depth in [5_000, 50_000] {
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_failure(&src, ErrorKind::NestingTooDeep);
    }
}

#[test]
fn end_to_end_mixed_literals() {
    let ast = run("t", "12 + 4.5").unwrap();
    assert_eq!(ast.to_string(), "(INT:12, PLUS, FLOAT:4.5)");

    let Node::BinOp { left, op, right } = &ast else {
        panic!("expected a binary node, got {ast}");
    };
    assert_eq!(left.value(), Some(LiteralValue::Integer(12)));
    assert_eq!(op.kind, TokenKind::Plus);
    assert_eq!(right.value(), Some(LiteralValue::Real(4.5)));
    assert_eq!(ast.operator(), Some(BinaryOperator::Add));
    assert_eq!((ast.pos_start().index, ast.pos_end().index), (0, 8));
}

#[test]
fn parser_errors() {
    assert_failure("", ErrorKind::UnexpectedEndOfInput);
    assert_failure("1 +", ErrorKind::UnexpectedEndOfInput);
    assert_failure("+ 1", ErrorKind::UnexpectedToken);
    assert_failure("1 * * 2", ErrorKind::UnexpectedToken);
    assert_failure("1 2", ErrorKind::UnexpectedToken);
    assert_failure(")", ErrorKind::UnexpectedToken);
    assert_failure("(1", ErrorKind::ExpectedClosingParen);
    assert_failure("(1 2)", ErrorKind::ExpectedClosingParen);
    assert_failure("()", ErrorKind::UnexpectedToken);
}

#[test]
fn parser_errors_point_at_the_offending_token() {
    let err = run("calc", "1 + 2 3").unwrap_err();
    assert_eq!(err.as_string(),
               "Invalid Syntax, unexpected token: \n[expected '+', '-', '*' or '/', found INT:3] on File calc, line 1");
    assert_eq!(err.excerpt(), "1 + 2 3\n      ^");

    let err = run("calc", "(4 * 2").unwrap_err();
    assert_eq!(err.details, "\n[expected ')', found end of input] on ");
    assert_eq!(err.pos_start.index, 6);

    let err = run("calc", "4 *").unwrap_err();
    assert_eq!(err.details, "\n[expected INT, FLOAT or '('] on ");
    assert!(!err.kind.is_lexical());
}

#[test]
fn lexer_errors_win_over_parser_errors() {
    assert_failure("+ + $", ErrorKind::IllegalCharacter);
}

#[test]
fn legacy_skip_ignores_leading_tokens() {
    let options = ParseOptions { skip_leading_tokens: 2 };

    let ast = run_with_options("t", "0 0 2 + 3 - 1", &options).unwrap();
    assert_eq!(ast.to_string(), "((INT:2, PLUS, INT:3), MINUS, INT:1)");

    let ast = run_with_options("t", "+ 1 12 + 4.5", &options).unwrap();
    assert_eq!(ast.to_string(), "(INT:12, PLUS, FLOAT:4.5)");

    let err = run_with_options("t", "1 2", &options).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn parser_can_be_driven_directly() {
    let mut lexer = Lexer::new("direct", "6 / 3");
    let tokens = lexer.make_tokens().unwrap();
    let end = lexer.position().copy();

    let ast = Parser::new(&tokens, end.copy()).parse().unwrap();
    assert_eq!(ast.operator(), Some(BinaryOperator::Div));

    let skip_all = ParseOptions { skip_leading_tokens: 10 };
    let err = Parser::with_options(&tokens, end, &skip_all).parse().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos_start.index, 5);
}

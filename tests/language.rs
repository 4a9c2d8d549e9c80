use std::fs;

use jot::{
    ast::Ast,
    error::{EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::{TokenKind, tokenize},
    },
    parse, run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ijs"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = Context::new();
        if let Err(e) = run_source(&script, &mut context) {
            panic!("Demo script {path:?} failed:\n{script}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn display_of(src: &str) -> String {
    let mut context = Context::new();
    match run_source(src, &mut context) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_displays(src: &str, expected: &str) {
    assert_eq!(display_of(src), expected, "for source: {src}");
}

fn kinds(src: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(src);
    tokens.into_iter()
          .map(|t| t.kind)
          .filter(|k| !matches!(k, TokenKind::Eof))
          .collect()
}

fn eval_error(src: &str) -> EvalError {
    let (tokens, diagnostics) = tokenize(src);
    assert!(diagnostics.is_empty(), "unexpected lex diagnostics for: {src}");
    let statements = parse(&tokens).unwrap_or_else(|e| panic!("Parse failed for {src}: {e}"));

    let mut context = Context::new();
    for statement in &statements {
        if let Err(e) = context.eval(statement) {
            return e;
        }
    }
    panic!("Script succeeded but was expected to fail: {src}")
}

fn parse_error(src: &str) -> ParseError {
    let (tokens, _) = tokenize(src);
    match parse(&tokens) {
        Err(e) => e,
        Ok(_) => panic!("Parse succeeded but was expected to fail: {src}"),
    }
}

fn verb(glyph: &str) -> TokenKind {
    TokenKind::Verb(glyph.to_string())
}

fn adverb(glyph: &str) -> TokenKind {
    TokenKind::Adverb(glyph.to_string())
}

// ---------------------------------------------------------------------------
// Lexer
// ---------------------------------------------------------------------------

#[test]
fn lexemes_match_source_text() {
    let source = "total =. 2.5 + +/ i. _3\n(<./ 'it''s') , x";
    let (tokens, _) = tokenize(source);
    let lines: Vec<&str> = source.lines().collect();

    for token in &tokens {
        // End-of-input and newline tokens do not sit inside a line.
        if token.lexeme.is_empty() || token.lexeme == "\n" {
            continue;
        }
        let line = lines[token.location.line - 1];
        let start = token.location.column - 1;
        assert_eq!(&line[start..start + token.lexeme.len()],
                   token.lexeme,
                   "lexeme does not match source at {:?}",
                   token.location);
    }
}

#[test]
fn compound_glyphs_require_adjacency() {
    // Adjacent characters fuse into one glyph.
    assert_eq!(kinds("<."), vec![verb("<.")]);
    assert_eq!(kinds("<:"), vec![verb("<:")]);
    assert_eq!(kinds("+.*"), vec![verb("+.*")]);

    // A space breaks the compound.
    assert_eq!(kinds("< ."),
               vec![verb("<"), TokenKind::Conjunction(".".to_string())]);
    assert_eq!(kinds("< :").first(), Some(&verb("<")));
}

#[test]
fn dot_slash_binds_to_the_adverb() {
    // The dot belongs to the adverb: min-reduce is `<` modified by `./`.
    assert_eq!(kinds("<./"), vec![verb("<"), adverb("./")]);
    assert_eq!(kinds(">./"), vec![verb(">"), adverb("./")]);
    assert_eq!(kinds("<.\\"), vec![verb("<"), adverb(".\\")]);

    // Spaced forms keep their own readings.
    assert_eq!(kinds("<. /"), vec![verb("<."), adverb("/")]);
    assert_eq!(kinds("< ./"), vec![verb("<"), adverb("./")]);
}

#[test]
fn numeric_literals_use_underscore_negatives() {
    assert_eq!(kinds("_5"), vec![TokenKind::Integer(-5)]);
    assert_eq!(kinds("_3.14"), vec![TokenKind::Float(-3.14)]);
    assert_eq!(kinds("2 _2"),
               vec![TokenKind::Integer(2), TokenKind::Integer(-2)]);
}

#[test]
fn string_literals_unescape_doubled_quotes() {
    assert_eq!(kinds("'it''s'"), vec![TokenKind::Str("it's".to_string())]);
    assert_eq!(kinds("''"), vec![TokenKind::Str(String::new())]);
}

#[test]
fn comments_are_filtered() {
    assert_eq!(kinds("3 NB. the rest is ignored , + ="),
               vec![TokenKind::Integer(3)]);
}

#[test]
fn assignment_tokens() {
    assert_eq!(kinds("x =. 1").first(),
               Some(&TokenKind::Name("x".to_string())));
    assert!(kinds("x =. 1").contains(&TokenKind::AssignLocal));
    assert!(kinds("x =: 1").contains(&TokenKind::AssignGlobal));
    // A bare `=` is the equality verb.
    assert_eq!(kinds("1 = 2")[1], verb("="));
}

#[test]
fn names_may_end_in_a_dot_or_colon() {
    assert_eq!(kinds("foo."), vec![TokenKind::Name("foo.".to_string())]);
    assert_eq!(kinds("foo:"), vec![TokenKind::Name("foo:".to_string())]);
    // `i.` is a primitive, not a name.
    assert_eq!(kinds("i. 3")[0], verb("i."));
}

#[test]
fn token_stream_ends_with_eof() {
    let (tokens, _) = tokenize("1 + 1");
    assert_eq!(tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
}

#[test]
fn unterminated_string_is_diagnosed() {
    let (_, diagnostics) = tokenize("'abc");
    assert!(matches!(diagnostics.first(),
                     Some(LexError::UnterminatedString { location }) if location.column == 1));
}

#[test]
fn unknown_characters_are_diagnosed_not_fatal() {
    let (tokens, diagnostics) = tokenize("1 ? 2");
    assert!(matches!(diagnostics.first(), Some(LexError::UnknownCharacter { .. })));
    // The stream still carries the surrounding tokens.
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Integer(1)));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Integer(2)));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Unknown));
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

#[test]
fn application_is_right_to_left() {
    let (tokens, _) = tokenize("1 + 2 * 3");
    let statements = parse(&tokens).unwrap();

    let Ast::DyadicApply { verb, right, .. } = &statements[0] else {
        panic!("expected a dyadic application, found {:?}", statements[0]);
    };
    assert!(matches!(&**verb, Ast::Verb { glyph, .. } if glyph == "+"));
    assert!(matches!(&**right, Ast::DyadicApply { verb, .. }
                     if matches!(&**verb, Ast::Verb { glyph, .. } if glyph == "*")));
}

#[test]
fn parenthesized_verbs_form_a_train() {
    let (tokens, _) = tokenize("(+ * -) 5");
    let statements = parse(&tokens).unwrap();

    let Ast::MonadicApply { verb, .. } = &statements[0] else {
        panic!("expected a monadic application, found {:?}", statements[0]);
    };
    assert!(matches!(&**verb, Ast::Train { verbs, .. } if verbs.len() == 3));
}

#[test]
fn lone_primaries_parse_to_leaves() {
    let (tokens, _) = tokenize("42");
    let statements = parse(&tokens).unwrap();
    assert!(matches!(statements[0], Ast::NounLiteral { .. }));

    let (tokens, _) = tokenize("1 2 3");
    let statements = parse(&tokens).unwrap();
    assert!(matches!(&statements[0], Ast::VectorLiteral { elements, .. }
                     if elements.len() == 3));
}

#[test]
fn statements_split_at_newlines() {
    let (tokens, _) = tokenize("1 + 1\n\n2 + 2");
    let statements = parse(&tokens).unwrap();
    assert_eq!(statements.len(), 2);
}

#[test]
fn assignment_requires_a_name_target() {
    assert!(matches!(parse_error("5 =. 3"), ParseError::BadAssignmentTarget { .. }));
}

#[test]
fn missing_operands_are_rejected() {
    assert!(matches!(parse_error("1 +"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("+"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("1 + ^: 2"), ParseError::MissingOperand { .. }));
}

#[test]
fn unbalanced_parens_are_reported() {
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnclosedParen { .. }));
    assert!(matches!(parse_error(") 5"), ParseError::UnmatchedRightParen { .. }));
    // A trailing stray `)` is consumed and the statement stands.
    assert_displays("1 + 2)", "3");
}

// ---------------------------------------------------------------------------
// Evaluation: the canonical scenarios
// ---------------------------------------------------------------------------

#[test]
fn canonical_scenarios() {
    assert_displays("2 + 2", "4");
    assert_displays("i. 5", "0 1 2 3 4");
    assert_displays("+/ i. 5", "10");
    assert_displays("*/ 1 2 3 4", "24");
    assert_displays("1 2 3 + 4 5 6", "5 7 9");
    assert_displays("(+/ % #) 1 2 3 4", "2.5");
    assert_displays("<./ 5 2 8", "2");
    assert_displays("2 * 3 + 4", "14");
}

// ---------------------------------------------------------------------------
// Evaluation: primitives
// ---------------------------------------------------------------------------

#[test]
fn monadic_arithmetic() {
    assert_displays("- 5", "_5");
    assert_displays("- _2 0 2", "2 0 _2");
    assert_displays("*: 4", "16");
    assert_displays("% 5", "0.2");
    assert_displays("* _7 0 9", "_1 0 1");
    assert_displays("| _4 4", "4 4");
    assert_displays("<. 2.7 _2.7", "2 _3");
    assert_displays(">. 2.3 _2.3", "3 _2");
    assert_displays("<: 5", "4");
    assert_displays(">: 5", "6");
    assert_displays("-. 0 1", "1 0");
}

#[test]
fn dyadic_arithmetic_and_promotion() {
    assert_displays("7 - 5", "2");
    assert_displays("3 % 4", "0.75");
    assert_displays("2 ^ 10", "1024");
    assert_displays("1.5 + 1", "2.5");
    assert_displays("2 * 3.5", "7");
    assert_displays("3 | 10", "1");
    assert_displays("2 <. 7", "2");
    assert_displays("2 >. 7", "7");
}

#[test]
fn comparisons_yield_booleans() {
    assert_displays("3 < 5", "1");
    assert_displays("3 > 5", "0");
    assert_displays("1 2 3 = 1 0 3", "1 0 1");
    assert_displays("2 <: 2", "1");
    assert_displays("2 >: 3", "0");
}

#[test]
fn scalars_broadcast() {
    assert_displays("10 + i. 3", "10 11 12");
    assert_displays("(i. 3) * 5", "0 5 10");
    assert_displays("2 2 $ 1 2 3 4", "1 2\n3 4");
    assert_displays("10 * 2 2 $ 1 2 3 4", "10 20\n30 40");
}

#[test]
fn shape_tally_and_reshape() {
    assert_displays("$ i. 5", "5");
    assert_displays("$ 2 3 $ i. 6", "2 3");
    assert_displays("# i. 5", "5");
    assert_displays("# 7", "1");
    assert_displays("# 2 3 $ i. 6", "2");
    // Reshape cycles its source elements.
    assert_displays("5 $ 1 2", "1 2 1 2 1");
    // Applying $ twice yields the shape of the shape.
    assert_displays("$ $ 2 3 $ i. 6", "2");
    assert_displays("$ $ 7", "0");
}

#[test]
fn append_joins_items() {
    assert_displays("1 2 , 3 4", "1 2 3 4");
    assert_displays("1 2 , 3", "1 2 3");
    assert_displays("0 , 1.5", "0 1.5");
    assert_displays("(2 2 $ 1) , 2 2 $ 0", "1 1\n1 1\n0 0\n0 0");
    assert_displays("0 , 2 2 $ 1", "0 0\n1 1\n1 1");
    assert_displays(", 2 2 $ i. 4", "0 1 2 3");
}

#[test]
fn reverse_flips_the_leading_axis() {
    assert_displays("|. i. 5", "4 3 2 1 0");
    assert_displays("|. 2 2 $ i. 4", "2 3\n0 1");
}

#[test]
fn strings_tally_and_display() {
    assert_displays("'hello'", "hello");
    assert_displays("# 'hello'", "5");
    assert_displays("# 'it''s'", "4");
    assert_displays("# 'a'", "1");
    assert_displays("'ab' , 'cd'", "abcd");
}

// ---------------------------------------------------------------------------
// Evaluation: derived verbs and trains
// ---------------------------------------------------------------------------

#[test]
fn insert_folds_the_leading_axis() {
    assert_displays("+/ 2 3 $ i. 6", "3 5 7");
    assert_displays(">./ 3 1 4 1 5", "5");
    // Empty reductions use the identity where one exists.
    assert_displays("+/ i. 0", "0");
    assert_displays("*/ i. 0", "1");
}

#[test]
fn scan_reduces_every_prefix() {
    assert_displays("+\\ 1 2 3 4", "1 3 6 10");
    assert_displays("*\\ 1 2 3 4", "1 2 6 24");
    assert_displays("<.\\ 5 2 8", "5 2 2");
}

#[test]
fn reflex_swaps_and_doubles() {
    assert_displays("+~ 5", "10");
    assert_displays("2 -~ 10", "8");
}

#[test]
fn power_conjunction_iterates() {
    assert_displays("*: ^: 2 3", "81");
    assert_displays("*: ^: 0 3", "3");
    assert_displays("2 + ^: 3 10", "16");
}

#[test]
fn inner_products() {
    assert_displays("1 2 3 +.* 4 5 6", "32");
    assert_displays("1 2 3 + . * 4 5 6", "32");
    // J's own spelling inserts the left verb: `+/ . *`.
    assert_displays("1 2 3 +/ . * 4 5 6", "32");
    assert_displays("1 2 3 +/ .* 4 5 6", "32");
    assert_displays("(2 2 $ 1 2 3 4) +.* 2 2 $ 5 6 7 8", "19 22\n43 50");
    assert_displays("(2 2 $ 1 2 3 4) + . * 2 2 $ 1 0 0 1", "1 2\n3 4");
    // Other verb pairs run the generic apply-then-reduce path.
    assert_displays("1 2 3 >. . + 4 5 6", "9");
}

#[test]
fn index_of_searches_lists() {
    assert_displays("'park' i. 'k'", "3");
    assert_displays("'park' i. 'j'", "4");
    assert_displays("10 20 30 i. 30 10", "2 0");
    assert_displays("4 5 6 i. 7", "3");
}

#[test]
fn match_compares_whole_arrays() {
    assert_displays("1 2 3 -: 1 2 3", "1");
    assert_displays("1 2 3 -: 1 2 4", "0");
    assert_displays("1 2 -: 1 2 3", "0");
    assert_displays("'abc' -: 'abc'", "1");
    assert_displays("-: 5", "2.5");
}

#[test]
fn hooks_and_forks() {
    assert_displays("(* -) 3", "_9");
    assert_displays("2 (+ * -) 5", "_21");
    assert_displays("(+/ % #) 1 2 3 4 5", "3");
    // Length four resolves as a hook whose tail is a fork.
    assert_displays("(- +/ % #) 1 2 3", "_1 0 1");
}

// ---------------------------------------------------------------------------
// Evaluation: environment
// ---------------------------------------------------------------------------

#[test]
fn names_bind_and_persist() {
    let mut context = Context::new();
    run_source("x =. 2 + 3", &mut context).unwrap();
    run_source("y =: x * x", &mut context).unwrap();
    let value = run_source("y - x", &mut context).unwrap();
    assert_eq!(value.unwrap().to_string(), "20");
}

#[test]
fn assignment_yields_its_value() {
    assert_displays("x =. 41 + 1", "42");
}

#[test]
fn multi_statement_sources_evaluate_in_order() {
    assert_displays("x =. 3\ny =. 4\nx * y", "12");
}

// ---------------------------------------------------------------------------
// Evaluation: errors
// ---------------------------------------------------------------------------

#[test]
fn unbound_names_are_reported() {
    assert!(matches!(eval_error("nope + 1"),
                     EvalError::UnboundName { name, .. } if name == "nope"));
}

#[test]
fn shape_mismatches_are_reported() {
    assert!(matches!(eval_error("1 2 + 1 2 3"), EvalError::ShapeMismatch { .. }));
    assert!(matches!(eval_error("1 2 3 +.* 1 2"), EvalError::ShapeMismatch { .. }));
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(eval_error("1 % 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_error("% 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_error("1 2 % 1 0"), EvalError::DivisionByZero { .. }));
}

#[test]
fn rank_errors_are_reported() {
    assert!(matches!(eval_error("i. 2 2"), EvalError::RankError { .. }));
    assert!(matches!(eval_error("7 +.* 7"), EvalError::RankError { .. }));
}

#[test]
fn empty_reductions_without_identity_fail() {
    assert!(matches!(eval_error("<./ i. 0"),
                     EvalError::EmptyReduce { glyph, .. } if glyph == "<."));
}

#[test]
fn type_errors_are_reported() {
    assert!(matches!(eval_error("1 + 'a'"), EvalError::TypeError { .. }));
    assert!(matches!(eval_error("'ab' , 1"), EvalError::TypeError { .. }));
}

#[test]
fn verbs_without_a_valence_are_unknown() {
    assert!(matches!(eval_error("= 5"), EvalError::UnknownVerb { glyph, .. } if glyph == "="));
    assert!(matches!(eval_error("1 # 2"), EvalError::UnknownVerb { glyph, .. } if glyph == "#"));
}

#[test]
fn errors_carry_locations() {
    let error = eval_error("1 + 2\nnope");
    let EvalError::UnboundName { location, .. } = error else {
        panic!("expected an unbound name error, found {error}");
    };
    assert_eq!(location.line, 2);
    assert_eq!(location.column, 1);
}

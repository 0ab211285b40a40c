use basic::lang::{lex, token::*, ErrorCode};

fn tokens(s: &str) -> Vec<Token> {
    match lex(s) {
        Ok(v) => v.into_iter().map(|l| l.token).collect(),
        Err(e) => panic!("{:?}", e),
    }
}

fn plain(s: &str) -> Token {
    Token::Ident(Ident::Plain(s.to_string()))
}

fn number(s: &str) -> Token {
    Token::Literal(Literal::Number(s.to_string()))
}

#[test]
fn test_relational_operators() {
    let v = tokens("10 A=1<=2<>3>=4");
    assert_eq!(
        v,
        vec![
            Token::LineNumber(10),
            plain("A"),
            Token::Operator(Operator::Equal),
            number("1"),
            Token::Operator(Operator::LessEqual),
            number("2"),
            Token::Operator(Operator::NotEqual),
            number("3"),
            Token::Operator(Operator::GreaterEqual),
            number("4"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_keywords_ignore_case() {
    assert_eq!(
        tokens("10 print x"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Print),
            plain("X"),
            Token::Newline
        ]
    );
}

#[test]
fn test_keyword_run_together() {
    assert_eq!(
        tokens("10 FORI=1TO9"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::For),
            plain("I"),
            Token::Operator(Operator::Equal),
            number("1"),
            Token::Word(Word::To),
            number("9"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_variable_shapes() {
    assert_eq!(
        tokens("10 LET B7$ = A1"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Let),
            Token::Ident(Ident::String("B7$".to_string())),
            Token::Operator(Operator::Equal),
            plain("A1"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_remark_takes_rest_of_line() {
    assert_eq!(
        tokens("10 REM PRINT \"unterminated\n20 REMARKABLE"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Rem),
            Token::Remark("PRINT \"unterminated".to_string()),
            Token::Newline,
            Token::LineNumber(20),
            Token::Word(Word::Rem),
            Token::Remark("ARKABLE".to_string()),
            Token::Newline,
        ]
    );
}

#[test]
fn test_string_escape() {
    assert_eq!(
        tokens(r#"10 PRINT "SAY \"HI\"""#),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Print),
            Token::Literal(Literal::String("SAY \"HI\"".to_string())),
            Token::Newline,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        tokens("10 A = 1.5E-3 + .5 + 2e4"),
        vec![
            Token::LineNumber(10),
            plain("A"),
            Token::Operator(Operator::Equal),
            number("1.5E-3"),
            Token::Operator(Operator::Plus),
            number(".5"),
            Token::Operator(Operator::Plus),
            number("2E4"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_line_number_only_at_start() {
    assert_eq!(
        tokens("10 GOTO 20"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Goto),
            number("20"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_go_to_with_space() {
    assert_eq!(
        tokens("10 GO TO 20"),
        vec![
            Token::LineNumber(10),
            Token::Word(Word::Goto),
            number("20"),
            Token::Newline,
        ]
    );
}

#[test]
fn test_blank_lines_skipped() {
    assert_eq!(
        tokens("\n10 END\n\n"),
        vec![Token::LineNumber(10), Token::Word(Word::End), Token::Newline]
    );
}

#[test]
fn test_errors_are_collected() {
    let errors = lex("10 PRINT \"OOPS\n20 LET A = 1 @ 2\n30 END").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.code() == ErrorCode::LexError));
    assert_eq!(errors[0].row(), Some(1));
    assert_eq!(errors[0].column(), 9..14);
    assert_eq!(errors[1].row(), Some(2));
    assert_eq!(errors[1].column(), 13..14);
}

#[test]
fn test_number_too_large() {
    let errors = lex("10 PRINT 1E999\n20 PRINT 1E300").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::LexError);
    assert_eq!(errors[0].row(), Some(1));
    assert_eq!(errors[0].column(), 9..14);
    assert_eq!(errors[0].text(), "NUMBER TOO LARGE 1E999");
}

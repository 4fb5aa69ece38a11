use vault::lang::{distinct_symbols, lex, token::*, Dialect, ErrorCode};
use vault::mach::Interpreter;

#[test]
fn test_lines_and_comments() {
    let tokens = lex(vec!["loop 3   # three times", "", "\tMove", "END"], Dialect::Core).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Control(Control::Loop),
            Token::Integer(3),
            Token::Action(Action::Move),
            Token::Control(Control::End),
        ]
    );
}

#[test]
fn test_integers_anywhere() {
    let tokens = lex(vec!["7 MOVE 0 12"], Dialect::Core).unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], Token::Integer(7));
    assert_eq!(tokens[3], Token::Integer(12));
}

#[test]
fn test_invalid_token_line() {
    let err = lex(vec!["MOVE", "", "JUMP"], Dialect::Core).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidToken);
    assert_eq!(err.line_number(), Some(3));
    assert!(err.is_syntax());
    assert_eq!(err.to_string(), "INVALID TOKEN IN LINE 3; JUMP");
    let err = lex(vec!["LOOP -1"], Dialect::Core).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidToken);
}

#[test]
fn test_large_integers_saturate() {
    let tokens = lex(vec!["LOOP 5000000000", "MOVE", "END"], Dialect::Core).unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1], Token::Integer(u32::MAX));
    let interpreter = Interpreter::new(vec!["LOOP 5000000000", "MOVE", "END"]).unwrap();
    assert_eq!(interpreter.program().len(), 4);
}

#[test]
fn test_dialects() {
    assert_eq!(
        lex(vec!["WAIT 2"], Dialect::Core).unwrap_err().code(),
        ErrorCode::InvalidToken
    );
    assert_eq!(
        lex(vec!["wait 2"], Dialect::Extended).unwrap(),
        vec![Token::Extension(Extension::Wait), Token::Integer(2)]
    );
}

#[test]
fn test_distinct_limit() {
    let twenty = "MOVE LEFT RIGHT RTURN PICK OPEN LOOP WHILE IF END \
                  FRONT KEY DOOR EXIT SET CLR WAIT MARK GOTO SCAN";
    let tokens = lex(vec![twenty, "1 2 3 MOVE"], Dialect::Extended).unwrap();
    assert_eq!(distinct_symbols(&tokens).len(), 20);
    let err = lex(vec![twenty, "COUNT"], Dialect::Extended).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TooManyDistinctTokens);
    assert_eq!(err.to_string(), "TOO MANY DISTINCT TOKENS; 21 OF 20 ALLOWED");
}

#[test]
fn test_distinct_symbols_skip_integers() {
    let tokens = lex(vec!["LOOP 3 LOOP 4 MOVE END END"], Dialect::Core).unwrap();
    let symbols: Vec<String> = distinct_symbols(&tokens).into_iter().collect();
    assert_eq!(symbols, vec!["END", "LOOP", "MOVE"]);
}

#[test]
fn test_unmatched_block() {
    let err = Interpreter::new(vec!["MOVE", "LOOP 2", "MOVE"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnmatchedBlock);
    assert_eq!(err.pc(), Some(1));
    assert!(err.is_syntax());
    let err = Interpreter::new(vec!["WHILE FRONT", "IF KEY", "PICK", "END"]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnmatchedBlock);
    assert_eq!(err.pc(), Some(0));
}

#[test]
fn test_empty_program() {
    let interpreter = Interpreter::new(Vec::<String>::new()).unwrap();
    assert_eq!(interpreter.program().len(), 0);
    assert_eq!(interpreter.distinct_token_count(), 0);
}

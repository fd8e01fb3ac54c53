use declc::config::Limits;
use declc::lexer::{tokenize, tokenize_with_limits, Keyword, LexerError, Position, TokenKind};
use test_log::test;

fn kinds_and_lexemes(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input)
        .expect("tokenize failed")
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

#[test]
fn whitespace_only_yields_nothing() {
    for input in ["", " ", "\n\n", " \r\n  \n"] {
        let lexed = tokenize(input).expect("tokenize failed");
        assert!(lexed.tokens.is_empty(), "tokens for {input:?}");
        assert!(lexed.symbols.is_empty(), "symbols for {input:?}");
        assert!(lexed.diagnostics.is_empty(), "diagnostics for {input:?}");
    }
}

#[test]
fn simple_declaration() {
    assert_eq!(
        kinds_and_lexemes("int x;"),
        vec![
            (TokenKind::Keyword, "int".to_string()),
            (TokenKind::Identifier, "x".to_string()),
            (TokenKind::Semicolon, ";".to_string()),
        ]
    );
}

#[test]
fn every_keyword_is_recognized() {
    let input = "if else while for int float char return break continue";
    let lexed = tokenize(input).expect("tokenize failed");
    assert_eq!(lexed.tokens.len(), 10);
    assert!(lexed.tokens.iter().all(|t| t.kind == TokenKind::Keyword));
    assert!(lexed.symbols.is_empty());
    assert_eq!(lexed.tokens[4].keyword(), Some(Keyword::Int));
    assert_eq!(lexed.tokens[9].keyword(), Some(Keyword::Continue));
}

#[test]
fn identifiers_allow_digits_and_underscores() {
    let lexed = tokenize("count_2 x1 integer").expect("tokenize failed");
    assert_eq!(lexed.symbols.lexemes(), vec!["count_2", "x1", "integer"]);
    assert!(lexed.tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn duplicate_identifiers_are_all_recorded() {
    let lexed = tokenize("int a; int a;").expect("tokenize failed");
    assert_eq!(lexed.symbols.lexemes(), vec!["a", "a"]);
    assert_eq!(lexed.symbols.to_string(), "1: a\n2: a\n");
}

#[test]
fn integers_stop_at_first_non_digit() {
    assert_eq!(
        kinds_and_lexemes("123abc"),
        vec![
            (TokenKind::Integer, "123".to_string()),
            (TokenKind::Identifier, "abc".to_string()),
        ]
    );
}

#[test]
fn single_character_tokens() {
    let cases = [
        (';', TokenKind::Semicolon),
        ('(', TokenKind::LeftParen),
        (')', TokenKind::RightParen),
        ('{', TokenKind::LeftBrace),
        ('}', TokenKind::RightBrace),
        ('/', TokenKind::Slash),
        ('\\', TokenKind::Backslash),
    ];
    let input: String = cases.iter().map(|(c, _)| *c).collect();
    let tokens = tokenize(&input).expect("tokenize failed").tokens;

    assert_eq!(tokens.len(), cases.len());
    for (token, (ch, kind)) in tokens.iter().zip(cases) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.lexeme, ch.to_string());
    }
}

#[test]
fn relational_operators_take_optional_equals() {
    for op in ["<", ">", "=", "!"] {
        let one = kinds_and_lexemes(&format!("{op} x"));
        assert_eq!(one[0], (TokenKind::RelationalOperator, op.to_string()));
        assert_eq!(one[1].0, TokenKind::Identifier);

        let two = kinds_and_lexemes(&format!("{op}=x"));
        assert_eq!(two[0], (TokenKind::RelationalOperator, format!("{op}=")));
        assert_eq!(two[1], (TokenKind::Identifier, "x".to_string()));
    }
}

#[test]
fn relational_operator_at_end_of_input() {
    assert_eq!(
        kinds_and_lexemes("<"),
        vec![(TokenKind::RelationalOperator, "<".to_string())]
    );
}

#[test]
fn string_escapes_are_copied_verbatim() {
    let lexed = tokenize(r#""a\"b""#).expect("tokenize failed");
    assert_eq!(lexed.tokens.len(), 1);
    assert_eq!(lexed.tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(lexed.tokens[0].lexeme, r#""a\"b""#);
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn unterminated_string_is_reported_and_kept() {
    let lexed = tokenize("int x; \"abc").expect("tokenize failed");
    let last = lexed.tokens.last().expect("no tokens");
    assert_eq!(last.kind, TokenKind::StringLiteral);
    assert_eq!(last.lexeme, "\"abc");
    assert_eq!(
        lexed.diagnostics,
        vec![LexerError::UnterminatedString(Position::new(1, 8))]
    );
}

#[test]
fn unknown_characters_are_skipped() {
    let lexed = tokenize("int @x\t;").expect("tokenize failed");
    let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Keyword, TokenKind::Identifier, TokenKind::Semicolon]
    );
    assert_eq!(
        lexed.diagnostics,
        vec![
            LexerError::UnknownCharacter('@', Position::new(1, 5)),
            LexerError::UnknownCharacter('\t', Position::new(1, 7)),
        ]
    );
    assert!(lexed.diagnostics.iter().all(LexerError::is_recoverable));
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("int a;\n  char b;").expect("tokenize failed").tokens;
    assert_eq!(tokens[0].pos, Position::new(1, 1));
    assert_eq!(tokens[1].pos, Position::new(1, 5));
    assert_eq!(tokens[3].pos, Position::new(2, 3));
    assert_eq!(tokens[4].pos, Position::new(2, 8));
}

#[test]
fn token_limit_is_fatal() {
    let limits = Limits::default().with_max_tokens(2);
    let err = tokenize_with_limits("int x;", limits).expect_err("limit not enforced");
    assert_eq!(err, LexerError::TooManyTokens(2, Position::new(1, 6)));
    assert!(!err.is_recoverable());
}

#[test]
fn symbol_limit_is_fatal() {
    let limits = Limits::default().with_max_symbols(1);
    let err = tokenize_with_limits("int a; int b;", limits).expect_err("limit not enforced");
    assert_eq!(err, LexerError::SymbolTableFull(1, Position::new(1, 12)));
}

#[test]
fn lexeme_limit_is_fatal() {
    let long_name = "x".repeat(Limits::DEFAULT_MAX_LEXEME_LEN + 1);
    let err = tokenize(&format!("int {long_name};")).expect_err("limit not enforced");
    assert!(matches!(err, LexerError::LexemeTooLong(49, _)));

    let fits = "y".repeat(Limits::DEFAULT_MAX_LEXEME_LEN);
    assert!(tokenize(&format!("int {fits};")).is_ok());
}

#[test]
fn token_trace_format() {
    let tokens = tokenize("int x;").expect("tokenize failed").tokens;
    let trace: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(trace, vec!["<KEYWORD, int>", "<IDENTIFIER, x>", "<SEMICOLON, ;>"]);
}

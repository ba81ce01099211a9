//! Integration tests for the tokenizer's public contract.

use tasiadb::{TokenClass, TokenKind, Tokenizer, TypeName};

/// Collect every token up to and including end of input.
fn tokens(input: &str) -> Vec<(TokenKind, &str)> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next();
        tokens.push((token.kind, token.text));
        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}

#[test]
fn test_full_statement() {
    assert_eq!(
        tokens("CREATE TABLE users (id INTEGER, name TEXT);"),
        [
            (TokenKind::Create, "CREATE"),
            (TokenKind::Table, "TABLE"),
            (TokenKind::Identifier, "users"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "id"),
            (TokenKind::Type(TypeName::Integer), "INTEGER"),
            (TokenKind::Comma, ","),
            (TokenKind::Identifier, "name"),
            (TokenKind::Type(TypeName::Text), "TEXT"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_punctuation_advances_one_position() {
    for (c, kind) in [
        ('(', TokenKind::LParen),
        (')', TokenKind::RParen),
        (';', TokenKind::Semicolon),
        (',', TokenKind::Comma),
    ] {
        let input = format!("{c}{c}");
        let mut tokenizer = Tokenizer::new(&input);
        let token = tokenizer.next();
        assert_eq!(token.kind, kind);
        assert_eq!(token.text.len(), 1);
        assert_eq!(tokenizer.position(), 1);
        assert_eq!(token.kind.class(), TokenClass::Punctuation);
    }
}

#[test]
fn test_keyword_case_sensitivity() {
    assert_eq!(tokens("create")[0].0, TokenKind::Identifier);
    assert_eq!(tokens("Create")[0].0, TokenKind::Identifier);
    assert_eq!(tokens("CREATE")[0].0, TokenKind::Create);
    assert_eq!(tokens("Blob")[0].0, TokenKind::Identifier);
    assert_eq!(tokens("BLOB")[0].0, TokenKind::Type(TypeName::Blob));
}

#[test]
fn test_whitespace_never_in_token_text() {
    let input = "CREATE \t\t TABLE\r\r\r   t  (  a   NULL  )  ;";
    for (kind, text) in tokens(input) {
        assert!(!text.contains([' ', '\t', '\r']), "{kind:?} {text:?}");
        if kind != TokenKind::Eof {
            assert!(!text.is_empty(), "{kind:?}");
        }
    }
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut tokenizer = Tokenizer::new("(");
    assert_eq!(tokenizer.next().kind, TokenKind::LParen);
    let eof = tokenizer.next();
    assert_eq!(eof.kind, TokenKind::Eof);
    for _ in 0..10 {
        assert_eq!(tokenizer.next(), eof);
        assert_eq!(tokenizer.position(), 1);
    }
}

#[test]
fn test_unrecognized_characters_do_not_stall() {
    assert_eq!(
        tokens("a+1"),
        [
            (TokenKind::Identifier, "a"),
            (TokenKind::Illegal, "+"),
            (TokenKind::Illegal, "1"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(
        tokens("naïve"),
        [
            (TokenKind::Identifier, "na"),
            (TokenKind::Illegal, "ï"),
            (TokenKind::Identifier, "ve"),
            (TokenKind::Eof, ""),
        ]
    );
}

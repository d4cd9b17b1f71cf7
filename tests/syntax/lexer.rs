//! Integration tests for the lexer.

use tsguard::syntax::{Lexer, TokenKind};

fn lex(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn lex_realistic_declaration_file() {
    let source = r"
// geometry primitives
import { Unit } from './unit.interface';

export interface Point {
    x: number;
    y: number;
    unit: Unit;
}
";
    let tokens = lex(source);
    assert!(tokens.iter().all(|t| !matches!(t, TokenKind::Error(_))));
    assert!(tokens.contains(&TokenKind::Import));
    assert!(tokens.contains(&TokenKind::Interface));
    assert!(tokens.contains(&TokenKind::Ident("Point".into())));
    assert!(tokens.contains(&TokenKind::StringLit("./unit.interface".into())));
}

#[test]
fn lex_keywords_only_at_word_boundaries() {
    let tokens = lex("importer interfaces");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Ident("importer".into()),
            TokenKind::Ident("interfaces".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_comments_preserved_as_trivia() {
    let tokens = lex("// one\n/* two */ interface");
    assert!(matches!(tokens[0], TokenKind::Comment(_)));
    assert!(matches!(tokens[1], TokenKind::Comment(_)));
    assert_eq!(tokens[2], TokenKind::Interface);
}

#[test]
fn lex_error_tokens_do_not_stop_stream() {
    let tokens = lex("# interface");
    assert!(matches!(tokens[0], TokenKind::Error(_)));
    assert_eq!(tokens[1], TokenKind::Interface);
    assert_eq!(tokens[2], TokenKind::Eof);
}

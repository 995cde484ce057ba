#![allow(dead_code)]

use loxscan::{Scan, TokenKind, scan};

/// Kinds of every token produced for `source`, EOF included.
pub fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.iter().map(|t| t.kind).collect()
}

/// Scan and assert that no diagnostics were produced.
pub fn scan_clean(source: &str) -> Scan {
    let result = scan(source);
    assert!(
        result.is_clean(),
        "unexpected diagnostics for {source:?}: {:?}",
        result.errors
    );
    result
}

/// Assert that every lexeme is the exact source slice named by its span.
pub fn assert_lexemes_match_source(source: &str, result: &Scan) {
    for token in &result.tokens {
        assert_eq!(
            &source[token.span.start..token.span.end],
            token.lexeme,
            "lexeme mismatch for {token:?}"
        );
    }
}

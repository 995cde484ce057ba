//! Error recovery and diagnostic reporting.

mod common;

use common::kinds;
use loxscan::{Reporter, ScanError, ScanErrorKind, Scanner, TokenKind, scan, scan_tokens};

#[test]
fn diag_illegal_character_is_skipped() {
    let result = scan("var x = 1 $ 2;");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ScanErrorKind::IllegalCharacter('$'));
    assert_eq!(
        result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn diag_each_bad_character_reported() {
    let result = scan("#@^");
    assert_eq!(result.errors.len(), 3);
    let columns: Vec<_> = result.errors.iter().map(|e| e.column).collect();
    assert_eq!(columns, vec![0, 1, 2]);
    assert_eq!(kinds("#@^"), vec![TokenKind::Eof]);
}

#[test]
fn diag_message_format() {
    let result = scan("ok\n  ?");
    assert_eq!(
        result.errors[0].to_string(),
        "SyntaxError (2:2): Illegal character: `?'"
    );
}

#[test]
fn diag_unterminated_string() {
    let result = scan("\"abc");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ScanErrorKind::UnterminatedString);
    assert!(result.tokens.iter().all(|t| t.kind != TokenKind::String));
    assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn diag_unterminated_string_keeps_earlier_tokens() {
    let result = scan("print \"oops\nmore");
    assert_eq!(
        result.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Print, TokenKind::Eof]
    );
    assert_eq!(result.errors[0].line, 2);
    assert_eq!(
        result.errors[0].to_string(),
        "SyntaxError (2:3): Unterminated string"
    );
    assert_eq!(result.tokens[1].line, 2);
}

#[test]
fn diag_column_resets_per_line() {
    let result = scan("@\n@");
    assert_eq!(result.errors[0].line, 1);
    assert_eq!(result.errors[0].column, 0);
    assert_eq!(result.errors[1].line, 2);
    assert_eq!(result.errors[1].column, 0);
}

#[test]
fn diag_non_ascii_digit_is_illegal() {
    let result = scan("٣");
    assert_eq!(result.errors[0].kind, ScanErrorKind::IllegalCharacter('٣'));
}

#[test]
fn diag_custom_reporter() {
    #[derive(Default)]
    struct Counter(usize);

    impl Reporter for Counter {
        fn report(&mut self, _error: ScanError) {
            self.0 += 1;
        }
    }

    let mut counter = Counter::default();
    let tokens = Scanner::with_reporter("a ~ b ~", &mut counter).scan_tokens();
    assert_eq!(counter.0, 2);
    assert_eq!(tokens.len(), 3);
}

#[test]
fn diag_error_is_std_error() {
    let result = scan("&");
    let err: &dyn std::error::Error = &result.errors[0];
    assert!(err.to_string().starts_with("SyntaxError (1:0)"));
}

#[test]
fn diag_stderr_reporter_keeps_scanning() {
    let tokens = scan_tokens("@ x @");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
    assert_eq!(tokens[0].text(), Some("x"));
}

#[test]
fn diag_stderr_reporter_on_unterminated_string() {
    let tokens = scan_tokens("\"open");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

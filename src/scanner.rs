use crate::diagnostic::{Reporter, ScanError, ScanErrorKind, Stderr};
use crate::token::{Literal, Span, Token, TokenKind, keyword};

/// Tokens and diagnostics from one complete scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Scan {
    /// True when the scan produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan a source string, collecting diagnostics instead of printing them.
///
/// The token sequence always ends with a single [`TokenKind::Eof`].
#[must_use]
pub fn scan(source: &str) -> Scan {
    let mut errors = Vec::new();
    let tokens = Scanner::with_reporter(source, &mut errors).scan_tokens();
    Scan { tokens, errors }
}

/// Scan a source string, writing any diagnostics to standard error.
#[must_use]
pub fn scan_tokens(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}

/// Single-pass scanner over one source string.
///
/// `start` and `current` are byte offsets that always sit on char
/// boundaries; `column` counts chars consumed on the current line.
pub struct Scanner<'src, R = Stderr> {
    source: &'src str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    reporter: R,
}

impl<'src> Scanner<'src, Stderr> {
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self::with_reporter(source, Stderr)
    }
}

impl<'src, R: Reporter> Scanner<'src, R> {
    pub const fn with_reporter(source: &'src str, reporter: R) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 0,
            start_line: 1,
            start_column: 1,
            reporter,
        }
    }

    /// Run the scanner to the end of input and return every token.
    ///
    /// Lexical errors go to the reporter and never stop the scan.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column + 1;
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
            span: Span {
                start: end,
                end,
                line: self.line,
                column: self.column + 1,
            },
        });
        self.tokens
    }

    fn scan_token(&mut self) {
        // The loop in `scan_tokens` only calls this before end of input.
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.matches('/') {
                    // Stop short of the newline; the next pass counts it.
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            '"' => self.string(),
            ' ' | '\t' | '\r' => {}
            '\n' => self.newline(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.identifier(),
            c => self.error(ScanErrorKind::IllegalCharacter(c)),
        }
    }

    /// Body of a string literal; the opening quote is already consumed.
    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
            if c == '\n' {
                self.newline();
            }
        }

        if self.is_at_end() {
            self.error(ScanErrorKind::UnterminatedString);
            return;
        }

        self.advance(); // closing quote

        // Both quotes are single bytes.
        let source = self.source;
        let value = &source[self.start + 1..self.current - 1];
        self.add_literal(TokenKind::String, Literal::Text(value.to_string()));
    }

    /// Digits with an optional fraction. A `.` is only taken when a
    /// digit follows it, so `1.` and `.1` do not form a single number.
    fn number(&mut self) {
        self.skip_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // decimal point
            self.skip_digits();
        }

        let source = self.source;
        let lexeme = &source[self.start..self.current];
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, Literal::Number(value)),
            Err(e) => self.error(ScanErrorKind::MalformedNumber {
                lexeme: lexeme.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Longest run of identifier chars, then a keyword lookup.
    fn identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let source = self.source;
        let text = &source[self.start..self.current];
        match keyword(text) {
            Some(kind) => self.add_token(kind),
            None => self.add_literal(TokenKind::Identifier, Literal::Text(text.to_string())),
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    /// Consume the next char only if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    const fn newline(&mut self) {
        self.line += 1;
        self.column = 0;
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.matches(expected) {
            matched
        } else {
            single
        };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push_token(kind, Some(literal));
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            line: self.line,
            span: Span {
                start: self.start,
                end: self.current,
                line: self.start_line,
                column: self.start_column,
            },
        });
    }

    fn error(&mut self, kind: ScanErrorKind) {
        // The cursor is already one past the offending char.
        let column = self.column.saturating_sub(1);
        self.reporter.report(ScanError {
            kind,
            line: self.line,
            column,
        });
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

//! Scanner for the Lox scripting language.
//!
//! Turns source text into a flat sequence of classified tokens ready
//! for a parser. Scanning never fails: lexical errors are reported to a
//! [`Reporter`] as they are found and the scan carries on.
//!
//! # Quick start
//!
//! ```
//! use loxscan::{TokenKind, scan};
//!
//! let result = scan("var answer = 42;");
//! let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert_eq!(result.tokens[3].number(), Some(42.0));
//! assert!(result.is_clean());
//! ```
//!
//! ## Custom diagnostic sink
//!
//! ```
//! use loxscan::{ScanError, Scanner};
//!
//! let mut errors: Vec<ScanError> = Vec::new();
//! let tokens = Scanner::with_reporter("1 # 2", &mut errors).scan_tokens();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(errors[0].to_string(), "SyntaxError (1:2): Illegal character: `#'");
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod diagnostic;
pub mod scanner;
pub mod token;

pub use diagnostic::{Reporter, ScanError, ScanErrorKind, Stderr};
pub use scanner::{Scan, Scanner, scan, scan_tokens};
pub use token::{KEYWORDS, Literal, Span, Token, TokenKind, keyword};

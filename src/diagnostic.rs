use std::fmt;
use std::io::Write;

/// Classifies a scanner diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Character that cannot start any token.
    IllegalCharacter(char),
    /// Opening quote with no closing quote before end of input.
    UnterminatedString,
    /// Digit run the float parser rejected.
    MalformedNumber { lexeme: String, reason: String },
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter(ch) => {
                write!(f, "Illegal character: `{ch}'")
            }
            Self::UnterminatedString => {
                write!(f, "Unterminated string")
            }
            Self::MalformedNumber { lexeme, reason } => {
                write!(f, "{reason}: `{lexeme}'")
            }
        }
    }
}

/// A recoverable lexical error.
///
/// `column` is reported one behind the scanner's cursor, i.e. the
/// position just before the character that triggered the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("SyntaxError ({line}:{column}): {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    pub column: usize,
}

/// Receives diagnostics as the scanner produces them.
pub trait Reporter {
    fn report(&mut self, error: ScanError);
}

/// Writes each diagnostic as one line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Reporter for Stderr {
    fn report(&mut self, error: ScanError) {
        // A closed stderr leaves nowhere to report to.
        let _ = writeln!(std::io::stderr().lock(), "{error}");
    }
}

impl Reporter for Vec<ScanError> {
    fn report(&mut self, error: ScanError) {
        self.push(error);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: ScanError) {
        (**self).report(error);
    }
}

//! Basic Core - Lexical front end (pure logic, no IO)
//!
//! Converts source text into classified tokens with precise source positions.
//! Only operates on in-memory data, no file IO or terminal output.

pub mod lexer;

// Re-export common types
pub use lexer::{
    Diagnostic, DiagnosticKind, ErrorReport, Location, Number, Position, Scanner, SourceSpan,
    Token, TokenKind,
};
pub use num_bigint::BigInt;

/// Scan `text` and return either all tokens or the first diagnostic
pub fn tokenize(filename: &str, text: &str) -> Result<Vec<Token>, Diagnostic> {
    Scanner::new(filename, text).make_tokens()
}

/// Scan `text`, returning `(tokens, diagnostic)`
///
/// Exactly one side carries the result: full tokens with no diagnostic,
/// or empty tokens with the diagnostic that stopped the scan.
pub fn run(filename: &str, text: &str) -> (Vec<Token>, Option<Diagnostic>) {
    match tokenize(filename, text) {
        Ok(tokens) => (tokens, None),
        Err(diagnostic) => (Vec::new(), Some(diagnostic)),
    }
}

//! Basic Lexer
//!
//! 源代码 → token 序列：
//! - 单遍扫描，O(n)
//! - 精准位置追踪（offset/line/column + 文件名）
//! - 遇到第一个错误即停止

pub mod error;
pub mod position;
pub mod scanner;
pub mod token;

pub use error::{Diagnostic, DiagnosticKind, ErrorReport};
pub use position::{Location, Position, SourceSpan};
pub use scanner::Scanner;
pub use token::{Number, Token, TokenKind};

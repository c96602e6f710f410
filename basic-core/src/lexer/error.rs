//! Lexer 诊断类型
//!
//! 一次扫描最多产生一个诊断：遇到第一个错误即停止。

use super::position::{Position, SourceSpan};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 诊断类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// 无法识别的字符
    IllegalCharacter,
}

impl DiagnosticKind {
    /// 面向用户的错误名
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::IllegalCharacter => "Illegal characters",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 词法诊断
///
/// `Display` 输出与 [`Diagnostic::as_string`] 相同：
/// `Illegal characters: '&'File<stdin>, line1`（File 与文件名之间没有分隔符）。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {}File{}, line{}", .kind, .message, .start.filename(), .start.line + 1)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub start: Position,
    pub end: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, start: Position, end: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            message: message.into(),
        }
    }

    /// 非法字符，span 恰好覆盖该字符
    pub fn illegal_char(start: Position, end: Position, c: char) -> Self {
        Self::new(DiagnosticKind::IllegalCharacter, start, end, format!("'{}'", c))
    }

    /// 单行文本形式
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    pub fn filename(&self) -> &str {
        self.start.filename()
    }

    pub fn span(&self) -> SourceSpan {
        SourceSpan::range(self.start.location(), self.end.location())
    }

    /// 源码上下文：出错行加上 `^` 标记
    ///
    /// ```text
    /// 1 | 5 & 2
    ///   |   ^
    /// ```
    pub fn render_context(&self) -> String {
        let line_no = (self.start.line + 1).to_string();
        let width = line_no.len();
        let text = self.start.line_text();

        // 跨行的 span（例如非法的换行符）只标到行尾
        let covered = if self.end.line == self.start.line {
            self.end.column.saturating_sub(self.start.column)
        } else {
            text.chars().count().saturating_sub(self.start.column)
        };

        format!(
            "{line_no} | {text}\n{gutter} | {pad}{marker}",
            gutter = " ".repeat(width),
            pad = " ".repeat(self.start.column),
            marker = "^".repeat(covered.max(1)),
        )
    }

    /// 转换为结构化错误报告
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: "lexer",
            kind: self.kind,
            message: self.message.clone(),
            file: self.filename().to_string(),
            line: self.start.line + 1,
            column: self.start.column + 1,
            rendered: self.as_string(),
        }
    }
}

/// 结构化错误报告
///
/// 行列号为 1-based，供 JSON 输出等工具集成场景使用。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub phase: &'static str,
    pub kind: DiagnosticKind,
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub rendered: String,
}

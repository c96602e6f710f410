//! 源代码位置追踪
//!
//! - offset/line/column: 0-based，按字符（Unicode 码点）计数
//! - filename/source: 共享只读引用，用于错误信息和源码上下文显示
//!
//! 诊断输出时行号转换为 1-based。

use serde::Serialize;
use std::sync::Arc;

/// 源代码坐标（不含源文件引用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    /// 字符偏移，0-based
    pub offset: usize,
    /// 行号，0-based
    pub line: usize,
    /// 列号，0-based
    pub column: usize,
}

/// 源代码区间（end 为开区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourceSpan {
    pub start: Location,
    pub end: Location,
}

impl SourceSpan {
    pub fn range(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// 区间覆盖的字符数
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 扫描游标
///
/// clone 得到的副本与原游标互不影响：坐标是值，源文件引用只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    filename: Arc<str>,
    source: Arc<str>,
}

impl Position {
    /// 文件起始位置
    pub fn start(filename: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        Self {
            offset: 0,
            line: 0,
            column: 0,
            filename: filename.into(),
            source: source.into(),
        }
    }

    /// 消费一个字符后前进
    ///
    /// 越过文本末尾由调用方负责检测。
    pub fn advance(&mut self, consumed: char) -> &mut Self {
        self.offset += 1;
        self.column += 1;

        if consumed == '\n' {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn location(&self) -> Location {
        Location {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// 当前位置所在行的完整文本（不含换行符）
    pub fn line_text(&self) -> &str {
        self.source
            .split('\n')
            .nth(self.line)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or("")
    }
}

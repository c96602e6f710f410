//! Basic 语言 Scanner 实现
//!
//! 单遍扫描，逐字符推进游标：
//! - 空格、制表符：跳过
//! - 数字：整数或浮点数（最多一个小数点）
//! - `+ - * / ( ) ^`：单字符 token
//! - 其他字符：立即终止，返回诊断
//!
//! 遇到第一个错误即停止，不做错误恢复。

use super::error::Diagnostic;
use super::position::{Position, SourceSpan};
use super::token::{Number, Token, TokenKind};

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, trace};

/// Basic 扫描器
///
/// 每个源文件构造一个新的 Scanner；`make_tokens` 消费扫描器本身。
pub struct Scanner {
    chars: Vec<char>,
    cursor: Position,
    current_char: Option<char>,
}

impl Scanner {
    /// 创建扫描器并载入第一个字符
    pub fn new(filename: &str, text: &str) -> Self {
        trace!(target: "basic::lexer", filename, len = text.len(), "Creating new Scanner");

        let mut scanner = Self {
            chars: text.chars().collect(),
            cursor: Position::start(filename, text),
            current_char: None,
        };
        scanner.load_current();
        scanner
    }

    /// 当前游标位置
    pub fn position(&self) -> &Position {
        &self.cursor
    }

    pub fn current_char(&self) -> Option<char> {
        self.current_char
    }

    fn load_current(&mut self) {
        self.current_char = self.chars.get(self.cursor.offset).copied();
    }

    /// 消费当前字符
    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            self.cursor.advance(c);
        }
        self.load_current();
    }

    /// 扫描全部输入
    pub fn make_tokens(mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();

        while let Some(c) = self.current_char {
            match c {
                ' ' | '\t' => self.advance(),
                '0'..='9' => {
                    let token = self.scan_number();
                    tokens.push(token);
                }
                c => match TokenKind::from_symbol(c) {
                    Some(kind) => {
                        let token = self.make_single_char(kind);
                        tokens.push(token);
                    }
                    None => return Err(self.illegal_char(c)),
                },
            }
        }

        debug!(
            target: "basic::lexer",
            filename = self.cursor.filename(),
            count = tokens.len(),
            "Scan completed"
        );
        Ok(tokens)
    }

    /// 创建单字符 token
    fn make_single_char(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.location();
        self.advance();
        let token = Token::new(kind, SourceSpan::range(start, self.cursor.location()));
        self.trace_token(&token);
        token
    }

    /// 扫描数字（整数或浮点数）
    ///
    /// 第二个小数点不消费，留给主循环，随后作为非法字符报错。
    /// 数字本身从不失败：整数不限位数，浮点数最多一个小数点。
    fn scan_number(&mut self) -> Token {
        let start = self.cursor.location();
        let mut num_str = String::new();
        let mut dot_count = 0;

        while let Some(c) = self.current_char {
            match c {
                '.' if dot_count == 1 => break,
                '.' => {
                    dot_count += 1;
                    num_str.push('.');
                }
                '0'..='9' => num_str.push(c),
                _ => break,
            }
            self.advance();
        }

        let span = SourceSpan::range(start, self.cursor.location());
        let value = if dot_count == 0 {
            Number::Int(parse_digits(&num_str))
        } else {
            Number::Float(parse_decimal(&num_str))
        };

        let token = Token::number(value, span);
        self.trace_token(&token);
        token
    }

    /// 非法字符：span 覆盖恰好一个字符
    fn illegal_char(&mut self, c: char) -> Diagnostic {
        let start = self.cursor.clone();
        self.advance();

        debug!(
            target: "basic::lexer",
            character = ?c,
            line = start.line,
            column = start.column,
            "Illegal character"
        );
        Diagnostic::illegal_char(start, self.cursor.clone(), c)
    }

    fn trace_token(&self, token: &Token) {
        trace!(
            target: "basic::lexer",
            kind = %token.kind,
            line = token.span.start.line,
            column = token.span.start.column,
            "Produced token"
        );
    }
}

/// 纯数字串转为任意精度整数
fn parse_digits(digits: &str) -> BigInt {
    digits
        .bytes()
        .fold(BigInt::zero(), |acc, d| acc * 10u32 + u32::from(d - b'0'))
}

/// `[0-9]+\.[0-9]*` 形式的数字串转为 f64
///
/// 这类字符串 `f64::from_str` 总能接受（"3." 得到 3.0），
/// 过大的值得到 `inf` 而不是错误。
fn parse_decimal(text: &str) -> f64 {
    text.parse().unwrap_or_default()
}

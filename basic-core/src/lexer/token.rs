//! Token 定义

use super::position::SourceSpan;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};
use std::fmt;

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[serde(rename = "INT")]
    Integer,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "PLUS")]
    Plus,
    #[serde(rename = "MINUS")]
    Minus,
    #[serde(rename = "MUL")]
    Multiply,
    #[serde(rename = "DIV")]
    Divide,
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    #[serde(rename = "POWER")]
    Power,
}

impl TokenKind {
    /// 单字符运算符/分组符号查表
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '^' => Some(TokenKind::Power),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Integer => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MUL",
            TokenKind::Divide => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Power => "POWER",
        }
    }

    /// 是否为数字字面量
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 数字字面量的值
///
/// 整数不限位数，任意长的数字串都有对应的值。
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // 超出 i64 的整数输出为十进制字符串，避免 JSON 数字丢精度
            Number::Int(n) => match n.to_i64() {
                Some(small) => serializer.serialize_i64(small),
                None => serializer.collect_str(n),
            },
            Number::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            // Debug 保留小数点：3.0 而不是 3
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Token 结构
///
/// `value` 仅在 INT/FLOAT 时存在。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    pub span: SourceSpan,
}

impl Token {
    /// 创建无值 token（运算符、括号）
    pub fn new(kind: TokenKind, span: SourceSpan) -> Self {
        Self {
            kind,
            value: None,
            span,
        }
    }

    /// 创建数字 token，类型由值决定
    pub fn number(value: Number, span: SourceSpan) -> Self {
        let kind = match &value {
            Number::Int(_) => TokenKind::Integer,
            Number::Float(_) => TokenKind::Float,
        };
        Self {
            kind,
            value: Some(value),
            span,
        }
    }

    /// 整数值；超出 i64 时为 `None`，完整值见 [`Token::as_bigint`]
    pub fn as_int(&self) -> Option<i64> {
        self.as_bigint().and_then(ToPrimitive::to_i64)
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match &self.value {
            Some(Number::Int(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match &self.value {
            Some(Number::Float(x)) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

//! 测试辅助工具

#![allow(dead_code)]

use basic_core::{run, Diagnostic, Token};

/// 扫描成功时返回 token 的显示形式，失败时 panic
pub fn render(source: &str) -> Vec<String> {
    let (tokens, error) = run("<test>", source);
    if let Some(e) = error {
        panic!("Lex error on {:?}: {}", source, e);
    }
    tokens.iter().map(Token::to_string).collect()
}

/// 扫描失败时返回诊断，成功时 panic
pub fn diagnose(source: &str) -> Diagnostic {
    let (tokens, error) = run("<test>", source);
    assert!(tokens.is_empty(), "tokens must be empty on failure");
    error.unwrap_or_else(|| panic!("expected a diagnostic for {:?}", source))
}

/// 允许出现的字符集（不含小数点）
pub fn is_accepted(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '^' | ' ' | '\t')
}

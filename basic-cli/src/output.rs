//! CLI 格式化输出
//!
//! 扫描结果写到 stdout；文本格式的诊断写到 stderr，JSON 格式统一写到 stdout。
//!
//! 文本格式：`[INT:3, PLUS, INT:0]`。数字 token 总是带值，值为 0 时也写成
//! `INT:0`，不会退化成裸的 `INT`。JSON 中超出 i64 的整数值写成十进制字符串。

use basic_config::{BasicConfig, DiagnosticStyle, OutputFormat};
use basic_core::{Diagnostic, ErrorReport, Token};
use serde::Serialize;
use std::io::Write;

use crate::error::CliError;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutput<'a> {
    Tokens { tokens: &'a [Token] },
    Error { error: ErrorReport },
}

/// 输出目标
pub struct Printer<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    style: DiagnosticStyle,
}

impl<O: Write, E: Write> Printer<O, E> {
    pub fn new(out: O, err: E, config: &BasicConfig) -> Self {
        Self {
            out,
            err,
            format: config.output,
            style: config.diagnostics,
        }
    }

    /// 打印 token 序列：`[INT:3, PLUS, INT:4]`
    pub fn tokens(&mut self, tokens: &[Token]) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => {
                let items: Vec<String> = tokens.iter().map(Token::to_string).collect();
                writeln!(self.out, "[{}]", items.join(", "))?;
            }
            OutputFormat::Json => self.json(&JsonOutput::Tokens { tokens })?,
        }
        Ok(())
    }

    /// 打印诊断
    pub fn diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.err, "{}", diagnostic.as_string())?;
                if self.style == DiagnosticStyle::Context {
                    writeln!(self.err, "{}", diagnostic.render_context())?;
                }
            }
            OutputFormat::Json => self.json(&JsonOutput::Error {
                error: diagnostic.to_report(),
            })?,
        }
        Ok(())
    }

    /// REPL 提示符
    pub fn prompt(&mut self, prompt: &str) -> Result<(), CliError> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn newline(&mut self) -> Result<(), CliError> {
        writeln!(self.out)?;
        Ok(())
    }

    fn json(&mut self, output: &JsonOutput<'_>) -> Result<(), CliError> {
        serde_json::to_writer(&mut self.out, output)?;
        writeln!(self.out)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printer(config: &BasicConfig) -> Printer<Vec<u8>, Vec<u8>> {
        Printer::new(Vec::new(), Vec::new(), config)
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_tokens() {
        let tokens = basic_core::tokenize("<stdin>", "3 + 4.5").unwrap();
        let mut p = printer(&BasicConfig::default());
        p.tokens(&tokens).unwrap();

        let (out, err) = p.into_inner();
        assert_eq!(text(out), "[INT:3, PLUS, FLOAT:4.5]\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_text_empty_tokens() {
        let mut p = printer(&BasicConfig::default());
        p.tokens(&[]).unwrap();
        assert_eq!(text(p.into_inner().0), "[]\n");
    }

    #[test]
    fn test_text_diagnostic_compact() {
        let diagnostic = basic_core::tokenize("<stdin>", "5 & 2").unwrap_err();
        let mut p = printer(&BasicConfig::default());
        p.diagnostic(&diagnostic).unwrap();

        let (out, err) = p.into_inner();
        assert!(out.is_empty());
        assert_eq!(text(err), "Illegal characters: '&'File<stdin>, line1\n");
    }

    #[test]
    fn test_text_diagnostic_context() {
        let diagnostic = basic_core::tokenize("<stdin>", "5 & 2").unwrap_err();
        let config = BasicConfig {
            diagnostics: DiagnosticStyle::Context,
            ..BasicConfig::default()
        };
        let mut p = printer(&config);
        p.diagnostic(&diagnostic).unwrap();

        assert_eq!(
            text(p.into_inner().1),
            "Illegal characters: '&'File<stdin>, line1\n1 | 5 & 2\n  |   ^\n"
        );
    }

    #[test]
    fn test_json_output() {
        let config = BasicConfig {
            output: OutputFormat::Json,
            ..BasicConfig::default()
        };

        let tokens = basic_core::tokenize("<stdin>", "1 ^ 2").unwrap();
        let mut p = printer(&config);
        p.tokens(&tokens).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&p.into_inner().0).unwrap();
        assert_eq!(value["tokens"][1]["kind"], "POWER");

        let diagnostic = basic_core::tokenize("<stdin>", "1 ? 2").unwrap_err();
        let mut p = printer(&config);
        p.diagnostic(&diagnostic).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&p.into_inner().0).unwrap();
        assert_eq!(value["error"]["kind"], "IllegalCharacter");
        assert_eq!(value["error"]["column"], 3);
        assert_eq!(value["error"]["message"], "'?'");
    }
}

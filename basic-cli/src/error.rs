//! CLI 错误类型

use basic_core::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// 源文件或配置文件读取失败
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件格式错误
    #[error("Invalid config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 词法错误
    #[error("{0}")]
    Lex(#[from] Diagnostic),

    /// JSON 输出序列化失败
    #[error("Cannot write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// 标准输入输出错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

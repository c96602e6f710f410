//! CLI 配置
//!
//! 配置文件（JSON，可选）与命令行参数合并，命令行优先。

use basic_config::{BasicConfig, DiagnosticStyle, LogLevel, OutputFormat};
use std::path::Path;

use crate::error::CliError;

/// 命令行覆盖项
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<LogLevel>,
    pub output: Option<OutputFormat>,
    pub context: bool,
}

/// 读取配置文件，不指定时使用默认配置
pub fn load(path: Option<&Path>) -> Result<BasicConfig, CliError> {
    let Some(path) = path else {
        return Ok(BasicConfig::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    BasicConfig::from_json_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// 应用命令行覆盖项
pub fn apply(mut config: BasicConfig, overrides: &Overrides) -> BasicConfig {
    if let Some(level) = overrides.log_level {
        config.logging.global = level;
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if overrides.context {
        config.diagnostics = DiagnosticStyle::Context;
    }
    config
}

/// clap value parser: 日志级别
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}

/// clap value parser: 输出格式
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("unknown output format '{s}' (expected text or json)")),
    }
}

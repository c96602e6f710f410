//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 只用于扫描结果。

use basic_config::{LogLevel, LoggingConfig, Phase};
use std::io;
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 构建按阶段过滤的 target 表
pub fn targets(config: &LoggingConfig) -> Targets {
    Targets::new()
        .with_default(to_level(config.global))
        .with_target(Phase::Lexer.target(), to_level(config.level_for(Phase::Lexer)))
        .with_target(Phase::Cli.target(), to_level(config.level_for(Phase::Cli)))
}

/// 使用指定格式初始化日志系统
///
/// 全局 subscriber 已存在时保持原样。
pub fn init(config: &LoggingConfig, format: LogFormat) {
    let layer = create_format_layer(format, io::stderr).with_filter(targets(config));

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        tracing::debug!(target: "basic::cli", "Global subscriber already installed");
    }
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> impl Layer<tracing_subscriber::Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

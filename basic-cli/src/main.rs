//! Basic CLI - Command line interface
//!
//! ```text
//! basic                 交互式 REPL
//! basic FILE            扫描文件
//! basic -e "1 + 2"      扫描表达式
//! ```

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use basic_config::{BasicConfig, LogLevel, OutputFormat};
use tracing::{debug, info};

mod config;
mod error;
mod logging;
mod output;
mod repl;

use crate::error::CliError;
use crate::logging::LogFormat;
use crate::output::Printer;

const EXPR_NAME: &str = "<expr>";

#[derive(Parser)]
#[command(
    name = "basic",
    about = "Basic programming language - lexical scanner",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to scan (starts the REPL when omitted)
    #[arg(value_name = "FILE", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Scan an expression given on the command line
    #[arg(short = 'e', long = "eval", value_name = "CODE")]
    expr: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", value_parser = config::parse_output_format)]
    format: Option<OutputFormat>,

    /// Show the offending source line under each diagnostic
    #[arg(long)]
    context: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = config::parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let overrides = config::Overrides {
        log_level: cli.log_level,
        output: cli.format,
        context: cli.context,
    };
    let config = match config::load(cli.config.as_deref()) {
        Ok(file_config) => config::apply(file_config, &overrides),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    logging::init(&config.logging, cli.log_format);
    debug!(target: "basic::cli", ?config, "Configuration resolved");

    let mut printer = Printer::new(io::stdout(), io::stderr(), &config);
    match execute(&cli, &config, &mut printer) {
        Ok(()) => {}
        Err(CliError::Lex(diagnostic)) => {
            if let Err(e) = printer.diagnostic(&diagnostic) {
                eprintln!("Error: {e}");
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn execute<O: io::Write, E: io::Write>(
    cli: &Cli,
    config: &BasicConfig,
    printer: &mut Printer<O, E>,
) -> Result<(), CliError> {
    if let Some(expr) = &cli.expr {
        return scan(EXPR_NAME, expr, printer);
    }

    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        // 换行符不是空白：只去掉文件末尾的行结束符
        let text = text.trim_end_matches(['\n', '\r']);
        return scan(&path.display().to_string(), text, printer);
    }

    info!(target: "basic::cli", format = ?config.output, "Starting REPL");
    repl::run(io::stdin().lock(), printer)
}

fn scan<O: io::Write, E: io::Write>(
    filename: &str,
    text: &str,
    printer: &mut Printer<O, E>,
) -> Result<(), CliError> {
    info!(target: "basic::cli", filename, "Scanning");
    let tokens = basic_core::tokenize(filename, text)?;
    printer.tokens(&tokens)
}

//! 交互式 REPL
//!
//! 每行独立扫描，文件名为 `<stdin>`；错误不会结束会话，EOF 退出。

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::CliError;
use crate::output::Printer;

pub const PROMPT: &str = "basic > ";
pub const STDIN_NAME: &str = "<stdin>";

pub fn run<R, O, E>(mut input: R, printer: &mut Printer<O, E>) -> Result<(), CliError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut line = String::new();

    loop {
        printer.prompt(PROMPT)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            printer.newline()?;
            debug!(target: "basic::cli", "REPL reached end of input");
            return Ok(());
        }

        let text = line.trim_end_matches(['\n', '\r']);
        match basic_core::tokenize(STDIN_NAME, text) {
            Ok(tokens) => printer.tokens(&tokens)?,
            Err(diagnostic) => printer.diagnostic(&diagnostic)?,
        }
    }
}

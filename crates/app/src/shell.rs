//! Line-oriented front end.
//!
//! Every line is parsed with the same grammar as the command line. A failing
//! command prints its error and the shell keeps going; the per-user totals
//! live as long as the shell does.

use std::io::Write;

use clap::Parser;
use engine::{Engine, SessionTotals};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{cli::ShellLine, commands, error::Result};

const PROMPT: &str = "> ";

/// Run until `exit`, `quit` or end of input, returning the session totals.
pub async fn run<R, W>(engine: &Engine, input: R, out: &mut W) -> Result<SessionTotals>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut totals = SessionTotals::new();
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        let words = match split_words(line) {
            Ok(words) => words,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };
        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        if let Err(err) = commands::execute(engine, &mut totals, command, out).await {
            tracing::debug!(%err, "shell command failed");
            writeln!(out, "error: {err}")?;
        }
    }

    Ok(totals)
}

/// Split on whitespace, keeping single- or double-quoted text together.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

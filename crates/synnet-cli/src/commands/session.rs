//! Command sessions: interactive prompt, script files and one-shot lines

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::AppContext;

#[derive(Args)]
pub struct RunArgs {
    /// Script with one command per line (blank lines and `#` comments skipped)
    pub script: PathBuf,
}

#[derive(Args)]
pub struct ExecArgs {
    /// Command lines, executed in order
    #[arg(required = true)]
    pub lines: Vec<String>,
}

/// Read commands from stdin until EOF
///
/// A failing command is reported and the session goes on.
pub fn run_repl(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();
    let mut buf = Vec::new();

    loop {
        if interactive {
            write!(out, "{}", ctx.prompt)?;
            out.flush()?;
        }

        buf.clear();
        if stdin.lock().read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("EOF on stdin, ending session");
            break;
        }

        // Undecodable bytes become U+FFFD and fail the command grammar
        let line = String::from_utf8_lossy(&buf);
        let command = line.trim();
        if is_skipped(command) {
            continue;
        }

        match ctx.execute(command) {
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("error: {}", e);
            }
        }
    }

    Ok(())
}

/// Execute every command line of a script, stopping at the first failure
pub fn run_script(args: &RunArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    run_lines(ctx, content.lines())
}

/// Execute command lines given on the command line
pub fn run_exec(args: &ExecArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    run_lines(ctx, args.lines.iter().map(String::as_str))
}

fn run_lines<'a>(ctx: &mut AppContext, lines: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();

    for (index, line) in lines.enumerate() {
        let command = line.trim();
        if is_skipped(command) {
            continue;
        }

        let rendered = ctx
            .execute(command)
            .with_context(|| format!("line {}: {}", index + 1, command))?;
        writeln!(out, "{}", rendered)?;
    }

    Ok(())
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_skipped() {
        assert!(is_skipped(""));
        assert!(is_skipped("# preload the sample data"));
        assert!(!is_skipped("lca 1 4"));
    }
}

use anyhow::Result;
use clap::Parser;
use stackcalc::calculator::{
    ParenMode, TokenPolicy, copy_to_clipboard, evaluate_expression, rewrite_with,
};
use stackcalc::config::Settings;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate space-separated infix expressions such as `3 + 4 X 2`.
///
/// Reads one expression per line from stdin when none is given.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Expression to evaluate; multiple arguments are joined with spaces.
    expression: Vec<String>,

    /// Path to a config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat parentheses as grouping.
    #[arg(long)]
    grouping: bool,

    /// Reject unrecognized tokens instead of skipping them.
    #[arg(long)]
    strict: bool,

    /// Decimal places shown for results.
    #[arg(long)]
    decimals: Option<u16>,

    /// Copy each successful result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Print the expression after function rewriting instead of evaluating it.
    #[arg(long)]
    rewrite_only: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every expression succeeded.
fn run(cli: Cli) -> Result<bool> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.grouping {
        settings.parentheses = ParenMode::Grouping;
    }
    if cli.strict {
        settings.unknown_tokens = TokenPolicy::Reject;
    }
    if let Some(decimals) = cli.decimals {
        settings.decimals = decimals;
    }
    settings.copy_result |= cli.copy;

    let stdout = std::io::stdout();
    if !cli.expression.is_empty() {
        let line = cli.expression.join(" ");
        return Ok(handle(&line, &settings, cli.rewrite_only, &mut stdout.lock())?);
    }

    repl(std::io::stdin().lock(), &mut stdout.lock(), &settings, cli.rewrite_only)
}

/// Evaluate one expression per line until the input ends.
///
/// Lines that are not valid UTF-8 are reported and skipped.
fn repl(
    input: impl BufRead,
    out: &mut impl Write,
    settings: &Settings,
    rewrite_only: bool,
) -> Result<bool> {
    let mut all_ok = true;
    for (number, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                tracing::warn!(line = number + 1, error = %err, "skipping undecodable line");
                writeln!(out, "{}", settings.error_marker)?;
                all_ok = false;
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= handle(&line, settings, rewrite_only, out)?;
        out.flush()?;
    }
    Ok(all_ok)
}

fn handle(
    line: &str,
    settings: &Settings,
    rewrite_only: bool,
    out: &mut impl Write,
) -> io::Result<bool> {
    if rewrite_only {
        return match rewrite_with(line, settings.eval_options()) {
            Ok(rewritten) => {
                writeln!(out, "{rewritten}")?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(expression = line, error = %err, "rewrite failed");
                writeln!(out, "{}", settings.error_marker)?;
                Ok(false)
            }
        };
    }

    let result = evaluate_expression(line, settings.eval_options(), settings.decimals);
    match result.value() {
        Some(value) => {
            tracing::debug!(expression = %result.expression, value, "evaluated");
            writeln!(out, "{}", result.display())?;
        }
        None => {
            tracing::info!(expression = %result.expression, reason = result.display(), "no result");
            writeln!(out, "{}", settings.error_marker)?;
        }
    }

    if settings.copy_result
        && let Err(err) = copy_to_clipboard(&result)
    {
        tracing::warn!(error = %err, "could not copy result");
    }

    Ok(result.is_success())
}

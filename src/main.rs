use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::copy_to_clipboard;
use zcalc::{Config, DisplaySnapshot, repl};

#[derive(Parser)]
#[command(name = "zcalc", version, about = "A keyboard-driven calculator")]
struct Cli {
    /// Path to an alternative config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the calculation history after the result
    #[arg(long)]
    history: bool,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Key tokens to apply, e.g. `3 + 4 x 2 =`. Reads from stdin when empty.
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    display: DisplaySnapshot,
    operand: &'a str,
    history: Vec<&'a str>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zcalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let mut engine = config.build_engine();
    let mut stdout = io::stdout().lock();

    if cli.tokens.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            info!("Starting interactive session");
        }
        repl::run_interactive(&mut engine, stdin.lock(), &mut stdout)?;
    } else {
        repl::apply_tokens(&mut engine, cli.tokens.iter().map(String::as_str), &mut stdout)?;

        if cli.json {
            let output = JsonOutput {
                display: engine.display(),
                operand: engine.current_operand(),
                history: engine.history().iter().collect(),
            };
            let json = serde_json::to_string_pretty(&output).context("Failed to serialize state")?;
            writeln!(stdout, "{}", json)?;
        } else {
            repl::write_display(&engine.display(), &mut stdout)?;
            if cli.history {
                repl::write_history(engine.history(), &mut stdout)?;
            }
        }
    }

    if cli.copy {
        copy_to_clipboard(engine.current_operand())?;
    }

    Ok(())
}

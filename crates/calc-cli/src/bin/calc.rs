//! Calculator CLI

use std::io;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use calc_cli::{logging, run_once, signal, CliError, Repl, ReplOptions};

#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(about = "Simple calculator for basic arithmetic")]
#[command(version)]
struct Args {
    /// Expression to evaluate in the form 'A op B' (e.g., '2 + 2').
    /// Starts interactive mode when omitted or empty.
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    expression: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match args.expression.filter(|e| !e.is_empty()) {
        Some(expression) => single_shot(&expression),
        None => {
            if let Err(e) = interactive() {
                eprintln!("calc: {:#}", e);
                process::exit(1);
            }
        }
    }
}

fn single_shot(expression: &str) {
    match run_once(expression, io::stdout()) {
        Ok(()) => {}
        // Reported like a bad argument: message, usage line, exit status 2
        Err(CliError::Eval(e)) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
        Err(e) => {
            eprintln!("calc: {}", e);
            process::exit(1);
        }
    }
}

fn interactive() -> anyhow::Result<()> {
    tracing::debug!("starting interactive mode");
    signal::exit_on_interrupt()?;

    // Stdout stays unlocked so the interrupt handler can write to it.
    let repl = Repl::new(ReplOptions::default());
    let exit = repl
        .run(io::stdin().lock(), io::stdout())
        .context("Failed to read expression from terminal.")?;

    tracing::debug!(?exit, "interactive session ended");
    Ok(())
}

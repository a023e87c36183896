//! Host-side driver for the explorer's root shell.
//!
//! Examples:
//!   nirx-shell replay --input scenario.jsonl
//!   echo '{"type":"all-done"}' | nirx-shell replay --json
//!   nirx-shell layout --view explore
//!   nirx-shell config --config runs.yaml
//!
//! `--config` falls back to `$NIRX_CONFIG`, then to built-in defaults.

use clap::{Parser, Subcommand};
use neural_ir_explorer::error::Result;
use neural_ir_explorer::prelude::*;
use neural_ir_explorer::shell::parse_signal_lines;
use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "nirx-shell")]
#[command(about = "Replay shell signals and inspect the resulting page layout")]
struct Cli {
    /// Config file (JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply JSON-lines signals in order and print the outcome
    Replay {
        /// Signal file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print transitions and the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the render tree for a view state
    Layout {
        #[arg(long, default_value = "splash")]
        view: String,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neural_ir_explorer=info,nirx_shell=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ShellConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Replay { input, json } => replay(&config, input, json),
        Command::Layout { view } => {
            let view: MainView = view.parse()?;
            let mut state = ShellState::new();
            if view == MainView::Explore {
                state.apply_all_done();
            }
            print!("{}", RenderTree::build(&state, &config).render_text());
            Ok(())
        }
        Command::Config => {
            println!("{}", to_json(&config));
            Ok(())
        }
    }
}

fn replay(config: &ShellConfig, input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match &input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let signals = parse_signal_lines(&text)?;
    info!(count = signals.len(), "replaying signals");

    let mut shell = Shell::new();
    for signal in signals {
        for t in shell.dispatch(signal) {
            if json {
                println!("{}", to_json(&t));
            } else {
                println!("{t}");
            }
        }
    }

    let snapshot = ShellAdapter::new(&shell).snapshot();
    if json {
        println!("{}", to_json(&snapshot));
    } else {
        println!("--");
        println!("{}", snapshot.summary());
        println!("--");
        print!("{}", RenderTree::build(shell.state(), config).render_text());
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    // Only plain data types reach here; serialization cannot fail.
    serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

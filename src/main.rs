//! Headless replay driver (default binary).
//!
//! Reads one command name per line from a script file (or stdin), applies
//! each to a fresh session, and prints a JSON report of the final state.
//! Blank lines and lines starting with `#` are skipped. Unknown names are
//! counted and reported on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use blockfall::core::{GameSession, SessionConfig, SessionSnapshot};
use blockfall::types::Command;

#[derive(Parser, Debug, Clone)]
#[command(name = "blockfall-replay")]
#[command(about = "Replay a command script against the engine and print the final state")]
struct Args {
    /// Piece source seed (overrides BLOCKFALL_SEED)
    #[arg(long)]
    seed: Option<u32>,

    /// Command script; reads stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u32,
    applied: u32,
    rejected: u32,
    unknown: u32,
    snapshot: SessionSnapshot,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SessionConfig::from_env();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let script = read_script(args.script.as_ref())?;
    let report = replay(&script, config);

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("failed to encode report")?;
    println!("{out}");
    Ok(())
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read script from stdin")?;
            Ok(buf)
        }
    }
}

fn replay(script: &str, config: SessionConfig) -> Report {
    let mut session = GameSession::from_config(config);
    let mut applied = 0u32;
    let mut rejected = 0u32;
    let mut unknown = 0u32;

    for (lineno, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Command::parse(line) {
            Some(command) => {
                if session.apply(command) {
                    applied += 1;
                } else {
                    rejected += 1;
                }
            }
            None => {
                eprintln!("line {}: unknown command {:?}", lineno + 1, line);
                unknown += 1;
            }
        }
    }

    Report {
        seed: session.seed(),
        applied,
        rejected,
        unknown,
        snapshot: session.snapshot(),
    }
}

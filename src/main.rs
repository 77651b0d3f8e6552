//! Line-oriented host for the eatgo store.
//!
//! Reads one raw action per line from stdin, dispatches it, and writes the
//! resulting state to stdout as a single JSON line (or as the rendered page
//! with `--render`).
//!
//! # Usage
//!
//! ```text
//! eatgo [--config <PATH>] [--render]
//! ```
//!
//! ```text
//! $ echo '{"type": "setAccessToken", "payload": {"accessToken": "TOKEN"}}' | eatgo
//! {"regions":[],"categories":[],...,"accessToken":"TOKEN",...}
//! ```
//!
//! # Session Persistence
//!
//! When the access token changes the host saves or clears the session file,
//! so a later run starts logged in. Disable with `persist_session = false`.
//!
//! # Errors
//!
//! A line that fails to decode is logged and reported on stderr; the state is
//! left unchanged and processing continues with the next line.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eatgo::{sync_session, Config, Result, Store};

#[derive(Debug, Parser)]
#[command(
    name = "eatgo",
    version,
    about = "Dispatch restaurant review actions read from stdin",
    long_about = "Reads one {\"type\", \"payload\"} action per line from stdin and prints \
                  the resulting state after each line."
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the rendered page instead of the state JSON.
    #[arg(long)]
    render: bool,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        self.config
            .as_deref()
            .map_or_else(|| Ok(Config::default()), Config::load)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eatgo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config()?;

    eatgo::observability::init_tracing(&config);

    let mut store = eatgo::initialize(&config)?;
    let mut storage = eatgo::open_session_storage(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let token_before = store.state().access_token.clone();

        match store.dispatch_json(&line) {
            Ok(changed) => {
                tracing::debug!(changed, "line dispatched");
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected action");
                eprintln!("eatgo: {e}");
                continue;
            }
        }

        if let Some(storage) = storage.as_mut() {
            sync_session(storage, &token_before, store.state())?;
        }

        write_state(&mut stdout, &store, cli.render)?;
    }

    Ok(())
}

fn write_state(out: &mut impl Write, store: &Store, render: bool) -> Result<()> {
    if render {
        writeln!(out, "{}", eatgo::ui::render(store.state()))?;
    } else {
        writeln!(out, "{}", store.state().to_json()?)?;
    }
    out.flush()?;
    Ok(())
}

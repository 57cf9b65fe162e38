//! Hasami Shogi - terminal game
//!
//! Two players share one terminal and enter moves like `i1, b1`.
//! Set `RUST_LOG=debug` to see capture details on stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use hasami_shogi::GameSession;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.rules_config()?;
    info!(?config, "starting game");

    let mut session = GameSession::new(config)?;
    let stdin = std::io::stdin();
    cli::run(&mut session, stdin.lock(), std::io::stdout())?;

    Ok(())
}

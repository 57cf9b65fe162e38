//! Command-line interface and the interactive turn loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;

use hasami_shogi::{parse_move, GameResult, GameSession, Player, RulesConfig, RulesEngine, SessionError};

/// Hasami Shogi - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "hasami-shogi")]
#[command(about = "Play Hasami Shogi (Variant 1) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML rules config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// A player with fewer pieces than this loses (overrides the config file)
    #[arg(long)]
    pub min_pieces: Option<usize>,

    /// Side that moves first (overrides the config file)
    #[arg(long, value_enum)]
    pub first: Option<Side>,
}

/// Player colours as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Red,
    Black,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Player::First,
            Side::Black => Player::Second,
        }
    }
}

impl Cli {
    /// Build the rules config: file first, then command-line overrides.
    pub fn rules_config(&self) -> Result<RulesConfig> {
        let mut config = match &self.config {
            Some(path) => RulesConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => RulesConfig::default(),
        };
        if let Some(min_pieces) = self.min_pieces {
            config = config.with_min_pieces(min_pieces);
        }
        if let Some(side) = self.first {
            config = config.with_first_player(side.into());
        }
        config.validate()?;
        Ok(config)
    }
}

/// Run a game until someone wins or input runs out.
///
/// Returns the winner, if the game was finished.
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: R, mut out: W) -> Result<Option<Player>> {
    let glyphs = session.rules().config().glyphs;
    let mut lines = input.lines();

    writeln!(out, "Welcome to Hasami Shogi!")?;
    writeln!(out, "Please enter moves in form '[origin square], [destination square]'.\n")?;

    while session.result() == GameResult::InProgress {
        for player in Player::ALL {
            writeln!(
                out,
                "{} has captured {} opposing pieces.",
                player,
                session.captured_count(player.opponent())
            )?;
        }
        let active = session.active_player();
        writeln!(out, "It is {}'s turn.\n", active)?;
        write!(out, "{}", session.board().render(&glyphs))?;
        writeln!(out)?;

        if session.legal_moves().is_empty() {
            writeln!(out, "{} has no legal moves; the game cannot continue.", active)?;
            return Ok(None);
        }

        loop {
            write!(out, "{}, enter your move: ", active)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                return Ok(None);
            };
            let line = line.context("reading move")?;

            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(err) => {
                    writeln!(out, "Not a legal move, try again. ({})", err)?;
                    continue;
                }
            };

            match session.make_move(mv) {
                Ok(outcome) => {
                    if !outcome.captured.is_empty() {
                        let squares: Vec<String> = outcome.captured.iter().map(ToString::to_string).collect();
                        writeln!(out, "Captured: {}", squares.join(" "))?;
                    }
                    break;
                }
                Err(SessionError::IllegalMove(err)) => {
                    writeln!(out, "Not a legal move, try again. ({})", err)?;
                }
                Err(err @ SessionError::GameOver(_)) => {
                    warn!(%err, "move attempted after the game ended");
                    break;
                }
            }
        }
        writeln!(out)?;
    }

    write!(out, "{}", session.board().render(&glyphs))?;
    let winner = session.result().winner();
    if let Some(winner) = winner {
        writeln!(out, "{} wins!", winner)?;
    }
    Ok(winner)
}

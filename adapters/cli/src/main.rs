#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Ninja Puzzles game in the terminal.

mod action;
mod app;
mod config;
mod session_transfer;
mod terminal;

use std::{io, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use ninja_puzzles_core::GameKind;
use ninja_puzzles_rendering::{Presentation, RenderingBackend};
use ninja_puzzles_system_bootstrap::Bootstrap;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    app::App, config::Settings, session_transfer::SessionTransfer, terminal::TerminalBackend,
};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "ninja-puzzles", version, about = "Puzzle games for young ninjas")]
struct Cli {
    /// Game to play.
    #[arg(long, value_parser = parse_game)]
    game: Option<GameKind>,
    /// Seed driving the answer shuffles; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Session code printed by the `export` action.
    #[arg(long, conflicts_with_all = ["game", "seed"])]
    resume: Option<String>,
    /// Advance to the next level without the celebration pause.
    #[arg(long)]
    instant: bool,
    /// List the available games and exit.
    #[arg(long)]
    list: bool,
}

fn parse_game(label: &str) -> Result<GameKind, String> {
    GameKind::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = GameKind::ALL.iter().map(|game| game.label()).collect();
        format!("unknown game '{label}' (expected one of {})", known.join(", "))
    })
}

/// Entry point for the Ninja Puzzles command-line interface.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.list {
        for entry in Bootstrap.game_menu() {
            println!("{:<16} {:<16} {}", entry.game.label(), entry.title, entry.description);
        }
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let success_delay = if cli.instant {
        Some(Duration::ZERO)
    } else {
        settings.success_delay()
    };

    let mut app = match &cli.resume {
        Some(code) => {
            let transfer = SessionTransfer::decode(code)
                .context("invalid --resume code")?;
            App::resume(&transfer, success_delay)?
        }
        None => {
            let game = match cli.game {
                Some(game) => game,
                None => settings.default_game()?.unwrap_or(GameKind::CodeBreaker),
            };
            let seed = cli.seed.or(settings.seed).unwrap_or_else(rand::random);
            App::new(game, seed, success_delay)?
        }
    };

    let summary = app.deck_summary();
    info!(
        game = summary.game.label(),
        levels = summary.levels,
        tutorials = summary.tutorials,
        max_stars = summary.max_stars,
        "starting session"
    );

    let scene = app.scene();
    let presentation = Presentation::new(app.game().title(), scene);
    TerminalBackend::new(io::stdin().lock(), io::stdout().lock())
        .run(presentation, move |dt, input, scene| app.update(dt, input, scene))
}

//! Terminal driver: play a game from config files.
//!
//! ```text
//! three-trios --config game.json
//! three-trios --grid grid.txt --cards cards.txt --seed 7 --blue corner
//! ```
//!
//! Humans type `HAND_INDEX ROW COL` (all 0-based). Set `RUST_LOG=debug` to
//! see engine events.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use three_trios::{GameConfig, GameEngine, GameView, PlayerKind, Strategy, TextView};

#[derive(Parser)]
#[command(name = "three-trios", about = "Play a two-player grid card game in the terminal")]
struct Args {
    /// JSON game config; replaces the other options.
    #[arg(long, conflicts_with_all = ["grid", "cards", "seed", "red", "blue"])]
    config: Option<PathBuf>,
    /// Grid layout file.
    #[arg(long, required_unless_present = "config")]
    grid: Option<PathBuf>,
    /// Card pool file.
    #[arg(long, required_unless_present = "config")]
    cards: Option<PathBuf>,
    /// Shuffle the card pool with this seed.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value = "human")]
    red: Controller,
    #[arg(long, value_enum, default_value = "human")]
    blue: Controller,
}

#[derive(Clone, Copy, ValueEnum)]
enum Controller {
    Human,
    FlipMax,
    Corner,
}

impl From<Controller> for PlayerKind {
    fn from(controller: Controller) -> Self {
        match controller {
            Controller::Human => PlayerKind::Human,
            Controller::FlipMax => PlayerKind::Ai(Strategy::FlipMax),
            Controller::Corner => PlayerKind::Ai(Strategy::Corner),
        }
    }
}

impl Args {
    fn into_config(self) -> anyhow::Result<GameConfig> {
        if let Some(path) = self.config {
            return GameConfig::load(&path)
                .with_context(|| format!("loading config {}", path.display()));
        }
        let (Some(grid), Some(cards)) = (self.grid, self.cards) else {
            bail!("--grid and --cards are required without --config");
        };
        let mut config = GameConfig::new(grid, cards);
        config.red = self.red.into();
        config.blue = self.blue.into();
        config.seed = self.seed;
        Ok(config)
    }
}

/// Parse `HAND_INDEX ROW COL`.
fn parse_input(line: &str) -> Result<(usize, usize, usize), String> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| format!("expected three non-negative numbers, got {line:?}"))?;
    match numbers.as_slice() {
        &[index, row, col] => Ok((index, row, col)),
        _ => Err("expected HAND_INDEX ROW COL".to_string()),
    }
}

fn human_turn(game: &mut GameEngine, input: &mut impl BufRead) -> anyhow::Result<()> {
    let current = game.current_player();
    loop {
        print!("{current} > ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game ended");
        }
        let (index, row, col) = match parse_input(&line) {
            Ok(parsed) => parsed,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        let hand = game.hand(current);
        let Some(card) = hand.get(index) else {
            println!("no card at hand index {index}");
            continue;
        };
        match game.place_card(current, card, row, col) {
            Ok(_) => return Ok(()),
            Err(err) => println!("{err}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let mut game = config.build().context("starting game")?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_game_over() {
        println!("{}", TextView::new(&game));
        let current = game.current_player();

        if let Some(report) = game.take_ai_turn()? {
            println!("{current} flipped {} card(s)", report.flips.len());
            continue;
        }
        match game.player(current).map(|p| p.kind()) {
            Some(PlayerKind::Ai(strategy)) => {
                println!("{current} ({strategy}) has no valid moves");
                return Ok(());
            }
            _ => human_turn(&mut game, &mut input)?,
        }
    }

    println!("{}", TextView::new(&game));
    println!(
        "Red {} - Blue {}",
        game.player_score(three_trios::PlayerColor::Red),
        game.player_score(three_trios::PlayerColor::Blue)
    );
    println!("{}", game.winner());
    Ok(())
}

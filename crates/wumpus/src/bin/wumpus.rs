//! Wumpus World CLI.
//!
//! Commands:
//! - play: explore a cave interactively with WASD moves
//! - demo: run a scripted sequence of moves and print what the agent infers

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wumpus::prelude::*;

#[derive(Parser)]
#[command(name = "wumpus")]
#[command(version)]
#[command(about = "Explore a Wumpus World cave with a percept-driven knowledge base")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading one WASD move per line
    Play {
        #[command(flatten)]
        cave: CaveArgs,

        /// Print the cave map after every move
        #[arg(long)]
        reveal: bool,
    },

    /// Run a scripted sequence of moves
    Demo {
        #[command(flatten)]
        cave: CaveArgs,

        /// Moves as WASD keys, e.g. "dawd"
        #[arg(long)]
        moves: String,

        /// Print the cave map after every move
        #[arg(long)]
        reveal: bool,
    },
}

/// Which cave to explore. Without `--random` it is the classic 4×4 layout.
#[derive(Args)]
struct CaveArgs {
    /// Generate a random cave instead of the classic one
    #[arg(long)]
    random: bool,

    /// Cave width
    #[arg(long, default_value_t = 4, requires = "random")]
    width: u32,

    /// Cave height
    #[arg(long, default_value_t = 4, requires = "random")]
    height: u32,

    /// Chance of a pit in each cell other than the start
    #[arg(long, default_value_t = 0.2, requires = "random")]
    pit_probability: f64,

    /// Random seed
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u64,
}

impl CaveArgs {
    fn build(&self) -> Result<Cave> {
        if !self.random {
            return Ok(Cave::classic());
        }
        let config = CaveConfig {
            width: self.width,
            height: self.height,
            pit_probability: self.pit_probability,
            seed: self.seed,
        };
        Ok(Cave::generate(&config)?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Play { cave, reveal } => play(Expedition::new(cave.build()?), reveal),
        Commands::Demo {
            cave,
            moves,
            reveal,
        } => demo(Expedition::new(cave.build()?), &moves, reveal),
    }
}

fn play(mut exp: Expedition, reveal: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut input = io::stdin().lock();
    report(&mut out, &exp, reveal)?;

    let mut line = String::new();
    while exp.outcome() == Outcome::Exploring {
        write!(out, "move (WASD)> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("input closed");
            return Ok(());
        }
        let mut keys = line.trim().chars();
        let direction = match (keys.next(), keys.next()) {
            (Some(key), None) => Direction::from_key(key),
            _ => None,
        };
        let Some(direction) = direction else {
            writeln!(out, "invalid move, use W, A, S or D")?;
            continue;
        };
        exp.step(direction)?;
        report(&mut out, &exp, reveal)?;
    }
    farewell(&mut out, &exp)
}

fn demo(mut exp: Expedition, moves: &str, reveal: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    for key in moves.chars().filter(|c| !c.is_whitespace()) {
        let direction = Direction::from_key(key).ok_or_else(|| anyhow!("invalid move '{key}'"))?;
        let outcome = exp.step(direction)?;
        let agent = exp.agent();
        writeln!(out, "turn {}: {direction} to {}", agent.turns(), agent.position())?;
        for (cell, label) in agent.perceptions() {
            writeln!(out, "  {cell}: {label}")?;
        }
        if reveal {
            writeln!(out, "{}", exp.cave())?;
        }
        if outcome != Outcome::Exploring {
            break;
        }
    }
    farewell(&mut out, &exp)
}

fn report(out: &mut impl Write, exp: &Expedition, reveal: bool) -> Result<()> {
    let agent = exp.agent();
    let gold = if agent.has_gold() { "with gold" } else { "without gold" };
    writeln!(out, "Status: {}, {gold}.", agent.status())?;
    writeln!(out, "{}", agent.summary())?;
    if reveal {
        writeln!(out, "{}", exp.cave())?;
    }
    match agent.suggestions() {
        Some(s) => writeln!(out, "{s}")?,
        None => writeln!(out, "no suggestions for the dead")?,
    }
    Ok(())
}

fn farewell(out: &mut impl Write, exp: &Expedition) -> Result<()> {
    match exp.outcome() {
        Outcome::Dead => writeln!(out, "The agent died: {}.", exp.agent().status())?,
        Outcome::Escaped => writeln!(out, "Climbed out of the cave with the gold.")?,
        Outcome::Exploring => {}
    }
    Ok(())
}

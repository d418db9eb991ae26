use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{highscores::HighscoresArg, simulate::SimulateArg};

mod highscores;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// TOML settings file (tick_interval_ms, highscore_file, player_name)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a headless game with a random player and record the score
    Simulate(#[clap(flatten)] SimulateArg),
    /// Print the high-score list
    Highscores(#[clap(flatten)] HighscoresArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = args.config.as_deref();
    match args.mode {
        Mode::Simulate(arg) => simulate::run(config, &arg)?,
        Mode::Highscores(arg) => highscores::run(config, &arg)?,
    }
    Ok(())
}

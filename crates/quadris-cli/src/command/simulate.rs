use std::{
    fmt,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use quadris_engine::{Engine, EngineConfig, EngineEvent, GameStats, HighscoreEntry, PieceSeed};
use rand::{Rng, SeedableRng as _, distr::StandardUniform, prelude::Distribution};
use rand_pcg::Pcg64Mcg;

use super::highscores;
use crate::{
    highscore_store,
    settings::{Settings, SettingsOverrides},
};

const MAX_COMMANDS_PER_TICK: usize = 2;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Piece seed as 32 hex digits; a fresh one is drawn when omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Stop after this many ticks even if the game is still running
    #[clap(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Gravity period in milliseconds
    #[clap(long)]
    tick_interval_ms: Option<u64>,
    /// Name recorded in the high-score list
    #[clap(long)]
    player: Option<String>,
    /// High-score file to update
    #[clap(long)]
    highscore_file: Option<PathBuf>,
    /// Do not touch the high-score file
    #[clap(long)]
    no_record: bool,
}

pub(crate) fn run(config_path: Option<&Path>, arg: &SimulateArg) -> anyhow::Result<()> {
    let settings = Settings::load(
        config_path,
        SettingsOverrides {
            tick_interval_ms: arg.tick_interval_ms,
            highscore_file: arg.highscore_file.clone(),
            player_name: arg.player.clone(),
        },
    )?;

    let mut config = EngineConfig::default().with_tick_interval(settings.tick_interval);
    if let Some(seed) = arg.seed {
        config = config.with_seed(seed);
    }

    let mut out = io::stdout().lock();
    let summary = simulate(config, arg.max_ticks, &mut out)?;

    if !summary.game_over {
        tracing::warn!(ticks = summary.ticks, "tick budget exhausted before game over");
    } else if !arg.no_record {
        let entry = HighscoreEntry::new(summary.score, settings.player_name);
        record_score(&settings.highscore_file, entry, &mut out)?;
    }

    writeln!(out, "{summary}").context("Failed to write to stdout")?;
    Ok(())
}

/// Records a finished game and shows the resulting list.
///
/// A store failure is logged and leaves the game's output intact.
fn record_score<W>(path: &Path, entry: HighscoreEntry, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let score = entry.score();
    let ledger = match highscore_store::record(path, entry) {
        Ok((ledger, rank)) => {
            if rank.is_some() {
                writeln!(out, "{score} - NEW HIGHSCORE!").context("Failed to write to stdout")?;
            }
            ledger
        }
        Err(err) => {
            tracing::error!("{err:#}");
            return Ok(());
        }
    };
    highscores::write_table(&ledger, out).context("Failed to write to stdout")?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    seed: PieceSeed,
    score: usize,
    game_over: bool,
    ticks: u64,
    elapsed: Duration,
    stats: GameStats,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines: {}, pieces: {}, simulated time: {:.1?}, seed: {}",
            self.stats.total_cleared_lines(),
            self.stats.completed_pieces(),
            self.elapsed,
            self.seed,
        )
    }
}

/// Runs one game with a random player until it ends or `max_ticks` have
/// elapsed, writing a status line to `out` for every engine event.
pub(crate) fn simulate<W>(
    config: EngineConfig,
    max_ticks: u64,
    out: &mut W,
) -> anyhow::Result<Summary>
where
    W: Write,
{
    let mut engine = Engine::new(config);
    engine.start();
    tracing::info!(
        seed = %engine.seed(),
        tick_interval = ?engine.config().tick_interval,
        "game started"
    );

    let mut player = RandomPlayer::new(engine.seed());
    let mut ticks = 0;
    loop {
        write_status_lines(&mut engine, out).context("Failed to write to stdout")?;
        if engine.tick_interval().is_none() || ticks >= max_ticks {
            break;
        }
        player.play(&mut engine);
        // a hard drop may have ended the game
        if engine.tick_interval().is_some() {
            engine.tick();
            ticks += 1;
        }
    }

    Ok(Summary {
        seed: engine.seed(),
        score: engine.lines_cleared(),
        game_over: engine.state().is_game_over(),
        ticks,
        elapsed: engine.elapsed(),
        stats: engine.stats().clone(),
    })
}

fn write_status_lines<W>(engine: &mut Engine, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    let score = engine.lines_cleared();
    for event in engine.drain_events() {
        tracing::debug!(?event, "engine event");
        writeln!(out, "{}", status_line(event, score))?;
    }
    Ok(())
}

fn status_line(event: EngineEvent, current_score: usize) -> String {
    let score = event.score().unwrap_or(current_score);
    match event {
        EngineEvent::ScoreChanged(_) | EngineEvent::Resumed => format!("{score}"),
        EngineEvent::Paused => format!("{score} - Paused"),
        EngineEvent::GameOver(_) => format!("{score} - Game over"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerCommand {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
}

impl Distribution<PlayerCommand> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PlayerCommand {
        match rng.random_range(0..6) {
            0 => PlayerCommand::MoveLeft,
            1 => PlayerCommand::MoveRight,
            2 => PlayerCommand::RotateCw,
            3 => PlayerCommand::RotateCcw,
            4 => PlayerCommand::SoftDrop,
            _ => PlayerCommand::HardDrop,
        }
    }
}

impl PlayerCommand {
    fn apply(self, engine: &mut Engine) -> bool {
        match self {
            PlayerCommand::MoveLeft => engine.move_left(),
            PlayerCommand::MoveRight => engine.move_right(),
            PlayerCommand::RotateCw => engine.rotate_cw(),
            PlayerCommand::RotateCcw => engine.rotate_ccw(),
            PlayerCommand::SoftDrop => engine.soft_drop(),
            PlayerCommand::HardDrop => engine.hard_drop(),
        }
    }
}

/// Issues up to [`MAX_COMMANDS_PER_TICK`] uniformly chosen commands per tick.
///
/// Seeded from the piece seed so a given seed replays the same game.
#[derive(Debug, Clone)]
struct RandomPlayer {
    rng: Pcg64Mcg,
}

impl RandomPlayer {
    fn new(seed: PieceSeed) -> Self {
        Self {
            rng: Pcg64Mcg::from_seed(seed.to_bytes()),
        }
    }

    fn play(&mut self, engine: &mut Engine) {
        let count = self.rng.random_range(0..=MAX_COMMANDS_PER_TICK);
        for _ in 0..count {
            let command: PlayerCommand = self.rng.random();
            let accepted = command.apply(engine);
            tracing::trace!(?command, accepted, "player command");
        }
    }
}

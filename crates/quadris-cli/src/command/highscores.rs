use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use quadris_engine::HighscoreLedger;

use crate::{
    highscore_store,
    settings::{Settings, SettingsOverrides},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct HighscoresArg {
    /// High-score file to read
    #[clap(long)]
    highscore_file: Option<PathBuf>,
    /// Print the raw JSON list instead of the table
    #[clap(long)]
    json: bool,
}

pub(crate) fn run(config_path: Option<&Path>, arg: &HighscoresArg) -> anyhow::Result<()> {
    let settings = Settings::load(
        config_path,
        SettingsOverrides {
            highscore_file: arg.highscore_file.clone(),
            ..SettingsOverrides::default()
        },
    )?;
    let ledger = highscore_store::load(&settings.highscore_file)?;

    if arg.json {
        return Output::stdout().write_json(&ledger);
    }
    write_table(&ledger, &mut io::stdout().lock())?;
    Ok(())
}

pub(crate) fn write_table<W>(ledger: &HighscoreLedger, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "HIGHSCORES")?;
    for entry in ledger.entries() {
        writeln!(out, "{} - {}", entry.score(), entry.name())?;
    }
    Ok(())
}

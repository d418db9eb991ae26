//! Settings resolved from built-in defaults, an optional TOML file and
//! command-line flags, later sources winning.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use quadris_engine::DEFAULT_TICK_INTERVAL;
use serde::Deserialize;

use crate::util;

pub(crate) const DEFAULT_HIGHSCORE_FILE: &str = "highscore.json";
const ANONYMOUS_PLAYER: &str = "Anonymous";

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SettingsFile {
    tick_interval_ms: Option<u64>,
    highscore_file: Option<PathBuf>,
    player_name: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct SettingsOverrides {
    pub(crate) tick_interval_ms: Option<u64>,
    pub(crate) highscore_file: Option<PathBuf>,
    pub(crate) player_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) tick_interval: Duration,
    pub(crate) highscore_file: PathBuf,
    pub(crate) player_name: String,
}

impl Settings {
    pub(crate) fn load(
        config_path: Option<&Path>,
        overrides: SettingsOverrides,
    ) -> anyhow::Result<Self> {
        let file = match config_path {
            Some(path) => util::read_toml_file("settings", path)?,
            None => SettingsFile::default(),
        };
        Self::resolve(file, overrides, env::var("USER").ok())
    }

    fn resolve(
        file: SettingsFile,
        overrides: SettingsOverrides,
        env_user: Option<String>,
    ) -> anyhow::Result<Self> {
        let tick_interval = match overrides.tick_interval_ms.or(file.tick_interval_ms) {
            Some(0) => anyhow::bail!("tick interval must be at least 1 ms"),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_TICK_INTERVAL,
        };
        let highscore_file = overrides
            .highscore_file
            .or(file.highscore_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_FILE));
        let player_name = overrides
            .player_name
            .or(file.player_name)
            .or(env_user)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_PLAYER.to_owned());

        Ok(Self {
            tick_interval,
            highscore_file,
            player_name,
        })
    }
}

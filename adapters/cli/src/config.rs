use std::{fs, path::Path, time::Duration};

use anyhow::{anyhow, Context};
use ninja_puzzles_core::GameKind;
use serde::Deserialize;

/// Settings read from an optional TOML file.
///
/// Every field is optional; command-line flags take precedence over the file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    /// Seed driving choice shuffles.
    pub(crate) seed: Option<u64>,
    /// Pause between a correct submission and the level advance, in milliseconds.
    pub(crate) success_delay_ms: Option<u64>,
    /// Game launched when `--game` is omitted.
    pub(crate) default_game: Option<String>,
}

impl Settings {
    /// Loads settings from `path`, or returns the defaults when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("invalid settings in {}", path.display()))
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Resolves the configured default game, if any.
    pub(crate) fn default_game(&self) -> anyhow::Result<Option<GameKind>> {
        self.default_game
            .as_deref()
            .map(|label| {
                GameKind::from_label(label)
                    .ok_or_else(|| anyhow!("unknown default_game '{label}'"))
            })
            .transpose()
    }

    /// Configured success delay, if any.
    pub(crate) fn success_delay(&self) -> Option<Duration> {
        self.success_delay_ms.map(Duration::from_millis)
    }
}

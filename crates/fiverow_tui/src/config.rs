//! Session settings: command line, optional settings file, defaults.

use clap::Parser;
use derive_getters::Getters;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Largest board side the terminal grid can reasonably display.
pub const MAX_BOARD_SIZE: usize = 64;

/// Command-line interface for the five-in-a-row terminal client.
#[derive(Debug, Parser)]
#[command(name = "fiverow_tui")]
#[command(about = "Five-in-a-row with full time travel", version)]
pub struct Cli {
    /// Board side length.
    #[arg(long)]
    pub size: Option<usize>,

    /// Run length required to win.
    #[arg(long)]
    pub win_length: Option<usize>,

    /// Path to a TOML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Error raised while loading or validating settings.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[display("failed to read settings file {path}: {reason}")]
    Unreadable {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },
    /// The settings file is not valid TOML.
    #[display("failed to parse settings file {path}: {reason}")]
    Unparsable {
        /// Path that was attempted.
        path: String,
        /// Underlying parse failure.
        reason: String,
    },
    /// The resolved values describe an unplayable game.
    #[display("invalid settings: {reason}")]
    Invalid {
        /// What was rejected.
        reason: String,
    },
}

impl std::error::Error for ConfigError {}

/// Resolved game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Deserialize)]
pub struct Settings {
    /// Board side length (the grid is `size` x `size`).
    #[serde(default = "default_size")]
    size: usize,
    /// Run length required to win.
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_size() -> usize {
    fiverow::DEFAULT_BOARD_SIZE
}

fn default_win_length() -> usize {
    fiverow::DEFAULT_WIN_LEN
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: default_size(),
            win_length: default_win_length(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys fall back to the
    /// defaults; unknown keys are ignored.
    #[instrument]
    pub fn from_file(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("reading settings file");
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        toml::from_str(&content).map_err(|err| ConfigError::Unparsable {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }

    /// Resolves settings for a session: command-line flags override the
    /// settings file, which overrides the defaults. The result is validated
    /// before it is handed out.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(size) = cli.size {
            settings.size = size;
        }
        if let Some(win_length) = cli.win_length {
            settings.win_length = win_length;
        }
        settings.validate()?;
        info!(
            size = settings.size,
            win_length = settings.win_length,
            "settings resolved"
        );
        Ok(settings)
    }

    /// Builds settings directly, skipping validation.
    #[cfg(test)]
    pub(crate) fn from_parts(size: usize, win_length: usize) -> Self {
        Self { size, win_length }
    }

    /// Rejects settings that describe an unplayable or undisplayable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "board size must be between 1 and {MAX_BOARD_SIZE}, got {}",
                    self.size
                ),
            });
        }
        if self.win_length == 0 || self.win_length > self.size {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "win length must be between 1 and the board size {}, got {}",
                    self.size, self.win_length
                ),
            });
        }
        Ok(())
    }
}

//! Theme preference lifecycle.
//!
//! The theme is process-scoped state: read once on start, written back to
//! the config file on every change. It has no connection to the chat
//! controller.

use std::path::{Path, PathBuf};

use solace_common::ConfigError;
use tracing::info;

use crate::schema::{SolaceConfig, ThemeMode};
use crate::toml_loader::parse_from_path;
use crate::toml_writer::save_config_to_path;

/// The persisted light/dark preference bound to a config file.
#[derive(Debug)]
pub struct ThemePreference {
    path: PathBuf,
    mode: ThemeMode,
}

impl ThemePreference {
    /// Initialise from the config file at `path`; a missing file means dark.
    ///
    /// The stored mode is honoured even when other settings in the file
    /// fail validation.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let mode = match parse_from_path(&path) {
            Ok(config) => config.theme.mode,
            Err(ConfigError::FileNotFound(_)) => ThemeMode::default(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Switch to `mode` and persist it. Writing the same mode is a no-op.
    ///
    /// Only `theme.mode` changes on disk; every other value is written back
    /// as it was read, valid or not.
    pub fn set(&mut self, mode: ThemeMode) -> Result<(), ConfigError> {
        if mode == self.mode {
            return Ok(());
        }
        let mut config = match parse_from_path(&self.path) {
            Ok(config) => config,
            Err(ConfigError::FileNotFound(_)) => SolaceConfig::default(),
            Err(e) => return Err(e),
        };
        config.theme.mode = mode;
        save_config_to_path(&config, &self.path)?;
        self.mode = mode;
        info!(theme = %mode, "theme changed");
        Ok(())
    }

    /// Flip between dark and light, persisting the result.
    pub fn toggle(&mut self) -> Result<ThemeMode, ConfigError> {
        self.set(self.mode.toggle())?;
        Ok(self.mode)
    }
}

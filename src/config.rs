//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Parameters of one sound cue.
///
/// The terminal bell has a single fixed tone, so only a volume of zero
/// (muted) changes what the terminal host does. The values are kept so
/// hosts with real audio can honor them.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct SoundCue {
    /// Gain between 0.0 and 1.0.
    volume: f32,
    /// Playback speed multiplier.
    playback_rate: f32,
}

impl SoundCue {
    /// Creates a cue.
    pub fn new(volume: f32, playback_rate: f32) -> Self {
        Self {
            volume,
            playback_rate,
        }
    }

    /// A cue with no volume is never played.
    pub fn is_muted(&self) -> bool {
        self.volume <= 0.0
    }
}

impl Default for SoundCue {
    fn default() -> Self {
        Self::new(1.0, 1.5)
    }
}

/// Sound cue configuration.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct SoundSettings {
    /// Master switch for all cues.
    enabled: bool,
    /// Played when a cell is activated.
    cell_cue: SoundCue,
    /// Played when a move-list entry is activated.
    history_cue: SoundCue,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            cell_cue: SoundCue::new(0.2, 1.5),
            history_cue: SoundCue::new(1.0, 1.5),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Sound cues.
    sound: SoundSettings,
    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: SoundSettings::default(),
            log_file: PathBuf::from("tictactoe_timeline.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults. Fields absent from the file
    /// keep their default values.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::new(format!("Failed to read config file: {}", e)));
            }
        };

        debug!("Parsing config");
        let settings = Self::from_toml(&content)?;
        info!(sound_enabled = settings.sound.enabled, "Config loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cues() {
        let sound = SoundSettings::default();
        assert!(*sound.enabled());
        assert_eq!(*sound.cell_cue(), SoundCue::new(0.2, 1.5));
        assert_eq!(*sound.history_cue(), SoundCue::new(1.0, 1.5));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml("[sound]\nenabled = false\n").unwrap();
        assert!(!*settings.sound().enabled());
        assert_eq!(*settings.sound().cell_cue(), SoundCue::new(0.2, 1.5));
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe_timeline.log"));
    }

    #[test]
    fn test_muted_cue() {
        assert!(SoundCue::new(0.0, 1.0).is_muted());
        assert!(!SoundCue::default().is_muted());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml("sound = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}

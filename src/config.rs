//! External configuration loader
//!
//! Reads `config.toml` from an explicit path, or else from the executable's
//! directory or the working directory. A missing file or missing keys fall
//! back to defaults; a file that exists but cannot be parsed is an error.

use crate::game::DEFAULT_ROUNDS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolved settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Round count preselected on the setup screen (clamped at use)
    pub default_rounds: usize,
    /// Custom dataset; the embedded set is used when `None`
    pub puzzles_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_rounds: DEFAULT_ROUNDS,
            puzzles_path: None,
        }
    }
}

/// Error type for unreadable or malformed config files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid config: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
    #[serde(default)]
    data: TomlData,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlGame {
    #[serde(default = "default_rounds")]
    default_rounds: usize,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlData {
    #[serde(default)]
    puzzles: Option<PathBuf>,
}

const fn default_rounds() -> usize {
    DEFAULT_ROUNDS
}

impl Default for TomlGame {
    fn default() -> Self {
        Self {
            default_rounds: default_rounds(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load settings
    ///
    /// With `explicit`, that file must exist. Otherwise the candidate
    /// directories are searched and defaults are used if nothing is found.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match candidate_dirs()
            .into_iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|path| path.is_file())
        {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from one file
    ///
    /// Relative dataset paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let (Some(puzzles), Some(base)) = (&config.puzzles_path, path.parent())
            && puzzles.is_relative()
        {
            config.puzzles_path = Some(base.join(puzzles));
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or has unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let raw: TomlConfig = toml::from_str(text)?;
        Ok(Self {
            default_rounds: raw.game.default_rounds,
            puzzles_path: raw.data.puzzles,
        })
    }
}

/// Candidate directories to search: exe dir, then CWD (deduplicated)
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir()
        && !dirs.iter().any(|d| d == &cwd)
    {
        dirs.push(cwd);
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = GameConfig::from_toml_str(
            r#"
            [game]
            default_rounds = 10

            [data]
            puzzles = "my/puzzles.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_rounds, 10);
        assert_eq!(config.puzzles_path, Some(PathBuf::from("my/puzzles.json")));
    }

    #[test]
    fn partial_sections_fall_back() {
        let config = GameConfig::from_toml_str("[data]\n").unwrap();
        assert_eq!(config.default_rounds, DEFAULT_ROUNDS);
        assert_eq!(config.puzzles_path, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(GameConfig::from_toml_str("[game]\nrounds = 4\n").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(GameConfig::from_toml_str("[game]\ndefault_rounds = \"five\"\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = GameConfig::load(Some(Path::new("no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn relative_dataset_resolves_against_config_dir() {
        let dir = std::env::temp_dir().join(format!("ascii_guesser_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "[data]\npuzzles = \"set.json\"\n").unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.puzzles_path, Some(dir.join("set.json")));

        fs::remove_dir_all(&dir).unwrap();
    }
}

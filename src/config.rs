//! Configuration management for the skyscrapers checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (default board path, marker characters)

use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Board file checked when neither the CLI nor the config file names one
pub const DEFAULT_BOARD_PATH: &str = "check.txt";

/// Command-line arguments for the skyscrapers checker
#[derive(Debug, Parser)]
#[command(name = "sky-check")]
#[command(about = "Validator for completed Skyscrapers puzzle boards")]
#[command(version)]
pub struct Args {
    /// Board layout file to validate
    pub board: Option<PathBuf>,

    /// Config file overriding the default lookup location
    #[arg(long, help = "TOML config file (board path, marker characters)")]
    pub config: Option<PathBuf>,

    /// Print the full diagnostic report as JSON instead of the bare verdict
    #[arg(long)]
    pub json: bool,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// The designated placeholder characters of the board format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markers {
    /// "No hint provided for this edge"
    pub filler: char,
    /// "Cell height not yet determined"
    pub unresolved: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            filler: '*',
            unresolved: '?',
        }
    }
}

/// On-disk config file schema (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub board: Option<PathBuf>,
    pub filler: Option<char>,
    pub unresolved: Option<char>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Board file to validate
    pub board_path: PathBuf,
    /// Placeholder characters in effect
    pub markers: Markers,
    /// Print the report as JSON
    pub json: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments and the config file
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let file = match args.config.as_deref() {
            Some(path) => load_file_config(path),
            None => default_config_path()
                .map(|path| load_file_config(&path))
                .unwrap_or_default(),
        };
        Ok(Self::merge(args, file))
    }

    /// Merge CLI arguments over file settings over built-in defaults
    pub fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = Markers::default();
        Config {
            board_path: args
                .board
                .or(file.board)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BOARD_PATH)),
            markers: Markers {
                filler: file.filler.unwrap_or(defaults.filler),
                unresolved: file.unresolved.unwrap_or(defaults.unresolved),
            },
            json: args.json,
            log_level: args.log_level,
        }
    }
}

/// Default config file location under the user config directory
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sky-check").join("config.toml"))
}

/// Load a config file, falling back to defaults when missing or malformed
fn load_file_config(path: &Path) -> FileConfig {
    let Ok(content) = fs::read_to_string(path) else {
        return FileConfig::default();
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            log::warn!(
                "Failed to parse config file '{}': {}. Using defaults.",
                path.display(),
                e
            );
            FileConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(board: Option<&str>) -> Args {
        Args {
            board: board.map(PathBuf::from),
            config: None,
            json: false,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_merge_defaults() {
        let config = Config::merge(args(None), FileConfig::default());

        assert_eq!(config.board_path, PathBuf::from(DEFAULT_BOARD_PATH));
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn test_cli_board_wins_over_file_board() {
        let file = FileConfig {
            board: Some(PathBuf::from("from-file.txt")),
            ..FileConfig::default()
        };

        let config = Config::merge(args(Some("from-cli.txt")), file);
        assert_eq!(config.board_path, PathBuf::from("from-cli.txt"));
    }

    #[test]
    fn test_file_board_wins_over_default() {
        let file = FileConfig {
            board: Some(PathBuf::from("from-file.txt")),
            ..FileConfig::default()
        };

        let config = Config::merge(args(None), file);
        assert_eq!(config.board_path, PathBuf::from("from-file.txt"));
    }

    #[test]
    fn test_file_markers_override_defaults() {
        let file = FileConfig {
            board: None,
            filler: Some('.'),
            unresolved: Some('_'),
        };

        let config = Config::merge(args(None), file);
        assert_eq!(config.markers.filler, '.');
        assert_eq!(config.markers.unresolved, '_');
    }

    #[test]
    fn test_file_config_parses_from_toml() {
        let parsed: FileConfig =
            toml::from_str("board = \"boards/friday.txt\"\nfiller = \".\"\n").expect("parse toml");

        assert_eq!(parsed.board, Some(PathBuf::from("boards/friday.txt")));
        assert_eq!(parsed.filler, Some('.'));
        assert_eq!(parsed.unresolved, None);
    }
}

//! Command-line options, the optional config file, and log setup.

use crate::game::GameConfig;
use crate::utils::persistence::{data_path, load_json_or_default};
use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default config file name under ~/.skyhop/.
pub const CONFIG_FILENAME: &str = "config.json";
/// Log file name under ~/.skyhop/.
pub const LOG_FILENAME: &str = "skyhop.log";
/// Environment variable read for the log filter.
pub const LOG_ENV_VAR: &str = "SKYHOP_LOG";

#[derive(Debug, Parser)]
#[command(name = "skyhop", about = "Portfolio arcade in your terminal")]
pub struct Cli {
    /// Seed for obstacle placement; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the best score in memory only.
    #[arg(long)]
    pub no_save: bool,

    /// Game config JSON file (defaults to ~/.skyhop/config.json).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `skyhop::game=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print version and build information.
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// Read the game config from `--config` or the default location.
    pub fn game_config(&self) -> GameConfig {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => match data_path(CONFIG_FILENAME) {
                Ok(path) => path,
                Err(_) => return GameConfig::default(),
            },
        };
        load_json_or_default(&path)
    }
}

/// Send `tracing` output to ~/.skyhop/skyhop.log so the terminal UI stays
/// clean.
///
/// The filter comes from `level`, then `SKYHOP_LOG`, then `info`.
pub fn init_logging(level: Option<&str>) -> io::Result<PathBuf> {
    let path = data_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["skyhop"]);
        assert!(cli.seed.is_none());
        assert!(!cli.no_save);
        assert!(!cli.version);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["skyhop", "--seed", "99", "--no-save", "--log-level", "debug"]);
        assert_eq!(cli.seed, Some(99));
        assert!(cli.no_save);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_game_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"pipe_spacing": 200.0}"#).unwrap();

        let cli = Cli::parse_from(["skyhop", "--config", path.to_str().unwrap()]);
        let config = cli.game_config();
        assert!((config.pipe_spacing - 200.0).abs() < f64::EPSILON);
        assert!((config.field_width - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let cli = Cli::parse_from(["skyhop", "--config", path.to_str().unwrap()]);
        assert_eq!(cli.game_config(), GameConfig::default());
    }
}

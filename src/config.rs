use crate::consts;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file.  Everything here is
/// fixed for the life of the program.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawConfig")]
pub(crate) struct Config {
    /// Number of cells along each side of the grid
    pub(crate) grid_size: u16,

    /// Snake movements per second
    pub(crate) tick_rate: NonZeroU32,

    /// Ticks that must pass after a turn before another turn is accepted.
    /// At least one, so the snake can't turn twice between two moves.
    pub(crate) turn_cooldown: NonZeroU32,

    /// File to write log messages to.  When unset, nothing is logged.
    pub(crate) log_file: Option<PathBuf>,

    pub(crate) log_level: LevelFilter,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: consts::DEFAULT_GRID_SIZE,
            tick_rate: consts::DEFAULT_TICK_RATE,
            turn_cooldown: consts::DEFAULT_TURN_COOLDOWN,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    grid_size: u16,
    tick_rate: NonZeroU32,
    turn_cooldown: NonZeroU32,
    log_file: Option<String>,
    log_level: LevelFilter,
}

impl Default for RawConfig {
    fn default() -> RawConfig {
        let defaults = Config::default();
        RawConfig {
            grid_size: defaults.grid_size,
            tick_rate: defaults.tick_rate,
            turn_cooldown: defaults.turn_cooldown,
            log_file: None,
            log_level: defaults.log_level,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = InvalidConfig;

    fn try_from(value: RawConfig) -> Result<Config, InvalidConfig> {
        Ok(Config {
            grid_size: validate_grid_size(value.grid_size)?,
            tick_rate: value.tick_rate,
            turn_cooldown: value.turn_cooldown,
            log_file: value
                .log_file
                .map(expanduser::expanduser)
                .transpose()
                .map_err(InvalidConfig::LogFile)?,
            log_level: value.log_level,
        })
    }
}

/// Check that `size` is a grid size the game can be played on
pub(crate) fn validate_grid_size(size: u16) -> Result<u16, InvalidGridSize> {
    if (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(InvalidGridSize(size))
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "grid size must be between {min} and {max}, got {0}",
    min = consts::MIN_GRID_SIZE,
    max = consts::MAX_GRID_SIZE
)]
pub(crate) struct InvalidGridSize(pub(crate) u16);

#[derive(Debug, Error)]
pub(crate) enum InvalidConfig {
    #[error(transparent)]
    GridSize(#[from] InvalidGridSize),
    #[error("failed to expand log-file path")]
    LogFile(#[source] std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(src: &str) -> Result<Config, ConfigError> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(src.as_bytes()).unwrap();
        file.flush().unwrap();
        Config::load(file.path(), false)
    }

    #[test]
    fn empty_file() {
        assert_eq!(load_str("").unwrap(), Config::default());
    }

    #[test]
    fn full_file() {
        let cfg = load_str(concat!(
            "grid-size = 12\n",
            "tick-rate = 8\n",
            "turn-cooldown = 2\n",
            "log-file = \"/tmp/wrapsnake.log\"\n",
            "log-level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                grid_size: 12,
                tick_rate: NonZeroU32::new(8).unwrap(),
                turn_cooldown: NonZeroU32::new(2).unwrap(),
                log_file: Some(PathBuf::from("/tmp/wrapsnake.log")),
                log_level: LevelFilter::Debug,
            }
        );
    }

    #[rstest]
    #[case("grid-size = 2\n")]
    #[case("grid-size = 41\n")]
    #[case("grid-size = -5\n")]
    #[case("tick-rate = 0\n")]
    #[case("turn-cooldown = 0\n")]
    #[case("log-level = \"loud\"\n")]
    #[case("wraparound = true\n")]
    fn invalid_file(#[case] src: &str) {
        assert!(matches!(load_str(src), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn missing_file_not_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[rstest]
    #[case(2, false)]
    #[case(3, true)]
    #[case(20, true)]
    #[case(40, true)]
    #[case(41, false)]
    fn test_validate_grid_size(#[case] size: u16, #[case] ok: bool) {
        assert_eq!(validate_grid_size(size).is_ok(), ok);
    }

    #[test]
    fn invalid_grid_size_message() {
        assert_eq!(
            InvalidGridSize(99).to_string(),
            "grid size must be between 3 and 40, got 99"
        );
    }
}

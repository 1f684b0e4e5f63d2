//! Runtime configuration for `storefront`.
//!
//! [`Config`] is the single source of truth for runtime options, however
//! they were specified. Precedence, highest first: command-line flags,
//! environment variables (handled by clap), the TOML config file, built-in
//! defaults.
//!
//! # Examples
//!
//! ```toml
//! # storefront.toml
//! storage = "store.json"
//! seed = 7
//! stores = 10
//! lang = "ar"
//! color = "never"
//! ```

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use store_theme::LocalStorage;

use crate::cli::Cli;
use crate::i18n::Locale;

/// Seed used when none is given, so store ids and data are stable.
pub const DEFAULT_SEED: u64 = 42;
/// Stores generated when no count is given.
pub const DEFAULT_STORE_COUNT: usize = 6;
/// Most stores the generator will be asked for.
pub const MAX_STORE_COUNT: usize = 50;
/// Narrowest accepted `--width`.
pub const MIN_WIDTH: usize = 40;
/// Width when neither `--width` nor a terminal size is available.
pub const FALLBACK_WIDTH: usize = 80;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON storage file; `None` keeps settings in memory for one run.
    pub storage_path: Option<PathBuf>,

    /// Seed for mock data generation.
    pub seed: u64,

    /// Number of stores to generate.
    pub store_count: usize,

    /// Forced interface language. When unset the persisted language, then
    /// the store's own language, apply.
    pub locale: Option<Locale>,

    /// Colour output mode.
    pub color: ColorChoice,

    /// Page width; `None` follows the terminal.
    pub width: Option<usize>,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            seed: DEFAULT_SEED,
            store_count: DEFAULT_STORE_COUNT,
            locale: None,
            color: ColorChoice::Auto,
            width: None,
            verbosity: 0,
        }
    }
}

/// Colour output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Options read from a TOML config file. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub storage: Option<PathBuf>,
    pub seed: Option<u64>,
    pub stores: Option<usize>,
    pub lang: Option<Locale>,
    pub width: Option<usize>,
    pub color: Option<ColorChoice>,
}

impl FileConfig {
    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the config from CLI arguments, reading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = cli
            .config
            .as_deref()
            .map(FileConfig::load)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::from_sources(cli, &file))
    }

    /// Merge CLI values over file values over defaults.
    #[must_use]
    pub fn from_sources(cli: &Cli, file: &FileConfig) -> Self {
        let defaults = Self::default();

        let color = if cli.force_color {
            ColorChoice::Always
        } else if cli.no_color {
            ColorChoice::Never
        } else {
            file.color.unwrap_or(defaults.color)
        };

        Self {
            storage_path: cli.storage.clone().or_else(|| file.storage.clone()),
            seed: cli.seed.or(file.seed).unwrap_or(defaults.seed),
            store_count: cli
                .store_count
                .or(file.stores)
                .unwrap_or(defaults.store_count),
            locale: cli.locale.or(file.lang),
            color,
            width: cli.width.or(file.width),
            verbosity: cli.verbose,
        }
    }

    /// Check if colors should be used.
    #[must_use]
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    /// Page width: `--width`, else the terminal's, else 80 columns.
    #[must_use]
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(cols, _)| usize::from(cols))
                .ok()
                .filter(|cols| *cols >= MIN_WIDTH)
                .unwrap_or(FALLBACK_WIDTH)
        })
    }

    /// Open the configured storage: the JSON file, or memory.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the file exists but cannot be read.
    pub fn open_storage(&self) -> Result<LocalStorage, store_theme::StorageError> {
        match &self.storage_path {
            Some(path) => LocalStorage::open_file(path.clone()),
            None => Ok(LocalStorage::in_memory()),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_STORE_COUNT).contains(&self.store_count) {
            return Err(ConfigError::StoreCount(self.store_count));
        }

        if let Some(width) = self.width
            && width < MIN_WIDTH
        {
            return Err(ConfigError::WidthTooSmall(width));
        }

        if let Some(ref path) = self.storage_path
            && path.is_dir()
        {
            return Err(ConfigError::StorageIsDirectory(path.clone()));
        }

        Ok(())
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Storage: {}",
            self.storage_path
                .as_ref()
                .map_or_else(|| "memory".to_string(), |p| p.display().to_string())
        ));
        lines.push(format!("Seed: {}", self.seed));
        lines.push(format!("Stores: {}", self.store_count));
        lines.push(format!(
            "Language: {}",
            self.locale.map_or("auto", Locale::as_str)
        ));
        lines.push(format!("Color: {:?}", self.color));
        lines.push(format!(
            "Width: {}",
            self.width
                .map_or_else(|| "terminal".to_string(), |w| w.to_string())
        ));
        lines.push(format!("Verbosity: {}", self.verbosity));

        lines.join("\n")
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`FileConfig`].
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Store count out of range.
    #[error("Store count must be between 1 and {max}, got {0}", max = MAX_STORE_COUNT)]
    StoreCount(usize),

    /// Width below the minimum.
    #[error("Width must be at least {min} columns, got {0}", min = MIN_WIDTH)]
    WidthTooSmall(usize),

    /// Storage path points at a directory.
    #[error("Storage path is a directory: {0}")]
    StorageIsDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["storefront"];
        argv.extend_from_slice(args);
        argv.push("themes");
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn config_default() {
        let config = Config::default();
        assert!(config.storage_path.is_none());
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.store_count, DEFAULT_STORE_COUNT);
        assert!(config.locale.is_none());
        assert_eq!(config.color, ColorChoice::Auto);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_from_cli_values() {
        let config = Config::from_sources(
            &cli(&["--seed", "9", "--stores", "3", "--lang", "ar", "--width", "100"]),
            &FileConfig::default(),
        );
        assert_eq!(config.seed, 9);
        assert_eq!(config.store_count, 3);
        assert_eq!(config.locale, Some(Locale::Ar));
        assert_eq!(config.width, Some(100));
    }

    #[test]
    fn config_from_cli_color_modes() {
        let config = Config::from_sources(&cli(&["--no-color"]), &FileConfig::default());
        assert_eq!(config.color, ColorChoice::Never);
        assert!(!config.use_color());

        let config = Config::from_sources(&cli(&["--force-color"]), &FileConfig::default());
        assert_eq!(config.color, ColorChoice::Always);
        assert!(config.use_color());
    }

    #[test]
    fn cli_beats_file_beats_defaults() {
        let file = FileConfig {
            seed: Some(5),
            stores: Some(12),
            lang: Some(Locale::Ar),
            color: Some(ColorChoice::Never),
            ..Default::default()
        };
        let config = Config::from_sources(&cli(&["--seed", "8"]), &file);
        assert_eq!(config.seed, 8);
        assert_eq!(config.store_count, 12);
        assert_eq!(config.locale, Some(Locale::Ar));
        assert_eq!(config.color, ColorChoice::Never);
        assert_eq!(config.width, None);
    }

    #[test]
    fn file_config_loads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\nstores = 2\nlang = \"ar\"\ncolor = \"always\"").unwrap();
        let loaded = FileConfig::load(file.path()).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.stores, Some(2));
        assert_eq!(loaded.lang, Some(Locale::Ar));
        assert_eq!(loaded.color, Some(ColorChoice::Always));
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"luxe\"").unwrap();
        assert!(matches!(
            FileConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(matches!(
            FileConfig::load(Path::new("/nonexistent/storefront.toml")),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = Config {
            store_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::StoreCount(0))));

        let config = Config {
            width: Some(10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WidthTooSmall(10))
        ));

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StorageIsDirectory(_))
        ));
    }

    #[test]
    fn explicit_width_wins() {
        let config = Config {
            width: Some(64),
            ..Default::default()
        };
        assert_eq!(config.effective_width(), 64);
        assert!(Config::default().effective_width() >= MIN_WIDTH);
    }

    #[test]
    fn diagnostic_string_lists_settings() {
        let text = Config::default().to_diagnostic_string();
        assert!(text.contains("Storage: memory"));
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("Language: auto"));
    }

    #[test]
    fn config_serialization() {
        let config = Config {
            seed: 77,
            locale: Some(Locale::En),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

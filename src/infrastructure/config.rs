//! Configuration management

use crate::error::{DocpeekError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_RUNTIME_PATH: &str = "/usr/share/nvim/runtime";
pub const DEFAULT_MAX_LINES: usize = 20;
pub const DEFAULT_HELP_FLAG: &str = "--help";

pub const CONFIG_ENV: &str = "DOCPEEK_CONFIG";
pub const RUNTIME_ENV: &str = "DOCPEEK_RUNTIME";
pub const MAX_LINES_ENV: &str = "DOCPEEK_MAX_LINES";
pub const FORMATTER_ENV: &str = "DOCPEEK_FORMATTER";

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Invalid color mode: '{}'. Valid modes are: auto, always, never",
                s
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        write!(f, "{}", name)
    }
}

/// Where the file layer of the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub runtime_path: PathBuf,
    pub max_lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    pub help_flag: String,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            runtime_path: PathBuf::from(DEFAULT_RUNTIME_PATH),
            max_lines: DEFAULT_MAX_LINES,
            formatter: None,
            help_flag: DEFAULT_HELP_FLAG.to_string(),
            color: ColorMode::Always,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub runtime_path: Option<PathBuf>,
    pub max_lines: Option<usize>,
    pub formatter: Option<String>,
    pub color: Option<ColorMode>,
}

impl Config {
    /// Resolve the config file, then layer environment variables on top.
    ///
    /// `explicit` (the `--config` flag) wins over `DOCPEEK_CONFIG`, which wins
    /// over the per-user default location. Named files must exist; the
    /// default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let (config, source) = match named {
            Some(path) => (Self::load_from_file(&path)?, ConfigSource::File(path)),
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => (Self::load_from_file(&path)?, ConfigSource::File(path)),
                None => (Config::default(), ConfigSource::Defaults),
            },
        };

        let config = config.apply_env(|name| std::env::var(name).ok())?;
        Ok((config, source))
    }

    /// `<config_dir>/docpeek/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docpeek").join("config.toml"))
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocpeekError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DocpeekError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()
    }

    /// Apply `DOCPEEK_*` variables as looked up through `var`
    pub fn apply_env<F>(mut self, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(runtime) = var(RUNTIME_ENV) {
            self.runtime_path = PathBuf::from(runtime);
        }
        if let Some(raw) = var(MAX_LINES_ENV) {
            self.max_lines = raw.trim().parse().map_err(|_| {
                DocpeekError::Config(format!(
                    "{} must be a number for max_lines, got '{}'",
                    MAX_LINES_ENV, raw
                ))
            })?;
        }
        if let Some(formatter) = var(FORMATTER_ENV) {
            self.formatter = Some(formatter);
        }
        self.validate()
    }

    /// Apply command-line values, the highest-precedence layer
    pub fn apply_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(runtime) = overrides.runtime_path {
            self.runtime_path = runtime;
        }
        if let Some(max_lines) = overrides.max_lines {
            self.max_lines = max_lines;
        }
        if let Some(formatter) = overrides.formatter {
            self.formatter = Some(formatter);
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        self.validate()
    }

    /// Path of the tags index inside the runtime directory
    pub fn tags_path(&self) -> PathBuf {
        self.runtime_path.join("doc").join("tags")
    }

    /// Render as TOML for the `config` command
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(mut self) -> Result<Self> {
        if self.max_lines == 0 {
            return Err(DocpeekError::Config(
                "max_lines must be at least 1".to_string(),
            ));
        }
        if self
            .formatter
            .as_deref()
            .is_some_and(|cmd| cmd.trim().is_empty())
        {
            self.formatter = None;
        }
        if self.help_flag.trim().is_empty() {
            self.help_flag = DEFAULT_HELP_FLAG.to_string();
        }
        Ok(self)
    }
}

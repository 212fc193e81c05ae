//! Layered CLI configuration.
//!
//! Values resolve as defaults, then the TOML file named by `SHOWDOWN_CONFIG`,
//! then the `SHOWDOWN_SEED`, `SHOWDOWN_PLAYERS` and `SHOWDOWN_LOG` environment
//! variables. Each value remembers where it came from so `cfg` can report it.

use serde::{Deserialize, Serialize};
use std::fs;

use showdown_engine::engine::Engine;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";
pub const PLAYERS_ENV: &str = "SHOWDOWN_PLAYERS";
pub const LOG_ENV: &str = "SHOWDOWN_LOG";

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: vec!["Alex".into(), "Bob".into(), "Jane".into()],
            seed: None,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var(PLAYERS_ENV)
        && !players.is_empty()
    {
        cfg.players = parse_names(&players);
        sources.players = ValueSource::Env;
    }
    if let Ok(level) = std::env::var(LOG_ENV)
        && !level.is_empty()
    {
        cfg.log_level = level.to_ascii_lowercase();
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Split a comma-separated player list, trimming whitespace around names.
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',').map(|n| n.trim().to_string()).collect()
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<Vec<String>>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(&cfg.players)?;
    if !LOG_LEVELS.contains(&cfg.log_level.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown log level '{}'",
            cfg.log_level
        )));
    }
    Ok(())
}

/// Table checks shared by the config file and `deal --players`.
pub fn validate_players(players: &[String]) -> Result<(), ConfigError> {
    let count = players.len();
    if !(Engine::MIN_PLAYERS..=Engine::MAX_PLAYERS).contains(&count) {
        return Err(ConfigError::Invalid(format!(
            "players must number {}..={}, got {}",
            Engine::MIN_PLAYERS,
            Engine::MAX_PLAYERS,
            count
        )));
    }
    for (i, name) in players.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "player names must not be empty".into(),
            ));
        }
        if players[..i].contains(name) {
            return Err(ConfigError::Invalid(format!(
                "duplicate player name '{}'",
                name
            )));
        }
    }
    Ok(())
}

use blackjack_engine::deck::DEFAULT_MULTIPLIER;
use blackjack_engine::player::DEFAULT_BALANCE;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const SEED_ENV: &str = "BLACKJACK_SEED";
pub const DECKS_ENV: &str = "BLACKJACK_DECKS";
pub const BALANCE_ENV: &str = "BLACKJACK_BALANCE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: u32,
    pub decks: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_balance: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
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
            starting_balance: DEFAULT_BALANCE,
            decks: DEFAULT_MULTIPLIER,
            seed: None,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Defaults, then the TOML file named by `BLACKJACK_CONFIG`, then
/// individual environment variables. Later layers win.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(seed) = non_empty_env(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(decks) = non_empty_env(DECKS_ENV) {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(balance) = non_empty_env(BALANCE_ENV) {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    decks: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decks must be >=1".into(),
        ));
    }
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.starting_balance, 10_000);
        assert_eq!(cfg.decks, 4);
        assert_eq!(cfg.seed, None);
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn zero_decks_or_balance_is_rejected() {
        let cfg = Config {
            decks: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        let cfg = Config {
            starting_balance: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn file_config_fields_are_optional() {
        let f: FileConfig = toml::from_str("decks = 6\n").unwrap();
        assert_eq!(f.decks, Some(6));
        assert_eq!(f.seed, None);
        assert_eq!(f.starting_balance, None);
    }
}

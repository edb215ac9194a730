use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Prefix that marks a chat line as a bot command
    pub prefix: String,
    pub seed: Option<u64>,
    /// Render suits as `s h d c` instead of glyphs
    pub ascii_suits: bool,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
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
    pub prefix: ValueSource,
    pub seed: ValueSource,
    pub ascii_suits: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            prefix: ValueSource::Default,
            seed: ValueSource::Default,
            ascii_suits: ValueSource::Default,
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
            prefix: "!".into(),
            seed: None,
            ascii_suits: false,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HILO_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.prefix {
            cfg.prefix = v;
            sources.prefix = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ascii_suits {
            cfg.ascii_suits = v;
            sources.ascii_suits = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Ok(prefix) = std::env::var("HILO_PREFIX")
        && !prefix.is_empty()
    {
        cfg.prefix = prefix;
        sources.prefix = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HILO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ascii) = std::env::var("HILO_ASCII")
        && !ascii.is_empty()
    {
        cfg.ascii_suits =
            parse_bool(&ascii).ok_or_else(|| ConfigError::Invalid("Invalid ascii_suits".into()))?;
        sources.ascii_suits = ValueSource::Env;
    }
    if let Ok(level) = std::env::var("HILO_LOG")
        && !level.is_empty()
    {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ascii_suits: Option<bool>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.prefix.is_empty() || cfg.prefix.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: prefix must be non-empty and contain no whitespace".into(),
        ));
    }
    if cfg.log_level.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: log_level must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const VARS: [&str; 5] = [
        "HILO_CONFIG",
        "HILO_PREFIX",
        "HILO_SEED",
        "HILO_ASCII",
        "HILO_LOG",
    ];

    fn clear_env() {
        for v in VARS {
            // SAFETY: config tests run serially and nothing else reads these vars.
            unsafe { std::env::remove_var(v) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: see clear_env.
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn defaults_without_env() {
        clear_env();
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.prefix, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = \"?\"\nseed = 7\nascii_suits = true").unwrap();
        set_env("HILO_CONFIG", file.path().to_str().unwrap());
        set_env("HILO_SEED", "99");

        let resolved = load_with_sources().unwrap();
        clear_env();

        assert_eq!(resolved.config.prefix, "?");
        assert_eq!(resolved.sources.prefix, ValueSource::File);
        assert!(resolved.config.ascii_suits);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.sources.log_level, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn rejects_bad_values() {
        clear_env();
        set_env("HILO_SEED", "not-a-number");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();

        set_env("HILO_ASCII", "maybe");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();

        set_env("HILO_PREFIX", "! ");
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn missing_config_file_is_io_error() {
        clear_env();
        set_env("HILO_CONFIG", "/definitely/not/here.toml");
        let result = load();
        clear_env();
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

use config::{FileFormat, Value};
use thiserror::Error;

/// The configuration baked into the binary.
pub const CONFIG_YAML: &str = include_str!("../config.yaml");

/// CDN configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend which serves the site
    pub backend: String,
    /// Log level used unless `RUST_LOG` says otherwise
    pub log_level: String,
    /// Rewrite extensionless paths to the index document
    pub default_index: bool,
    /// Set the security headers on responses
    pub web_security: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            backend: "origin".to_string(),
            log_level: "info".to_string(),
            default_index: true,
            web_security: true,
        }
    }
}

/// An error when parsing configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid value for `{0}`")]
    InvalidKey(String),
    #[error("missing value for `{0}`")]
    MissingKey(String),
    #[error("configuration is not valid YAML")]
    InvalidYaml,
}

/// Parse the configuration baked into the binary.
pub fn load() -> Result<Config, ParseError> {
    parse_config(CONFIG_YAML)
}

/// Parse a YAML configuration string.  Missing keys take their
/// defaults.
pub fn parse_config(config_str: &str) -> Result<Config, ParseError> {
    let defaults = Config::default();

    let mut settings = config::Config::new();
    settings
        .merge(config::File::from_str(config_str, FileFormat::Yaml))
        .map_err(|_| ParseError::InvalidYaml)?;

    let backend = parse_string(&settings, "backend", defaults.backend)?;
    let log_level = parse_string(&settings, "log_level", defaults.log_level)?;
    let default_index = parse_bool(&settings, "rules.default_index", defaults.default_index)?;
    let web_security = parse_bool(&settings, "rules.web_security", defaults.web_security)?;

    if backend.is_empty() {
        return Err(ParseError::MissingKey("backend".to_string()));
    }

    Ok(Config {
        backend: backend,
        log_level: log_level,
        default_index: default_index,
        web_security: web_security,
    })
}

/// Get a `String` from the settings, or the default if it is unset.
fn parse_string(settings: &config::Config, key: &str, default: String) -> Result<String, ParseError> {
    match lookup(settings, key) {
        Some(value) => value
            .into_str()
            .map_err(|_| ParseError::InvalidKey(key.to_string())),
        None => Ok(default),
    }
}

/// Get a `bool` from the settings, or the default if it is unset.
fn parse_bool(settings: &config::Config, key: &str, default: bool) -> Result<bool, ParseError> {
    match lookup(settings, key) {
        Some(value) => value
            .into_bool()
            .map_err(|_| ParseError::InvalidKey(key.to_string())),
        None => Ok(default),
    }
}

/// Get a raw `Value` from the settings.
fn lookup(settings: &config::Config, key: &str) -> Option<Value> {
    settings.get::<Value>(key).ok()
}

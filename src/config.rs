//! Runtime configuration: defaults, environment overrides and CLI flags.

use crate::core::constants::{DEFAULT_SHOP_SIZE, TICK_INTERVAL_MS};
use crate::i18n::Language;
use thiserror::Error;

pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Image generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtConfig {
    /// API key for the image service; art is unavailable without one
    pub api_key: Option<String>,
    pub model: String,
    /// Request art for visible entities without waiting for a key press
    pub auto_paint: bool,
    pub enabled: bool,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_IMAGE_MODEL.to_string(),
            auto_paint: false,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub starting_gold: f64,
    pub shop_size: usize,
    pub language: Language,
    /// How often the main loop samples the clock
    pub tick_interval_ms: u64,
    pub art: ArtConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_gold: 0.0,
            shop_size: DEFAULT_SHOP_SIZE,
            language: Language::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            art: ArtConfig::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Play(GameConfig),
    Version,
    Help,
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_language(name: &str, value: &str) -> Result<Language, ConfigError> {
    Language::from_code(value).ok_or_else(|| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

impl GameConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup("INKBLADE_STARTING_GOLD") {
            config.starting_gold = parse_number("INKBLADE_STARTING_GOLD", &v)?;
        }
        if let Some(v) = lookup("INKBLADE_SHOP_SIZE") {
            config.shop_size = parse_number("INKBLADE_SHOP_SIZE", &v)?;
        }
        if let Some(v) = lookup("INKBLADE_LANG") {
            config.language = parse_language("INKBLADE_LANG", &v)?;
        }
        if let Some(v) = lookup("GEMINI_API_KEY") {
            let key = v.trim().to_string();
            config.art.api_key = (!key.is_empty()).then_some(key);
        }
        if let Some(v) = lookup("INKBLADE_IMAGE_MODEL") {
            config.art.model = v.trim().to_string();
        }
        if let Some(v) = lookup("INKBLADE_AUTO_PAINT") {
            config.art.auto_paint = parse_flag("INKBLADE_AUTO_PAINT", &v)?;
        }

        Ok(config)
    }

    /// Applies command-line arguments (without the program name) on top of
    /// this configuration.
    pub fn parse_args(mut self, args: &[String]) -> Result<CliCommand, ConfigError> {
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--version" | "-v" => return Ok(CliCommand::Version),
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--no-art" => self.art.enabled = false,
                "--auto-paint" => self.art.auto_paint = true,
                "--lang" | "--gold" | "--shop-size" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    match arg.as_str() {
                        "--lang" => self.language = parse_language(arg, value)?,
                        "--gold" => self.starting_gold = parse_number(arg, value)?,
                        _ => self.shop_size = parse_number(arg, value)?,
                    }
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(CliCommand::Play(self))
    }

    /// True when art requests can actually reach the image service.
    pub fn art_available(&self) -> bool {
        self.art.enabled && self.art.api_key.is_some()
    }
}

use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

fn default_log_json() -> bool {
    false
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default = "default_log_json")]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            log_json: default_log_json(),
        }
    }
}

impl Config {
    /// Defaults layered with `MORPHODICT_*` environment variables
    pub fn new() -> Self {
        let log_json = env::var("MORPHODICT_LOG_JSON")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_log_json);

        Config {
            dictionary: DictionaryConfig::new(),
            log_json,
        }
    }

    /// Apply environment overrides on top of an already loaded config.
    /// Unset variables leave the loaded values alone.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(tags) = env::var("MORPHODICT_LEXICAL_TAGS") {
            self.dictionary.lexical_tags = dictionary::split_tag_list(&tags);
        }
        if let Ok(source) = env::var("MORPHODICT_DEFAULT_SOURCE") {
            self.dictionary.default_source = source;
        }
        if let Some(log_json) = env::var("MORPHODICT_LOG_JSON")
            .ok()
            .and_then(|v| parse_bool(&v))
        {
            self.log_json = log_json;
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

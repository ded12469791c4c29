use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "OS".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// FST tags which distinguish the lexeme, e.g. `+N` and `+V`, as opposed
    /// to tags that distinguish the wordform within a lexeme, e.g. `+Sg` and
    /// `+Pl`.
    #[serde(default)]
    pub lexical_tags: Vec<String>,
    /// Citation attached to definitions that arrive without sources
    #[serde(default = "default_source")]
    pub default_source: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            lexical_tags: vec![],
            default_source: default_source(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let lexical_tags = env::var("MORPHODICT_LEXICAL_TAGS")
            .map(|v| split_tag_list(&v))
            .unwrap_or_default();

        let default_source =
            env::var("MORPHODICT_DEFAULT_SOURCE").unwrap_or_else(|_| default_source());

        Self {
            lexical_tags,
            default_source,
        }
    }
}

/// Split a comma separated tag list, dropping blanks
pub fn split_tag_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_list() {
        assert_eq!(split_tag_list("+N, +V,,+Ipc "), vec!["+N", "+V", "+Ipc"]);
        assert!(split_tag_list(" , ").is_empty());
    }
}

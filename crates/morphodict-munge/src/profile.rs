use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use morphodict_config::Config;

/// Load a JSON config profile, then apply environment overrides.
/// Without a profile the config comes from defaults and the environment.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(read_profile(path)?.with_env_overrides()),
        None => Ok(Config::new()),
    }
}

/// Parse a JSON config profile as written, without environment overrides
pub fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("parsing config {}", path.display()))
}

/// Add `extra` lexical tags, skipping ones already configured
pub fn extend_lexical_tags(config: &mut Config, extra: impl IntoIterator<Item = String>) {
    for tag in extra {
        if !config.dictionary.lexical_tags.contains(&tag) {
            config.dictionary.lexical_tags.push(tag);
        }
    }
}

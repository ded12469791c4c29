use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use morphodict_config::Config;
use morphodict_core::Dictionary;
use tracing_subscriber::EnvFilter;

pub mod loader;
pub mod profile;

#[cfg(test)]
mod tests;

use self::loader::{RawRecord, RecordLoader};

#[derive(Parser)]
#[command(
    name = "munge",
    about = "Assemble an importjson dictionary from analyzed wordform records"
)]
struct Cli {
    /// JSON array of wordform records
    input: PathBuf,

    /// Where to write the dictionary; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON config profile
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra lexical tag, may be repeated
    #[arg(long = "lexical-tag", value_name = "TAG")]
    lexical_tags: Vec<String>,

    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    profile::extend_lexical_tags(&mut config, cli.lexical_tags);
    init_tracing(cli.json_logs || config.log_json);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    run(&cli.input, cli.output.as_deref(), &config)
}

/// Logs go to stderr so stdout can carry the dictionary
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(input: &Path, output: Option<&Path>, config: &Config) -> anyhow::Result<()> {
    let records = RecordLoader::load_from_file(input)
        .with_context(|| format!("loading {}", input.display()))?;

    let json = assemble(&records, config)?;

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote dictionary to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Populate a fresh dictionary from `records` and render it
pub fn assemble(records: &[RawRecord], config: &Config) -> anyhow::Result<String> {
    if config.dictionary.lexical_tags.is_empty() {
        tracing::warn!("No lexical tags configured, grouping wordforms by FST lemma alone");
    }

    let mut dictionary = Dictionary::from_config(&config.dictionary);
    RecordLoader::populate(&mut dictionary, records)?;

    dictionary.assemble().context("assembling dictionary")
}

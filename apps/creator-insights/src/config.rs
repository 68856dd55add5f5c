use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Input table read from the working directory.
pub const INPUT_FILE: &str = "creator_data.csv";
/// Analysis artifact written to the working directory, overwritten each run.
pub const OUTPUT_FILE: &str = "creator_analysis.txt";

/// Run configuration loaded from environment variables.
/// Fails before any network call if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Endpoint override; `None` means the public OpenAI endpoint.
    pub openai_api_url: Option<String>,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    /// Reads the process environment. `.env` loading happens in `main` so the
    /// outcome can be logged once the subscriber is up.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            openai_api_key: require(&lookup, "OPENAI_API_KEY")?,
            openai_api_url: lookup("OPENAI_API_URL").filter(|url| !url.trim().is_empty()),
            input_path: PathBuf::from(INPUT_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value =
        lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

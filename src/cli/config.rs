//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Notes file used when neither the CLI nor the config names one.
const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// file = "/home/me/notes.json"
/// browser = "firefox --new-tab"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notes file to use when `--file` is not given
    pub file: Option<PathBuf>,

    /// Command `open` launches, with the URL appended or put in place of `%s`
    pub browser: Option<String>,
}

impl Config {
    /// Reads `config.toml` from the notecards config directory.
    ///
    /// A missing file means every setting keeps its built-in default. An
    /// unreadable or malformed file is an error naming its path.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// `notecards/config.toml` under the platform config directory, e.g.
    /// `$XDG_CONFIG_HOME/notecards/config.toml` on Linux.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notecards")
            .join("config.toml")
    }

    /// The notes file: `--file`, then the `file` setting, then
    /// `notes.json` in the working directory.
    pub fn notes_file(&self, cli_file: Option<&PathBuf>) -> PathBuf {
        cli_file
            .cloned()
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE))
    }

    /// The browser command: the `browser` setting, then the first entry of
    /// `$BROWSER`.
    ///
    /// `None` means the platform opener is used.
    pub fn browser(&self) -> Option<String> {
        self.browser
            .clone()
            .filter(|b| !b.trim().is_empty())
            .or_else(browser_from_env)
    }
}

fn browser_from_env() -> Option<String> {
    let list = std::env::var("BROWSER").ok()?;
    first_browser(&list)
}

/// First non-empty command in a colon-separated `$BROWSER` list.
pub(crate) fn first_browser(list: &str) -> Option<String> {
    list.split(':')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

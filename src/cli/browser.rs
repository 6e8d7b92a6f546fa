//! Opening note URLs in the system browser.

use anyhow::{Context, Result, bail};
use std::process::Command;

/// Launches a URL (allows mocking in tests).
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with a configured browser command or the platform opener.
pub struct SystemBrowser {
    browser: Option<String>,
}

impl SystemBrowser {
    /// `browser` may include arguments, e.g. `firefox --new-tab`.
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = launch_command(self.browser.as_deref(), url)?;
        tracing::debug!(%program, ?args, "launching browser");

        Command::new(&program)
            .args(&args)
            .spawn()
            .with_context(|| format!("failed to launch browser '{}'", program))?;
        Ok(())
    }
}

/// Builds the program and arguments used to open `url`.
///
/// A `%s` in the browser command is replaced by the URL; otherwise the URL
/// is passed as the last argument.
pub(crate) fn launch_command(browser: Option<&str>, url: &str) -> Result<(String, Vec<String>)> {
    let Some(browser) = browser else {
        return Ok(platform_opener(url));
    };

    let mut parts = browser.split_whitespace().map(str::to_string);
    let Some(program) = parts.next() else {
        bail!("browser command is empty");
    };
    let mut args: Vec<String> = parts.collect();
    if args.iter().any(|arg| arg.contains("%s")) {
        for arg in &mut args {
            *arg = arg.replace("%s", url);
        }
    } else {
        args.push(url.to_string());
    }
    Ok((program, args))
}

#[cfg(target_os = "macos")]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    ("open".to_string(), vec![url.to_string()])
}

#[cfg(target_os = "windows")]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec![
            "/C".to_string(),
            "start".to_string(),
            String::new(),
            url.to_string(),
        ],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(url: &str) -> (String, Vec<String>) {
    ("xdg-open".to_string(), vec![url.to_string()])
}

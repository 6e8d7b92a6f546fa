//! notecards - short notes with a link, a category color, and a favorite star

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_categories, handle_completions, handle_delete, handle_edit,
        handle_favorite, handle_list, handle_open, handle_search, handle_show,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let notes_file = config.notes_file(cli.file.as_ref());
    tracing::debug!(path = %notes_file.display(), "using notes file");

    match &cli.command {
        Command::Add(args) => handle_add(args, &notes_file),
        Command::Edit(args) => handle_edit(args, &notes_file),
        Command::Delete(args) => handle_delete(args, &notes_file),
        Command::Favorite(args) => handle_favorite(args, &notes_file),
        Command::List(args) => handle_list(args, &notes_file),
        Command::Search(args) => handle_search(args, &notes_file),
        Command::Show(args) => handle_show(args, &notes_file),
        Command::Categories(args) => handle_categories(args, &notes_file),
        Command::Open(args) => handle_open(args, &notes_file, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` raises the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notecards={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

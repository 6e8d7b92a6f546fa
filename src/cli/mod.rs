//! CLI command definitions and handlers

pub mod browser;
pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notecards - short notes with a link, a category, and a favorite star
#[derive(Parser, Debug)]
#[command(name = "notecards", version, about, long_about = None)]
pub struct Cli {
    /// Notes file (overrides config file)
    #[arg(short = 'F', long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new note
    Add(AddArgs),

    /// Change fields of a saved note
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Toggle a note's favorite star
    #[command(name = "fav")]
    Favorite(FavoriteArgs),

    /// List notes, or only favorites
    #[command(name = "ls")]
    List(ListArgs),

    /// Find notes by title, category, or body text
    Search(SearchArgs),

    /// Show a note's full contents
    Show(ShowArgs),

    /// List categories and their colors
    Categories(CategoriesArgs),

    /// Open a note's URL in the browser
    Open(OpenArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Link associated with the note
    #[arg(short, long, default_value = "")]
    pub url: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// Category (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Mark the new note as a favorite
    #[arg(long)]
    pub favorite: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note number (from `ls`) or title
    pub note: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New link
    #[arg(short, long)]
    pub url: Option<String>,

    /// New body
    #[arg(short, long)]
    pub notes: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `rm` (delete) command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note number (from `ls`) or title
    pub note: String,
}

/// Arguments for the `fav` command
#[derive(Parser, Debug)]
pub struct FavoriteArgs {
    /// Note number (from `ls`) or title
    pub note: String,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show only favorite notes
    #[arg(long)]
    pub favorites: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note number (from `ls`) or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Only categories containing this text
    pub partial: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `open` command
#[derive(Parser, Debug)]
pub struct OpenArgs {
    /// Note number (from `ls`) or title
    pub note: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

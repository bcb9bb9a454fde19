//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - short categorized notes in a local SQLite file
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a note
    Add(AddArgs),

    /// List notes, optionally filtered by category and text
    #[command(name = "ls")]
    List(ListArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Change a note's text or category
    Edit(EditArgs),

    /// List the available categories
    Categories(CategoriesArgs),

    /// Interactive session: add, filter, select, edit and delete notes
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Row filters shared by commands that address notes by row number.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only notes in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only notes whose text contains this (case-insensitive)
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text
    pub text: String,

    /// Category for the note (defaults to the configured default)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Row number (as shown by `ls` with the same filters), ID prefix, or exact text
    pub note: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Row number (as shown by `ls` with the same filters), ID prefix, or exact text
    pub note: String,

    /// New text
    #[arg(short, long)]
    pub text: Option<String>,

    /// New category
    #[arg(short = 'C', long = "set-category")]
    pub set_category: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `categories` command
#[derive(Parser, Debug)]
pub struct CategoriesArgs {
    /// Show note counts for each category
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

//! jot - short categorized notes kept in a local SQLite file

pub mod cli;
pub mod domain;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_categories, handle_completions, handle_edit, handle_list,
        handle_remove, handle_shell,
    },
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let db_path = config.db_path(cli.db.as_ref());

    match &cli.command {
        Command::Add(args) => handle_add(args, &db_path, &config),
        Command::List(args) => handle_list(args, &db_path, &config),
        Command::Rm(args) => handle_remove(args, &db_path, &config),
        Command::Edit(args) => handle_edit(args, &db_path, &config),
        Command::Categories(args) => handle_categories(args, &db_path, &config),
        Command::Shell => handle_shell(&db_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}

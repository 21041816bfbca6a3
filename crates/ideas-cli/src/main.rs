//! Ideas CLI - keep a journal of daily ideas from the terminal
//!
//! Every command talks to the ideas API through the shared note store.

mod cli;
mod commands;
mod error;
mod terminal;


use clap::Parser;
use ideas_core::{ClientConfig, HttpNoteRemote, NoteStore};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, EditFields};
use crate::commands::list::run_list;
use crate::commands::set_completed::run_set_completed;
use crate::commands::stats::run_stats;
use crate::commands::week::run_week;
use crate::error::CliError;
use crate::terminal::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ideas=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let config = resolve_config(cli.api_url.as_deref(), cli.locale.as_deref())?;
    tracing::debug!(api = %config.api_base_url, locale = ?config.locale, "Resolved client config");
    let remote = HttpNoteRemote::new(config.api_base_url.clone(), config.http_timeout)?;
    let terminal = Terminal::stdio(config.toast_duration);
    let mut store = NoteStore::new(remote, terminal, config.locale);

    match cli.command {
        Commands::List { all, json } => run_list(&mut store, all, json).await,
        Commands::Add {
            title,
            content,
            category,
        } => run_add(&mut store, &title, &content, category).await,
        Commands::Edit {
            id,
            title,
            content,
            category,
        } => {
            let fields = EditFields {
                title,
                content,
                category,
            };
            run_edit(&mut store, &id, fields).await
        }
        Commands::Done { id } => run_set_completed(&mut store, &id, true).await,
        Commands::Undo { id } => run_set_completed(&mut store, &id, false).await,
        Commands::Delete { id, yes } => run_delete(&mut store, &id, yes).await,
        Commands::Stats { json } => run_stats(&mut store, json).await,
        Commands::Week => run_week(&mut store).await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Environment first, then command-line overrides.
fn resolve_config(api_url: Option<&str>, locale: Option<&str>) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = api_url {
        config.set_api_base_url(url)?;
    }
    if let Some(locale) = locale {
        config.set_locale(locale)?;
    }
    Ok(config)
}

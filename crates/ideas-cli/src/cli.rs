use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use ideas_core::{Category, NoteId};

#[derive(Parser)]
#[command(name = "ideas")]
#[command(about = "Keep a small journal of daily ideas, thoughts and reminders")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the ideas API (overrides IDEAS_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Locale for dates and weekday names, e.g. pt_BR (overrides IDEAS_LOCALE)
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes (today's by default)
    #[command(alias = "ls")]
    List {
        /// Show every note instead of today's
        #[arg(short, long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a note dated now
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Note content
        #[arg(required = true)]
        content: Vec<String>,
        /// Note category (meta, thought, idea, reminder)
        #[arg(short, long, default_value = "idea")]
        category: Category,
    },
    /// Edit a note's title, content or category
    #[command(group(
        ArgGroup::new("fields")
            .required(true)
            .multiple(true)
            .args(["title", "content", "category"])
    ))]
    Edit {
        /// Note ID
        id: NoteId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<Category>,
    },
    /// Mark a note as done
    Done {
        /// Note ID
        id: NoteId,
    },
    /// Mark a note as not done
    Undo {
        /// Note ID
        id: NoteId,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID
        id: NoteId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show totals and the completion rate
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show notes per day for the last seven days
    Week,
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

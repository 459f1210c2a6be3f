mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kalima-cli", about = "Arabic vocabulary trainer", version)]
struct Cli {
    /// Data directory for progress files (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the vocabulary catalog JSON (default: vocabulary.json in the
    /// data directory)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show overall learning progress
    Stats,

    /// List words by category with their ratings
    List {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
        /// Only words rated exactly this many stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        stars: Option<u8>,
        /// Hide fully rated (3-star) words
        #[arg(long)]
        hide_known: bool,
    },

    /// Search words by Arabic or English text
    Search {
        /// Substring to look for
        query: String,
    },

    /// Toggle the learned flag on a word
    Learn {
        /// Arabic key of the word
        arabic: String,
    },

    /// Run a multiple-choice quiz
    Quiz,

    /// Study flashcards interactively
    Flashcards {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
        /// Only words rated exactly this many stars
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        stars: Option<u8>,
        /// Hide fully rated (3-star) words
        #[arg(long)]
        hide_known: bool,
        /// Show English first instead of Arabic
        #[arg(long)]
        reverse: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.catalog.as_deref(), cli.data_dir.as_deref())?;

    match cli.command {
        Command::Stats => commands::stats::run(&app)?,
        Command::List {
            category,
            stars,
            hide_known,
        } => commands::list::run(&app, category.as_deref(), stars, hide_known)?,
        Command::Search { query } => commands::search::run(&app, &query)?,
        Command::Learn { arabic } => commands::learn::run(&mut app, &arabic)?,
        Command::Quiz => commands::quiz::run(&app)?,
        Command::Flashcards {
            category,
            stars,
            hide_known,
            reverse,
        } => commands::flashcards::run(&mut app, category.as_deref(), stars, hide_known, reverse)?,
    }

    Ok(())
}

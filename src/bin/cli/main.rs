mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use flashsprint::scheduler::SchedulerKind;

#[derive(Parser)]
#[command(name = "flashsprint", about = "Flashcard practice with spaced repetition", version)]
struct Cli {
    /// Directory holding the card file (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Scheduling policy
    #[arg(long, global = true, default_value = "rotation")]
    scheduler: SchedulerArg,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum SchedulerArg {
    /// Five-box Leitner ladder
    Ladder,
    /// Rotation queue with interval doubling
    Rotation,
}

impl From<SchedulerArg> for SchedulerKind {
    fn from(arg: SchedulerArg) -> Self {
        match arg {
            SchedulerArg::Ladder => SchedulerKind::Ladder,
            SchedulerArg::Rotation => SchedulerKind::Rotation,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Add a card
    Add {
        /// Question text
        question: String,
        /// Answer text
        answer: String,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },

    /// Edit a card's content
    Edit {
        /// Card id
        id: u64,
        /// New question text
        #[arg(long)]
        question: Option<String>,
        /// New answer text
        #[arg(long)]
        answer: Option<String>,
        /// Comma-separated tags (replaces the card's tags)
        #[arg(long)]
        tags: Option<String>,
    },

    /// Delete a card
    Delete {
        /// Card id
        id: u64,
    },

    /// List all cards
    List,

    /// Find cards by tag
    Search {
        /// Tag to look up (case-insensitive)
        tag: String,
    },

    /// List tags with counts
    Tags,

    /// Run an interactive practice session
    Practice {
        /// Stop after this many cards
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show box and review statistics
    Stats,

    /// Insert the bundled sample cards
    Seed,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.data_dir.as_deref(), cli.scheduler.into())?;

    match cli.command {
        Command::Add { question, answer, tags } => {
            commands::add::run(&mut app, &question, &answer, tags.as_deref(), &cli.format)?;
        }
        Command::Edit { id, question, answer, tags } => {
            commands::edit::run(
                &mut app,
                id,
                question.as_deref(),
                answer.as_deref(),
                tags.as_deref(),
                &cli.format,
            )?;
        }
        Command::Delete { id } => {
            commands::delete::run(&mut app, id)?;
        }
        Command::List => {
            commands::list::run(&app, &cli.format)?;
        }
        Command::Search { tag } => {
            commands::search::run(&app, &tag, &cli.format)?;
        }
        Command::Tags => {
            commands::tags::run(&app, &cli.format)?;
        }
        Command::Practice { limit } => {
            commands::practice::run(&mut app, limit)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format)?;
        }
        Command::Seed => {
            commands::seed::run(&mut app, &cli.format)?;
        }
    }

    Ok(())
}

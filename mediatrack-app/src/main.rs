//! MediaTrack command-line front end.
//!
//! Each invocation opens the collection, turns the subcommand into one or
//! more intents, prints the result and exits.
//!
//! Usage:
//!   mediatrack add --title "Frieren" --type anime --total 28
//!   mediatrack list --filter anime
//!   mediatrack inc <ID>
//!   mediatrack batch < intents.jsonl

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mediatrack_app::{run_batch, Command, Outcome, Tracker, TrackerConfig};
use mediatrack_model::{CardView, Filter, ItemForm};
use mediatrack_storage::{FileBackend, LoadReport};
use mediatrack_types::{ItemId, StatusChangeMode};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "mediatrack")]
#[command(about = "Track progress through anime, manga, manhwa and novels")]
struct Args {
    /// Directory holding the collection blob
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured status change mode (select or cycle)
    #[arg(long)]
    status_mode: Option<StatusChangeMode>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Show items, sorted by title
    List {
        /// "all" or a media type
        #[arg(short, long, default_value = "all")]
        filter: Filter,
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an item
    Add {
        #[arg(long)]
        title: String,
        #[arg(long = "type")]
        media_type: String,
        #[arg(long, default_value = "plan")]
        status: String,
        #[arg(long, default_value = "0")]
        current: String,
        /// Leave out for no known total
        #[arg(long, default_value = "")]
        total: String,
    },
    /// Edit fields of an item
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        media_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        current: Option<String>,
        #[arg(long)]
        total: Option<String>,
    },
    /// Advance progress by one
    Inc { id: String },
    /// Step progress back by one
    Dec { id: String },
    /// Set the status (select mode)
    Status { id: String, status: String },
    /// Advance the status ring (cycle mode)
    Cycle { id: String },
    /// Delete an item
    Rm { id: String },
    /// Read JSON intents from stdin, one per line, and print outcomes
    Batch,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = load_config(&args)?;
    let data_dir = config.resolved_data_dir();
    debug!("Using data dir {:?}", data_dir);

    let (mut tracker, report) = Tracker::open(FileBackend::new(&data_dir), &config)
        .with_context(|| format!("Failed to open collection in {}", data_dir.display()))?;
    if let LoadReport::Recovered { reason } = &report {
        warn!("Stored collection was unreadable and has been reset: {}", reason);
    }

    match args.action {
        Action::List { filter, search, json } => {
            tracker.dispatch(Command::SetFilter(filter))?;
            tracker.dispatch(Command::SetSearch(search))?;
            print_list(&tracker, json)?;
        }
        Action::Add { title, media_type, status, current, total } => {
            let form = ItemForm { title, media_type, status, current, total };
            let outcome = tracker.dispatch(Command::Add(form))?;
            if let Outcome::Created(id) = outcome {
                println!("{id}");
            }
        }
        Action::Edit { id, title, media_type, status, current, total } => {
            let id = ItemId::from(id);
            tracker.dispatch(Command::BeginEdit(id.clone()))?;
            let Some(mut form) = tracker.editing_form() else {
                bail!("No item with id {id}");
            };
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(media_type) = media_type {
                form.media_type = media_type;
            }
            if let Some(status) = status {
                form.status = status;
            }
            if let Some(current) = current {
                form.current = current;
            }
            if let Some(total) = total {
                form.total = total;
            }
            tracker.dispatch(Command::SubmitEdit(form))?;
            print_card(&tracker, &id);
        }
        Action::Inc { id } => report_patch(tracker.dispatch(Command::Increment(id.into()))?),
        Action::Dec { id } => report_patch(tracker.dispatch(Command::Decrement(id.into()))?),
        Action::Status { id, status } => {
            let outcome = tracker.dispatch(Command::SetStatus { id: id.into(), status })?;
            report_patch(outcome);
        }
        Action::Cycle { id } => report_patch(tracker.dispatch(Command::CycleStatus(id.into()))?),
        Action::Rm { id } => {
            tracker.dispatch(Command::RequestDelete(id.clone().into()))?;
            match tracker.dispatch(Command::ConfirmDelete)? {
                Outcome::Rerender => println!("Deleted {id}"),
                _ => println!("No item with id {id}"),
            }
        }
        Action::Batch => {
            let summary = run_batch(&mut tracker, io::stdin().lock(), io::stdout().lock())
                .context("Batch run failed")?;
            if summary.failed > 0 {
                warn!(failed = summary.failed, "Some intents were rejected");
            }
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<TrackerConfig> {
    let path = args.config.clone().or_else(TrackerConfig::default_path);
    let mut config = match path {
        Some(path) => TrackerConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TrackerConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(mode) = args.status_mode {
        config.status_mode = mode;
    }
    Ok(config)
}

fn print_list(tracker: &Tracker<FileBackend>, json: bool) -> Result<()> {
    let cards = tracker.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }
    if cards.is_empty() {
        println!("No media found. {}", tracker.query().empty_message());
        return Ok(());
    }
    for card in &cards {
        println!("{}", format_card(card));
    }
    Ok(())
}

fn print_card(tracker: &Tracker<FileBackend>, id: &ItemId) {
    if let Some(item) = tracker.store().get(id) {
        println!("{}", format_card(&CardView::from_item(item)));
    }
}

fn format_card(card: &CardView) -> String {
    format!(
        "{}  {}  [{}]  {}  {} ({}%)",
        card.id(),
        card.title,
        card.type_badge,
        card.patch.status_label,
        card.patch.progress_text,
        card.patch.percentage,
    )
}

fn report_patch(outcome: Outcome) {
    match outcome {
        Outcome::Patch(patch) => println!(
            "{}  {}  {} ({}%)",
            patch.id, patch.status_label, patch.progress_text, patch.percentage
        ),
        _ => println!("No change"),
    }
}

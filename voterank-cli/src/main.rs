mod config;
mod input;
mod output;

use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use voterank_core::{rank_item_with_z, VoteItem, DEFAULT_Z};

use crate::config::VoterankConfig;
use crate::input::{parse_items_from_str, parse_record, LabeledItem};
use crate::output::{render_json, render_table, sort_rows, RankedRow, SortKey};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "voterank", version, about = "Rank voted content by hot, best and net score")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank a list of items
    Rank(RankArgs),
    /// Rank a single item given on the command line
    Item(ItemArgs),
    /// Create a default config file at ~/.config/voterank/config.toml
    Init,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// z-score for the best column (default 1.281551565545, ~80% confidence)
    #[arg(long)]
    z: Option<f64>,

    /// Output JSON instead of table
    #[arg(long, conflicts_with = "table")]
    json: bool,

    /// Output a table even if the config file sets `json = true`
    #[arg(long)]
    table: bool,

    /// Path to config file (default: ~/.config/voterank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser)]
struct RankArgs {
    /// File of items: JSON array, JSON Lines, or "UP DOWN CREATED_AT [LABEL]" per line
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline item as "UP DOWN CREATED_AT [LABEL]" (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Sort key: "hot", "best", "score" or "input"
    #[arg(long)]
    sort: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser)]
struct ItemArgs {
    /// Upvote count
    #[arg(allow_negative_numbers = true)]
    upvotes: f64,

    /// Downvote count
    #[arg(allow_negative_numbers = true)]
    downvotes: f64,

    /// Creation time, seconds since the Unix epoch
    #[arg(allow_negative_numbers = true)]
    created_at: f64,

    #[command(flatten)]
    output: OutputArgs,
}

/// Settings resolved from CLI args, config file and built-in defaults (in that order).
#[derive(Debug, PartialEq)]
struct Settings {
    z: f64,
    json: bool,
    sort: SortKey,
}

/// Merge CLI args over config values over built-in defaults.
fn merge_settings(
    output: &OutputArgs,
    sort: Option<&str>,
    cfg: &VoterankConfig,
) -> Result<Settings, String> {
    let z = output.z.or(cfg.z).unwrap_or(DEFAULT_Z);
    if !z.is_finite() || z <= 0.0 {
        return Err(format!("z must be a positive number, got {z}"));
    }

    let sort = match sort.or(cfg.sort.as_deref()) {
        None => SortKey::Hot,
        Some(value) => SortKey::parse(value).ok_or_else(|| {
            format!("Unknown sort key \"{value}\". Use \"hot\", \"best\", \"score\" or \"input\".")
        })?,
    };

    let json = if output.json {
        true
    } else if output.table {
        false
    } else {
        cfg.json.unwrap_or(false)
    };

    Ok(Settings { z, json, sort })
}

fn resolve_settings(output: &OutputArgs, sort: Option<&str>) -> Settings {
    let config_path = output.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    merge_settings(output, sort, &cfg).unwrap_or_else(|e| bail(e))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load items from all sources: --items file, --item inline args, or stdin.
fn load_items(args: &RankArgs) -> Vec<LabeledItem> {
    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content)
            .unwrap_or_else(|e| bail(format!("{}: {e}", path.display())));
        tracing::debug!(count = items.len(), path = %path.display(), "loaded items from file");
    }

    for (i, record) in args.inline_items.iter().enumerate() {
        let (item, label) = parse_record(record)
            .unwrap_or_else(|e| bail(format!("--item \"{record}\": {e}")));
        let label = label.unwrap_or_else(|| format!("item {}", items.len() + 1));
        tracing::debug!(index = i, label = %label, "parsed inline item");
        items.push(LabeledItem { label, item });
    }

    // From stdin (only if no file and no inline items)
    if args.items.is_none() && items.is_empty() {
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            bail(
                "No items provided. Use --items <file>, --item \"UP DOWN CREATED_AT\", \
                 or pipe items via stdin.",
            );
        }
        let mut content = String::new();
        stdin.read_to_string(&mut content)
            .unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}")));
        items = parse_items_from_str(&content)
            .unwrap_or_else(|e| bail(format!("stdin: {e}")));
        tracing::debug!(count = items.len(), "loaded items from stdin");
    }

    if items.is_empty() {
        bail("No items to rank.");
    }
    items
}

fn emit(rows: &[RankedRow], settings: &Settings) {
    if settings.json {
        let json = render_json(rows, settings.z)
            .unwrap_or_else(|e| bail(format!("Failed to serialize output: {e}")));
        println!("{json}");
    } else {
        print!("{}", render_table(rows, settings.z));
    }
}

fn run_rank(args: RankArgs) {
    let settings = resolve_settings(&args.output, args.sort.as_deref());
    let items = load_items(&args);

    let mut rows: Vec<RankedRow> = items
        .iter()
        .map(|labeled| RankedRow::new(labeled, rank_item_with_z(&labeled.item, settings.z)))
        .collect();
    sort_rows(&mut rows, settings.sort);

    tracing::info!(items = rows.len(), sort = ?settings.sort, z = settings.z, "ranked items");
    emit(&rows, &settings);
}

fn run_item(args: ItemArgs) {
    let settings = resolve_settings(&args.output, Some("input"));
    let labeled = LabeledItem {
        label: "item 1".to_string(),
        item: VoteItem::from_raw(args.upvotes, args.downvotes, args.created_at),
    };
    tracing::debug!(item = ?labeled.item, "coerced item");

    let rows = [RankedRow::new(&labeled, rank_item_with_z(&labeled.item, settings.z))];
    emit(&rows, &settings);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => {
            init_logging(args.output.verbose);
            run_rank(args);
        }
        Commands::Item(args) => {
            init_logging(args.output.verbose);
            run_item(args);
        }
        Commands::Init => {
            init_logging(false);
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default z, sort key, etc.");
        }
    }
}

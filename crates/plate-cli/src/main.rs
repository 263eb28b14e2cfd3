//! `plate`: command-line front end for the Plate nutrition core.
//!
//! # Usage
//!
//! ```text
//! plate search taco
//! plate show "Spicy Ramen" --grams 200
//! plate --config ~/.config/plate/config.toml progress --date 2024-06-03
//! ```

mod app;
mod config;
mod render;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use app::App;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use config::{ConfigFile, Overrides, Settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "plate", version, about = "Meal catalog and nutrition tracker")]
struct Args {
  /// Path to a TOML config file (catalog, log, history, me, [goals]).
  #[arg(short, long, value_name = "FILE", env = "PLATE_CONFIG")]
  config: Option<PathBuf>,

  /// Meal catalog JSON file (default: bundled sample catalog).
  #[arg(long, value_name = "FILE", env = "PLATE_CATALOG")]
  catalog: Option<PathBuf>,

  /// Food log JSON file (default: bundled sample log).
  #[arg(long, value_name = "FILE", env = "PLATE_LOG")]
  log: Option<PathBuf>,

  /// Daily totals JSON file (default: bundled sample week).
  #[arg(long, value_name = "FILE", env = "PLATE_HISTORY")]
  history: Option<PathBuf>,

  /// Creator label of your own meals.
  #[arg(long, env = "PLATE_ME")]
  me: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Search meals by name (case-insensitive); no query lists everything.
  Search {
    #[arg(default_value = "")]
    query: String,
  },
  /// List your own recipes, or everyone else's with --others.
  Recipes {
    #[arg(long)]
    others: bool,
  },
  /// Show one meal scaled to a portion weight.
  Show {
    name:  String,
    /// Portion weight in grams (default: the meal's reference serving).
    #[arg(short, long)]
    grams: Option<f64>,
  },
  /// Progress towards today's goals from the food log.
  Progress {
    /// Day to total, as YYYY-MM-DD (default: latest logged day).
    #[arg(long)]
    date: Option<NaiveDate>,
  },
  /// Daily history and its average.
  History,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg = match &args.config {
    Some(path) => ConfigFile::load(path)?,
    None => ConfigFile::default(),
  };
  let settings = Settings::resolve(
    Overrides {
      catalog: args.catalog,
      log:     args.log,
      history: args.history,
      me:      args.me,
    },
    file_cfg,
  );
  tracing::debug!(
    catalog = %settings.catalog,
    log = %settings.log,
    history = %settings.history,
    me = %settings.me,
    "resolved settings"
  );

  let app = App::new(settings);
  let output = match args.command {
    Command::Search { query } => app.search(&query)?,
    Command::Recipes { others } => app.recipes(others)?,
    Command::Show { name, grams } => app.show(&name, grams)?,
    Command::Progress { date } => app.progress(date)?,
    Command::History => app.history()?,
  };
  print!("{output}");

  Ok(())
}

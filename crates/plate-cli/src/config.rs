//! Configuration: optional TOML file merged under command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plate_core::goals::DailyGoals;
use serde::Deserialize;

use crate::source::Source;

/// Creator label that marks the current user's own meals.
pub const DEFAULT_ME: &str = "You";

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  pub catalog: Option<PathBuf>,
  pub log:     Option<PathBuf>,
  pub history: Option<PathBuf>,
  pub me:      Option<String>,
  #[serde(default)]
  pub goals:   GoalsSection,
}

/// `[goals]` table; missing keys keep the built-in goal.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GoalsSection {
  pub energy_kcal:    Option<f64>,
  pub protein_g:      Option<f64>,
  pub carbohydrate_g: Option<f64>,
  /// Fat is left untracked unless this is set.
  pub fat_g:          Option<f64>,
}

impl GoalsSection {
  fn resolve(&self) -> DailyGoals {
    let base = DailyGoals::default();
    DailyGoals {
      energy_kcal:    self.energy_kcal.unwrap_or(base.energy_kcal),
      protein_g:      self.protein_g.unwrap_or(base.protein_g),
      carbohydrate_g: self.carbohydrate_g.unwrap_or(base.carbohydrate_g),
      fat_g:          self.fat_g.or(base.fat_g),
    }
  }
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    Self::parse(&raw)
      .with_context(|| format!("parsing config file {}", path.display()))
  }

  pub fn parse(raw: &str) -> Result<Self> { Ok(toml::from_str(raw)?) }
}

// ─── Resolved settings ────────────────────────────────────────────────────────

/// Values given on the command line (or through their environment
/// variables); each one overrides the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
  pub catalog: Option<PathBuf>,
  pub log:     Option<PathBuf>,
  pub history: Option<PathBuf>,
  pub me:      Option<String>,
}

/// Fully-resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
  pub catalog: Source,
  pub log:     Source,
  pub history: Source,
  pub me:      String,
  pub goals:   DailyGoals,
}

impl Settings {
  /// Flags override the config file, which overrides the bundled defaults.
  pub fn resolve(overrides: Overrides, file: ConfigFile) -> Self {
    let pick = |flag: Option<PathBuf>, cfg: Option<PathBuf>, bundled: Source| {
      flag.or(cfg).map(Source::File).unwrap_or(bundled)
    };

    Self {
      catalog: pick(overrides.catalog, file.catalog, Source::bundled_catalog()),
      log:     pick(overrides.log, file.log, Source::bundled_log()),
      history: pick(overrides.history, file.history, Source::bundled_week()),
      me:      overrides
        .me
        .or(file.me)
        .unwrap_or_else(|| DEFAULT_ME.to_string()),
      goals:   file.goals.resolve(),
    }
  }
}

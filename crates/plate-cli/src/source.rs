//! JSON-backed providers for the catalog, the food log and the history.
//!
//! Each source is either one of the bundled sample files or a path on disk.
//! Every call re-reads the source and returns a fresh snapshot.

use std::{borrow::Cow, fmt, path::PathBuf};

use plate_core::{
  catalog::ensure_unique_ids,
  history::DailyMacroTotals,
  log::LogEntry,
  meal::MealRecord,
  provider::{CatalogProvider, DailyTotalsProvider, FoodLogProvider},
};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");
pub const BUNDLED_LOG: &str = include_str!("../data/log.json");
pub const BUNDLED_WEEK: &str = include_str!("../data/week.json");

#[derive(Debug, Error)]
pub enum SourceError {
  #[error("reading {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("parsing {origin}: {source}")]
  Json {
    origin: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid catalog entry: {0}")]
  Invalid(#[from] plate_core::Error),
}

// ─── Source ───────────────────────────────────────────────────────────────────

/// Where a JSON document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
  /// One of the sample files compiled into the binary.
  Bundled { name: &'static str, json: &'static str },
  File(PathBuf),
}

impl Source {
  pub fn bundled_catalog() -> Self {
    Self::Bundled { name: "catalog.json", json: BUNDLED_CATALOG }
  }

  pub fn bundled_log() -> Self {
    Self::Bundled { name: "log.json", json: BUNDLED_LOG }
  }

  pub fn bundled_week() -> Self {
    Self::Bundled { name: "week.json", json: BUNDLED_WEEK }
  }

  fn read(&self) -> Result<Cow<'static, str>, SourceError> {
    match self {
      Self::Bundled { json, .. } => Ok(Cow::Borrowed(*json)),
      Self::File(path) => std::fs::read_to_string(path)
        .map(Cow::Owned)
        .map_err(|source| SourceError::Io {
          path: path.clone(),
          source,
        }),
    }
  }

  fn load<T: DeserializeOwned>(&self) -> Result<T, SourceError> {
    let raw = self.read()?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Json {
      origin: self.to_string(),
      source,
    })
  }
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bundled { name, .. } => write!(f, "bundled {name}"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

// ─── Providers ────────────────────────────────────────────────────────────────

/// A catalog stored as a JSON array of meal records.
#[derive(Debug, Clone)]
pub struct JsonCatalog(pub Source);

impl CatalogProvider for JsonCatalog {
  type Error = SourceError;

  fn meals(&self) -> Result<Vec<MealRecord>, Self::Error> {
    let meals: Vec<MealRecord> = self.0.load()?;
    for meal in &meals {
      meal.validate()?;
    }
    ensure_unique_ids(&meals)?;
    Ok(meals)
  }
}

/// A food log stored as a JSON array of entries.
#[derive(Debug, Clone)]
pub struct JsonFoodLog(pub Source);

impl FoodLogProvider for JsonFoodLog {
  type Error = SourceError;

  fn entries(&self) -> Result<Vec<LogEntry>, Self::Error> { self.0.load() }
}

/// A history series stored as a JSON array of daily totals.
#[derive(Debug, Clone)]
pub struct JsonHistory(pub Source);

impl DailyTotalsProvider for JsonHistory {
  type Error = SourceError;

  fn daily_totals(&self) -> Result<Vec<DailyMacroTotals>, Self::Error> {
    self.0.load()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn bundled_catalog_is_valid() {
    let meals = JsonCatalog(Source::bundled_catalog()).meals().unwrap();
    assert_eq!(meals.len(), 16);
    let ids: HashSet<_> = meals.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), meals.len());
    assert!(meals.iter().all(|m| m.serving_weight_g == 100));
  }

  #[test]
  fn bundled_log_references_bundled_catalog() {
    let meals = JsonCatalog(Source::bundled_catalog()).meals().unwrap();
    let ids: HashSet<_> = meals.iter().map(|m| m.id).collect();
    let entries = JsonFoodLog(Source::bundled_log()).entries().unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| ids.contains(&e.meal_id)));
  }

  #[test]
  fn bundled_week_has_seven_days() {
    let week = JsonHistory(Source::bundled_week()).daily_totals().unwrap();
    let days: Vec<_> = week.iter().map(|d| d.day.as_str()).collect();
    assert_eq!(days, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let source = Source::File(PathBuf::from("/nonexistent/plate/meals.json"));
    let err = JsonCatalog(source).meals().unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
  }

  #[test]
  fn blank_meal_name_is_rejected() {
    let json = r#"[{"name": " ", "creator": "You", "energy_kcal": 1,
                    "protein_g": 0, "carbohydrate_g": 0}]"#;
    let source = Source::Bundled { name: "inline", json };
    let err = JsonCatalog(source).meals().unwrap_err();
    assert!(matches!(err, SourceError::Invalid(_)));
  }

  #[test]
  fn repeated_meal_id_is_rejected() {
    let json = r#"[
      {"id": "6f1c2a4e-0b7d-4c8e-9a31-2d5e8f7b1c90", "name": "Tacos",
       "creator": "You", "energy_kcal": 420, "protein_g": 18, "carbohydrate_g": 45},
      {"id": "6f1c2a4e-0b7d-4c8e-9a31-2d5e8f7b1c90", "name": "Fish Tacos",
       "creator": "Sea Shack", "energy_kcal": 380, "protein_g": 22, "carbohydrate_g": 35}
    ]"#;
    let source = Source::Bundled { name: "inline", json };
    let err = JsonCatalog(source).meals().unwrap_err();
    assert!(matches!(
      err,
      SourceError::Invalid(plate_core::Error::DuplicateMealId(_))
    ));
  }

  #[test]
  fn malformed_json_names_its_origin() {
    let source = Source::Bundled { name: "broken.json", json: "[{" };
    let err = JsonHistory(source).daily_totals().unwrap_err();
    assert!(err.to_string().starts_with("parsing bundled broken.json"));
  }
}

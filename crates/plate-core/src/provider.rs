//! Provider traits: the seams through which the core receives its data.
//!
//! Implemented by whatever owns the data (bundled samples, files, a future
//! persistence layer). Every call hands back a snapshot that the core only
//! reads; nothing here mutates the source.

use std::convert::Infallible;

use crate::{history::DailyMacroTotals, log::LogEntry, meal::MealRecord};

/// Supplies the ordered meal catalog.
pub trait CatalogProvider {
  type Error: std::error::Error + Send + Sync + 'static;

  fn meals(&self) -> Result<Vec<MealRecord>, Self::Error>;
}

/// Supplies logged portions for daily accumulation.
pub trait FoodLogProvider {
  type Error: std::error::Error + Send + Sync + 'static;

  fn entries(&self) -> Result<Vec<LogEntry>, Self::Error>;
}

/// Supplies an ordered series of per-day totals.
pub trait DailyTotalsProvider {
  type Error: std::error::Error + Send + Sync + 'static;

  fn daily_totals(&self) -> Result<Vec<DailyMacroTotals>, Self::Error>;
}

impl CatalogProvider for Vec<MealRecord> {
  type Error = Infallible;

  fn meals(&self) -> Result<Vec<MealRecord>, Self::Error> { Ok(self.clone()) }
}

impl FoodLogProvider for Vec<LogEntry> {
  type Error = Infallible;

  fn entries(&self) -> Result<Vec<LogEntry>, Self::Error> { Ok(self.clone()) }
}

impl DailyTotalsProvider for Vec<DailyMacroTotals> {
  type Error = Infallible;

  fn daily_totals(&self) -> Result<Vec<DailyMacroTotals>, Self::Error> {
    Ok(self.clone())
  }
}

//! Food log accumulation: logged portions of catalog meals folded into daily
//! totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result, history::DailyMacroTotals, meal::MealRecord, serving,
};

/// One logged portion of a catalog meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
  pub meal_id: Uuid,
  /// Portion weight in grams.
  pub grams:   f64,
  pub date:    NaiveDate,
}

impl LogEntry {
  pub fn new(meal_id: Uuid, grams: f64, date: NaiveDate) -> Self {
    Self { meal_id, grams, date }
  }
}

/// Sum the scaled portions of `entries` per calendar date.
///
/// Days come back in chronological order, labelled with the abbreviated
/// weekday ("Mon"). Days without entries are not present. A catalog that
/// lists the same id twice is rejected with [`Error::DuplicateMealId`].
pub fn daily_totals(
  entries: &[LogEntry],
  catalog: &[MealRecord],
) -> Result<Vec<(NaiveDate, DailyMacroTotals)>> {
  let mut by_id: HashMap<Uuid, &MealRecord> =
    HashMap::with_capacity(catalog.len());
  for meal in catalog {
    if by_id.insert(meal.id, meal).is_some() {
      return Err(Error::DuplicateMealId(meal.id));
    }
  }

  let mut days: BTreeMap<NaiveDate, DailyMacroTotals> = BTreeMap::new();
  for entry in entries {
    let meal = by_id
      .get(&entry.meal_id)
      .ok_or(Error::MealNotFound(entry.meal_id))?;
    let portion = serving::scale(meal, entry.grams)?;
    days
      .entry(entry.date)
      .or_insert_with(|| {
        DailyMacroTotals::new(entry.date.format("%a").to_string(), 0.0, 0.0, 0.0)
      })
      .add(&portion);
  }

  Ok(days.into_iter().collect())
}

/// Totals for a single `date`; all zero when nothing was logged that day.
pub fn totals_on(
  date: NaiveDate,
  entries: &[LogEntry],
  catalog: &[MealRecord],
) -> Result<DailyMacroTotals> {
  let same_day: Vec<LogEntry> =
    entries.iter().filter(|e| e.date == date).cloned().collect();
  let totals = daily_totals(&same_day, catalog)?;
  Ok(
    totals
      .into_iter()
      .next()
      .map(|(_, t)| t)
      .unwrap_or_else(|| {
        DailyMacroTotals::new(date.format("%a").to_string(), 0.0, 0.0, 0.0)
      }),
  )
}

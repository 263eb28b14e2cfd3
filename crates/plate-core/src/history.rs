//! Daily macro totals and statistics over a history of days.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, meal::ScaledMacros};

/// One day's accumulated intake, or one sample of a history series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyMacroTotals {
  /// Display label, e.g. "Mon". Blank for computed aggregates.
  #[serde(default)]
  pub day:            String,
  pub energy_kcal:    f64,
  pub protein_g:      f64,
  pub carbohydrate_g: f64,
  /// Estimated fat. Absent in series that only record the three measured
  /// values.
  #[serde(default)]
  pub fat_g:          f64,
}

impl DailyMacroTotals {
  pub fn new(
    day: impl Into<String>,
    energy_kcal: f64,
    protein_g: f64,
    carbohydrate_g: f64,
  ) -> Self {
    Self {
      day: day.into(),
      energy_kcal,
      protein_g,
      carbohydrate_g,
      fat_g: 0.0,
    }
  }

  pub fn with_fat(mut self, fat_g: f64) -> Self {
    self.fat_g = fat_g;
    self
  }

  /// Add one scaled portion to the day.
  pub fn add(&mut self, portion: &ScaledMacros) {
    self.energy_kcal += f64::from(portion.energy_kcal);
    self.protein_g += f64::from(portion.protein_g);
    self.carbohydrate_g += f64::from(portion.carbohydrate_g);
    self.fat_g += f64::from(portion.fat_g);
  }

  fn validate(&self) -> Result<()> {
    let fields = [
      ("energy", self.energy_kcal),
      ("protein", self.protein_g),
      ("carbohydrate", self.carbohydrate_g),
      ("fat", self.fat_g),
    ];
    for (name, value) in fields {
      if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput(format!(
          "{name} total for {:?} must be a non-negative number, got {value}",
          self.day
        )));
      }
    }
    Ok(())
  }
}

/// Arithmetic mean of each field across `series`. The result has a blank day
/// label.
///
/// Fails with [`Error::EmptySeries`] on an empty input so that no caller can
/// mistake "no data" for a zero average.
pub fn average(series: &[DailyMacroTotals]) -> Result<DailyMacroTotals> {
  if series.is_empty() {
    return Err(Error::EmptySeries);
  }

  let mut sum = DailyMacroTotals::default();
  for day in series {
    day.validate()?;
    sum.energy_kcal += day.energy_kcal;
    sum.protein_g += day.protein_g;
    sum.carbohydrate_g += day.carbohydrate_g;
    sum.fat_g += day.fat_g;
  }

  let n = series.len() as f64;
  Ok(DailyMacroTotals {
    day:            String::new(),
    energy_kcal:    sum.energy_kcal / n,
    protein_g:      sum.protein_g / n,
    carbohydrate_g: sum.carbohydrate_g / n,
    fat_g:          sum.fat_g / n,
  })
}

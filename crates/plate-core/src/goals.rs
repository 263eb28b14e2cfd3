//! Progress against daily nutrient goals.

use std::fmt;

use crate::{Error, Result, history::DailyMacroTotals};

/// Ratio of `current` to `goal`, capped at 1.
///
/// Fails with [`Error::InvalidGoal`] when `goal` is not a positive number and
/// with [`Error::InvalidInput`] when `current` is negative or not finite.
pub fn progress(current: f64, goal: f64) -> Result<f64> {
  if !goal.is_finite() || goal <= 0.0 {
    return Err(Error::InvalidGoal(goal));
  }
  if !current.is_finite() || current < 0.0 {
    return Err(Error::InvalidInput(format!(
      "current value must be a non-negative number, got {current}"
    )));
  }
  Ok((current / goal).min(1.0))
}

// ─── Nutrient ────────────────────────────────────────────────────────────────

/// A nutrient that can carry a goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nutrient {
  Energy,
  Protein,
  Carbohydrate,
  Fat,
  /// Any nutrient not modelled above, measured in grams.
  Custom(String),
}

impl Nutrient {
  pub fn label(&self) -> &str {
    match self {
      Self::Energy => "Calories",
      Self::Protein => "Protein",
      Self::Carbohydrate => "Carbs",
      Self::Fat => "Fat",
      Self::Custom(name) => name,
    }
  }

  pub fn unit(&self) -> &'static str {
    match self {
      Self::Energy => "kcal",
      _ => "g",
    }
  }
}

impl fmt::Display for Nutrient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

// ─── Goals ───────────────────────────────────────────────────────────────────

/// A current-versus-goal pair for one nutrient.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientGoal {
  pub nutrient: Nutrient,
  pub current:  f64,
  pub goal:     f64,
}

impl NutrientGoal {
  pub fn new(nutrient: Nutrient, current: f64, goal: f64) -> Self {
    Self { nutrient, current, goal }
  }

  pub fn progress(&self) -> Result<f64> { progress(self.current, self.goal) }
}

/// The outcome for one goal in [`track`].
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
  pub goal:  NutrientGoal,
  pub ratio: Result<f64>,
}

/// Evaluate every goal independently, preserving input order.
///
/// An invalid goal yields an error in its own slot and leaves the others
/// untouched.
pub fn track(goals: impl IntoIterator<Item = NutrientGoal>) -> Vec<GoalProgress> {
  goals
    .into_iter()
    .map(|goal| {
      let ratio = goal.progress();
      GoalProgress { goal, ratio }
    })
    .collect()
}

/// Daily targets for the nutrients a day's totals carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyGoals {
  pub energy_kcal:    f64,
  pub protein_g:      f64,
  pub carbohydrate_g: f64,
  /// Fat is only tracked when a goal is set, since it is an estimate.
  pub fat_g:          Option<f64>,
}

impl Default for DailyGoals {
  fn default() -> Self {
    Self {
      energy_kcal:    2000.0,
      protein_g:      160.0,
      carbohydrate_g: 250.0,
      fat_g:          None,
    }
  }
}

impl DailyGoals {
  /// Pair each goal with the matching total, in the order energy, protein,
  /// carbohydrate, then fat when a fat goal is set.
  pub fn against(&self, totals: &DailyMacroTotals) -> Vec<NutrientGoal> {
    let mut goals = vec![
      NutrientGoal::new(Nutrient::Energy, totals.energy_kcal, self.energy_kcal),
      NutrientGoal::new(Nutrient::Protein, totals.protein_g, self.protein_g),
      NutrientGoal::new(
        Nutrient::Carbohydrate,
        totals.carbohydrate_g,
        self.carbohydrate_g,
      ),
    ];
    if let Some(fat_g) = self.fat_g {
      goals.push(NutrientGoal::new(Nutrient::Fat, totals.fat_g, fat_g));
    }
    goals
  }
}

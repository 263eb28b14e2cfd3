//! Plain-text rendering of core results.
//!
//! All formatting lives here: units, display rounding, bar glyphs and the
//! fallback shown when a value cannot be computed.

use plate_core::{
  goals::GoalProgress,
  history::DailyMacroTotals,
  macros::{Macro, MacroComposition},
  meal::{MealRecord, ScaledMacros},
};

/// Shown in place of a value the core refused to compute.
pub const FALLBACK: &str = "—";

pub const BAR_WIDTH: usize = 40;

fn glyph(m: Macro) -> char {
  match m {
    Macro::Protein => 'P',
    Macro::Carbohydrate => 'C',
    Macro::Fat => 'F',
  }
}

/// A `width`-column stacked bar: protein, then carbohydrate, then fat.
///
/// Each segment gets its rounded share of the width; the last non-empty
/// segment absorbs rounding so the bar is always exactly `width` wide. An
/// empty composition renders a neutral placeholder.
pub fn composition_bar(composition: &MacroComposition, width: usize) -> String {
  let Some(props) = composition.proportions() else {
    return "·".repeat(width);
  };

  let segments = props.segments();
  let last = segments.iter().rposition(|(_, share)| *share > 0.0);
  let mut bar = String::with_capacity(width);
  let mut used = 0;
  for (i, (m, share)) in segments.iter().enumerate() {
    let cols = if Some(i) == last {
      width - used
    } else {
      ((share * width as f64).round() as usize).min(width - used)
    };
    bar.extend(std::iter::repeat_n(glyph(*m), cols));
    used += cols;
  }
  bar
}

/// A `width`-column progress bar for a ratio in `[0, 1]`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
  let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
  format!("{}{}", "#".repeat(filled), ".".repeat(width - filled))
}

/// One line of the goal list, e.g. `Calories  1200 / 2000 kcal  [####....]  60%`.
pub fn goal_line(result: &GoalProgress) -> String {
  let goal = &result.goal;
  let figures = format!(
    "{:.0} / {:.0} {}",
    goal.current,
    goal.goal,
    goal.nutrient.unit()
  );
  match &result.ratio {
    Ok(ratio) => format!(
      "{:<9} {:<18} [{}] {:>3.0}%",
      goal.nutrient.label(),
      figures,
      progress_bar(*ratio, 20),
      ratio * 100.0
    ),
    Err(_) => format!(
      "{:<9} {:<18} [{}] {FALLBACK}",
      goal.nutrient.label(),
      figures,
      " ".repeat(20)
    ),
  }
}

/// One search/list row for a meal.
pub fn meal_row(meal: &MealRecord, show_creator: bool) -> String {
  let creator = if show_creator {
    format!("by {} • ", meal.creator)
  } else {
    String::new()
  };
  format!(
    "{:<16} {creator}{} kcal • Protein: {}g • Carbs: {}g • {}",
    meal.name, meal.energy_kcal, meal.protein_g, meal.carbohydrate_g, meal.cuisine
  )
}

/// Energy and macro figures for a portion.
pub fn macro_grid(portion: &ScaledMacros) -> String {
  format!(
    "Energy {} kcal   Protein {} g   Carbs {} g   Fat {} g",
    portion.energy_kcal, portion.protein_g, portion.carbohydrate_g, portion.fat_g
  )
}

/// One row of a history table; blank labels print as "avg".
pub fn totals_row(totals: &DailyMacroTotals) -> String {
  let label = if totals.day.is_empty() { "avg" } else { totals.day.as_str() };
  format!(
    "{label:<4} {:>7.0} kcal {:>6.0} g protein {:>6.0} g carbs",
    totals.energy_kcal, totals.protein_g, totals.carbohydrate_g
  )
}

//! Command handlers. Each one loads a snapshot from its provider, runs the
//! core computation and returns the text to print.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use plate_core::{
  Error,
  catalog::{filter_by_text, find_by_name, partition_by_creator},
  goals::track,
  history::average,
  log::totals_on,
  macros::split_proportions,
  meal::MealRecord,
  provider::{CatalogProvider, DailyTotalsProvider, FoodLogProvider},
};

use crate::{
  config::Settings,
  render::{self, BAR_WIDTH, FALLBACK},
  source::{JsonCatalog, JsonFoodLog, JsonHistory},
};

pub struct App {
  pub settings: Settings,
}

impl App {
  pub fn new(settings: Settings) -> Self { Self { settings } }

  fn catalog(&self) -> Result<Vec<MealRecord>> {
    let source = &self.settings.catalog;
    let meals = JsonCatalog(source.clone())
      .meals()
      .with_context(|| format!("loading catalog from {source}"))?;
    tracing::debug!(meals = meals.len(), %source, "catalog loaded");
    Ok(meals)
  }

  // ── search ────────────────────────────────────────────────────────────────

  /// Meals whose name contains `query`; everything when it is empty.
  pub fn search(&self, query: &str) -> Result<String> {
    let catalog = self.catalog()?;
    let hits = filter_by_text(&catalog, query);
    tracing::info!(query, hits = hits.len(), "search");

    let mut out = String::new();
    if hits.is_empty() {
      writeln!(out, "No meals match {query:?}.")?;
    }
    for meal in hits {
      writeln!(out, "{}", render::meal_row(meal, false))?;
    }
    Ok(out)
  }

  // ── recipes ───────────────────────────────────────────────────────────────

  /// The current user's meals, or with `others` everyone else's.
  pub fn recipes(&self, others: bool) -> Result<String> {
    let catalog = self.catalog()?;
    let (mine, theirs) = partition_by_creator(&catalog, &self.settings.me);
    tracing::debug!(
      me = %self.settings.me,
      mine = mine.len(),
      others = theirs.len(),
      "partitioned catalog"
    );

    let (title, meals) = if others {
      ("Friends", theirs)
    } else {
      ("My Recipes", mine)
    };
    let mut out = String::new();
    writeln!(out, "{title} ({})", meals.len())?;
    for meal in meals {
      writeln!(out, "{}", render::meal_row(meal, others))?;
    }
    Ok(out)
  }

  // ── show ──────────────────────────────────────────────────────────────────

  /// Detail view of one meal at `grams` (its reference serving by default).
  pub fn show(&self, name: &str, grams: Option<f64>) -> Result<String> {
    let catalog = self.catalog()?;
    let Some(meal) = find_by_name(&catalog, name) else {
      bail!("no meal named {name:?} in the catalog");
    };
    let grams = grams.unwrap_or_else(|| f64::from(meal.serving_weight_g));
    let portion = meal
      .scaled(grams)
      .with_context(|| format!("scaling {} to {grams} g", meal.name))?;

    let mut out = String::new();
    writeln!(out, "{}", meal.cuisine.to_uppercase())?;
    writeln!(out, "{} (by {})", meal.name, meal.creator)?;
    if !meal.description.is_empty() {
      writeln!(out, "{}", meal.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Portion {grams} g")?;
    writeln!(out, "{}", render::macro_grid(&portion))?;
    writeln!(out)?;
    writeln!(out, "Macro Composition")?;
    let composition =
      split_proportions(portion.protein_g, portion.carbohydrate_g, portion.fat_g);
    writeln!(out, "[{}]", render::composition_bar(&composition, BAR_WIDTH))?;
    Ok(out)
  }

  // ── progress ──────────────────────────────────────────────────────────────

  /// Goal progress for `date`, or the latest logged day.
  pub fn progress(&self, date: Option<NaiveDate>) -> Result<String> {
    let catalog = self.catalog()?;
    let source = &self.settings.log;
    let entries = JsonFoodLog(source.clone())
      .entries()
      .with_context(|| format!("loading food log from {source}"))?;

    let date = match date.or_else(|| entries.iter().map(|e| e.date).max()) {
      Some(date) => date,
      None => bail!("the food log is empty; pass --date to pick a day"),
    };
    let totals = totals_on(date, &entries, &catalog)
      .with_context(|| format!("accumulating food log for {date}"))?;

    let mut out = String::new();
    writeln!(out, "Log Food: {} {date}", totals.day)?;
    for result in track(self.settings.goals.against(&totals)) {
      if let Err(err) = &result.ratio {
        tracing::warn!(nutrient = %result.goal.nutrient, %err, "showing fallback");
      }
      writeln!(out, "{}", render::goal_line(&result))?;
    }
    Ok(out)
  }

  // ── history ───────────────────────────────────────────────────────────────

  /// The daily series followed by its average.
  pub fn history(&self) -> Result<String> {
    let source = &self.settings.history;
    let series = JsonHistory(source.clone())
      .daily_totals()
      .with_context(|| format!("loading history from {source}"))?;

    let mut out = String::new();
    writeln!(out, "Weekly Progress")?;
    for day in &series {
      writeln!(out, "{}", render::totals_row(day))?;
    }
    match average(&series) {
      Ok(avg) => writeln!(out, "{}", render::totals_row(&avg))?,
      Err(Error::EmptySeries) => {
        tracing::warn!(%source, "empty history");
        writeln!(out, "no history {FALLBACK}")?
      }
      Err(err) => return Err(err).context("averaging history"),
    }
    Ok(out)
  }
}

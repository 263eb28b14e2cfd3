//! Meal records, the immutable entries of a catalog.
//!
//! A record states the nutrition facts of one food item at its reference
//! serving weight. Everything else (scaled portions, fat, composition) is
//! derived on demand and never stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, macros, serving};

/// Serving weight assumed when a record does not state one.
pub const DEFAULT_SERVING_WEIGHT_G: u32 = 100;

fn default_serving_weight() -> u32 { DEFAULT_SERVING_WEIGHT_G }

// ─── MealRecord ──────────────────────────────────────────────────────────────

/// Nutrition facts for one catalog entry at `serving_weight_g` grams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
  #[serde(default = "Uuid::new_v4")]
  pub id:               Uuid,
  pub name:             String,
  /// Who published the meal: a user handle, a restaurant, or `"You"`.
  pub creator:          String,
  pub energy_kcal:      u32,
  pub protein_g:        u32,
  pub carbohydrate_g:   u32,
  /// Cuisine tag, e.g. "Japanese".
  #[serde(default)]
  pub cuisine:          String,
  #[serde(default)]
  pub description:      String,
  #[serde(default = "default_serving_weight")]
  pub serving_weight_g: u32,
}

impl MealRecord {
  /// Create a record with a fresh id, an empty cuisine and description, and
  /// the default 100 g serving.
  pub fn new(
    name: impl Into<String>,
    creator: impl Into<String>,
    energy_kcal: u32,
    protein_g: u32,
    carbohydrate_g: u32,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      name: name.into(),
      creator: creator.into(),
      energy_kcal,
      protein_g,
      carbohydrate_g,
      cuisine: String::new(),
      description: String::new(),
      serving_weight_g: DEFAULT_SERVING_WEIGHT_G,
    }
  }

  pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
    self.cuisine = cuisine.into();
    self
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn with_serving_weight(mut self, grams: u32) -> Self {
    self.serving_weight_g = grams;
    self
  }

  /// Reject records a catalog must not contain.
  ///
  /// A zero serving weight is accepted here; it only fails once scaling is
  /// requested.
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::InvalidInput(format!(
        "meal {} has an empty name",
        self.id
      )));
    }
    Ok(())
  }

  /// Estimated fat at the reference serving. See [`macros::estimate_fat`].
  pub fn estimated_fat_g(&self) -> u32 {
    macros::estimate_fat(self.energy_kcal, self.protein_g, self.carbohydrate_g)
  }

  /// This meal scaled to a portion of `grams`. See [`serving::scale`].
  pub fn scaled(&self, grams: f64) -> Result<ScaledMacros> {
    serving::scale(self, grams)
  }
}

// ─── ScaledMacros ────────────────────────────────────────────────────────────

/// Energy and macros of one meal at a specific portion weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaledMacros {
  pub energy_kcal:    u32,
  pub protein_g:      u32,
  pub carbohydrate_g: u32,
  /// Estimated, not measured.
  pub fat_g:          u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_uses_default_serving_weight() {
    let meal = MealRecord::new("Tacos", "You", 420, 18, 45);
    assert_eq!(meal.serving_weight_g, 100);
    assert!(meal.cuisine.is_empty());
  }

  #[test]
  fn blank_name_is_rejected() {
    let meal = MealRecord::new("   ", "You", 100, 1, 1);
    assert!(matches!(meal.validate(), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn zero_serving_weight_is_still_a_valid_record() {
    let meal = MealRecord::new("Water", "You", 0, 0, 0).with_serving_weight(0);
    assert!(meal.validate().is_ok());
    assert_eq!(meal.scaled(100.0), Err(Error::InvalidServingWeight(0)));
  }

  #[test]
  fn deserialize_fills_defaults() {
    let json = r#"{
      "name": "Oatmeal",
      "creator": "You",
      "energy_kcal": 250,
      "protein_g": 8,
      "carbohydrate_g": 40
    }"#;
    let meal: MealRecord = serde_json::from_str(json).unwrap();
    assert_eq!(meal.serving_weight_g, DEFAULT_SERVING_WEIGHT_G);
    assert!(meal.description.is_empty());
    assert!(!meal.id.is_nil());
  }

  #[test]
  fn estimated_fat_uses_own_values() {
    let ramen = MealRecord::new("Spicy Ramen", "You", 550, 20, 65);
    assert_eq!(ramen.estimated_fat_g(), 23);
  }
}

//! Serving-size scaling.

use crate::{
  Error, Result,
  meal::{MealRecord, ScaledMacros},
};

/// Scale `meal` from its reference serving weight to `target_grams`.
///
/// Each field is `meal.field * target_grams / meal.serving_weight_g`,
/// truncated toward zero. Inputs are non-negative, so this is a floor.
/// Fat is the reference estimate scaled by the same rule.
///
/// Fails with [`Error::InvalidServingWeight`] when the reference weight is
/// zero and with [`Error::InvalidInput`] when `target_grams` is negative or
/// not a number, or when a scaled field no longer fits in a `u32`.
pub fn scale(meal: &MealRecord, target_grams: f64) -> Result<ScaledMacros> {
  if !target_grams.is_finite() || target_grams < 0.0 {
    return Err(Error::InvalidInput(format!(
      "target weight must be a non-negative number of grams, got {target_grams}"
    )));
  }
  if meal.serving_weight_g == 0 {
    return Err(Error::InvalidServingWeight(meal.serving_weight_g));
  }

  let reference = f64::from(meal.serving_weight_g);
  // Multiply before dividing so whole-number ratios stay exact.
  let scale_field = |value: u32| -> Result<u32> {
    let scaled = (f64::from(value) * target_grams / reference).trunc();
    if scaled > f64::from(u32::MAX) {
      return Err(Error::InvalidInput(format!(
        "{} at {target_grams} g is out of range ({scaled})",
        meal.name
      )));
    }
    Ok(scaled as u32)
  };

  Ok(ScaledMacros {
    energy_kcal:    scale_field(meal.energy_kcal)?,
    protein_g:      scale_field(meal.protein_g)?,
    carbohydrate_g: scale_field(meal.carbohydrate_g)?,
    fat_g:          scale_field(meal.estimated_fat_g())?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ramen() -> MealRecord {
    MealRecord::new("Spicy Ramen", "You", 550, 20, 65)
  }

  #[test]
  fn reference_weight_is_identity() {
    let meal = ramen();
    let scaled = scale(&meal, 100.0).unwrap();
    assert_eq!(scaled.energy_kcal, 550);
    assert_eq!(scaled.protein_g, 20);
    assert_eq!(scaled.carbohydrate_g, 65);
    assert_eq!(scaled.fat_g, meal.estimated_fat_g());
  }

  #[test]
  fn doubling_the_portion() {
    let scaled = scale(&ramen(), 200.0).unwrap();
    assert_eq!(
      scaled,
      ScaledMacros {
        energy_kcal:    1100,
        protein_g:      40,
        carbohydrate_g: 130,
        fat_g:          46,
      }
    );
  }

  #[test]
  fn fractional_results_truncate() {
    // 65 * 150 / 100 = 97.5
    let scaled = scale(&ramen(), 150.0).unwrap();
    assert_eq!(scaled.carbohydrate_g, 97);
    assert_eq!(scaled.energy_kcal, 825);
  }

  #[test]
  fn non_default_reference_weight() {
    let meal = MealRecord::new("Pad Thai", "Chef Len", 600, 15, 70)
      .with_serving_weight(300);
    let scaled = scale(&meal, 100.0).unwrap();
    assert_eq!(scaled.energy_kcal, 200);
    assert_eq!(scaled.protein_g, 5);
    // 70 / 3 = 23.33
    assert_eq!(scaled.carbohydrate_g, 23);
  }

  #[test]
  fn zero_target_gives_zero_macros() {
    assert_eq!(scale(&ramen(), 0.0).unwrap(), ScaledMacros::default());
  }

  #[test]
  fn targets_beyond_slider_range_are_accepted() {
    let scaled = scale(&ramen(), 1000.0).unwrap();
    assert_eq!(scaled.energy_kcal, 5500);
  }

  #[test]
  fn results_past_u32_are_rejected() {
    // 550 * 1e9 / 100 = 5.5e9 > u32::MAX
    assert!(matches!(
      scale(&ramen(), 1.0e9),
      Err(Error::InvalidInput(_))
    ));
  }

  #[test]
  fn largest_representable_result_is_exact() {
    let meal = MealRecord::new("Bulk", "You", 1, 0, 0).with_serving_weight(1);
    let scaled = scale(&meal, f64::from(u32::MAX)).unwrap();
    assert_eq!(scaled.energy_kcal, u32::MAX);
  }

  #[test]
  fn negative_target_is_invalid_input() {
    assert!(matches!(scale(&ramen(), -1.0), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn nan_target_is_invalid_input() {
    assert!(matches!(
      scale(&ramen(), f64::NAN),
      Err(Error::InvalidInput(_))
    ));
  }

  #[test]
  fn zero_reference_weight_is_rejected() {
    let meal = ramen().with_serving_weight(0);
    assert_eq!(scale(&meal, 100.0), Err(Error::InvalidServingWeight(0)));
  }

  #[test]
  fn matches_formula_across_weights() {
    let meal = MealRecord::new("Curry", "Spice House", 750, 22, 60)
      .with_serving_weight(250);
    for target in [0u32, 1, 37, 125, 250, 333, 500] {
      let scaled = scale(&meal, f64::from(target)).unwrap();
      assert_eq!(scaled.energy_kcal, 750 * target / 250);
      assert_eq!(scaled.protein_g, 22 * target / 250);
      assert_eq!(scaled.carbohydrate_g, 60 * target / 250);
    }
  }
}

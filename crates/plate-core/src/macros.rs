//! Fat estimation and macro composition.
//!
//! Fat is back-calculated from total energy with the Atwater factors: 4 kcal
//! per gram of protein or carbohydrate, 9 kcal per gram of fat. The result is
//! an estimate for display, not a nutrition authority.

pub const KCAL_PER_G_PROTEIN: i64 = 4;
pub const KCAL_PER_G_CARBOHYDRATE: i64 = 4;
pub const KCAL_PER_G_FAT: i64 = 9;

/// Grams of fat implied by `energy_kcal` once protein and carbohydrate energy
/// are subtracted, rounded down.
///
/// Never negative: when protein and carbohydrate already account for more
/// energy than the stated total, the estimate is 0.
pub fn estimate_fat(energy_kcal: u32, protein_g: u32, carbohydrate_g: u32) -> u32 {
  let accounted = i64::from(protein_g) * KCAL_PER_G_PROTEIN
    + i64::from(carbohydrate_g) * KCAL_PER_G_CARBOHYDRATE;
  let remaining = i64::from(energy_kcal) - accounted;
  if remaining <= 0 {
    return 0;
  }
  // `remaining` fits in u32 because it is at most `energy_kcal`.
  (remaining / KCAL_PER_G_FAT) as u32
}

// ─── Composition ─────────────────────────────────────────────────────────────

/// One of the three macronutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
  Protein,
  Carbohydrate,
  Fat,
}

/// Share of each macro in the total macro mass. Fractions sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProportions {
  pub protein:      f64,
  pub carbohydrate: f64,
  pub fat:          f64,
}

impl MacroProportions {
  /// Segments in the fixed order protein, carbohydrate, fat.
  pub fn segments(&self) -> [(Macro, f64); 3] {
    [
      (Macro::Protein, self.protein),
      (Macro::Carbohydrate, self.carbohydrate),
      (Macro::Fat, self.fat),
    ]
  }

  /// The macro with the largest share; earlier segments win ties.
  pub fn dominant(&self) -> Macro {
    let mut best = (Macro::Protein, self.protein);
    for (m, share) in self.segments() {
      if share > best.1 {
        best = (m, share);
      }
    }
    best.0
  }
}

/// Result of [`split_proportions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MacroComposition {
  /// No macro mass at all; render a neutral placeholder.
  Empty,
  Split(MacroProportions),
}

impl MacroComposition {
  pub fn proportions(&self) -> Option<&MacroProportions> {
    match self {
      Self::Empty => None,
      Self::Split(p) => Some(p),
    }
  }
}

/// Normalise absolute macro grams into proportions for a stacked bar.
pub fn split_proportions(
  protein_g: u32,
  carbohydrate_g: u32,
  fat_g: u32,
) -> MacroComposition {
  let total =
    u64::from(protein_g) + u64::from(carbohydrate_g) + u64::from(fat_g);
  if total == 0 {
    return MacroComposition::Empty;
  }
  let total = total as f64;
  MacroComposition::Split(MacroProportions {
    protein:      f64::from(protein_g) / total,
    carbohydrate: f64::from(carbohydrate_g) / total,
    fat:          f64::from(fat_g) / total,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fat_from_ramen() {
    // (550 - (80 + 260)) / 9 = 23.33
    assert_eq!(estimate_fat(550, 20, 65), 23);
  }

  #[test]
  fn fat_exact_division() {
    // 4*10 + 4*10 = 80; (170 - 80) / 9 = 10
    assert_eq!(estimate_fat(170, 10, 10), 10);
  }

  #[test]
  fn inconsistent_macros_clamp_to_zero() {
    // 40*4 + 40*4 = 320 > 100
    assert_eq!(estimate_fat(100, 40, 40), 0);
  }

  #[test]
  fn macros_exactly_matching_energy_give_zero_fat() {
    assert_eq!(estimate_fat(400, 50, 50), 0);
  }

  #[test]
  fn fat_is_never_negative_over_a_grid() {
    for energy in (0..=1000).step_by(50) {
      for protein in (0..=100).step_by(10) {
        for carbs in (0..=100).step_by(10) {
          let fat = estimate_fat(energy, protein, carbs);
          assert!(i64::from(fat) * 9 <= i64::from(energy));
        }
      }
    }
  }

  #[test]
  fn huge_inputs_do_not_overflow() {
    assert_eq!(estimate_fat(0, u32::MAX, u32::MAX), 0);
    assert_eq!(estimate_fat(u32::MAX, 0, 0), u32::MAX / 9);
  }

  #[test]
  fn proportions_sum_to_one() {
    for (p, c, f) in [(40, 130, 46), (1, 0, 0), (3, 3, 3), (7, 11, 13)] {
      let split = split_proportions(p, c, f);
      let props = split.proportions().expect("non-empty");
      let sum = props.protein + props.carbohydrate + props.fat;
      assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    }
  }

  #[test]
  fn all_zero_is_empty() {
    assert_eq!(split_proportions(0, 0, 0), MacroComposition::Empty);
    assert!(split_proportions(0, 0, 0).proportions().is_none());
  }

  #[test]
  fn segments_keep_display_order() {
    let split = split_proportions(1, 2, 1);
    let segments = split.proportions().unwrap().segments();
    assert_eq!(segments[0], (Macro::Protein, 0.25));
    assert_eq!(segments[1], (Macro::Carbohydrate, 0.5));
    assert_eq!(segments[2], (Macro::Fat, 0.25));
  }

  #[test]
  fn dominant_segment() {
    let split = split_proportions(40, 130, 46);
    assert_eq!(split.proportions().unwrap().dominant(), Macro::Carbohydrate);

    let tie = split_proportions(5, 5, 0);
    assert_eq!(tie.proportions().unwrap().dominant(), Macro::Protein);
  }
}

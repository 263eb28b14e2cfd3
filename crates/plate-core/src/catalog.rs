//! Read-only queries over a meal catalog.
//!
//! Both queries borrow from the catalog snapshot they are given and keep the
//! catalog's relative order.

use std::collections::HashSet;

use crate::{Error, Result, meal::MealRecord};

/// Fails with [`Error::DuplicateMealId`] on the first id seen twice.
pub fn ensure_unique_ids(catalog: &[MealRecord]) -> Result<()> {
  let mut seen = HashSet::with_capacity(catalog.len());
  for meal in catalog {
    if !seen.insert(meal.id) {
      return Err(Error::DuplicateMealId(meal.id));
    }
  }
  Ok(())
}

/// Meals whose name contains `query`, ignoring case.
///
/// An empty query is "no filter" and returns the whole catalog.
pub fn filter_by_text<'a>(
  catalog: &'a [MealRecord],
  query: &str,
) -> Vec<&'a MealRecord> {
  if query.is_empty() {
    return catalog.iter().collect();
  }
  let needle = query.to_lowercase();
  catalog
    .iter()
    .filter(|meal| meal.name.to_lowercase().contains(&needle))
    .collect()
}

/// Split the catalog into meals created by `creator` and everything else.
///
/// The comparison is exact and case-sensitive.
pub fn partition_by_creator<'a>(
  catalog: &'a [MealRecord],
  creator: &str,
) -> (Vec<&'a MealRecord>, Vec<&'a MealRecord>) {
  catalog.iter().partition(|meal| meal.creator == creator)
}

/// The first meal whose name equals `name`, ignoring case.
pub fn find_by_name<'a>(
  catalog: &'a [MealRecord],
  name: &str,
) -> Option<&'a MealRecord> {
  let name = name.to_lowercase();
  catalog.iter().find(|meal| meal.name.to_lowercase() == name)
}

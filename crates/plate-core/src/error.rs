//! Error types for `plate-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
  /// A negative, non-finite or otherwise out-of-domain argument.
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("invalid reference serving weight: {0} g")]
  InvalidServingWeight(u32),

  #[error("invalid goal: {0}")]
  InvalidGoal(f64),

  #[error("cannot average an empty series")]
  EmptySeries,

  #[error("meal not found: {0}")]
  MealNotFound(Uuid),

  #[error("duplicate meal id in catalog: {0}")]
  DuplicateMealId(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

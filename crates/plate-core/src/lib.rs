//! Nutrition computation core for the Plate meal tracker.
//!
//! Everything here is a pure function over in-memory values: serving-size
//! scaling, fat estimation, macro composition, goal progress, history
//! averages and catalog queries. The crate performs no I/O and never logs;
//! callers own presentation and fallback values.

pub mod catalog;
pub mod error;
pub mod goals;
pub mod history;
pub mod log;
pub mod macros;
pub mod meal;
pub mod provider;
pub mod serving;

pub use error::{Error, Result};

//! Weekly reset: the persisted last-reset week and the controller that
//! clears the journal when a new week starts or on demand.

mod controller;
mod tracker;

pub use controller::{ResetController, ResetOutcome, ResetSummary};
pub use tracker::{week_key, ResetTracker, LAST_RESET_WEEK_KEY};

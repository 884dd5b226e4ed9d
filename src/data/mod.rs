//! Outcome table loading
//!
//! Turns the row-oriented input into typed records and the grid dimension.

mod loader;
mod record;

pub use loader::{load_records, parse_records};
pub use record::{Dataset, Record};

//! Shared utilities for Truth Tally.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::utc_date_string;

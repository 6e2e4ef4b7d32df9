//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies with nondeterministic behavior (the wall clock, the
//! verification service) get test-friendly stand-ins here that return
//! programmable values and never touch the network. Swap them in wherever a
//! test or an offline run needs reproducible behavior.

pub mod clock;
pub mod verdicts;

pub use clock::NullClock;
pub use verdicts::CannedVerdicts;

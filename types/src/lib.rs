//! Fundamental types for Truth Tally.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: ids, timestamps, credit amounts, and the verdict and category
//! enums.

pub mod category;
pub mod credits;
pub mod id;
pub mod time;
pub mod verdict;

pub use category::Category;
pub use credits::Credits;
pub use id::{EvidenceId, ItemId, ResponseId, UserId, VoteId};
pub use time::Timestamp;
pub use verdict::{Verdict, VerdictReport};

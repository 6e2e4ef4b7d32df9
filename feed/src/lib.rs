//! Feed lifecycle — the collection of news items over time.
//!
//! Wraps the verdict ledger with display concerns: newest-first submission,
//! a simulated organic-growth tick (new items and vote bursts arriving while
//! the session is open), viewer preference sorting, and the transient
//! "just in" flag.

pub mod feed;
pub mod templates;

pub use feed::{is_just_in, NewsFeed, TickReport, JUST_IN_WINDOW_SECS};

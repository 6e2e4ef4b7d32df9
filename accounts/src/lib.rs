//! Account store.
//!
//! The feed core consumes this as a capability: look up the current user's
//! credits, apply a delta, read their preferred categories. Registration
//! enforces case-insensitive username uniqueness, and passwords are stored
//! as salted Argon2id hashes.

pub mod error;
pub mod store;

pub use error::AccountError;
pub use store::{Account, AccountStore};

//! Account store error type.

use tally_types::UserId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("username {0:?} is already taken")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    #[error("credential hashing failed: {0}")]
    Hashing(String),
}

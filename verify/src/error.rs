//! Verification client error type.
//!
//! These errors stay internal to the client — callers of
//! [`crate::VerifyClient::verify`] receive the fallback report instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verification service unreachable: {0}")]
    Unreachable(String),

    #[error("verification request failed: {0}")]
    RequestFailed(String),

    #[error("invalid verification response: {0}")]
    InvalidResponse(String),
}

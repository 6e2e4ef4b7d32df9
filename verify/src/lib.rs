//! AI verification client.
//!
//! The feed consumes verification as a capability: given text and an optional
//! image, return a verdict report, or a degraded default when the service is
//! unreachable, slow, or returns garbage. The client therefore never surfaces
//! transport errors to the submission path — `verify` always completes with a
//! report, and a submission is only committed once that report is in hand.

pub mod client;
pub mod error;

pub use client::{VerifyClient, VerifyRequest};
pub use error::VerifyError;

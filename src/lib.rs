//! # subjgen
//!
//! Generates per-subject test-session configuration files for a subjective
//! video-quality assessment player:
//! - Classifies discovered stimuli into training and test sets
//! - Produces a randomized, counterbalanced playlist per subject
//! - Optionally splits each playlist into timed sessions (mobile variant)
//! - Assigns sequential or prime-sampled subject identifiers
//! - Emits one JSON config or plain-text playlist file per artifact

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod ids;
pub mod playlist;
pub mod primes;
pub mod stimuli;

pub use error::{Error, Result};
pub use generate::generate;

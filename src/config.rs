//! Run configuration and training-set loading
//!
//! The training set is injected data rather than a compiled-in list: it is
//! read from a small TOML file (`training = ["...", ...]`) so tests and
//! different studies can substitute their own without rebuilding.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::IdMode;

/// Rating method label carried in single-config artifacts
///
/// Serialized with the labels the playback application expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingMethod {
    Acr,
    Continuous,
    Dsis,
    TimeContinuous,
}

impl Default for RatingMethod {
    fn default() -> Self {
        RatingMethod::Acr
    }
}

/// Full configuration for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of subjects to generate artifacts for
    pub subjects: usize,
    /// Rating method recorded in single-config artifacts
    pub method: RatingMethod,
    /// `Some(n)` selects the mobile variant with `n` sessions per subject
    pub sessions: Option<usize>,
    /// Identifier assignment mode
    pub id_mode: IdMode,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Ordered training-set specification (may be empty)
    pub training: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TrainingFile {
    training: Vec<String>,
}

/// Load the training-set specification from a TOML file.
///
/// The file holds a single `training` array of filenames; their order in the
/// file is preserved as the specification order.
pub fn load_training_set(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let parsed: TrainingFile = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("invalid training set file {}: {e}", path.display())))?;
    Ok(parsed.training)
}

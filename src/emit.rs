//! Config artifact assembly and output
//!
//! One artifact is written per subject (single-config variant) or per subject
//! session plus a training slice (mobile variant). Artifacts are written once
//! and never mutated; a pre-existing artifact with the same key is
//! overwritten. Key uniqueness follows from identifier uniqueness and is not
//! re-checked here.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RatingMethod;
use crate::error::Result;
use crate::playlist::PlaylistEntry;

/// Single-config artifact: rating method plus the full ordered playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub method: RatingMethod,
    pub playlist: Vec<PlaylistEntry>,
}

/// Output key for a single-config artifact
pub fn subject_key(id: u64) -> String {
    format!("subject_{id}")
}

/// Output key for one mobile playlist file; slice 0 is the training slice
pub fn session_key(id: u64, slice: usize) -> String {
    format!("playlist{id}_{slice}")
}

/// Destination for generated artifacts
///
/// The generator computes every artifact deterministically before handing it
/// over, so implementations only persist.
pub trait ArtifactSink {
    /// Write one subject's JSON config under `key`
    fn write_subject_config(&mut self, key: &str, config: &SubjectConfig) -> Result<()>;

    /// Write one plain-text stimulus list (mobile variant) under `key`
    fn write_stimulus_list(&mut self, key: &str, stimuli: &[String]) -> Result<()>;
}

/// Filesystem sink writing `<key>.json` / `<key>.cfg` files into a directory
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the output directory if needed and return a sink into it
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl ArtifactSink for DirectorySink {
    fn write_subject_config(&mut self, key: &str, config: &SubjectConfig) -> Result<()> {
        let path = self.dir.join(format!("{key}.json"));
        fs::write(&path, serde_json::to_vec_pretty(config)?)?;
        info!("wrote config {}", path.display());
        Ok(())
    }

    fn write_stimulus_list(&mut self, key: &str, stimuli: &[String]) -> Result<()> {
        let path = self.dir.join(format!("{key}.cfg"));
        let mut content = String::new();
        for name in stimuli {
            content.push_str(name);
            content.push('\n');
        }
        fs::write(&path, content)?;
        info!("wrote playlist {}", path.display());
        Ok(())
    }
}

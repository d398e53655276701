//! Run orchestration
//!
//! One run is fully sequential: seed the generator, classify the discovered
//! stimuli once, assign all identifiers, then iterate subjects emitting
//! artifacts. Every fatal validation happens before the first artifact is
//! written, so a failed run leaves no partial output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::emit::{session_key, subject_key, ArtifactSink, SubjectConfig};
use crate::error::{Error, Result};
use crate::ids::assign_ids;
use crate::playlist::{build_playlist, split_sessions};
use crate::stimuli::classify;

/// Build the run's random generator from an optional fixed seed.
///
/// The generator is shared across identifier assignment and every subject's
/// shuffle, advancing monotonically, so one seed reproduces the entire run.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate all artifacts for one run.
///
/// `discovered` is the scanned stimulus filename list. Which variant runs is
/// decided by `cfg.sessions`: `None` emits one JSON config per subject,
/// `Some(n)` emits per-session playlist files plus a training file per
/// subject.
pub fn generate(
    cfg: &GeneratorConfig,
    discovered: &[String],
    sink: &mut dyn ArtifactSink,
) -> Result<()> {
    let mut rng = make_rng(cfg.seed);

    let sets = classify(discovered, &cfg.training);
    info!(
        "classified {} stimuli: {} training, {} test",
        discovered.len(),
        sets.training.len(),
        sets.test.len()
    );

    let ids = assign_ids(cfg.subjects, &cfg.id_mode, &mut rng)?;

    match cfg.sessions {
        None => {
            if sets.test.is_empty() {
                warn!("no test stimuli found; playlists will contain only training");
            }
            for id in ids {
                let playlist = build_playlist(&sets.training, &sets.test, &mut rng);
                let config = SubjectConfig {
                    method: cfg.method,
                    playlist,
                };
                sink.write_subject_config(&subject_key(id), &config)?;
            }
        }
        Some(sessions) => {
            // Fail fast before any artifact exists for this run
            if sessions == 0 || sets.test.len() / sessions == 0 {
                return Err(Error::InvalidSessionSplit {
                    sessions,
                    stimuli: sets.test.len(),
                });
            }
            for id in ids {
                if !sets.training.is_empty() {
                    sink.write_stimulus_list(&session_key(id, 0), &sets.training)?;
                }
                let mut shuffled = sets.test.clone();
                shuffled.shuffle(&mut rng);
                let slices = split_sessions(shuffled, sessions)?;
                for (i, slice) in slices.iter().enumerate() {
                    sink.write_stimulus_list(&session_key(id, i + 1), slice)?;
                }
            }
        }
    }

    Ok(())
}

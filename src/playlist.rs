//! Playlist assembly and session splitting
//!
//! A playlist is the per-subject presentation order: an optional training
//! section bracketed by `TRAINING_START`/`TRAINING_END` markers, followed by a
//! per-subject random permutation of the test set. The mobile variant splits
//! the permuted test set into near-equal session slices instead.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire token opening the training section
pub const TRAINING_START: &str = "TRAINING_START";
/// Wire token closing the training section
pub const TRAINING_END: &str = "TRAINING_END";

/// One entry in a subject's playlist
///
/// Serializes to the plain string the playback application expects: the
/// marker tokens, or the stimulus filename itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEntry {
    TrainingStart,
    TrainingEnd,
    Stimulus(String),
}

impl PlaylistEntry {
    /// The wire token for this entry
    pub fn as_str(&self) -> &str {
        match self {
            PlaylistEntry::TrainingStart => TRAINING_START,
            PlaylistEntry::TrainingEnd => TRAINING_END,
            PlaylistEntry::Stimulus(name) => name,
        }
    }

    /// True for stimulus entries, false for section markers
    pub fn is_stimulus(&self) -> bool {
        matches!(self, PlaylistEntry::Stimulus(_))
    }
}

impl Serialize for PlaylistEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlaylistEntry {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = PlaylistEntry;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a playlist token string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<PlaylistEntry, E> {
                Ok(match v {
                    TRAINING_START => PlaylistEntry::TrainingStart,
                    TRAINING_END => PlaylistEntry::TrainingEnd,
                    name => PlaylistEntry::Stimulus(name.to_string()),
                })
            }
        }

        deserializer.deserialize_str(EntryVisitor)
    }
}

/// Build one subject's playlist.
///
/// The training section appears only when `training` is non-empty. The test
/// stimuli are appended as a fresh uniform permutation drawn from `rng`, so
/// consecutive calls with the same inputs produce independently shuffled
/// orders (the shared generator state advances across subjects).
pub fn build_playlist<R: Rng>(
    training: &[String],
    test: &[String],
    rng: &mut R,
) -> Vec<PlaylistEntry> {
    let mut playlist = Vec::with_capacity(
        test.len() + if training.is_empty() { 0 } else { training.len() + 2 },
    );

    if !training.is_empty() {
        playlist.push(PlaylistEntry::TrainingStart);
        playlist.extend(training.iter().cloned().map(PlaylistEntry::Stimulus));
        playlist.push(PlaylistEntry::TrainingEnd);
    }

    let mut shuffled = test.to_vec();
    shuffled.shuffle(rng);
    playlist.extend(shuffled.into_iter().map(PlaylistEntry::Stimulus));

    playlist
}

/// Split an already-shuffled test ordering into `sessions` contiguous slices.
///
/// The first `sessions - 1` slices hold exactly `floor(len / sessions)`
/// entries; the final slice absorbs the remainder. Fails when `sessions` is
/// zero or exceeds the number of stimuli, since that would produce empty
/// sessions.
pub fn split_sessions(shuffled_test: Vec<String>, sessions: usize) -> Result<Vec<Vec<String>>> {
    let per_session = if sessions == 0 {
        0
    } else {
        shuffled_test.len() / sessions
    };
    if per_session == 0 {
        return Err(Error::InvalidSessionSplit {
            sessions,
            stimuli: shuffled_test.len(),
        });
    }

    let mut slices = Vec::with_capacity(sessions);
    let mut rest = shuffled_test;
    for _ in 0..sessions - 1 {
        let tail = rest.split_off(per_session);
        slices.push(rest);
        rest = tail;
    }
    slices.push(rest);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("pvs_{i:02}.mp4")).collect()
    }

    #[test]
    fn test_playlist_shape_with_training() {
        let training = names(3);
        let test = names(10);
        let mut rng = StdRng::seed_from_u64(7);

        let playlist = build_playlist(&training, &test, &mut rng);

        assert_eq!(playlist.len(), training.len() + 2 + test.len());
        assert_eq!(playlist[0], PlaylistEntry::TrainingStart);
        assert_eq!(playlist[training.len() + 1], PlaylistEntry::TrainingEnd);
        for (i, name) in training.iter().enumerate() {
            assert_eq!(playlist[i + 1], PlaylistEntry::Stimulus(name.clone()));
        }

        // Every test stimulus appears exactly once after the training section
        let tail: HashSet<&str> = playlist[training.len() + 2..]
            .iter()
            .map(PlaylistEntry::as_str)
            .collect();
        assert_eq!(tail.len(), test.len());
        for name in &test {
            assert!(tail.contains(name.as_str()));
        }
    }

    #[test]
    fn test_playlist_without_training_has_no_markers() {
        let test = names(5);
        let mut rng = StdRng::seed_from_u64(7);
        let playlist = build_playlist(&[], &test, &mut rng);
        assert_eq!(playlist.len(), 5);
        assert!(playlist.iter().all(PlaylistEntry::is_stimulus));
    }

    #[test]
    fn test_subjects_get_different_permutations() {
        let test = names(12);
        let mut rng = StdRng::seed_from_u64(42);

        let orders: Vec<Vec<String>> = (0..100)
            .map(|_| {
                build_playlist(&[], &test, &mut rng)
                    .into_iter()
                    .map(|e| e.as_str().to_string())
                    .collect()
            })
            .collect();

        let distinct: HashSet<&Vec<String>> = orders.iter().collect();
        assert_eq!(distinct.len(), orders.len());
    }

    #[test]
    fn test_split_ten_into_three() {
        let slices = split_sessions(names(10), 3).unwrap();
        let sizes: Vec<usize> = slices.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 3, 4]);

        let all: Vec<String> = slices.into_iter().flatten().collect();
        assert_eq!(all, names(10));
    }

    #[test]
    fn test_split_preserves_order_and_loses_nothing() {
        let input = names(17);
        let slices = split_sessions(input.clone(), 4).unwrap();
        assert_eq!(slices.len(), 4);
        let rejoined: Vec<String> = slices.into_iter().flatten().collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn test_split_rejects_zero_sessions() {
        let err = split_sessions(names(10), 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSessionSplit { sessions: 0, stimuli: 10 }
        ));
    }

    #[test]
    fn test_split_rejects_more_sessions_than_stimuli() {
        let err = split_sessions(names(2), 3).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSessionSplit { sessions: 3, stimuli: 2 }
        ));
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let playlist = vec![
            PlaylistEntry::TrainingStart,
            PlaylistEntry::Stimulus("a.mp4".to_string()),
            PlaylistEntry::TrainingEnd,
        ];
        let json = serde_json::to_string(&playlist).unwrap();
        assert_eq!(json, r#"["TRAINING_START","a.mp4","TRAINING_END"]"#);
        let back: Vec<PlaylistEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, playlist);
    }
}

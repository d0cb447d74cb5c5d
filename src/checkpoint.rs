//! Durable per-project progress record.
//!
//! One JSON file per project at `<project>/.workflow_checkpoint.json` holds
//! five completion flags and the last completed step. The file on disk is
//! the sole source of truth between invocations; the in-memory record is an
//! explicit value passed through every operation and written back in a
//! single overwrite by `save`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::TrackerError;
use crate::phase::Phase;

/// Checkpoint file name, fixed inside the project directory.
pub const CHECKPOINT_FILE: &str = ".workflow_checkpoint.json";

/// Persisted progress through the five-phase pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub investigation_complete: bool,
    pub scriptwriting_complete: bool,
    pub direction_complete: bool,
    pub scavenging_complete: bool,
    pub archiving_complete: bool,
    /// Most recently completed phase; serialized as the phase key or "none".
    #[serde(with = "last_step_sentinel")]
    pub last_step: Option<Phase>,
}

impl Checkpoint {
    /// Path of the checkpoint file for a project directory.
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CHECKPOINT_FILE)
    }

    /// Read a checkpoint from disk. A missing file means nothing has been
    /// done yet and yields a fresh record, never an error.
    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(TrackerError::CheckpointRead {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&content).map_err(|err| TrackerError::CheckpointParse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Persist the full record, overwriting any prior content.
    pub fn save(&self, path: &Path) -> Result<(), TrackerError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|err| TrackerError::CheckpointWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(err),
            })?;

        fs::write(path, content).map_err(|err| TrackerError::CheckpointWrite {
            path: path.to_path_buf(),
            source: err,
        })
    }

    pub fn is_complete(&self, phase: Phase) -> bool {
        match phase {
            Phase::Investigation => self.investigation_complete,
            Phase::Scriptwriting => self.scriptwriting_complete,
            Phase::Direction => self.direction_complete,
            Phase::Scavenging => self.scavenging_complete,
            Phase::Archiving => self.archiving_complete,
        }
    }

    /// Flip a phase's flag and record it as the last completed step.
    pub fn mark_complete(&mut self, phase: Phase) {
        let flag = match phase {
            Phase::Investigation => &mut self.investigation_complete,
            Phase::Scriptwriting => &mut self.scriptwriting_complete,
            Phase::Direction => &mut self.direction_complete,
            Phase::Scavenging => &mut self.scavenging_complete,
            Phase::Archiving => &mut self.archiving_complete,
        };
        *flag = true;
        self.last_step = Some(phase);
    }

    pub fn fully_complete(&self) -> bool {
        Phase::ALL.into_iter().all(|p| self.is_complete(p))
    }

    /// Checkpoint-file spelling of `last_step` ("none" when unset).
    pub fn last_step_key(&self) -> &'static str {
        self.last_step.map(Phase::key).unwrap_or("none")
    }
}

mod last_step_sentinel {
    //! Serializes `Option<Phase>` as a phase key or the "none" sentinel,
    //! matching the checkpoint file format.

    use serde::{Deserialize, Deserializer, Serializer, de};

    use crate::phase::Phase;

    pub fn serialize<S>(value: &Option<Phase>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(phase) => serializer.serialize_str(phase.key()),
            None => serializer.serialize_str("none"),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Phase>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == "none" {
            return Ok(None);
        }
        Phase::from_key(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown phase in last_step: {raw}")))
    }
}

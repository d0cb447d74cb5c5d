//! The workflow tracker: reports and advances progress through the fixed
//! five-phase pipeline for one project directory.
//!
//! Phase completion is inferred purely from artifact presence. A missing
//! artifact is a blocking condition reported to the operator, never a
//! process failure; only an invalid project path and checkpoint persistence
//! errors are fatal. Concurrent invocations against the same project are
//! not coordinated; the checkpoint write is last-writer-wins.

use std::path::{Path, PathBuf};

use crate::agent::Collaborator;
use crate::checkpoint::Checkpoint;
use crate::errors::TrackerError;
use crate::phase::{Artifact, Phase};

/// Result of checking a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The flag was already set; nothing re-checked, nothing written.
    AlreadyComplete,
    /// The artifact appeared; flag set and checkpoint persisted.
    Completed,
    /// An earlier phase has not been completed yet. A later phase's artifact
    /// never retroactively satisfies an upstream prerequisite.
    PrerequisiteMissing { prerequisite: Phase },
    /// The artifact is not on disk yet. Expected while the external actor
    /// hasn't finished; not an error.
    Pending { artifact: Artifact },
}

/// Result of checking all phases in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Complete,
    Blocked { phase: Phase, artifact: Artifact },
}

/// Read-only per-phase status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub complete: bool,
    pub artifact: Artifact,
    pub artifact_present: bool,
}

/// What the operator should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// All five phases are complete.
    Done,
    Run {
        phase: Phase,
        agent: &'static str,
        guidance: &'static str,
        /// The expected artifact, if it is not on disk yet.
        missing: Option<Artifact>,
    },
}

/// Tracker bound to one validated project directory.
#[derive(Debug)]
pub struct Tracker {
    project_dir: PathBuf,
}

impl Tracker {
    /// Bind to a project directory. Fails with `InvalidProject` when the
    /// path is not an existing directory; no checkpoint file is created.
    pub fn new(project_dir: impl Into<PathBuf>) -> Result<Self, TrackerError> {
        let project_dir = project_dir.into();
        if !project_dir.is_dir() {
            return Err(TrackerError::InvalidProject { path: project_dir });
        }
        Ok(Self { project_dir })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn checkpoint_path(&self) -> PathBuf {
        Checkpoint::path_in(&self.project_dir)
    }

    /// Load the project's checkpoint; a missing file yields a fresh record.
    pub fn load(&self) -> Result<Checkpoint, TrackerError> {
        Checkpoint::load(&self.checkpoint_path())
    }

    /// Persist the checkpoint, overwriting any prior content.
    pub fn save(&self, checkpoint: &Checkpoint) -> Result<(), TrackerError> {
        checkpoint.save(&self.checkpoint_path())
    }

    /// Attempt to confirm one phase's completion.
    ///
    /// Idempotent once the flag is set. An incomplete predecessor blocks the
    /// check regardless of what artifacts exist further downstream. The
    /// collaborator gets one chance to perform the phase before the artifact
    /// check; the checkpoint is persisted only when the flag flips.
    pub fn check_phase(
        &self,
        checkpoint: &mut Checkpoint,
        phase: Phase,
        collaborator: &dyn Collaborator,
    ) -> Result<PhaseOutcome, TrackerError> {
        if checkpoint.is_complete(phase) {
            return Ok(PhaseOutcome::AlreadyComplete);
        }

        if let Some(prerequisite) = phase.predecessor()
            && !checkpoint.is_complete(prerequisite)
        {
            return Ok(PhaseOutcome::PrerequisiteMissing { prerequisite });
        }

        collaborator.perform(&self.project_dir, phase)?;

        let artifact = phase.artifact();
        if artifact.exists_in(&self.project_dir) {
            checkpoint.mark_complete(phase);
            self.save(checkpoint)?;
            Ok(PhaseOutcome::Completed)
        } else {
            Ok(PhaseOutcome::Pending { artifact })
        }
    }

    /// Check all five phases strictly in order, stopping at the first one
    /// that is not complete.
    pub fn run_all(
        &self,
        checkpoint: &mut Checkpoint,
        collaborator: &dyn Collaborator,
    ) -> Result<RunOutcome, TrackerError> {
        for phase in Phase::ALL {
            match self.check_phase(checkpoint, phase, collaborator)? {
                PhaseOutcome::AlreadyComplete | PhaseOutcome::Completed => {}
                PhaseOutcome::Pending { artifact } => {
                    return Ok(RunOutcome::Blocked { phase, artifact });
                }
                PhaseOutcome::PrerequisiteMissing { prerequisite } => {
                    // Unreachable under in-order iteration, but report the
                    // earliest blocking phase rather than trusting flags.
                    return Ok(RunOutcome::Blocked {
                        phase: prerequisite,
                        artifact: prerequisite.artifact(),
                    });
                }
            }
        }
        Ok(RunOutcome::Complete)
    }

    /// Per-phase report without attempting to advance anything.
    pub fn status(&self, checkpoint: &Checkpoint) -> Vec<PhaseReport> {
        Phase::ALL
            .into_iter()
            .map(|phase| {
                let artifact = phase.artifact();
                PhaseReport {
                    phase,
                    complete: checkpoint.is_complete(phase),
                    artifact,
                    artifact_present: artifact.exists_in(&self.project_dir),
                }
            })
            .collect()
    }

    /// The next phase to perform, derived from the last completed step.
    pub fn next_action(&self, checkpoint: &Checkpoint) -> NextAction {
        if checkpoint.fully_complete() {
            return NextAction::Done;
        }

        let phase = match checkpoint.last_step {
            None => Phase::Investigation,
            Some(last) => match last.successor() {
                Some(next) => next,
                None => return NextAction::Done,
            },
        };

        let artifact = phase.artifact();
        let missing = (!artifact.exists_in(&self.project_dir)).then_some(artifact);

        NextAction::Run {
            phase,
            agent: phase.agent(),
            guidance: phase.guidance(),
            missing,
        }
    }
}

//! Typed boundary between the tracker and whatever performs a phase's work.
//!
//! The tracker never does a phase's work itself. A `Collaborator` is given
//! one chance to perform the phase before the tracker inspects the
//! filesystem; whatever it reports, the output artifact remains the sole
//! completion signal.

use std::path::Path;

use crate::errors::TrackerError;
use crate::phase::Phase;

/// What a collaborator did when asked to perform a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performed {
    /// The collaborator carried out the work (artifact still verified).
    Attempted,
    /// The work is left to an external actor; check back later.
    Deferred,
}

/// Something that can perform the external work for a phase.
pub trait Collaborator {
    fn perform(&self, project_dir: &Path, phase: Phase) -> Result<Performed, TrackerError>;
}

/// Default collaborator: phases are performed by the operator invoking the
/// project's agents (`/investigator`, `/scriptwriter`, ...), so there is
/// nothing to run here and every phase is deferred to the artifact check.
pub struct ManualCollaborator;

impl Collaborator for ManualCollaborator {
    fn perform(&self, _project_dir: &Path, _phase: Phase) -> Result<Performed, TrackerError> {
        Ok(Performed::Deferred)
    }
}

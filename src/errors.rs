//! Typed error hierarchy for the workflow tracker.
//!
//! Missing artifacts are deliberately not represented here: a phase whose
//! output hasn't appeared yet is a normal, expected outcome and is reported
//! through `PhaseOutcome`/`RunOutcome`, never as an error. Only an invalid
//! project path and checkpoint persistence failures are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures from the tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("project directory does not exist: {}", .path.display())]
    InvalidProject { path: PathBuf },

    #[error("failed to read checkpoint file at {}: {source}", .path.display())]
    CheckpointRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse checkpoint file at {}: {source}", .path.display())]
    CheckpointParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write checkpoint file at {}: {source}", .path.display())]
    CheckpointWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_project_carries_path() {
        let err = TrackerError::InvalidProject {
            path: PathBuf::from("/videos/missing"),
        };
        match &err {
            TrackerError::InvalidProject { path } => {
                assert_eq!(path, &PathBuf::from("/videos/missing"));
            }
            _ => panic!("Expected InvalidProject variant"),
        }
        assert!(err.to_string().contains("/videos/missing"));
    }

    #[test]
    fn checkpoint_read_carries_io_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = TrackerError::CheckpointRead {
            path: PathBuf::from("/videos/topic/.workflow_checkpoint.json"),
            source: io_err,
        };
        match &err {
            TrackerError::CheckpointRead { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected CheckpointRead variant"),
        }
    }

    #[test]
    fn checkpoint_parse_is_matchable() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = TrackerError::CheckpointParse {
            path: PathBuf::from("/videos/topic/.workflow_checkpoint.json"),
            source: parse_err,
        };
        assert!(matches!(err, TrackerError::CheckpointParse { .. }));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn all_variants_implement_std_error() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        let err = TrackerError::InvalidProject {
            path: PathBuf::from("/x"),
        };
        assert_std_error(&err);
    }
}

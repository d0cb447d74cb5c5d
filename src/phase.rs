//! The fixed five-phase video production pipeline.
//!
//! Phases are strictly ordered. Each phase's completion is signalled by a
//! single output artifact appearing in the project directory; the tracker
//! never produces these artifacts itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One stage of the production pipeline, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Investigation,
    Scriptwriting,
    Direction,
    Scavenging,
    Archiving,
}

impl Phase {
    /// All phases in pipeline order.
    pub const ALL: [Phase; 5] = [
        Phase::Investigation,
        Phase::Scriptwriting,
        Phase::Direction,
        Phase::Scavenging,
        Phase::Archiving,
    ];

    /// Lowercase identifier used in the checkpoint file.
    pub const fn key(self) -> &'static str {
        match self {
            Phase::Investigation => "investigation",
            Phase::Scriptwriting => "scriptwriting",
            Phase::Direction => "direction",
            Phase::Scavenging => "scavenging",
            Phase::Archiving => "archiving",
        }
    }

    /// Human-readable name for console output.
    pub const fn title(self) -> &'static str {
        match self {
            Phase::Investigation => "Investigation",
            Phase::Scriptwriting => "Scriptwriting",
            Phase::Direction => "Direction",
            Phase::Scavenging => "Scavenging",
            Phase::Archiving => "Archiving",
        }
    }

    /// The output artifact whose presence marks this phase complete.
    pub const fn artifact(self) -> Artifact {
        match self {
            Phase::Investigation => Artifact::file("truth_dossier.md"),
            Phase::Scriptwriting => Artifact::file("narrative_script.md"),
            Phase::Direction => Artifact::file("master_script.md"),
            Phase::Scavenging => Artifact::file("asset_manifest.md"),
            Phase::Archiving => Artifact::dir("assets"),
        }
    }

    /// The agent convention the operator invokes to perform this phase.
    pub const fn agent(self) -> &'static str {
        match self {
            Phase::Investigation => "/investigator",
            Phase::Scriptwriting => "/scriptwriter",
            Phase::Direction => "/director",
            Phase::Scavenging => "/scavenger",
            Phase::Archiving => "/archivist",
        }
    }

    /// One-line instruction for what the agent must produce.
    pub const fn guidance(self) -> &'static str {
        match self {
            Phase::Investigation => "Create truth_dossier.md with research findings",
            Phase::Scriptwriting => "Create narrative_script.md from the dossier",
            Phase::Direction => "Create master_script.md with visual directions",
            Phase::Scavenging => "Create asset_manifest.md with source URLs",
            Phase::Archiving => "Download all assets into the assets/ folder",
        }
    }

    /// The phase immediately before this one, if any.
    pub const fn predecessor(self) -> Option<Phase> {
        match self {
            Phase::Investigation => None,
            Phase::Scriptwriting => Some(Phase::Investigation),
            Phase::Direction => Some(Phase::Scriptwriting),
            Phase::Scavenging => Some(Phase::Direction),
            Phase::Archiving => Some(Phase::Scavenging),
        }
    }

    /// The phase immediately after this one, if any.
    pub const fn successor(self) -> Option<Phase> {
        match self {
            Phase::Investigation => Some(Phase::Scriptwriting),
            Phase::Scriptwriting => Some(Phase::Direction),
            Phase::Direction => Some(Phase::Scavenging),
            Phase::Scavenging => Some(Phase::Archiving),
            Phase::Archiving => None,
        }
    }

    /// Parse a lowercase checkpoint identifier back into a phase.
    pub fn from_key(key: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A phase's expected output: a file or a directory inside the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    name: &'static str,
    directory: bool,
}

impl Artifact {
    const fn file(name: &'static str) -> Self {
        Artifact {
            name,
            directory: false,
        }
    }

    const fn dir(name: &'static str) -> Self {
        Artifact {
            name,
            directory: true,
        }
    }

    /// Bare artifact name relative to the project directory.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the artifact is a directory rather than a file.
    pub const fn is_directory(&self) -> bool {
        self.directory
    }

    /// Resolve the artifact's full path under a project directory.
    pub fn path_in(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.name)
    }

    /// Check whether the artifact currently exists on disk.
    pub fn exists_in(&self, project_dir: &Path) -> bool {
        let path = self.path_in(project_dir);
        if self.directory {
            path.is_dir()
        } else {
            path.is_file()
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.directory {
            write!(f, "{}/", self.name)
        } else {
            f.write_str(self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_pipeline_order_is_fixed() {
        assert_eq!(Phase::ALL.len(), 5);
        assert_eq!(Phase::ALL[0], Phase::Investigation);
        assert_eq!(Phase::ALL[4], Phase::Archiving);
    }

    #[test]
    fn test_predecessor_successor_chain() {
        assert!(Phase::Investigation.predecessor().is_none());
        assert!(Phase::Archiving.successor().is_none());

        for window in Phase::ALL.windows(2) {
            assert_eq!(window[0].successor(), Some(window[1]));
            assert_eq!(window[1].predecessor(), Some(window[0]));
        }
    }

    #[test]
    fn test_key_roundtrip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_key(phase.key()), Some(phase));
        }
        assert_eq!(Phase::from_key("editing"), None);
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(Phase::Scriptwriting.to_string(), "scriptwriting");
        assert_eq!(Phase::Archiving.to_string(), "archiving");
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Phase::Direction).unwrap();
        assert_eq!(json, "\"direction\"");

        let parsed: Phase = serde_json::from_str("\"scavenging\"").unwrap();
        assert_eq!(parsed, Phase::Scavenging);
    }

    #[test]
    fn test_expected_artifacts() {
        assert_eq!(Phase::Investigation.artifact().name(), "truth_dossier.md");
        assert_eq!(Phase::Scriptwriting.artifact().name(), "narrative_script.md");
        assert_eq!(Phase::Direction.artifact().name(), "master_script.md");
        assert_eq!(Phase::Scavenging.artifact().name(), "asset_manifest.md");
        assert_eq!(Phase::Archiving.artifact().name(), "assets");
        assert!(Phase::Archiving.artifact().is_directory());
        assert!(!Phase::Scavenging.artifact().is_directory());
    }

    #[test]
    fn test_artifact_display_marks_directories() {
        assert_eq!(Phase::Archiving.artifact().to_string(), "assets/");
        assert_eq!(Phase::Direction.artifact().to_string(), "master_script.md");
    }

    #[test]
    fn test_agent_conventions() {
        assert_eq!(Phase::Investigation.agent(), "/investigator");
        assert_eq!(Phase::Archiving.agent(), "/archivist");
    }

    #[test]
    fn test_file_artifact_exists_in() {
        let dir = tempdir().unwrap();
        let artifact = Phase::Investigation.artifact();

        assert!(!artifact.exists_in(dir.path()));
        fs::write(dir.path().join("truth_dossier.md"), "# findings").unwrap();
        assert!(artifact.exists_in(dir.path()));
    }

    #[test]
    fn test_directory_artifact_requires_directory() {
        let dir = tempdir().unwrap();
        let artifact = Phase::Archiving.artifact();

        assert!(!artifact.exists_in(dir.path()));

        // A plain file named "assets" does not count
        fs::write(dir.path().join("assets"), "").unwrap();
        assert!(!artifact.exists_in(dir.path()));

        fs::remove_file(dir.path().join("assets")).unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        assert!(artifact.exists_in(dir.path()));
    }
}

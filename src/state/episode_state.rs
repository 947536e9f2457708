/// Episode state definitions for tracking pipeline progress
///
/// Each discovered episode moves through the pipeline stages independently;
/// a failure at any stage is terminal for that episode only.
use std::fmt;

/// The pipeline stage an episode was in when something happened to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fetching,
    ExtractingMetadata,
    Resolving,
    Submitting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetching => "fetching",
            Self::ExtractingMetadata => "extracting metadata",
            Self::Resolving => "resolving",
            Self::Submitting => "submitting",
        };
        write!(f, "{}", name)
    }
}

/// Represents the current state of an episode in the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeState {
    // ===== Active States =====
    /// Episode has been discovered but not yet picked up
    Pending,

    /// Episode page is being fetched
    Fetching,

    /// Embedded player configuration is being extracted
    ExtractingMetadata,

    /// Media identifier is being exchanged for a stream URL
    Resolving,

    // ===== Terminal States =====
    /// A download job for this episode was accepted by the engine intake
    Submitted,

    /// A pipeline stage failed; the episode was skipped
    Failed { stage: Stage, reason: String },
}

impl EpisodeState {
    /// Returns true if this is a terminal state (no further processing)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted | Self::Failed { .. })
    }

    /// Returns true if the episode may still be processed
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if a download job was submitted for this episode
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Returns the stage a failed episode died in, if any
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            Self::Failed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl fmt::Display for EpisodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Fetching => write!(f, "fetching"),
            Self::ExtractingMetadata => write!(f, "extracting metadata"),
            Self::Resolving => write!(f, "resolving"),
            Self::Submitted => write!(f, "submitted"),
            Self::Failed { stage, reason } => write!(f, "failed while {}: {}", stage, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(stage: Stage) -> EpisodeState {
        EpisodeState::Failed {
            stage,
            reason: "boom".to_string(),
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(!EpisodeState::Pending.is_terminal());
        assert!(!EpisodeState::Fetching.is_terminal());
        assert!(!EpisodeState::ExtractingMetadata.is_terminal());
        assert!(!EpisodeState::Resolving.is_terminal());

        assert!(EpisodeState::Submitted.is_terminal());
        assert!(failed(Stage::Fetching).is_terminal());
    }

    #[test]
    fn test_is_active_mirrors_terminal() {
        assert!(EpisodeState::Pending.is_active());
        assert!(!EpisodeState::Submitted.is_active());
        assert!(!failed(Stage::Resolving).is_active());
    }

    #[test]
    fn test_is_success() {
        assert!(EpisodeState::Submitted.is_success());

        assert!(!EpisodeState::Pending.is_success());
        assert!(!EpisodeState::Resolving.is_success());
        assert!(!failed(Stage::Submitting).is_success());
    }

    #[test]
    fn test_failed_stage() {
        assert_eq!(
            failed(Stage::ExtractingMetadata).failed_stage(),
            Some(Stage::ExtractingMetadata)
        );
        assert_eq!(EpisodeState::Submitted.failed_stage(), None);
        assert_eq!(EpisodeState::Pending.failed_stage(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EpisodeState::Pending), "pending");
        assert_eq!(format!("{}", EpisodeState::Submitted), "submitted");
        assert_eq!(
            format!("{}", failed(Stage::Resolving)),
            "failed while resolving: boom"
        );
    }
}

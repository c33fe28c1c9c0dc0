use std::fmt;

/// Warnings that occur near the edges of a release run.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest version tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// The work tree has uncommitted or untracked changes
    DirtyWorkTree,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, current_commit_hash
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::DirtyWorkTree => {
                write!(f, "You have uncommitted changes")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_new_commits_display() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_tag: "v1.0.0".to_string(),
            current_commit_hash: "a1b2c3d4".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "No new commits since tag 'v1.0.0' (current: a1b2c3d4)"
        );
    }

    #[test]
    fn test_unparsable_tag_display() {
        let warning = BoundaryWarning::UnparsableTag {
            tag: "release-final".to_string(),
            reason: "Invalid version: release-final".to_string(),
        };
        assert!(warning.to_string().contains("release-final"));
    }
}

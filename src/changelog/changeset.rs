use std::collections::HashMap;

use crate::domain::{ClassifiedCommit, CommitRecord};

/// Known commit types with section title and icon, in rendering order
pub const SECTIONS: &[(&str, &str, &str)] = &[
    ("feat", "Features", "✨"),
    ("fix", "Bug Fixes", "🐛"),
    ("docs", "Documentation", "📚"),
    ("style", "Styles", "💎"),
    ("refactor", "Code Refactoring", "♻️"),
    ("perf", "Performance", "⚡"),
    ("test", "Tests", "🧪"),
    ("build", "Build System", "📦"),
    ("ci", "CI/CD", "🔧"),
    ("chore", "Chores", "🔨"),
    ("revert", "Reverts", "⏪"),
    ("security", "Security", "🔒"),
];

/// Bucket key for commits whose type is not in [SECTIONS]
pub const OTHER_TYPE: &str = "other";

/// Whether a commit type has a dedicated changelog section
pub fn is_known_type(r#type: &str) -> bool {
    SECTIONS.iter().any(|(key, _, _)| *key == r#type)
}

/// Classified commits grouped by type, with breaking changes kept separately
///
/// Buckets preserve the order commits were supplied in (newest-first as they
/// come from `git log`). Breaking commits are duplicated into the breaking
/// list, not removed from their type bucket.
#[derive(Debug, Default)]
pub struct ChangeSet {
    buckets: HashMap<String, Vec<ClassifiedCommit>>,
    breaking: Vec<ClassifiedCommit>,
}

impl ChangeSet {
    /// Classify and group a sequence of commits
    pub fn from_commits(commits: &[CommitRecord]) -> Self {
        let mut changeset = ChangeSet::default();

        for record in commits {
            let commit = ClassifiedCommit::classify(record);

            if commit.breaking {
                changeset.breaking.push(commit.clone());
            }

            let bucket = if is_known_type(&commit.r#type) {
                commit.r#type.clone()
            } else {
                OTHER_TYPE.to_string()
            };
            changeset.buckets.entry(bucket).or_default().push(commit);
        }

        changeset
    }

    /// Commits of one known type, in input order
    pub fn commits_of_type(&self, r#type: &str) -> &[ClassifiedCommit] {
        self.buckets.get(r#type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Commits whose type has no dedicated section, in input order
    pub fn other(&self) -> &[ClassifiedCommit] {
        self.commits_of_type(OTHER_TYPE)
    }

    /// Breaking-change commits, in input order
    pub fn breaking(&self) -> &[ClassifiedCommit] {
        &self.breaking
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

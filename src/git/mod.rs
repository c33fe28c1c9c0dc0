//! Git operations abstraction layer
//!
//! The [Repository] trait defines the handful of git queries the changelog
//! and release commands need. [repository::GitRepository] backs it with the
//! `git2` crate; [mock::MockRepository] serves tests. Code above this layer
//! should depend on the trait, not a concrete implementation.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::GitRepository;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Date and message of a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDetails {
    /// Date of the tagged commit, formatted YYYY-MM-DD
    pub date: String,
    /// Annotation message, empty for lightweight tags
    pub message: String,
}

/// Common git query trait
pub trait Repository: Send {
    /// List tags parseable as semantic versions, newest version first
    fn list_version_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from `to` but not from `from`, newest first
    ///
    /// Hashes are shortened to 8 characters; subjects are the summary line.
    /// With `from` absent the walk covers the full history of `to`.
    fn commits_between(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitRecord>>;

    /// Date and annotation message of a tag
    fn tag_details(&self, name: &str) -> Result<TagDetails>;

    /// Create an annotated tag at HEAD
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Whether the work tree has uncommitted or untracked changes
    fn is_work_tree_dirty(&self) -> Result<bool>;

    /// Short hash of the current HEAD commit
    fn head_short_hash(&self) -> Result<String>;
}

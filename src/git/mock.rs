use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::CommitRecord;
use crate::error::{ChronicleError, Result};
use crate::git::{Repository, TagDetails};

/// Mock repository for testing without actual git operations
///
/// Tags and commits are supplied up front; created tags are recorded so
/// tests can assert on them.
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<CommitRecord>,
    tag_details: HashMap<String, TagDetails>,
    dirty: bool,
    head: String,
    created_tags: Mutex<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create an empty mock repository with a clean work tree
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: Vec::new(),
            tag_details: HashMap::new(),
            dirty: false,
            head: "00000000".to_string(),
            created_tags: Mutex::new(Vec::new()),
        }
    }

    /// Set the version tags returned by [Repository::list_version_tags]
    /// (callers supply them newest-first)
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the commits returned by [Repository::commits_between]
    pub fn with_commits(mut self, commits: Vec<CommitRecord>) -> Self {
        self.commits = commits;
        self
    }

    /// Register details for a tag
    pub fn with_tag_details(mut self, name: &str, date: &str, message: &str) -> Self {
        self.tag_details.insert(
            name.to_string(),
            TagDetails {
                date: date.to_string(),
                message: message.to_string(),
            },
        );
        self
    }

    /// Mark the work tree dirty
    pub fn with_dirty_work_tree(mut self) -> Self {
        self.dirty = true;
        self
    }

    /// Tags created through [Repository::create_tag], in creation order
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created_tags
            .lock()
            .map(|tags| tags.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_version_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn commits_between(&self, _from: Option<&str>, _to: &str) -> Result<Vec<CommitRecord>> {
        Ok(self.commits.clone())
    }

    fn tag_details(&self, name: &str) -> Result<TagDetails> {
        self.tag_details
            .get(name)
            .cloned()
            .ok_or_else(|| ChronicleError::tag(format!("Tag not found: {}", name)))
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        if let Ok(mut tags) = self.created_tags.lock() {
            tags.push((name.to_string(), message.to_string()));
        }
        Ok(())
    }

    fn is_work_tree_dirty(&self) -> Result<bool> {
        Ok(self.dirty)
    }

    fn head_short_hash(&self) -> Result<String> {
        Ok(self.head.clone())
    }
}

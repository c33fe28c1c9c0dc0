use chrono::DateTime;

use crate::domain::{CommitRecord, SemanticVersion};
use crate::error::{ChronicleError, Result};
use crate::git::{Repository, TagDetails};

/// Length commit hashes are shortened to
const SHORT_HASH_LEN: usize = 8;

/// Real git repository backed by the `git2` crate
pub struct GitRepository {
    repo: git2::Repository,
}

impl GitRepository {
    /// Discover the repository containing the current directory
    pub fn discover() -> Result<Self> {
        let repo = git2::Repository::discover(".")?;
        Ok(GitRepository { repo })
    }

    fn short_hash(oid: git2::Oid) -> String {
        oid.to_string().chars().take(SHORT_HASH_LEN).collect()
    }

    fn format_date(seconds: i64) -> String {
        DateTime::from_timestamp(seconds, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

impl Repository for GitRepository {
    fn list_version_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut tags: Vec<(SemanticVersion, String)> = names
            .iter()
            .flatten()
            .filter_map(|name| {
                SemanticVersion::parse(name)
                    .ok()
                    .map(|version| (version, name.to_string()))
            })
            .collect();

        tags.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(tags.into_iter().map(|(_, name)| name).collect())
    }

    fn commits_between(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitRecord>> {
        let mut walk = self.repo.revwalk()?;

        let to_object = self.repo.revparse_single(to)?;
        walk.push(to_object.peel_to_commit()?.id())?;

        if let Some(from) = from {
            let from_object = self.repo.revparse_single(from)?;
            walk.hide(from_object.peel_to_commit()?.id())?;
        }

        let mut commits = Vec::new();
        for oid in walk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let subject = commit.summary().unwrap_or("").to_string();
            commits.push(CommitRecord::new(Self::short_hash(oid), subject));
        }
        Ok(commits)
    }

    fn tag_details(&self, name: &str) -> Result<TagDetails> {
        let object = self.repo.revparse_single(name)?;

        // Annotated tags carry a message; lightweight tags point straight
        // at the commit.
        let message = object
            .as_tag()
            .and_then(|tag| tag.message())
            .map(|m| m.trim().to_string())
            .unwrap_or_default();

        let commit = object.peel_to_commit()?;
        Ok(TagDetails {
            date: Self::format_date(commit.time().seconds()),
            message,
        })
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        let target = self.repo.head()?.peel(git2::ObjectType::Commit)?;
        let signature = self.repo.signature()?;
        self.repo
            .tag(name, &target, &signature, message, false)
            .map_err(|e| ChronicleError::tag(format!("Cannot create tag '{}': {}", name, e)))?;
        Ok(())
    }

    fn is_work_tree_dirty(&self) -> Result<bool> {
        let mut options = git2::StatusOptions::new();
        options.include_untracked(true);
        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    fn head_short_hash(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(Self::short_hash(commit.id()))
    }
}

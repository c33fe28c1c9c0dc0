//! Release planning: turn repository state into the next version.
//!
//! Shared by the `bump`, `release` and `next` commands so the no-tag case
//! behaves the same everywhere: without version tags the bump starts from a
//! configured base version, and the policy always takes effect.

use crate::analyzer::suggest_bump;
use crate::domain::{BumpPolicy, CommitRecord, SemanticVersion};
use crate::error::Result;

/// Compute the next version under an explicit policy
///
/// Bumps the latest version tag when one exists; a repository without
/// version tags bumps from `base` instead, so `major` from a fresh
/// repository with base 0.0.0 gives 1.0.0.
pub fn plan_bump(
    latest: Option<&str>,
    base: &str,
    policy: BumpPolicy,
    preid: &str,
) -> Result<SemanticVersion> {
    let current = match latest {
        Some(tag) => SemanticVersion::parse(tag)?,
        None => SemanticVersion::parse(base)?,
    };
    Ok(current.bump(policy, preid))
}

/// One-shot release planning: suggest a policy from the commits, then apply it
pub fn plan_release(
    latest: Option<&str>,
    base: &str,
    commits: &[CommitRecord],
    preid: &str,
) -> Result<(BumpPolicy, SemanticVersion)> {
    let policy = suggest_bump(commits);
    let next = plan_bump(latest, base, policy, preid)?;
    Ok((policy, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_bump_from_latest_tag() {
        let next = plan_bump(Some("v1.2.3"), "v0.0.0", BumpPolicy::Minor, "alpha").unwrap();
        assert_eq!(next.to_string(), "v1.3.0");
    }

    #[test]
    fn test_plan_bump_without_tags_applies_policy_to_base() {
        let major = plan_bump(None, "v0.0.0", BumpPolicy::Major, "alpha").unwrap();
        let minor = plan_bump(None, "v0.0.0", BumpPolicy::Minor, "alpha").unwrap();
        let patch = plan_bump(None, "v0.0.0", BumpPolicy::Patch, "alpha").unwrap();
        assert_eq!(major.to_string(), "v1.0.0");
        assert_eq!(minor.to_string(), "v0.1.0");
        assert_eq!(patch.to_string(), "v0.0.1");
    }

    #[test]
    fn test_plan_bump_base_keeps_its_prefix() {
        let next = plan_bump(None, "0.0.0", BumpPolicy::Minor, "alpha").unwrap();
        assert_eq!(next.to_string(), "0.1.0");
    }

    #[test]
    fn test_plan_bump_invalid_base_is_error() {
        assert!(plan_bump(None, "not-a-version", BumpPolicy::Major, "alpha").is_err());
    }

    #[test]
    fn test_plan_release_suggests_and_applies() {
        let commits = vec![
            CommitRecord::new("aaaa1111", "feat: add export"),
            CommitRecord::new("bbbb2222", "fix: typo"),
        ];
        let (policy, next) = plan_release(Some("v1.2.3"), "v0.0.0", &commits, "alpha").unwrap();
        assert_eq!(policy, BumpPolicy::Minor);
        assert_eq!(next.to_string(), "v1.3.0");
    }

    #[test]
    fn test_plan_release_first_release_from_base() {
        let commits = vec![CommitRecord::new("aaaa1111", "feat: initial import")];
        let (policy, next) = plan_release(None, "v0.0.0", &commits, "alpha").unwrap();
        assert_eq!(policy, BumpPolicy::Minor);
        assert_eq!(next.to_string(), "v0.1.0");
    }
}

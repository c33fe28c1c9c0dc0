//! Release workflow tests against a mock repository: pick the latest tag,
//! suggest a bump from the commits since, and create the next tag.

use git_chronicle::analyzer::suggest_bump;
use git_chronicle::domain::{BumpPolicy, CommitRecord, SemanticVersion};
use git_chronicle::git::{MockRepository, Repository};
use git_chronicle::release::{plan_bump, plan_release};

#[test]
fn test_release_flow_minor_bump() {
    let repo = MockRepository::new()
        .with_tags(&["v1.2.0", "v1.1.0", "v1.0.0"])
        .with_commits(vec![
            CommitRecord::new("aaaa1111", "feat: add export command"),
            CommitRecord::new("bbbb2222", "fix: off-by-one in pager"),
        ]);

    let tags = repo.list_version_tags().unwrap();
    let latest = tags.first().unwrap();
    assert_eq!(latest, "v1.2.0");

    let commits = repo.commits_between(Some(latest), "HEAD").unwrap();
    let suggested = suggest_bump(&commits);
    assert_eq!(suggested, BumpPolicy::Minor);

    let next = SemanticVersion::parse(latest)
        .unwrap()
        .bump(suggested, "alpha");
    let next_tag = next.to_string();
    assert_eq!(next_tag, "v1.3.0");

    repo.create_tag(&next_tag, &format!("Release {}", next_tag))
        .unwrap();
    assert_eq!(
        repo.created_tags(),
        vec![("v1.3.0".to_string(), "Release v1.3.0".to_string())]
    );
}

#[test]
fn test_release_flow_breaking_bump() {
    let repo = MockRepository::new()
        .with_tags(&["v2.3.1"])
        .with_commits(vec![CommitRecord::new(
            "aaaa1111",
            "refactor!: remove deprecated config keys",
        )]);

    let tags = repo.list_version_tags().unwrap();
    let commits = repo.commits_between(Some(&tags[0]), "HEAD").unwrap();
    let suggested = suggest_bump(&commits);
    assert_eq!(suggested, BumpPolicy::Major);

    let next = SemanticVersion::parse(&tags[0])
        .unwrap()
        .bump(suggested, "alpha");
    assert_eq!(next.to_string(), "v3.0.0");
}

#[test]
fn test_release_flow_preserves_plain_prefix() {
    let repo = MockRepository::new()
        .with_tags(&["2.0.0"])
        .with_commits(vec![CommitRecord::new("aaaa1111", "fix: typo")]);

    let tags = repo.list_version_tags().unwrap();
    let next = SemanticVersion::parse(&tags[0])
        .unwrap()
        .bump(suggest_bump(&repo.commits_between(Some(&tags[0]), "HEAD").unwrap()), "alpha");

    // No 'v' on the current tag, none on the next
    assert_eq!(next.to_string(), "2.0.1");
}

#[test]
fn test_first_bump_applies_policy_to_base() {
    let repo = MockRepository::new()
        .with_commits(vec![CommitRecord::new("aaaa1111", "feat: initial import")]);
    assert!(repo.list_version_tags().unwrap().is_empty());

    // Without tags the policy bumps the base version, so the choice matters
    let major = plan_bump(None, "v0.0.0", BumpPolicy::Major, "alpha").unwrap();
    assert_eq!(major.to_string(), "v1.0.0");
    let patch = plan_bump(None, "v0.0.0", BumpPolicy::Patch, "alpha").unwrap();
    assert_eq!(patch.to_string(), "v0.0.1");
    assert_ne!(major, patch);
}

#[test]
fn test_one_shot_release_flow() {
    let repo = MockRepository::new()
        .with_tags(&["v1.2.0"])
        .with_commits(vec![
            CommitRecord::new("aaaa1111", "feat: add export command"),
            CommitRecord::new("bbbb2222", "fix: off-by-one in pager"),
        ]);

    let tags = repo.list_version_tags().unwrap();
    let latest = tags.first().map(String::as_str);
    let commits = repo.commits_between(latest, "HEAD").unwrap();

    let (policy, next) = plan_release(latest, "v0.0.0", &commits, "alpha").unwrap();
    assert_eq!(policy, BumpPolicy::Minor);

    let next_tag = next.to_string();
    assert_eq!(next_tag, "v1.3.0");

    repo.create_tag(&next_tag, &format!("Release {}", next_tag))
        .unwrap();
    assert_eq!(
        repo.created_tags(),
        vec![("v1.3.0".to_string(), "Release v1.3.0".to_string())]
    );
}

#[test]
fn test_one_shot_release_on_fresh_repository() {
    let repo = MockRepository::new()
        .with_commits(vec![CommitRecord::new("aaaa1111", "feat: initial import")]);

    let commits = repo.commits_between(None, "HEAD").unwrap();
    let (policy, next) = plan_release(None, "v0.0.0", &commits, "alpha").unwrap();
    assert_eq!(policy, BumpPolicy::Minor);
    assert_eq!(next.to_string(), "v0.1.0");
}

#[test]
fn test_release_flow_no_new_commits_is_detectable() {
    let repo = MockRepository::new().with_tags(&["v1.0.0"]);

    let commits = repo.commits_between(Some("v1.0.0"), "HEAD").unwrap();
    assert!(commits.is_empty());
    assert_eq!(repo.head_short_hash().unwrap().len(), 8);
}

#[test]
fn test_release_flow_dirty_work_tree_is_detectable() {
    let clean = MockRepository::new();
    let dirty = MockRepository::new().with_dirty_work_tree();

    assert!(!clean.is_work_tree_dirty().unwrap());
    assert!(dirty.is_work_tree_dirty().unwrap());
}

#[test]
fn test_tag_details_drive_per_version_entries() {
    let repo = MockRepository::new()
        .with_tags(&["v1.1.0", "v1.0.0"])
        .with_tag_details("v1.1.0", "2024-03-01", "Release v1.1.0")
        .with_tag_details("v1.0.0", "2024-01-15", "Release v1.0.0");

    let details = repo.tag_details("v1.1.0").unwrap();
    assert_eq!(details.date, "2024-03-01");
    assert_eq!(details.message, "Release v1.1.0");
    assert!(repo.tag_details("v2.0.0").is_err());
}

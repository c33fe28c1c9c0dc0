use crate::domain::{BumpPolicy, CommitRecord};

/// Suggest a bump policy from commit subjects
///
/// Subject-only heuristic, evaluated in priority order over the whole
/// sequence: a `!` in the header (before the first colon) or the substring
/// "breaking" anywhere in the subject suggests a major bump; otherwise a
/// `feat` type suggests minor; otherwise patch. BREAKING CHANGE footers in
/// commit bodies are not seen at this layer.
pub fn suggest_bump(commits: &[CommitRecord]) -> BumpPolicy {
    let mut has_feature = false;

    for commit in commits {
        let subject = commit.subject.to_lowercase();
        let header = subject.split(':').next().unwrap_or("");

        if header.contains('!') || subject.contains("breaking") {
            return BumpPolicy::Major;
        }

        // Commit type is the first word before '(' or ':'
        let r#type = subject
            .split(|c| c == '(' || c == ':')
            .next()
            .unwrap_or("")
            .trim();
        if r#type == "feat" {
            has_feature = true;
        }
    }

    if has_feature {
        BumpPolicy::Minor
    } else {
        BumpPolicy::Patch
    }
}

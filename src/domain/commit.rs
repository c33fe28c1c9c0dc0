use regex::Regex;

/// Raw commit line as supplied by the repository (newest-first order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Shortened commit hash
    pub hash: String,
    /// Subject line, unmodified
    pub subject: String,
}

impl CommitRecord {
    pub fn new(hash: impl Into<String>, subject: impl Into<String>) -> Self {
        CommitRecord {
            hash: hash.into(),
            subject: subject.into(),
        }
    }
}

/// Commit record classified under the Conventional Commits header grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub hash: String,
    pub subject: String,
    /// Lower-cased commit type, or "other" when the subject is not
    /// conventional. Unknown but well-formed types keep their literal value.
    pub r#type: String,
    pub scope: Option<String>,
    /// Subject with the "type(scope):" prefix stripped; the full subject for
    /// non-conventional commits
    pub message: String,
    pub breaking: bool,
}

impl ClassifiedCommit {
    /// Classify a commit subject line
    ///
    /// Recognizes `type[(scope)][!]: message`. Only the `!` header marker
    /// flags a breaking change; the body is never inspected. Subjects that
    /// don't match the grammar classify as type "other" with the whole line
    /// as message. Never fails.
    pub fn classify(record: &CommitRecord) -> Self {
        if let Some(captures) = Regex::new(r"^(\w+)(?:\(([^)]+)\))?(!)?\s*:\s*(.+)$")
            .ok()
            .and_then(|re| re.captures(&record.subject))
        {
            let r#type = captures
                .get(1)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();
            let scope = captures.get(2).map(|m| m.as_str().to_string());
            let breaking = captures.get(3).is_some();
            let message = captures
                .get(4)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return ClassifiedCommit {
                hash: record.hash.clone(),
                subject: record.subject.clone(),
                r#type,
                scope,
                message,
                breaking,
            };
        }

        ClassifiedCommit {
            hash: record.hash.clone(),
            subject: record.subject.clone(),
            r#type: "other".to_string(),
            scope: None,
            message: record.subject.clone(),
            breaking: false,
        }
    }
}

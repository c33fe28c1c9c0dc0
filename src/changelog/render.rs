use std::fmt;
use std::str::FromStr;

use serde_json::json;

use crate::changelog::changeset::{ChangeSet, SECTIONS};
use crate::domain::{ClassifiedCommit, CommitRecord};
use crate::error::{ChronicleError, Result};

/// Changelog output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = ChronicleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(ChronicleError::config(format!(
                "Unknown output format: '{}' (expected markdown, json or table)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

fn entry_line(commit: &ClassifiedCommit) -> String {
    match commit.scope.as_deref() {
        Some(scope) if !scope.is_empty() => {
            format!("- **{}:** {} ({})", scope, commit.message, commit.hash)
        }
        _ => format!("- {} ({})", commit.message, commit.hash),
    }
}

/// Render one changelog entry as Markdown
///
/// Layout: version/date header (hyperlinked when a compare URL is given),
/// breaking changes first, then one section per known type in fixed order,
/// then "Other Changes" for everything else. Section order never depends on
/// input order; entry order within a section does.
pub fn render_markdown(
    version: &str,
    date: &str,
    changeset: &ChangeSet,
    compare_url: Option<&str>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    match compare_url {
        Some(url) => lines.push(format!("## [{}]({}) ({})", version, url, date)),
        None => lines.push(format!("## {} ({})", version, date)),
    }
    lines.push(String::new());

    if !changeset.breaking().is_empty() {
        lines.push("### ⚠️ BREAKING CHANGES".to_string());
        lines.push(String::new());
        for commit in changeset.breaking() {
            lines.push(entry_line(commit));
        }
        lines.push(String::new());
    }

    for (r#type, title, icon) in SECTIONS {
        let commits = changeset.commits_of_type(r#type);
        if commits.is_empty() {
            continue;
        }
        lines.push(format!("### {} {}", icon, title));
        lines.push(String::new());
        for commit in commits {
            lines.push(entry_line(commit));
        }
        lines.push(String::new());
    }

    if !changeset.other().is_empty() {
        lines.push("### Other Changes".to_string());
        lines.push(String::new());
        for commit in changeset.other() {
            lines.push(format!("- {} ({})", commit.subject, commit.hash));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render commits as a flat JSON array, in input order (no grouping)
///
/// Each record carries hash, type, scope, message and breaking; an absent
/// scope serializes as the empty string.
pub fn render_json(commits: &[CommitRecord]) -> Result<String> {
    let records: Vec<serde_json::Value> = commits
        .iter()
        .map(|record| {
            let commit = ClassifiedCommit::classify(record);
            json!({
                "hash": commit.hash,
                "type": commit.r#type,
                "scope": commit.scope.unwrap_or_default(),
                "message": commit.message,
                "breaking": commit.breaking,
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Render commits as a plain-text table, in input order (no grouping)
pub fn render_table(commits: &[CommitRecord]) -> String {
    let rows: Vec<Vec<String>> = commits
        .iter()
        .map(|record| {
            let commit = ClassifiedCommit::classify(record);
            vec![
                commit.r#type,
                commit.scope.unwrap_or_default(),
                commit.message,
                commit.hash,
            ]
        })
        .collect();

    text_table(&["Type", "Scope", "Message", "Hash"], &rows)
}

/// Left-aligned text table with a dashed header separator
pub fn text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            if i + 1 < cells.len() {
                for _ in cell.chars().count()..widths[i] {
                    line.push(' ');
                }
            }
        }
        line
    };

    let mut lines = Vec::new();
    lines.push(format_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commits() -> Vec<CommitRecord> {
        vec![
            CommitRecord::new("a1b2c3d4", "feat(api): add endpoint"),
            CommitRecord::new("e5f6a7b8", "fix!: crash on null"),
            CommitRecord::new("c9d0e1f2", "update readme"),
        ]
    }

    #[test]
    fn test_markdown_header() {
        let changeset = ChangeSet::from_commits(&[]);
        let text = render_markdown("v1.0.0", "2024-01-01", &changeset, None);
        assert!(text.starts_with("## v1.0.0 (2024-01-01)"));
    }

    #[test]
    fn test_markdown_header_with_compare_url() {
        let changeset = ChangeSet::from_commits(&[]);
        let text = render_markdown(
            "v1.1.0",
            "2024-01-01",
            &changeset,
            Some("https://example.com/compare/v1.0.0...v1.1.0"),
        );
        assert!(text.starts_with(
            "## [v1.1.0](https://example.com/compare/v1.0.0...v1.1.0) (2024-01-01)"
        ));
    }

    #[test]
    fn test_markdown_sections() {
        let changeset = ChangeSet::from_commits(&sample_commits());
        let text = render_markdown("v1.0.0", "2024-01-01", &changeset, None);

        assert!(text.contains("### ⚠️ BREAKING CHANGES"));
        assert!(text.contains("### ✨ Features"));
        assert!(text.contains("### 🐛 Bug Fixes"));
        assert!(text.contains("### Other Changes"));
        assert!(text.contains("- **api:** add endpoint (a1b2c3d4)"));
        assert!(text.contains("- crash on null (e5f6a7b8)"));
        assert!(text.contains("- update readme (c9d0e1f2)"));
    }

    #[test]
    fn test_markdown_breaking_section_comes_first() {
        let changeset = ChangeSet::from_commits(&sample_commits());
        let text = render_markdown("v1.0.0", "2024-01-01", &changeset, None);

        let breaking = text.find("### ⚠️ BREAKING CHANGES").unwrap();
        let features = text.find("### ✨ Features").unwrap();
        let fixes = text.find("### 🐛 Bug Fixes").unwrap();
        assert!(breaking < features);
        assert!(features < fixes);
    }

    #[test]
    fn test_markdown_breaking_commit_appears_twice() {
        let changeset = ChangeSet::from_commits(&sample_commits());
        let text = render_markdown("v1.0.0", "2024-01-01", &changeset, None);
        assert_eq!(text.matches("- crash on null (e5f6a7b8)").count(), 2);
    }

    #[test]
    fn test_markdown_skips_empty_sections() {
        let commits = vec![CommitRecord::new("a1b2c3d4", "docs: fix typo")];
        let changeset = ChangeSet::from_commits(&commits);
        let text = render_markdown("v1.0.0", "2024-01-01", &changeset, None);

        assert!(text.contains("### 📚 Documentation"));
        assert!(!text.contains("### ✨ Features"));
        assert!(!text.contains("BREAKING"));
        assert!(!text.contains("### Other Changes"));
    }

    #[test]
    fn test_json_is_flat_and_in_input_order() {
        let text = render_json(&sample_commits()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["hash"], "a1b2c3d4");
        assert_eq!(records[0]["type"], "feat");
        assert_eq!(records[0]["scope"], "api");
        assert_eq!(records[1]["breaking"], true);
        // Absent scope serializes as the empty string
        assert_eq!(records[2]["scope"], "");
        assert_eq!(records[2]["type"], "other");
        assert_eq!(records[2]["message"], "update readme");
    }

    #[test]
    fn test_table_lists_commits_in_input_order() {
        let text = render_table(&sample_commits());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Type"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("feat"));
        assert!(lines[3].starts_with("fix"));
        assert!(lines[4].starts_with("other"));
        assert!(lines[2].contains("a1b2c3d4"));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}

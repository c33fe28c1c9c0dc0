use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::domain::prerelease::PreRelease;
use crate::error::{ChronicleError, Result};

/// Semantic version with optional pre-release suffix
///
/// Parsed from tag strings of the form `[v]MAJOR.MINOR.PATCH[-IDENT[.NUM]]`.
/// The leading `v`, when present, is remembered as `prefix` so that bumped
/// versions serialize the same way the input did. Values are immutable;
/// bumping always produces a new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<PreRelease>,
    /// "" or "v", taken from the parsed tag
    pub prefix: String,
}

impl SemanticVersion {
    /// Create a release version (no pre-release, no prefix)
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
            prefix: String::new(),
        }
    }

    /// Parse a version string (e.g. "v1.2.3" or "1.2.3-beta.1")
    ///
    /// Grammar: `[v]MAJOR.MINOR.PATCH[-IDENT[.NUM]]` where the numeric
    /// components are decimal digits and IDENT is one or more ASCII letters.
    /// Anything else fails with [ChronicleError::InvalidVersion].
    pub fn parse(text: &str) -> Result<Self> {
        let (prefix, rest) = match text.strip_prefix('v') {
            Some(rest) => ("v", rest),
            None => ("", text),
        };

        let captures = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([A-Za-z]+)(?:\.(\d+))?)?$")
            .ok()
            .and_then(|re| re.captures(rest))
            .ok_or_else(|| ChronicleError::invalid_version(text))?;

        let component = |index: usize| -> Result<u32> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(|| ChronicleError::invalid_version(text))
        };

        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        let prerelease = match captures.get(4) {
            Some(identifier) => {
                let number = match captures.get(5) {
                    Some(m) => Some(
                        m.as_str()
                            .parse::<u32>()
                            .map_err(|_| ChronicleError::invalid_version(text))?,
                    ),
                    None => None,
                };
                Some(PreRelease::new(identifier.as_str(), number))
            }
            None => None,
        };

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            prerelease,
            prefix: prefix.to_string(),
        })
    }

    /// Whether this version carries a pre-release suffix
    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }
}

impl FromStr for SemanticVersion {
    type Err = ChronicleError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                // A release outranks any pre-release of the same triple
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

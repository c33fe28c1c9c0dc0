use std::fmt;
use std::str::FromStr;

use crate::domain::prerelease::PreRelease;
use crate::domain::version::SemanticVersion;
use crate::error::{ChronicleError, Result};

/// Default pre-release identifier used when none is configured
pub const DEFAULT_PREID: &str = "alpha";

/// Version bump policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpPolicy {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
}

impl BumpPolicy {
    /// All policies, in the order parse errors list them
    pub const ALL: [BumpPolicy; 7] = [
        BumpPolicy::Major,
        BumpPolicy::Minor,
        BumpPolicy::Patch,
        BumpPolicy::Premajor,
        BumpPolicy::Preminor,
        BumpPolicy::Prepatch,
        BumpPolicy::Prerelease,
    ];
}

impl FromStr for BumpPolicy {
    type Err = ChronicleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpPolicy::Major),
            "minor" => Ok(BumpPolicy::Minor),
            "patch" => Ok(BumpPolicy::Patch),
            "premajor" => Ok(BumpPolicy::Premajor),
            "preminor" => Ok(BumpPolicy::Preminor),
            "prepatch" => Ok(BumpPolicy::Prepatch),
            "prerelease" => Ok(BumpPolicy::Prerelease),
            other => Err(ChronicleError::config(format!(
                "Unknown bump policy: '{}' (expected one of: {})",
                other,
                BumpPolicy::ALL
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl fmt::Display for BumpPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpPolicy::Major => "major",
            BumpPolicy::Minor => "minor",
            BumpPolicy::Patch => "patch",
            BumpPolicy::Premajor => "premajor",
            BumpPolicy::Preminor => "preminor",
            BumpPolicy::Prepatch => "prepatch",
            BumpPolicy::Prerelease => "prerelease",
        };
        write!(f, "{}", name)
    }
}

impl SemanticVersion {
    /// Compute the next version under the given policy
    ///
    /// Total over all policies; the result keeps the input's tag prefix.
    /// A `patch` bump of a pre-release drops the suffix without touching the
    /// patch number: the existing triple already names the target release.
    pub fn bump(&self, policy: BumpPolicy, preid: &str) -> SemanticVersion {
        let next = |major: u32, minor: u32, patch: u32, prerelease: Option<PreRelease>| {
            SemanticVersion {
                major,
                minor,
                patch,
                prerelease,
                prefix: self.prefix.clone(),
            }
        };

        match policy {
            BumpPolicy::Major => next(self.major + 1, 0, 0, None),
            BumpPolicy::Minor => next(self.major, self.minor + 1, 0, None),
            BumpPolicy::Patch => {
                if self.is_prerelease() {
                    // Graduate the pre-release to its final version
                    next(self.major, self.minor, self.patch, None)
                } else {
                    next(self.major, self.minor, self.patch + 1, None)
                }
            }
            BumpPolicy::Premajor => {
                next(self.major + 1, 0, 0, Some(PreRelease::new(preid, Some(0))))
            }
            BumpPolicy::Preminor => next(
                self.major,
                self.minor + 1,
                0,
                Some(PreRelease::new(preid, Some(0))),
            ),
            BumpPolicy::Prepatch => next(
                self.major,
                self.minor,
                self.patch + 1,
                Some(PreRelease::new(preid, Some(0))),
            ),
            BumpPolicy::Prerelease => match &self.prerelease {
                Some(pre) => next(self.major, self.minor, self.patch, Some(pre.increment())),
                None => next(
                    self.major,
                    self.minor,
                    self.patch + 1,
                    Some(PreRelease::new(preid, Some(0))),
                ),
            },
        }
    }
}

//! Pre-release suffix handling for semantic versions
//!
//! A pre-release is an identifier (alpha, beta, rc, ...) with an optional
//! ordinal, e.g. "alpha" or "beta.1".

use std::fmt;

/// Pre-release component of a semantic version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreRelease {
    /// The pre-release identifier (e.g. "alpha", "beta", "rc")
    pub identifier: String,
    /// Optional ordinal distinguishing builds within the same identifier
    pub number: Option<u32>,
}

impl PreRelease {
    /// Create a new pre-release component
    pub fn new(identifier: impl Into<String>, number: Option<u32>) -> Self {
        PreRelease {
            identifier: identifier.into(),
            number,
        }
    }

    /// Increment the ordinal, treating a missing number as 0
    ///
    /// "alpha" becomes "alpha.1", "alpha.1" becomes "alpha.2".
    pub fn increment(&self) -> Self {
        PreRelease {
            identifier: self.identifier.clone(),
            number: Some(self.number.unwrap_or(0) + 1),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(number) = self.number {
            write!(f, ".{}", number)?;
        }
        Ok(())
    }
}

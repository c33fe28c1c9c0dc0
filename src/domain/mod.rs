//! Domain logic - pure value types independent of git operations

pub mod bump;
pub mod commit;
pub mod prerelease;
pub mod version;

pub use bump::{BumpPolicy, DEFAULT_PREID};
pub use commit::{ClassifiedCommit, CommitRecord};
pub use prerelease::PreRelease;
pub use version::SemanticVersion;

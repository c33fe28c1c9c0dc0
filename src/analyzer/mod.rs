//! Commit analysis for release-bump suggestion

pub mod suggestion;

pub use suggestion::suggest_bump;

//! Change-set grouping and changelog rendering

pub mod changeset;
pub mod render;

pub use changeset::{ChangeSet, SECTIONS};
pub use render::{render_json, render_markdown, render_table, text_table, OutputFormat};

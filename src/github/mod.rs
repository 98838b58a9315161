// src/github/mod.rs
// =============================================================================
// Everything that talks to GitHub.
//
// - repo:     parsing OWNER/NAME references
// - contents: listing entries, the ContentSource trait, category/module walk
// - fetch:    the reqwest-backed ContentSource
// =============================================================================

mod contents;
mod fetch;
mod repo;

pub use contents::{list_categories, list_modules, module_name, ContentEntry, ContentSource};
pub use fetch::GithubClient;
pub use repo::RepoRef;

#[cfg(test)]
pub use contents::EntryKind;

// src/scrape/mod.rs
// =============================================================================
// Turning sources into the settings document.
//
// - pipeline: the remote run (walk categories, fetch modules, extract)
// - local:    the same extraction over files on disk
// =============================================================================

mod local;
mod pipeline;

pub use local::parse_files;
pub use pipeline::{scrape_repository, ScrapeOptions};

// src/extract/mod.rs
// =============================================================================
// Setting extraction from module source text.
//
// Submodules:
// - groups:   setting group identifiers -> display names
// - settings: setting discovery, block isolation, field extraction
// - enums:    enum option resolution (predefined table, then in-file enum)
// - bounds:   min / max / step for numeric settings
//
// This is pattern matching over a known source dialect, not a parser.
// Anything a pattern cannot find is reported with a placeholder value.
// =============================================================================

mod bounds;
mod enums;
mod groups;
mod settings;

pub use settings::parse_settings;

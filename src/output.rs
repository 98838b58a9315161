// src/output.rs
// =============================================================================
// Writes the extracted document and prints the run summary.
//
// The document is pretty-printed JSON. serde_json writes non-ASCII text
// as-is (no \u escapes), so descriptions keep their original characters.
// =============================================================================

use crate::model::{Category, Module};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where a document goes: a file, or stdout for `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }
}

/// Serializes `document` and writes it to `target`, creating parent
/// directories of a file target as needed.
pub fn write_document<T: Serialize + ?Sized>(document: &T, target: &OutputTarget) -> Result<()> {
    let mut json = serde_json::to_string_pretty(document).context("Failed to serialize document")?;
    json.push('\n');

    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write document to stdout")?;
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
    }

    Ok(())
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub categories: usize,
    pub modules: usize,
    pub settings: usize,
}

impl Summary {
    pub fn of_categories(categories: &[Category]) -> Self {
        let mut summary = Summary {
            categories: categories.len(),
            ..Summary::default()
        };
        for category in categories {
            summary.add_modules(&category.modules);
        }
        summary
    }

    pub fn of_modules(modules: &[Module]) -> Self {
        let mut summary = Summary::default();
        summary.add_modules(modules);
        summary
    }

    fn add_modules(&mut self, modules: &[Module]) {
        self.modules += modules.len();
        self.settings += modules.iter().map(|m| m.settings.len()).sum::<usize>();
    }
}

/// Prints the summary. It goes to stderr when the document itself went to
/// stdout, so piping the JSON stays clean.
pub fn print_summary(summary: &Summary, target: &OutputTarget) {
    let mut lines = vec!["📊 Summary:".to_string()];
    if summary.categories > 0 {
        lines.push(format!("   📁 Categories: {}", summary.categories));
    }
    lines.push(format!("   📄 Modules: {}", summary.modules));
    lines.push(format!("   ⚙️  Settings: {}", summary.settings));
    if let OutputTarget::File(path) = target {
        lines.push(format!("✅ Saved to {}", path.display()));
    }

    let text = lines.join("\n");
    if target.is_stdout() {
        eprintln!("{}", text);
    } else {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BuilderType, Setting};

    fn sample() -> Vec<Category> {
        vec![Category {
            name: "render".to_string(),
            modules: vec![Module {
                name: "Fullbright".to_string(),
                settings: vec![Setting {
                    variable_name: "gamma".to_string(),
                    display_name: "gamma".to_string(),
                    description: "Helligkeit – maximal".to_string(),
                    default_value: "16".to_string(),
                    setting_type: "Integer".to_string(),
                    builder_type: BuilderType::Integer,
                    options: Vec::new(),
                    group_name: "Default".to_string(),
                    min: Some("1".to_string()),
                    max: Some("16".to_string()),
                    step: None,
                }],
            }],
        }]
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(OutputTarget::parse("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::parse("out/modules.json"),
            OutputTarget::File(PathBuf::from("out/modules.json"))
        );
    }

    #[test]
    fn test_write_document_creates_parents_and_keeps_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("modules.json");

        write_document(&sample(), &OutputTarget::File(path.clone())).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Helligkeit – maximal"));
        assert!(written.contains("\n  {\n    \"name\": \"render\""));
        assert!(written.contains("\"step\": null"));

        let parsed: Vec<Category> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::of_categories(&sample());
        assert_eq!(
            summary,
            Summary {
                categories: 1,
                modules: 1,
                settings: 1
            }
        );
        assert_eq!(Summary::of_modules(&sample()[0].modules).categories, 0);
    }
}

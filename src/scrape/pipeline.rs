// src/scrape/pipeline.rs
// =============================================================================
// The scrape run: categories -> modules -> settings.
//
// How it works:
// 1. List the category directories under the base path
// 2. For each category, list its module files
// 3. For each module, download the text and extract its settings
// 4. Pause after every module and every category
//
// Everything is sequential. The first fetch error aborts the whole run and
// nothing is returned, so a caller never writes a partial document.
// =============================================================================

use crate::config::ScrapeConfig;
use crate::extract::parse_settings;
use crate::github::{list_categories, list_modules, module_name, ContentSource};
use crate::model::{Category, Module};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

/// What the pipeline needs from the configuration.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub base_path: String,
    pub extension: String,
    pub pause: Duration,
}

impl From<&ScrapeConfig> for ScrapeOptions {
    fn from(config: &ScrapeConfig) -> Self {
        ScrapeOptions {
            base_path: config.base_path.clone(),
            extension: config.extension.clone(),
            pause: config.pause,
        }
    }
}

/// Walks every category and module under the base path.
pub async fn scrape_repository<S>(source: &S, options: &ScrapeOptions) -> Result<Vec<Category>>
where
    S: ContentSource + ?Sized,
{
    info!(path = %options.base_path, "Fetching categories");
    let categories = list_categories(source, &options.base_path)
        .await
        .with_context(|| format!("Failed to list categories under '{}'", options.base_path))?;

    let mut results = Vec::with_capacity(categories.len());

    for category in categories {
        info!(category = %category.name, "Processing category");

        let entries = list_modules(source, &category.path, &options.extension)
            .await
            .with_context(|| format!("Failed to list modules of category '{}'", category.name))?;
        info!(category = %category.name, count = entries.len(), "Got modules");

        let mut modules = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = module_name(&entry.name, &options.extension)
                .unwrap_or(entry.name.as_str())
                .to_string();
            info!(module = %name, "Processing module");

            let text = source
                .fetch_text(&entry)
                .await
                .with_context(|| format!("Failed to fetch module '{}'", entry.path))?;

            modules.push(parse_module(name, &text));
            pause(options.pause).await;
        }

        results.push(Category {
            name: category.name,
            modules,
        });
        pause(options.pause).await;
    }

    Ok(results)
}

/// Extracts one module from its source text.
pub fn parse_module(name: String, text: &str) -> Module {
    let settings = parse_settings(text);
    info!(module = %name, settings = settings.len(), "Extracted settings");
    Module { name, settings }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

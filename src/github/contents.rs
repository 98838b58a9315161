// src/github/contents.rs
// =============================================================================
// Directory walking over the GitHub contents API.
//
// The API answers `GET /repos/{owner}/{repo}/contents/{path}` with a JSON
// array of entries:
//
//   [{ "name": "combat", "path": ".../combat", "type": "dir", "download_url": null, ... },
//    { "name": "Module.java", "path": ".../Module.java", "type": "file",
//      "download_url": "https://raw.githubusercontent.com/...", ... }]
//
// The walker only needs two views of a listing:
// - categories: the directories directly under the base path
// - modules:    the source files directly inside a category
//
// Transport lives behind the ContentSource trait so the pipeline can run
// against an in-memory source in tests.
// =============================================================================

use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;

/// The kind of a listing entry. Unrecognised kinds are kept as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a directory listing. Fields we don't use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Something that can list remote directories and download files.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Lists the entries directly under `path` (relative to the repository root).
    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, FetchError>;

    /// Downloads the raw text of a file entry.
    async fn fetch_text(&self, entry: &ContentEntry) -> Result<String, FetchError>;
}

/// Lists the category directories under `base_path`, in listing order.
pub async fn list_categories<S>(source: &S, base_path: &str) -> Result<Vec<ContentEntry>, FetchError>
where
    S: ContentSource + ?Sized,
{
    let entries = source.list_dir(base_path).await?;
    Ok(entries
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Dir)
        .collect())
}

/// Lists the module files with the given extension inside a category.
pub async fn list_modules<S>(
    source: &S,
    category_path: &str,
    extension: &str,
) -> Result<Vec<ContentEntry>, FetchError>
where
    S: ContentSource + ?Sized,
{
    let entries = source.list_dir(category_path).await?;
    Ok(entries
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File && module_name(&entry.name, extension).is_some())
        .collect())
}

/// `KillAura.java` -> `KillAura` for extension `java`; None for other files.
pub fn module_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    file_name
        .strip_suffix(extension)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {"name": "combat", "path": "src/modules/combat", "sha": "a1", "size": 0,
         "type": "dir", "download_url": null},
        {"name": "Categories.java", "path": "src/modules/Categories.java", "sha": "b2", "size": 120,
         "type": "file", "download_url": "https://raw.example.com/Categories.java"},
        {"name": "render", "path": "src/modules/render", "sha": "c3", "size": 0,
         "type": "dir", "download_url": null},
        {"name": "vendor", "path": "src/modules/vendor", "type": "submodule"},
        {"name": "odd", "path": "src/modules/odd", "type": "weird", "download_url": null}
    ]"#;

    #[test]
    fn test_deserialize_listing() {
        let entries: Vec<ContentEntry> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert_eq!(entries[1].kind, EntryKind::File);
        assert_eq!(
            entries[1].download_url.as_deref(),
            Some("https://raw.example.com/Categories.java")
        );
        assert_eq!(entries[3].kind, EntryKind::Submodule);
        assert_eq!(entries[3].download_url, None);
        assert_eq!(entries[4].kind, EntryKind::Other);
    }

    #[test]
    fn test_module_name() {
        assert_eq!(module_name("KillAura.java", "java"), Some("KillAura"));
        assert_eq!(module_name("Notes.java.bak", "java"), None);
        assert_eq!(module_name("package-info.kt", "java"), None);
        assert_eq!(module_name("Fakejava", "java"), None);
        assert_eq!(module_name(".java", "java"), None);
    }

    struct StaticListing(Vec<ContentEntry>);

    #[async_trait]
    impl ContentSource for StaticListing {
        async fn list_dir(&self, _path: &str) -> Result<Vec<ContentEntry>, FetchError> {
            Ok(self.0.clone())
        }

        async fn fetch_text(&self, entry: &ContentEntry) -> Result<String, FetchError> {
            Err(FetchError::MissingDownloadUrl {
                path: entry.path.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_list_categories_keeps_directories_in_order() {
        let source = StaticListing(serde_json::from_str(LISTING).unwrap());
        let categories = list_categories(&source, "src/modules").await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["combat", "render"]);
    }

    #[tokio::test]
    async fn test_list_modules_filters_by_extension() {
        let source = StaticListing(serde_json::from_str(LISTING).unwrap());
        let modules = list_modules(&source, "src/modules", "java").await.unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "Categories.java");

        let none = list_modules(&source, "src/modules", "kt").await.unwrap();
        assert!(none.is_empty());
    }
}

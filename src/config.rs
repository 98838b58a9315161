// src/config.rs
// =============================================================================
// Configuration for the `scrape` command.
//
// ScrapeConfig is built from the parsed command-line arguments (which clap
// has already merged with their environment variables) and validated before
// the first request is made.
//
// Environment variables:
// - SCRAPER_REPO:       repository, OWNER/NAME or github.com URL
// - SCRAPER_PATH:       directory holding the category directories
// - SCRAPER_REF:        branch, tag or commit
// - SCRAPER_API_URL:    API root (default https://api.github.com)
// - SCRAPER_OUTPUT:     output document, '-' for stdout (default modules.json)
// - SCRAPER_PAUSE_MS:   pause between requests (default 200)
// - SCRAPER_USER_AGENT: User-Agent header value
// - GITHUB_TOKEN:       optional bearer token
// - SCRAPER_LOG_LEVEL:  logging level (default info)
// =============================================================================

use crate::cli::ScrapeArgs;
use crate::error::ConfigError;
use crate::github::RepoRef;
use crate::output::OutputTarget;
use reqwest::header::HeaderValue;
use std::time::Duration;
use url::Url;

/// Validated settings for one scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub repo: RepoRef,

    /// Base remote path, without leading or trailing slashes
    pub base_path: String,

    pub git_ref: Option<String>,

    pub api_url: Url,

    /// Module file extension, without the leading dot
    pub extension: String,

    pub output: OutputTarget,

    /// Pause after every module and every category
    pub pause: Duration,

    pub user_agent: HeaderValue,

    /// `Bearer <token>`, marked sensitive so it never shows up in Debug output
    pub authorization: Option<HeaderValue>,
}

impl ScrapeConfig {
    pub fn from_args(args: &ScrapeArgs) -> Result<Self, ConfigError> {
        let repo = RepoRef::parse(&args.repo)?;

        let api_url = Url::parse(args.api_url.trim()).map_err(|e| ConfigError::InvalidApiUrl {
            url: args.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") || api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: args.api_url.clone(),
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let extension = args.extension.trim().trim_start_matches('.').to_string();
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension(args.extension.clone()));
        }

        let user_agent = HeaderValue::from_str(&args.user_agent)
            .map_err(|_| ConfigError::InvalidHeader("User-Agent"))?;

        let authorization = args
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ConfigError::InvalidHeader("Authorization"))?;
                value.set_sensitive(true);
                Ok(value)
            })
            .transpose()?;

        Ok(ScrapeConfig {
            repo,
            base_path: args.path.trim().trim_matches('/').to_string(),
            git_ref: args
                .git_ref
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            api_url,
            extension,
            output: OutputTarget::parse(&args.output),
            pause: Duration::from_millis(args.pause_ms),
            user_agent,
            authorization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DEFAULT_API_URL, DEFAULT_BASE_PATH, DEFAULT_REPO, DEFAULT_USER_AGENT};
    use std::path::PathBuf;

    fn args() -> ScrapeArgs {
        ScrapeArgs {
            repo: DEFAULT_REPO.to_string(),
            path: DEFAULT_BASE_PATH.to_string(),
            git_ref: None,
            api_url: DEFAULT_API_URL.to_string(),
            extension: "java".to_string(),
            output: "modules.json".to_string(),
            pause_ms: 200,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ScrapeConfig::from_args(&args()).unwrap();
        assert_eq!(config.repo.owner, "MeteorDevelopment");
        assert_eq!(config.pause, Duration::from_millis(200));
        assert_eq!(config.output, OutputTarget::File(PathBuf::from("modules.json")));
        assert!(config.authorization.is_none());
    }

    #[test]
    fn test_normalises_path_extension_and_ref() {
        let mut args = args();
        args.path = "/src/modules/".to_string();
        args.extension = ".kt".to_string();
        args.git_ref = Some("  ".to_string());
        let config = ScrapeConfig::from_args(&args).unwrap();
        assert_eq!(config.base_path, "src/modules");
        assert_eq!(config.extension, "kt");
        assert_eq!(config.git_ref, None);
    }

    #[test]
    fn test_token_becomes_sensitive_bearer_header() {
        let mut args = args();
        args.token = Some("ghp_secret".to_string());
        let config = ScrapeConfig::from_args(&args).unwrap();
        let header = config.authorization.unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer ghp_secret");
        assert!(header.is_sensitive());
        assert!(!format!("{:?}", header).contains("ghp_secret"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut bad_url = args();
        bad_url.api_url = "not a url".to_string();
        assert!(matches!(
            ScrapeConfig::from_args(&bad_url),
            Err(ConfigError::InvalidApiUrl { .. })
        ));

        let mut bad_scheme = args();
        bad_scheme.api_url = "ftp://example.com".to_string();
        assert!(ScrapeConfig::from_args(&bad_scheme).is_err());

        let mut bad_ext = args();
        bad_ext.extension = ".".to_string();
        assert!(matches!(
            ScrapeConfig::from_args(&bad_ext),
            Err(ConfigError::InvalidExtension(_))
        ));

        let mut bad_agent = args();
        bad_agent.user_agent = "line\nbreak".to_string();
        assert!(matches!(
            ScrapeConfig::from_args(&bad_agent),
            Err(ConfigError::InvalidHeader("User-Agent"))
        ));

        let mut bad_repo = args();
        bad_repo.repo = "nope".to_string();
        assert!(matches!(
            ScrapeConfig::from_args(&bad_repo),
            Err(ConfigError::InvalidRepo(_))
        ));
    }
}

// src/github/repo.rs
// =============================================================================
// Parses repository references given on the command line.
//
// Supported formats:
//   - owner/repo
//   - github.com/owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - https://github.com/owner/repo/tree/main/... (extra segments ignored)
// =============================================================================

use crate::error::ConfigError;
use std::fmt;

/// An owner/name pair identifying a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidRepo(input.to_string());

        // Remove common prefixes
        let trimmed = input
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");
        let path = trimmed.strip_prefix("github.com/").unwrap_or(trimmed);

        let mut parts = path.split('/');
        let owner = parts.next().filter(|s| is_valid_part(s)).ok_or_else(invalid)?;
        let name = parts
            .next()
            .map(|s| s.trim_end_matches(".git"))
            .filter(|s| is_valid_part(s))
            .ok_or_else(invalid)?;

        // A bare "owner/name/extra" without the github.com prefix is ambiguous
        if path.len() == trimmed.len() && parts.next().is_some() {
            return Err(invalid());
        }

        Ok(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_url() {
        let repo = RepoRef::parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_github_url_with_git() {
        let repo = RepoRef::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(repo.owner, "user");
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_short_form() {
        let repo = RepoRef::parse("MeteorDevelopment/meteor-client").unwrap();
        assert_eq!(repo.to_string(), "MeteorDevelopment/meteor-client");
    }

    #[test]
    fn test_parse_url_with_tree_path() {
        let repo = RepoRef::parse("github.com/user/repo/tree/main/src").unwrap();
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(RepoRef::parse("https://gitlab.com/user/repo").is_err());
        assert!(RepoRef::parse("just-a-name").is_err());
        assert!(RepoRef::parse("owner/").is_err());
    }
}

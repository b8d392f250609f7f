use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{JiraError, Result};

/// Persisted Jira credentials. Field names match the on-disk JSON record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub jira_url: String,
    pub username: String,
    pub api_token: String,
}

impl Config {
    pub fn new(jira_url: String, username: String, api_token: String) -> Result<Self> {
        let jira_url = normalize_url(&jira_url)?;
        if username.is_empty() {
            return Err(JiraError::EmptyField("username"));
        }
        if api_token.is_empty() {
            return Err(JiraError::EmptyField("API token"));
        }
        Ok(Self {
            jira_url,
            username,
            api_token,
        })
    }

    /// Load the credential record. A missing file is a normal outcome and
    /// yields `None`; a file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| JiraError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = serde_json::from_str(&contents).map_err(|e| JiraError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Some(config))
    }

    /// Write the record as pretty-printed JSON, overwriting any prior content.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| JiraError::ConfigRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| JiraError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        std::fs::write(path, contents).map_err(|e| JiraError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "jira-cli")
            .map(|dirs| dirs.config_dir().join("jira_config.json"))
            .ok_or(JiraError::NoConfigDir)
    }
}

/// Validate the endpoint URL and strip a trailing slash so later path
/// concatenation produces exactly one separator.
fn normalize_url(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(JiraError::EmptyField("Jira URL"));
    }
    let parsed = Url::parse(raw).map_err(|_| JiraError::InvalidUrl(raw.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(JiraError::InvalidUrl(raw.to_string()));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Config {
        Config::new(
            "https://example.atlassian.net/".to_string(),
            "user@example.com".to_string(),
            "secret-token".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jira_config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jira_config.json");

        assert!(Config::load(&path).unwrap().is_none());
    }

    #[test]
    fn load_corrupt_file_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jira_config.json");
        std::fs::write(&path, "{not json").unwrap();

        match Config::load(&path) {
            Err(JiraError::ConfigParse { .. }) => {}
            other => panic!("expected ConfigParse error, got {other:?}"),
        }
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("jira_config.json");

        sample().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = Config::new(
            "https://example.atlassian.net".into(),
            String::new(),
            "token".into(),
        )
        .unwrap_err();
        assert!(matches!(err, JiraError::EmptyField("username")));

        let err = Config::new(String::new(), "user".into(), "token".into()).unwrap_err();
        assert!(matches!(err, JiraError::EmptyField("Jira URL")));
    }

    #[test]
    fn url_is_validated_and_trailing_slash_trimmed() {
        let config = sample();
        assert_eq!(config.jira_url, "https://example.atlassian.net");

        let err =
            Config::new("not a url".into(), "user".into(), "token".into()).unwrap_err();
        assert!(matches!(err, JiraError::InvalidUrl(_)));
    }
}
